pub mod extract;
pub mod router;
pub mod routes;

pub use router::{MenuState, menu_router};
