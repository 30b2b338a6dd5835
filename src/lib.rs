pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;

mod utils;

pub use db::MenuStore;
pub use error::MenuError;
pub use service::MenuService;
