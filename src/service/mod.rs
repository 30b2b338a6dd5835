//! Request handlers: one method per RPC call, mapping wire records to store
//! primitives and back.

mod convert;
mod menu;

pub use menu::MenuService;
