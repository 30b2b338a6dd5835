mod menu;

pub use menu::MenuError;
pub use menu_schema::{Code, RpcErrorBody, RpcErrorObject};

/// Maps an error onto the status code reported to RPC callers.
pub trait HasRpcCode {
    fn rpc_code(&self) -> Code;
}
