use crate::error::MenuError;
use crate::utils::logging::debug_pretty_json;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// JSON request message of a unary RPC call.
pub struct RpcRequest<T>(pub T);

impl<S, T> FromRequest<S> for RpcRequest<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Serialize + Send,
{
    type Rejection = MenuError;

    /// Decode the body as JSON; missing fields fall back to zero values.
    ///
    /// Syntax errors and a missing `content-type: application/json` surface as
    /// `INVALID_ARGUMENT` in the RPC error envelope instead of axum's plain-text rejection.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| MenuError::InvalidArgument(rejection.body_text()))?;

        debug_pretty_json(&body, |pretty_body| {
            debug!(body = %pretty_body, "Decoded RPC request message");
        });

        Ok(RpcRequest(body))
    }
}
