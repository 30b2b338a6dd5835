use axum::{Json, http::StatusCode, response::IntoResponse};
use menu_schema::{Code, RpcErrorBody};
use thiserror::Error as ThisError;
use tracing::{error, warn};

use super::HasRpcCode;
use crate::db::RecordKind;

#[derive(Debug, ThisError)]
pub enum MenuError {
    #[error("{kind} id={id} not found")]
    NotFound { kind: RecordKind, id: i64 },

    #[error("category id={category_id} does not exist")]
    InvalidReference { category_id: i64 },

    #[error("Invalid request: {0}")]
    InvalidArgument(String),

    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<MenuError>,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl MenuError {
    /// Prefixes the error message with a short description of the failed step.
    /// The status code of the wrapped error is preserved.
    pub fn context(self, context: &'static str) -> Self {
        MenuError::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping any context wrappers.
    pub fn root(&self) -> &MenuError {
        match self {
            MenuError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), MenuError::NotFound { .. })
    }
}

impl From<figment::Error> for MenuError {
    fn from(err: figment::Error) -> Self {
        MenuError::ConfigError(Box::new(err))
    }
}

impl HasRpcCode for MenuError {
    fn rpc_code(&self) -> Code {
        match self.root() {
            MenuError::NotFound { .. } => Code::NotFound,
            MenuError::InvalidArgument(_) => Code::InvalidArgument,
            MenuError::InvalidReference { .. } => Code::FailedPrecondition,
            MenuError::DatabaseError(_)
            | MenuError::ConfigError(_)
            | MenuError::IoError(_)
            | MenuError::UnexpectedError(_)
            | MenuError::Context { .. } => Code::Internal,
        }
    }
}

fn http_status(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> axum::response::Response {
        let code = self.rpc_code();
        let message = self.to_string();
        if code == Code::Internal {
            error!(code = %code, error = %message, "RPC call failed");
        } else {
            warn!(code = %code, error = %message, "RPC call rejected");
        }
        (http_status(code), Json(RpcErrorBody::new(code, message))).into_response()
    }
}
