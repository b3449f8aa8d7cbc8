//! Unified error type.

use http::StatusCode;
use tracing::{error, warn};

use crate::binding::BindError;
use crate::response::{IntoResponse, Response};

/// The error type returned by reqread's fallible operations.
///
/// Handlers return `Result<_, Error>`; the error side becomes an HTTP
/// response through [`IntoResponse`]. Binding failures carry their own status,
/// everything else surfaces as `500 Internal Server Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A raw parameter lookup found nothing where a value was needed.
    #[error("parameter `{0}` is absent")]
    AbsentParameter(&'static str),

    #[error("number format: {0}")]
    NumberFormat(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl Error {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Bind(e) => e.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "handler failed: {self}");
        } else {
            warn!(%status, "request rejected: {self}");
        }
        Response::builder().status(status).text(self.to_string())
    }
}
