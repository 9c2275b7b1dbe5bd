//! Unified error type.

use thiserror::Error;

/// Infrastructure failures: binding to a port, accepting a connection.
///
/// Application-level failures (404, 400, 500) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid socket address `{0}`")]
    InvalidAddr(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
