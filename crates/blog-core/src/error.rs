//! Service-level error types.

use thiserror::Error;

/// Failures a concrete post service can raise.
///
/// "No such post" is not an error at this layer; the port signals absence
/// through `Option` and `bool` return values instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Storage failure: {0}")]
    Storage(String),
}
