//! Client-side error types.

use std::fmt;

use hcloud_models::errors::ApiError;

use crate::request::RequestSnapshot;

/// Custom Result wrapping the error variant into an `error_stack::Report`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// A rejected API call: the typed error paired with the status code and a
/// snapshot of the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub error: ApiError,
    pub status_code: u16,
    pub request: RequestSnapshot,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} failed with status {}: {}",
            self.request.method, self.request.url, self.status_code, self.error
        )
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Failures an operation can surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status and a decodable error
    /// envelope.
    #[error("the API rejected the request: {0}")]
    Api(Failure),
    #[error("failed to encode the request body")]
    RequestEncodingFailed,
    #[error("failed to deserialize the response payload")]
    ResponseDeserializationFailed,
    #[error("failed to exchange the request with the API endpoint")]
    TransportFailure,
    #[error("base URL is not a valid URL")]
    UrlParsingFailed,
}
