//! Constants used while building requests.

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.hetzner.cloud/v1";

/// Content type of every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header names used by the client.
pub mod headers {
    pub const ACCEPT: &str = "Accept";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
}
