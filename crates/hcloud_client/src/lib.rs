//! Typed HTTP client for the cloud API.
//!
//! The client owns a base URL, an API token and an [`transport::HttpTransport`]
//! implementation. Each operation builds a single request, hands it to the
//! transport, then decodes the returned byte buffer: a 2xx status into the
//! typed response envelope, anything else through the error taxonomy into a
//! [`Failure`] that keeps a snapshot of the originating request.

pub mod api;
pub mod auth;
mod client;
pub mod consts;
pub mod errors;
pub mod request;
pub mod transport;

pub use auth::{ApiToken, InvalidApiToken};
pub use client::Client;
pub use errors::{ClientError, CustomResult, Failure};
// The model types this client exchanges.
pub use hcloud_models as models;
