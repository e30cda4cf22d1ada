//! The HTTP transport seam.
//!
//! The transport exchanges one already-built [`Request`] for a status code
//! and a byte buffer. Everything above it is pure: decoding never performs
//! I/O, so any number of calls may run concurrently without coordination.

use async_trait::async_trait;
use bytes::Bytes;
use error_stack::ResultExt;

use crate::{
    errors::CustomResult,
    request::{Method, Request, RequestContent},
};

/// Raw response handed back by the transport.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub body: Bytes,
}

/// Failures while exchanging the request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to send the request")]
    SendFailure,
    #[error("failed to read the response body")]
    BodyReadFailure,
}

/// Sends a request and returns the raw response.
///
/// Cancellation and timeouts live behind this trait; the model layer never
/// sees them.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> CustomResult<Response, TransportError>;
}

/// Default transport backed by a shared `reqwest` client.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> CustomResult<Response, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.inner.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(RequestContent::Json(payload)) = request.body {
            builder = builder.json(&payload);
        }

        let response = builder
            .send()
            .await
            .change_context(TransportError::SendFailure)?;
        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .change_context(TransportError::BodyReadFailure)?;

        Ok(Response { status_code, body })
    }
}
