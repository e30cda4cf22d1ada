#![allow(clippy::unwrap_used, dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use hcloud_client::{
    request::Request,
    transport::{HttpTransport, Response, TransportError},
    ApiToken, Client, CustomResult,
};

pub const TEST_TOKEN: &str = "foo";
pub const TEST_BASE_URL: &str = "https://cloud.test/v1";

/// Transport stub that answers every request with one canned response and
/// records what it was asked to send.
pub struct MockTransport {
    status_code: u16,
    body: Bytes,
    seen: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new(status_code: u16, body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            status_code,
            body: Bytes::from(body.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn with_raw_body(status_code: u16, body: &'static [u8]) -> Arc<Self> {
        Arc::new(Self {
            status_code,
            body: Bytes::from_static(body),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Requests the transport has executed so far.
    pub fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: Request) -> CustomResult<Response, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(Response {
            status_code: self.status_code,
            body: self.body.clone(),
        })
    }
}

/// Client wired to the given mock transport.
pub fn test_client(transport: Arc<MockTransport>) -> Client {
    Client::with_transport(
        ApiToken::new(TEST_TOKEN).unwrap(),
        TEST_BASE_URL,
        transport,
    )
    .unwrap()
}
