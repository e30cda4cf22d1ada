//! Request construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{headers, JSON_CONTENT_TYPE};

/// HTTP method of an API operation.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Body of a request. The API only speaks JSON.
#[derive(Clone)]
pub enum RequestContent {
    Json(serde_json::Value),
}

impl fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

/// A wire-ready request handed to the transport.
#[derive(Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestContent>,
}

// The authorization header value is redacted; everything else is printed
// as-is.
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(headers::AUTHORIZATION) {
                    (name.as_str(), "*** redacted ***")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Cheap record of a request, attached to failures for caller diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub method: Method,
    pub url: String,
}

impl From<&Request> for RequestSnapshot {
    fn from(request: &Request) -> Self {
        Self {
            method: request.method,
            url: request.url.clone(),
        }
    }
}

/// Consuming builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds the content-type and accept headers every operation carries.
    pub fn attach_default_headers(mut self) -> Self {
        self.headers
            .push((headers::CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()));
        self.headers
            .push((headers::ACCEPT.to_string(), JSON_CONTENT_TYPE.to_string()));
        self
    }

    pub fn set_body(mut self, body: RequestContent) -> Self {
        self.body.replace(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
