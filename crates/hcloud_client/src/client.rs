//! The client and its request/response plumbing.

use std::{fmt, sync::Arc};

use error_stack::{Report, ResultExt};
use hcloud_models::{
    errors::{ApiError, ErrorEnvelope},
    ext_traits::BytesExt,
};
use url::Url;

use crate::{
    api::{Firewalls, Isos, Networks, PlacementGroups, Servers},
    auth::ApiToken,
    consts::{headers, DEFAULT_BASE_URL},
    errors::{ClientError, CustomResult, Failure},
    request::{Method, Request, RequestBuilder, RequestContent, RequestSnapshot},
    transport::{HttpTransport, ReqwestTransport, Response},
};

/// Entry point for all API operations.
///
/// The client holds no shared mutable state; cloning is cheap and any
/// number of operations may run concurrently.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    token: ApiToken,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client against the public API endpoint.
    pub fn new(token: ApiToken) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Creates a client against a custom endpoint.
    pub fn with_base_url(
        token: ApiToken,
        base_url: impl Into<String>,
    ) -> CustomResult<Self, ClientError> {
        Self::with_transport(token, base_url, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(
        token: ApiToken,
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> CustomResult<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .change_context(ClientError::UrlParsingFailed)
            .attach_printable_lazy(|| format!("Unable to parse base URL {base_url}"))?;

        Ok(Self {
            base_url,
            token,
            transport,
        })
    }

    /// Server operations.
    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }

    /// ISO operations.
    pub fn isos(&self) -> Isos<'_> {
        Isos { client: self }
    }

    /// Firewall operations.
    pub fn firewalls(&self) -> Firewalls<'_> {
        Firewalls { client: self }
    }

    /// Network operations.
    pub fn networks(&self) -> Networks<'_> {
        Networks { client: self }
    }

    /// Placement group operations.
    pub fn placement_groups(&self) -> PlacementGroups<'_> {
        PlacementGroups { client: self }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new()
            .method(method)
            .url(&format!("{}/{path}", self.base_url.trim_end_matches('/')))
            .attach_default_headers()
            .header(
                headers::AUTHORIZATION,
                &format!("Bearer {}", self.token.peek()),
            )
    }

    /// Executes a request and decodes the response.
    ///
    /// A 2xx body is decoded into `T`; everything else goes through the
    /// error taxonomy and comes back as [`ClientError::Api`] carrying the
    /// originating request snapshot.
    pub(crate) async fn call<T>(
        &self,
        request: Request,
        type_name: &'static str,
    ) -> CustomResult<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let snapshot = RequestSnapshot::from(&request);
        tracing::debug!(request = ?request, "sending API request");

        let response = self
            .transport
            .execute(request)
            .await
            .change_context(ClientError::TransportFailure)?;
        tracing::debug!(
            status_code = response.status_code,
            url = %snapshot.url,
            "received API response"
        );

        if (200..300).contains(&response.status_code) {
            response
                .body
                .parse_struct(type_name)
                .change_context(ClientError::ResponseDeserializationFailed)
        } else {
            Err(dispatch_error(response, snapshot))
        }
    }
}

/// Encodes a payload as the JSON request body.
pub(crate) fn encode_request<T>(payload: &T) -> CustomResult<RequestContent, ClientError>
where
    T: serde::Serialize + fmt::Debug,
{
    let value = serde_json::to_value(payload)
        .change_context(ClientError::RequestEncodingFailed)
        .attach_printable_lazy(|| format!("Unable to encode {payload:?} as a JSON body"))?;
    Ok(RequestContent::Json(value))
}

/// Maps a non-2xx response onto the typed taxonomy.
///
/// The envelope discriminator is authoritative; the HTTP status is only
/// recorded on the resulting [`Failure`].
fn dispatch_error(response: Response, request: RequestSnapshot) -> Report<ClientError> {
    let envelope: ErrorEnvelope = match response.body.parse_struct("ErrorEnvelope") {
        Ok(envelope) => envelope,
        Err(report) => return report.change_context(ClientError::ResponseDeserializationFailed),
    };

    match ApiError::from_envelope(envelope) {
        Ok(error) => Report::new(ClientError::Api(Failure {
            error,
            status_code: response.status_code,
            request,
        })),
        Err(report) => report.change_context(ClientError::ResponseDeserializationFailed),
    }
}
