//! Wire error envelope and the typed API error taxonomy.
//!
//! Every non-2xx response carries `{"error": {"code", "message", "details"}}`.
//! The `code` discriminator is authoritative: HTTP status codes map
//! many-to-one onto it (422 alone covers uniqueness, resource-limit and
//! invalid-input failures). [`ApiError::from_envelope`] selects the variant
//! and decodes the variant-specific details block. A discriminator this
//! library does not know about decodes into [`ApiError::Unknown`], never
//! into a failure, so the client stays forward compatible with server-side
//! additions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ext_traits::ValueExt;

/// Custom Result wrapping the error variant into an `error_stack::Report`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while decoding a wire payload into a typed structure.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("failed to parse {0} from the response payload")]
    StructParseFailure(&'static str),
}

/// Construction-time validation failures of request payloads.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("{message}")]
    InvalidValue { message: String },
}

/// Wrapper document of every error response body.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Inner error object of the envelope.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error discriminator carried in the envelope.
///
/// Closed enumeration of the documented codes plus an [`ErrorCode::Unknown`]
/// arm that retains an unrecognized code verbatim. Deserializing a code
/// never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unauthorized,
    RateLimitExceeded,
    UniquenessError,
    ResourceLimitExceeded,
    InvalidInput,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    ServerError,
    ServiceError,
    JsonError,
    Unknown(String),
}

impl ErrorCode {
    /// Wire name of the discriminator.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::UniquenessError => "uniqueness_error",
            Self::ResourceLimitExceeded => "resource_limit_exceeded",
            Self::InvalidInput => "invalid_input",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::ServerError => "server_error",
            Self::ServiceError => "service_error",
            Self::JsonError => "json_error",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "unauthorized" => Self::Unauthorized,
            "rate_limit_exceeded" => Self::RateLimitExceeded,
            "uniqueness_error" => Self::UniquenessError,
            "resource_limit_exceeded" => Self::ResourceLimitExceeded,
            "invalid_input" => Self::InvalidInput,
            "forbidden" => Self::Forbidden,
            "not_found" => Self::NotFound,
            "method_not_allowed" => Self::MethodNotAllowed,
            "server_error" => Self::ServerError,
            "service_error" => Self::ServiceError,
            "json_error" => Self::JsonError,
            _ => Self::Unknown(code),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::from(String::deserialize(deserializer)?))
    }
}

/// Details block of a rate-limit failure.
///
/// `hourly_rate_limit_reset` is a point in time (epoch seconds on the
/// wire), not a duration.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RateLimitDetails {
    pub hourly_rate_limit: u32,
    pub hourly_rate_limit_remaining: u32,
    #[serde(with = "time::serde::timestamp")]
    pub hourly_rate_limit_reset: OffsetDateTime,
}

/// Named field reference inside a conflict-class details block.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FieldRef {
    pub name: String,
}

/// Details block of a uniqueness violation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UniquenessDetails {
    pub fields: Vec<FieldRef>,
}

/// Details block of a resource-limit violation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResourceLimitDetails {
    pub limits: Vec<FieldRef>,
}

/// Per-field reasons inside an invalid-input details block.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Details block of an invalid-input failure.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvalidInputDetails {
    pub fields: Vec<FieldErrors>,
}

/// The typed error taxonomy.
///
/// One arm per known discriminator, each carrying its message and, where
/// the API documents one, its decoded details block. Unrecognized
/// discriminators land in [`ApiError::Unknown`] with the raw code and
/// message retained verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
    #[error("rate limit exceeded: {message}")]
    RateLimitExceeded {
        message: String,
        details: Option<RateLimitDetails>,
    },
    #[error("uniqueness error: {message}")]
    Uniqueness {
        message: String,
        details: Option<UniquenessDetails>,
    },
    #[error("resource limit exceeded: {message}")]
    ResourceLimitExceeded {
        message: String,
        details: Option<ResourceLimitDetails>,
    },
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        details: Option<InvalidInputDetails>,
    },
    #[error("forbidden: {message}")]
    Forbidden { message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("method not allowed: {message}")]
    MethodNotAllowed { message: String },
    #[error("server error: {message}")]
    ServerError { message: String },
    #[error("service error: {message}")]
    ServiceError { message: String },
    #[error("malformed request body: {message}")]
    JsonError { message: String },
    #[error("unrecognized error code {code}: {message}")]
    Unknown { code: String, message: String },
}

impl ApiError {
    /// Maps a decoded envelope onto the single matching variant.
    ///
    /// A known discriminator whose details block does not decode is a
    /// parsing failure and is surfaced as such; only an unknown
    /// discriminator takes the fallback arm.
    pub fn from_envelope(envelope: ErrorEnvelope) -> CustomResult<Self, ParsingError> {
        let ErrorBody {
            code,
            message,
            details,
        } = envelope.error;

        Ok(match code {
            ErrorCode::Unauthorized => Self::Unauthorized { message },
            ErrorCode::RateLimitExceeded => Self::RateLimitExceeded {
                message,
                details: parse_details(details, "RateLimitDetails")?,
            },
            ErrorCode::UniquenessError => Self::Uniqueness {
                message,
                details: parse_details(details, "UniquenessDetails")?,
            },
            ErrorCode::ResourceLimitExceeded => Self::ResourceLimitExceeded {
                message,
                details: parse_details(details, "ResourceLimitDetails")?,
            },
            ErrorCode::InvalidInput => Self::InvalidInput {
                message,
                details: parse_details(details, "InvalidInputDetails")?,
            },
            ErrorCode::Forbidden => Self::Forbidden { message },
            ErrorCode::NotFound => Self::NotFound { message },
            ErrorCode::MethodNotAllowed => Self::MethodNotAllowed { message },
            ErrorCode::ServerError => Self::ServerError { message },
            ErrorCode::ServiceError => Self::ServiceError { message },
            ErrorCode::JsonError => Self::JsonError { message },
            ErrorCode::Unknown(code) => Self::Unknown { code, message },
        })
    }

    /// Discriminator the variant was selected by.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unauthorized { .. } => ErrorCode::Unauthorized,
            Self::RateLimitExceeded { .. } => ErrorCode::RateLimitExceeded,
            Self::Uniqueness { .. } => ErrorCode::UniquenessError,
            Self::ResourceLimitExceeded { .. } => ErrorCode::ResourceLimitExceeded,
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::Forbidden { .. } => ErrorCode::Forbidden,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::MethodNotAllowed { .. } => ErrorCode::MethodNotAllowed,
            Self::ServerError { .. } => ErrorCode::ServerError,
            Self::ServiceError { .. } => ErrorCode::ServiceError,
            Self::JsonError { .. } => ErrorCode::JsonError,
            Self::Unknown { code, .. } => ErrorCode::Unknown(code.clone()),
        }
    }

    /// Human-readable message carried by any variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized { message }
            | Self::RateLimitExceeded { message, .. }
            | Self::Uniqueness { message, .. }
            | Self::ResourceLimitExceeded { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::MethodNotAllowed { message }
            | Self::ServerError { message }
            | Self::ServiceError { message }
            | Self::JsonError { message }
            | Self::Unknown { message, .. } => message,
        }
    }
}

fn parse_details<T>(
    details: Option<serde_json::Value>,
    type_name: &'static str,
) -> CustomResult<Option<T>, ParsingError>
where
    T: serde::de::DeserializeOwned,
{
    details
        .map(|value| value.parse_value(type_name))
        .transpose()
}
