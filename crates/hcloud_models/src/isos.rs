//! ISO image entity and its response envelopes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{enums::IsoType, id_type::IsoId, meta::Meta};

/// An ISO image that can be attached to a server.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Iso {
    pub id: IsoId,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub iso_type: Option<IsoType>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
}

/// Deprecation notice attached to an ISO.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Deprecation {
    #[serde(with = "time::serde::rfc3339")]
    pub announced: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub unavailable_after: OffsetDateTime,
}

/// Envelope of the ISO list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IsoListResponse {
    pub meta: Meta,
    pub isos: Vec<Iso>,
}

/// Envelope wrapping a single ISO.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IsoResponse {
    pub iso: Iso,
}
