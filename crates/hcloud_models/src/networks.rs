//! Private network entity and its response envelopes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    id_type::{NetworkId, ServerId},
    meta::Meta,
    Labels,
};

/// A private network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
    pub ip_range: String,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub servers: Vec<ServerId>,
    #[serde(default)]
    pub expose_routes_to_vswitch: bool,
    pub protection: NetworkProtection,
    #[serde(default)]
    pub labels: Labels,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

/// Subnet of a private network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Subnet {
    #[serde(rename = "type")]
    pub subnet_type: String,
    #[serde(default)]
    pub ip_range: Option<String>,
    pub network_zone: String,
    #[serde(default)]
    pub gateway: Option<String>,
}

/// Route entry of a private network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Route {
    pub destination: String,
    pub gateway: String,
}

/// Protection flags of a network.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkProtection {
    pub delete: bool,
}

/// Envelope of the network list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkListResponse {
    pub meta: Meta,
    pub networks: Vec<Network>,
}

/// Envelope wrapping a single network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NetworkResponse {
    pub network: Network,
}
