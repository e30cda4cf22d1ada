//! Firewall entity and its response envelopes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    actions::Action,
    id_type::{FirewallId, ServerId},
    meta::Meta,
    Labels,
};

/// A firewall and the resources it is applied to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Firewall {
    pub id: FirewallId,
    pub name: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
    #[serde(default)]
    pub applied_to: Vec<FirewallResource>,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

/// Direction a firewall rule applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleDirection {
    In,
    Out,
}

/// Protocol matched by a firewall rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleProtocol {
    Tcp,
    Udp,
    Icmp,
    Esp,
    Gre,
}

/// A single firewall rule.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallRule {
    pub direction: RuleDirection,
    pub protocol: RuleProtocol,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub source_ips: Vec<String>,
    #[serde(default)]
    pub destination_ips: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Resource a firewall is applied to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub server: Option<FirewallResourceServer>,
}

/// Server reference inside an applied-to block.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallResourceServer {
    pub id: ServerId,
}

/// Envelope of the firewall list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallListResponse {
    pub meta: Meta,
    pub firewalls: Vec<Firewall>,
}

/// Envelope wrapping a single firewall.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallResponse {
    pub firewall: Firewall,
}

/// Envelope of the firewall actions endpoint. This endpoint carries no
/// pagination block.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallActionsResponse {
    pub actions: Vec<Action>,
}
