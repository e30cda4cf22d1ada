//! Placement group entity and its response envelopes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    id_type::{PlacementGroupId, ServerId},
    meta::Meta,
    Labels,
};

/// Spreading strategy of a placement group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlacementGroupType {
    Spread,
}

/// A placement group and the servers assigned to it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlacementGroup {
    pub id: PlacementGroupId,
    pub name: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub servers: Vec<ServerId>,
    #[serde(rename = "type")]
    pub group_type: PlacementGroupType,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

/// Envelope of the placement group list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlacementGroupListResponse {
    pub meta: Meta,
    pub placement_groups: Vec<PlacementGroup>,
}

/// Envelope wrapping a single placement group.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlacementGroupResponse {
    pub placement_group: PlacementGroup,
}
