//! Placement group operations.

use hcloud_models::{
    id_type::PlacementGroupId,
    placement_groups::{PlacementGroupListResponse, PlacementGroupResponse},
};

use crate::{
    client::Client,
    errors::{ClientError, CustomResult},
    request::Method,
};

/// Operations on placement groups.
#[derive(Clone, Debug)]
pub struct PlacementGroups<'a> {
    pub(crate) client: &'a Client,
}

impl PlacementGroups<'_> {
    /// Lists all placement groups in the project.
    pub async fn list(&self) -> CustomResult<PlacementGroupListResponse, ClientError> {
        let request = self.client.request(Method::Get, "placement_groups").build();
        self.client
            .call(request, "PlacementGroupListResponse")
            .await
    }

    /// Fetches a single placement group.
    pub async fn get(
        &self,
        id: PlacementGroupId,
    ) -> CustomResult<PlacementGroupResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("placement_groups/{id}"))
            .build();
        self.client.call(request, "PlacementGroupResponse").await
    }
}
