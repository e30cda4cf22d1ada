//! Firewall operations.

use hcloud_models::{
    firewalls::{FirewallActionsResponse, FirewallListResponse, FirewallResponse},
    id_type::FirewallId,
};

use crate::{
    client::Client,
    errors::{ClientError, CustomResult},
    request::Method,
};

/// Operations on firewalls.
#[derive(Clone, Debug)]
pub struct Firewalls<'a> {
    pub(crate) client: &'a Client,
}

impl Firewalls<'_> {
    /// Lists all firewalls in the project.
    pub async fn list(&self) -> CustomResult<FirewallListResponse, ClientError> {
        let request = self.client.request(Method::Get, "firewalls").build();
        self.client.call(request, "FirewallListResponse").await
    }

    /// Fetches a single firewall.
    pub async fn get(&self, id: FirewallId) -> CustomResult<FirewallResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("firewalls/{id}"))
            .build();
        self.client.call(request, "FirewallResponse").await
    }

    /// Lists the action records of a firewall.
    pub async fn actions(
        &self,
        id: FirewallId,
    ) -> CustomResult<FirewallActionsResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("firewalls/{id}/actions"))
            .build();
        self.client.call(request, "FirewallActionsResponse").await
    }
}
