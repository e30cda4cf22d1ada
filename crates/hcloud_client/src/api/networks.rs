//! Network operations.

use hcloud_models::{
    id_type::NetworkId,
    networks::{NetworkListResponse, NetworkResponse},
};

use crate::{
    client::Client,
    errors::{ClientError, CustomResult},
    request::Method,
};

/// Operations on private networks.
#[derive(Clone, Debug)]
pub struct Networks<'a> {
    pub(crate) client: &'a Client,
}

impl Networks<'_> {
    /// Lists all private networks in the project.
    pub async fn list(&self) -> CustomResult<NetworkListResponse, ClientError> {
        let request = self.client.request(Method::Get, "networks").build();
        self.client.call(request, "NetworkListResponse").await
    }

    /// Fetches a single network.
    pub async fn get(&self, id: NetworkId) -> CustomResult<NetworkResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("networks/{id}"))
            .build();
        self.client.call(request, "NetworkResponse").await
    }
}
