//! ISO operations.

use hcloud_models::{
    id_type::IsoId,
    isos::{IsoListResponse, IsoResponse},
};

use crate::{
    client::Client,
    errors::{ClientError, CustomResult},
    request::Method,
};

/// Operations on ISO images.
#[derive(Clone, Debug)]
pub struct Isos<'a> {
    pub(crate) client: &'a Client,
}

impl Isos<'_> {
    /// Lists all available ISOs.
    pub async fn list(&self) -> CustomResult<IsoListResponse, ClientError> {
        let request = self.client.request(Method::Get, "isos").build();
        self.client.call(request, "IsoListResponse").await
    }

    /// Fetches a single ISO.
    pub async fn get(&self, id: IsoId) -> CustomResult<IsoResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("isos/{id}"))
            .build();
        self.client.call(request, "IsoResponse").await
    }
}
