//! Server operations.

use hcloud_models::{
    actions::ActionResponse,
    id_type::ServerId,
    servers::{
        AddToPlacementGroupRequest, AttachIsoRequest, ChangeAliasIpsRequest,
        ChangeProtectionRequest, ChangeServerTypeRequest, CreateImageFromServerRequest,
        CreateImageResponse, CreateServerRequest, CreateServerResponse, EnableRescueModeRequest,
        EnableRescueResponse, RebuildFromImageRequest, RebuildServerResponse, ServerListResponse,
        ServerResponse,
    },
};

use crate::{
    client::{encode_request, Client},
    errors::{ClientError, CustomResult},
    request::Method,
};

/// Operations on servers and their actions.
#[derive(Clone, Debug)]
pub struct Servers<'a> {
    pub(crate) client: &'a Client,
}

impl Servers<'_> {
    /// Lists all servers in the project, in the server's declared
    /// pagination order.
    pub async fn list(&self) -> CustomResult<ServerListResponse, ClientError> {
        let request = self.client.request(Method::Get, "servers").build();
        self.client.call(request, "ServerListResponse").await
    }

    /// Fetches a single server.
    pub async fn get(&self, id: ServerId) -> CustomResult<ServerResponse, ClientError> {
        let request = self
            .client
            .request(Method::Get, &format!("servers/{id}"))
            .build();
        self.client.call(request, "ServerResponse").await
    }

    /// Creates a server from a validated payload.
    pub async fn create(
        &self,
        payload: CreateServerRequest,
    ) -> CustomResult<CreateServerResponse, ClientError> {
        let request = self
            .client
            .request(Method::Post, "servers")
            .set_body(encode_request(&payload)?)
            .build();
        self.client.call(request, "CreateServerResponse").await
    }

    /// Deletes a server.
    pub async fn delete(&self, id: ServerId) -> CustomResult<ActionResponse, ClientError> {
        let request = self
            .client
            .request(Method::Delete, &format!("servers/{id}"))
            .build();
        self.client.call(request, "ActionResponse").await
    }

    /// Changes the server type, optionally growing the disk.
    pub async fn change_type(
        &self,
        id: ServerId,
        payload: ChangeServerTypeRequest,
    ) -> CustomResult<ActionResponse, ClientError> {
        self.action(id, "change_type", &payload).await
    }

    /// Boots the rescue system on next reboot and returns its root
    /// password.
    pub async fn enable_rescue(
        &self,
        id: ServerId,
        payload: EnableRescueModeRequest,
    ) -> CustomResult<EnableRescueResponse, ClientError> {
        let request = self
            .client
            .request(Method::Post, &format!("servers/{id}/actions/enable_rescue"))
            .set_body(encode_request(&payload)?)
            .build();
        self.client.call(request, "EnableRescueResponse").await
    }

    /// Rebuilds the server from an image, wiping its disk.
    pub async fn rebuild(
        &self,
        id: ServerId,
        payload: RebuildFromImageRequest,
    ) -> CustomResult<RebuildServerResponse, ClientError> {
        let request = self
            .client
            .request(Method::Post, &format!("servers/{id}/actions/rebuild"))
            .set_body(encode_request(&payload)?)
            .build();
        self.client.call(request, "RebuildServerResponse").await
    }

    /// Attaches an ISO by name or id.
    pub async fn attach_iso(
        &self,
        id: ServerId,
        payload: AttachIsoRequest,
    ) -> CustomResult<ActionResponse, ClientError> {
        self.action(id, "attach_iso", &payload).await
    }

    /// Detaches the currently attached ISO.
    pub async fn detach_iso(&self, id: ServerId) -> CustomResult<ActionResponse, ClientError> {
        let request = self
            .client
            .request(Method::Post, &format!("servers/{id}/actions/detach_iso"))
            .build();
        self.client.call(request, "ActionResponse").await
    }

    /// Creates an image (snapshot or backup) from the server.
    pub async fn create_image(
        &self,
        id: ServerId,
        payload: CreateImageFromServerRequest,
    ) -> CustomResult<CreateImageResponse, ClientError> {
        let request = self
            .client
            .request(Method::Post, &format!("servers/{id}/actions/create_image"))
            .set_body(encode_request(&payload)?)
            .build();
        self.client.call(request, "CreateImageResponse").await
    }

    /// Changes the delete/rebuild protection flags.
    pub async fn change_protection(
        &self,
        id: ServerId,
        payload: ChangeProtectionRequest,
    ) -> CustomResult<ActionResponse, ClientError> {
        self.action(id, "change_protection", &payload).await
    }

    /// Adds the server to a placement group.
    pub async fn add_to_placement_group(
        &self,
        id: ServerId,
        payload: AddToPlacementGroupRequest,
    ) -> CustomResult<ActionResponse, ClientError> {
        self.action(id, "add_to_placement_group", &payload).await
    }

    /// Removes the server from its placement group.
    pub async fn remove_from_placement_group(
        &self,
        id: ServerId,
    ) -> CustomResult<ActionResponse, ClientError> {
        let request = self
            .client
            .request(
                Method::Post,
                &format!("servers/{id}/actions/remove_from_placement_group"),
            )
            .build();
        self.client.call(request, "ActionResponse").await
    }

    /// Replaces the alias IPs of the server on one private network.
    pub async fn change_alias_ips(
        &self,
        id: ServerId,
        payload: ChangeAliasIpsRequest,
    ) -> CustomResult<ActionResponse, ClientError> {
        self.action(id, "change_alias_ips", &payload).await
    }

    async fn action<T>(
        &self,
        id: ServerId,
        command: &str,
        payload: &T,
    ) -> CustomResult<ActionResponse, ClientError>
    where
        T: serde::Serialize + std::fmt::Debug,
    {
        let request = self
            .client
            .request(Method::Post, &format!("servers/{id}/actions/{command}"))
            .set_body(encode_request(payload)?)
            .build();
        self.client.call(request, "ActionResponse").await
    }
}
