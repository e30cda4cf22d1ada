//! Server entity, the server operation payloads and their response envelopes.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    actions::Action,
    enums::{RescueType, ServerStatus, SnapshotType},
    errors::ValidationError,
    id_type::{
        DatacenterId, FirewallId, ImageId, IsoId, LocationId, NetworkId, PlacementGroupId,
        ServerId, SshKeyId, VolumeId,
    },
    images::Image,
    isos::Iso,
    meta::Meta,
    placement_groups::PlacementGroup,
    Labels,
};

/// A server as reported by the API.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    pub status: ServerStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub public_net: PublicNet,
    pub server_type: ServerType,
    pub datacenter: Datacenter,
    pub image: Option<Image>,
    pub iso: Option<Iso>,
    pub rescue_enabled: bool,
    pub locked: bool,
    pub backup_window: Option<String>,
    #[serde(default)]
    pub outgoing_traffic: Option<u64>,
    #[serde(default)]
    pub ingoing_traffic: Option<u64>,
    #[serde(default)]
    pub included_traffic: Option<u64>,
    pub protection: Protection,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub volumes: Vec<VolumeId>,
    pub primary_disk_size: u64,
    #[serde(default)]
    pub placement_group: Option<PlacementGroup>,
}

/// Public network attachment of a server.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicNet {
    pub ipv4: Option<Ipv4Info>,
    pub ipv6: Option<Ipv6Info>,
    #[serde(default)]
    pub floating_ips: Vec<i64>,
    #[serde(default)]
    pub firewalls: Vec<AppliedFirewall>,
}

/// IPv4 address block of a server's public network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Ipv4Info {
    pub ip: String,
    pub blocked: bool,
    pub dns_ptr: String,
}

/// IPv6 network block of a server's public network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Ipv6Info {
    pub ip: String,
    pub blocked: bool,
    #[serde(default)]
    pub dns_ptr: Vec<DnsPointer>,
}

/// Reverse DNS entry of a single address.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DnsPointer {
    pub ip: String,
    pub dns_ptr: String,
}

/// Firewall applied to a server's public interface.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppliedFirewall {
    pub id: FirewallId,
    pub status: String,
}

/// Server type the server was created from.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ServerType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub cores: u32,
    pub memory: f64,
    pub disk: u64,
}

/// Datacenter a server is placed in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Datacenter {
    pub id: DatacenterId,
    pub name: String,
    pub description: String,
    pub location: Location,
}

/// Physical location of a datacenter.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub network_zone: String,
}

/// Protection flags of a server.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Protection {
    pub delete: bool,
    pub rebuild: bool,
}

/// Placement choice for a new server: a named location or a named
/// datacenter, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerPosition {
    Location(String),
    Datacenter(String),
}

impl ServerPosition {
    fn value(&self) -> &str {
        match self {
            Self::Location(value) | Self::Datacenter(value) => value,
        }
    }
}

/// Firewall reference inside a server creation payload.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FirewallSelector {
    pub firewall: FirewallId,
}

/// Public network configuration of a new server.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicNetConfig {
    pub enable_ipv4: bool,
    pub enable_ipv6: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
}

impl Default for PublicNetConfig {
    fn default() -> Self {
        Self {
            enable_ipv4: true,
            enable_ipv6: true,
            ipv4: None,
            ipv6: None,
        }
    }
}

/// Payload of the server creation operation.
///
/// The wire fields are private: the only way to obtain a value is through
/// [`CreateServerBuilder`], which validates the payload and collapses the
/// placement choice into exactly one of the `location` / `datacenter` wire
/// fields.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CreateServerRequest {
    name: String,
    server_type: String,
    image: String,
    automount: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    datacenter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    firewalls: Vec<FirewallSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Labels>,
    networks: Vec<NetworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement_group: Option<PlacementGroupId>,
    public_net: PublicNetConfig,
    ssh_keys: Vec<String>,
    start_after_create: bool,
    user_data: String,
    volumes: Vec<VolumeId>,
}

impl CreateServerRequest {
    /// Starts building a creation payload from the required fields.
    pub fn builder(
        name: impl Into<String>,
        server_type: impl Into<String>,
        image: impl Into<String>,
    ) -> CreateServerBuilder {
        CreateServerBuilder::new(name, server_type, image)
    }

    /// Name of the datacenter wire field, if the datacenter position was
    /// chosen.
    pub fn datacenter(&self) -> Option<&str> {
        self.datacenter.as_deref()
    }

    /// Name of the location wire field, if the location position was chosen.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Builder for [`CreateServerRequest`].
#[derive(Clone, Debug)]
pub struct CreateServerBuilder {
    name: String,
    server_type: String,
    image: String,
    automount: bool,
    position: Option<ServerPosition>,
    firewalls: Vec<FirewallSelector>,
    labels: Option<Labels>,
    networks: Vec<NetworkId>,
    placement_group: Option<PlacementGroupId>,
    public_net: PublicNetConfig,
    ssh_keys: Vec<String>,
    start_after_create: bool,
    user_data: String,
    volumes: Vec<VolumeId>,
}

impl CreateServerBuilder {
    pub fn new(
        name: impl Into<String>,
        server_type: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            server_type: server_type.into(),
            image: image.into(),
            automount: false,
            position: None,
            firewalls: Vec::new(),
            labels: None,
            networks: Vec::new(),
            placement_group: None,
            public_net: PublicNetConfig::default(),
            ssh_keys: Vec::new(),
            start_after_create: true,
            user_data: String::new(),
            volumes: Vec::new(),
        }
    }

    /// Chooses where the server is placed. At most one of the two wire
    /// fields is ever populated, depending on the variant.
    pub fn position(mut self, position: ServerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn automount(mut self, automount: bool) -> Self {
        self.automount = automount;
        self
    }

    pub fn firewalls(mut self, firewalls: Vec<FirewallSelector>) -> Self {
        self.firewalls = firewalls;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn networks(mut self, networks: Vec<NetworkId>) -> Self {
        self.networks = networks;
        self
    }

    pub fn placement_group(mut self, placement_group: PlacementGroupId) -> Self {
        self.placement_group = Some(placement_group);
        self
    }

    pub fn public_net(mut self, public_net: PublicNetConfig) -> Self {
        self.public_net = public_net;
        self
    }

    pub fn ssh_keys(mut self, ssh_keys: Vec<String>) -> Self {
        self.ssh_keys = ssh_keys;
        self
    }

    pub fn start_after_create(mut self, start_after_create: bool) -> Self {
        self.start_after_create = start_after_create;
        self
    }

    pub fn user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = user_data.into();
        self
    }

    pub fn volumes(mut self, volumes: Vec<VolumeId>) -> Self {
        self.volumes = volumes;
        self
    }

    /// Validates the payload and produces the wire-ready request.
    pub fn build(self) -> Result<CreateServerRequest, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field_name: "name" });
        }
        if self.server_type.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field_name: "server_type",
            });
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field_name: "image",
            });
        }
        if let Some(position) = &self.position {
            if position.value().trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    message: "server position must name a location or datacenter".to_string(),
                });
            }
        }

        let (datacenter, location) = match self.position {
            Some(ServerPosition::Datacenter(value)) => (Some(value), None),
            Some(ServerPosition::Location(value)) => (None, Some(value)),
            None => (None, None),
        };

        Ok(CreateServerRequest {
            name: self.name,
            server_type: self.server_type,
            image: self.image,
            automount: self.automount,
            datacenter,
            location,
            firewalls: self.firewalls,
            labels: self.labels,
            networks: self.networks,
            placement_group: self.placement_group,
            public_net: self.public_net,
            ssh_keys: self.ssh_keys,
            start_after_create: self.start_after_create,
            user_data: self.user_data,
            volumes: self.volumes,
        })
    }
}

/// ISO reference: either the ISO name or its numeric identifier.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum IsoSelector {
    Id(IsoId),
    Name(String),
}

/// Payload of the attach-ISO operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AttachIsoRequest {
    pub iso: IsoSelector,
}

/// Image reference: either the image name or its numeric identifier.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageSelector {
    Id(ImageId),
    Name(String),
}

/// Payload of the rebuild-from-image operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RebuildFromImageRequest {
    pub image: ImageSelector,
}

/// Payload of the enable-rescue-mode operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnableRescueModeRequest {
    pub ssh_keys: Vec<SshKeyId>,
    #[serde(rename = "type")]
    pub rescue_type: RescueType,
}

impl EnableRescueModeRequest {
    pub fn new(ssh_keys: Vec<SshKeyId>) -> Self {
        Self {
            ssh_keys,
            rescue_type: RescueType::default(),
        }
    }
}

/// Payload of the create-image-from-server operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateImageFromServerRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(rename = "type")]
    pub snapshot_type: SnapshotType,
}

/// Payload of the change-server-type operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChangeServerTypeRequest {
    pub server_type: String,
    pub upgrade_disk: bool,
}

/// Payload of the change-protection operation.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChangeProtectionRequest {
    pub delete: bool,
    pub rebuild: bool,
}

/// Payload of the add-to-placement-group operation.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddToPlacementGroupRequest {
    pub placement_group: PlacementGroupId,
}

/// Payload of the change-alias-IPs server action.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChangeAliasIpsRequest {
    pub alias_ips: Vec<String>,
    pub network: NetworkId,
}

/// Envelope of the server list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ServerListResponse {
    pub meta: Meta,
    pub servers: Vec<Server>,
}

/// Envelope wrapping a single server.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ServerResponse {
    pub server: Server,
}

/// Envelope of the server creation endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CreateServerResponse {
    pub server: Server,
    pub action: Action,
    #[serde(default)]
    pub next_actions: Vec<Action>,
    #[serde(default)]
    pub root_password: Option<String>,
}

/// Envelope of the enable-rescue-mode endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnableRescueResponse {
    pub action: Action,
    pub root_password: String,
}

/// Envelope of the rebuild endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RebuildServerResponse {
    pub action: Action,
    #[serde(default)]
    pub root_password: Option<String>,
}

/// Envelope of the create-image endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CreateImageResponse {
    pub action: Action,
    pub image: Image,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_builder() -> CreateServerBuilder {
        CreateServerRequest::builder("worker-1", "cx22", "debian-12")
    }

    #[test]
    fn datacenter_position_populates_only_the_datacenter_field() {
        let request = base_builder()
            .position(ServerPosition::Datacenter("fsn1-dc14".to_string()))
            .build()
            .unwrap();

        assert_eq!(request.datacenter(), Some("fsn1-dc14"));
        assert_eq!(request.location(), None);

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["datacenter"], "fsn1-dc14");
        assert!(wire.get("location").is_none());
    }

    #[test]
    fn location_position_populates_only_the_location_field() {
        let request = base_builder()
            .position(ServerPosition::Location("nbg1".to_string()))
            .build()
            .unwrap();

        assert_eq!(request.location(), Some("nbg1"));
        assert_eq!(request.datacenter(), None);

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["location"], "nbg1");
        assert!(wire.get("datacenter").is_none());
    }

    #[test]
    fn omitted_position_leaves_both_wire_fields_absent() {
        let wire = serde_json::to_value(base_builder().build().unwrap()).unwrap();
        assert!(wire.get("location").is_none());
        assert!(wire.get("datacenter").is_none());
    }

    #[test]
    fn empty_required_field_fails_at_construction() {
        let error = CreateServerRequest::builder("", "cx22", "debian-12")
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::MissingRequiredField { field_name: "name" }
        );
    }

    #[test]
    fn blank_position_value_is_rejected() {
        let error = base_builder()
            .position(ServerPosition::Location("  ".to_string()))
            .build()
            .unwrap_err();
        assert!(matches!(error, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn creation_payload_serializes_with_documented_wire_names() {
        let request = base_builder()
            .ssh_keys(vec!["ops".to_string()])
            .user_data("#cloud-config")
            .placement_group(PlacementGroupId::new(11))
            .start_after_create(false)
            .build()
            .unwrap();

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["server_type"], "cx22");
        assert_eq!(wire["ssh_keys"], serde_json::json!(["ops"]));
        assert_eq!(wire["start_after_create"], false);
        assert_eq!(wire["user_data"], "#cloud-config");
        assert_eq!(wire["placement_group"], 11);
        assert_eq!(wire["public_net"]["enable_ipv4"], true);
    }

    #[test]
    fn iso_selector_collapses_into_the_single_iso_field() {
        let by_name = AttachIsoRequest {
            iso: IsoSelector::Name("netboot".to_string()),
        };
        let by_id = AttachIsoRequest {
            iso: IsoSelector::Id(IsoId::new(7)),
        };

        assert_eq!(
            serde_json::to_value(&by_name).unwrap(),
            serde_json::json!({"iso": "netboot"})
        );
        assert_eq!(
            serde_json::to_value(&by_id).unwrap(),
            serde_json::json!({"iso": 7})
        );
    }

    #[test]
    fn rescue_mode_payload_defaults_to_linux64() {
        let request = EnableRescueModeRequest::new(vec![SshKeyId::new(3)]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"ssh_keys": [3], "type": "linux64"})
        );
    }

    #[test]
    fn change_server_type_uses_upgrade_disk_wire_name() {
        let request = ChangeServerTypeRequest {
            server_type: "cx32".to_string(),
            upgrade_disk: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"server_type": "cx32", "upgrade_disk": true})
        );
    }

    #[test]
    fn alias_ip_payload_uses_alias_ips_wire_name() {
        let request = ChangeAliasIpsRequest {
            alias_ips: vec!["10.0.1.5".to_string()],
            network: NetworkId::new(4711),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"alias_ips": ["10.0.1.5"], "network": 4711})
        );
    }
}
