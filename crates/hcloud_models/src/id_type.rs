//! Typed resource identifiers.
//!
//! One newtype per resource kind. All of them serialize to the plain numeric
//! identifier the API uses, but the types are never interchangeable: an
//! operation that wants an [`IsoId`] cannot be handed a [`ServerId`].

use crate::macros::numeric_id_type;

numeric_id_type!(ServerId, "Identifier of a server");
numeric_id_type!(IsoId, "Identifier of an ISO image");
numeric_id_type!(ImageId, "Identifier of a disk image");
numeric_id_type!(NetworkId, "Identifier of a private network");
numeric_id_type!(FirewallId, "Identifier of a firewall");
numeric_id_type!(PlacementGroupId, "Identifier of a placement group");
numeric_id_type!(SshKeyId, "Identifier of an uploaded SSH key");
numeric_id_type!(VolumeId, "Identifier of a volume");
numeric_id_type!(ActionId, "Identifier of an action record");
numeric_id_type!(DatacenterId, "Identifier of a datacenter");
numeric_id_type!(LocationId, "Identifier of a location");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_plain_integer() {
        let id = ServerId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn id_deserializes_from_plain_integer() {
        let id: PlacementGroupId = serde_json::from_str("897").unwrap();
        assert_eq!(id, PlacementGroupId::new(897));
    }

    #[test]
    fn debug_names_the_resource_kind() {
        assert_eq!(format!("{:?}", IsoId::new(7)), "IsoId(7)");
    }
}
