//! Wire enums shared across the API models.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ServerStatus {
    Running,
    Initializing,
    Starting,
    Stopping,
    Off,
    Deleting,
    Migrating,
    Rebuilding,
    Unknown,
}

/// State of an action record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionStatus {
    Running,
    Success,
    Error,
}

/// Visibility of an ISO image.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IsoType {
    Public,
    Private,
}

/// Rescue system flavor. Only the 64-bit Linux system is offered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RescueType {
    #[default]
    Linux64,
}

/// Kind of image produced from a server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SnapshotType {
    Snapshot,
    Backup,
}

/// Kind of a disk image as reported by the API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageType {
    System,
    Snapshot,
    Backup,
    App,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn statuses_use_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&ServerStatus::Rebuilding).unwrap(),
            r#""rebuilding""#
        );
        assert_eq!(
            serde_json::from_str::<ActionStatus>(r#""success""#).unwrap(),
            ActionStatus::Success
        );
    }

    #[test]
    fn rescue_type_defaults_to_linux64() {
        assert_eq!(
            serde_json::to_string(&RescueType::default()).unwrap(),
            r#""linux64""#
        );
    }
}
