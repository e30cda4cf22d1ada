//! Action records returned by mutating operations.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{enums::ActionStatus, id_type::ActionId};

/// Progress record of an asynchronous server-side operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Action {
    pub id: ActionId,
    pub command: String,
    pub status: ActionStatus,
    pub progress: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub started: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub finished: Option<OffsetDateTime>,
    #[serde(default)]
    pub error: Option<ActionError>,
    #[serde(default)]
    pub resources: Vec<ActionResource>,
}

/// Error block of a failed action.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionError {
    pub code: String,
    pub message: String,
}

/// Resource an action applies to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionResource {
    pub id: i64,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Envelope wrapping a single action record.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub action: Action,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn running_action_decodes_without_finished_timestamp() {
        let response: ActionResponse = serde_json::from_value(serde_json::json!({
            "action": {
                "id": 13,
                "command": "attach_iso",
                "status": "running",
                "progress": 50,
                "started": "2024-11-07T20:01:41+00:00",
                "finished": null,
                "resources": [{"id": 42, "type": "server"}]
            }
        }))
        .unwrap();

        assert_eq!(response.action.status, ActionStatus::Running);
        assert_eq!(response.action.finished, None);
        assert_eq!(response.action.resources[0].resource_type, "server");
    }
}
