//! Disk image entity.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{enums::ImageType, id_type::ImageId, Labels};

/// A disk image (system image, snapshot or backup).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    pub os_flavor: String,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub image_size: Option<f64>,
    pub disk_size: u64,
    #[serde(default)]
    pub labels: Labels,
}
