//! Canonical records produced by the normalizer.
//!
//! Every field is optional: a value missing from the wire payload under both
//! naming conventions stays `None` instead of being defaulted. Records
//! serialize with compact camel keys only, so feeding a serialized record back
//! through the normalizer yields the same record.

use crate::domain::catalog::{CameraId, RoverId, RoverStatus};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Which of the two mutually exclusive date keys a photo query carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelector {
    Sol(u64),
    /// `YYYY-MM-DD` by format only; not checked against the calendar.
    EarthDate(String),
}

impl DateSelector {
    pub const fn query_key(&self) -> &'static str {
        match self {
            DateSelector::Sol(_) => "sol",
            DateSelector::EarthDate(_) => "earth_date",
        }
    }

    pub fn query_value(&self) -> String {
        match self {
            DateSelector::Sol(sol) => sol.to_string(),
            DateSelector::EarthDate(date) => date.clone(),
        }
    }
}

impl Display for DateSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.query_key(), self.query_value())
    }
}

/// Fully validated input for the photos endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub rover: RoverId,
    pub selector: DateSelector,
    pub camera: Option<CameraId>,
    pub page: Option<u64>,
    pub credential: String,
}

impl std::fmt::Debug for QueryParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryParameters")
            .field("rover", &self.rover)
            .field("selector", &self.selector)
            .field("camera", &self.camera)
            .field("page", &self.page)
            .field("credential", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rover_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Rover {
    pub fn rover_status(&self) -> Option<RoverStatus> {
        self.status.as_deref().and_then(RoverStatus::parse)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sol: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rover: Option<Rover>,
}

/// Photo inventory for a single sol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sol: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_photos: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cameras: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sol: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_photos: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<ManifestEntry>>,
}

impl Manifest {
    pub fn rover_status(&self) -> Option<RoverStatus> {
        self.status.as_deref().and_then(RoverStatus::parse)
    }

    /// Inventory entry for `sol`, if the manifest lists one.
    pub fn entry_for_sol(&self, sol: u64) -> Option<&ManifestEntry> {
        self.photos
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|entry| entry.sol == Some(sol))
    }
}
