use std::fmt::{Display, Formatter};

pub const CURIOSITY_CAMERAS: &[&str] = &[
    "FHAZ", "RHAZ", "MAST", "CHEMCAM", "MAHLI", "MARDI", "NAVCAM",
];

/// Shared by Opportunity and Spirit.
pub const OPPORTUNITY_SPIRIT_CAMERAS: &[&str] = &["FHAZ", "RHAZ", "NAVCAM", "PANCAM", "MINITES"];

pub const PERSEVERANCE_CAMERAS: &[&str] = &[
    "EDL_RUCAM",
    "EDL_RDCAM",
    "EDL_DDCAM",
    "EDL_PUCAM1",
    "EDL_PUCAM2",
    "NAVCAM_LEFT",
    "NAVCAM_RIGHT",
    "MCZ_RIGHT",
    "MCZ_LEFT",
    "FRONT_HAZCAM_LEFT_A",
    "FRONT_HAZCAM_RIGHT_A",
    "REAR_HAZCAM_LEFT",
    "REAR_HAZCAM_RIGHT",
    "SKYCAM",
    "SHERLOC_WATSON",
];

/// Every camera known to the archive, without duplicates.
pub const ALL_CAMERAS: &[&str] = &[
    "FHAZ",
    "RHAZ",
    "MAST",
    "CHEMCAM",
    "MAHLI",
    "MARDI",
    "NAVCAM",
    "PANCAM",
    "MINITES",
    "EDL_RUCAM",
    "EDL_RDCAM",
    "EDL_DDCAM",
    "EDL_PUCAM1",
    "EDL_PUCAM2",
    "NAVCAM_LEFT",
    "NAVCAM_RIGHT",
    "MCZ_RIGHT",
    "MCZ_LEFT",
    "FRONT_HAZCAM_LEFT_A",
    "FRONT_HAZCAM_RIGHT_A",
    "REAR_HAZCAM_LEFT",
    "REAR_HAZCAM_RIGHT",
    "SKYCAM",
    "SHERLOC_WATSON",
];

const CAMERA_FULL_NAMES: &[(&str, &str)] = &[
    ("FHAZ", "Front Hazard Avoidance Camera"),
    ("RHAZ", "Rear Hazard Avoidance Camera"),
    ("MAST", "Mast Camera"),
    ("CHEMCAM", "Chemistry and Camera Complex"),
    ("MAHLI", "Mars Hand Lens Imager"),
    ("MARDI", "Mars Descent Imager"),
    ("NAVCAM", "Navigation Camera"),
    ("PANCAM", "Panoramic Camera"),
    ("MINITES", "Miniature Thermal Emission Spectrometer"),
];

/// Display name for a camera abbreviation. Not every camera has one.
pub fn camera_full_name(camera: &str) -> Option<&'static str> {
    CAMERA_FULL_NAMES
        .iter()
        .find(|(id, _)| *id == camera)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoverId {
    Curiosity,
    Opportunity,
    Perseverance,
    Spirit,
}

impl RoverId {
    pub const ALL: [RoverId; 4] = [
        RoverId::Curiosity,
        RoverId::Opportunity,
        RoverId::Perseverance,
        RoverId::Spirit,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RoverId::Curiosity => "curiosity",
            RoverId::Opportunity => "opportunity",
            RoverId::Perseverance => "perseverance",
            RoverId::Spirit => "spirit",
        }
    }

    pub const fn cameras(self) -> &'static [&'static str] {
        match self {
            RoverId::Curiosity => CURIOSITY_CAMERAS,
            RoverId::Opportunity | RoverId::Spirit => OPPORTUNITY_SPIRIT_CAMERAS,
            RoverId::Perseverance => PERSEVERANCE_CAMERAS,
        }
    }

    /// Exact match against the canonical lowercase id.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rover| rover.as_str() == name)
    }
}

impl Display for RoverId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera abbreviation taken from the catalog, always uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(&'static str);

impl CameraId {
    /// Looks `name` up in `table`; only catalog entries can become a `CameraId`.
    pub(crate) fn lookup(table: &'static [&'static str], name: &str) -> Option<Self> {
        table.iter().find(|camera| **camera == name).map(|camera| Self(*camera))
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub fn full_name(self) -> Option<&'static str> {
        camera_full_name(self.0)
    }
}

impl Display for CameraId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoverStatus {
    Active,
    Complete,
}

impl RoverStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status.to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Complete => "complete",
        }
    }
}

impl Display for RoverStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_cameras_is_union_of_rover_tables() {
        let union: HashSet<&str> = RoverId::ALL
            .iter()
            .flat_map(|rover| rover.cameras().iter().copied())
            .collect();
        let all: HashSet<&str> = ALL_CAMERAS.iter().copied().collect();

        assert_eq!(union, all);
        assert_eq!(all.len(), ALL_CAMERAS.len());
    }

    #[test]
    fn test_opportunity_and_spirit_share_cameras() {
        assert_eq!(RoverId::Opportunity.cameras(), RoverId::Spirit.cameras());
        assert_eq!(RoverId::Perseverance.cameras().len(), 15);
    }

    #[test]
    fn test_camera_full_name_is_display_only() {
        assert_eq!(camera_full_name("NAVCAM"), Some("Navigation Camera"));
        assert_eq!(camera_full_name("SKYCAM"), None);

        let navcam = CameraId::lookup(CURIOSITY_CAMERAS, "NAVCAM").unwrap();
        assert_eq!(navcam.full_name(), Some("Navigation Camera"));
        let skycam = CameraId::lookup(PERSEVERANCE_CAMERAS, "SKYCAM").unwrap();
        assert_eq!(skycam.full_name(), None);
    }

    #[test]
    fn test_rover_status_parse() {
        assert_eq!(RoverStatus::parse("Active"), Some(RoverStatus::Active));
        assert_eq!(RoverStatus::parse("complete"), Some(RoverStatus::Complete));
        assert_eq!(RoverStatus::parse("lost"), None);
    }

    #[test]
    fn test_rover_status_display_round_trips() {
        for status in [RoverStatus::Active, RoverStatus::Complete] {
            assert_eq!(RoverStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RoverStatus::Complete.to_string(), "complete");
    }
}
