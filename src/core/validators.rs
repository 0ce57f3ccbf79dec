//! Input validators.
//!
//! Every validator is pure and total: bad input comes back as
//! [`MarsPhotosError::Validation`] with a readable reason, never a panic, and
//! nothing here touches the network.

use crate::domain::catalog::{CameraId, RoverId, ALL_CAMERAS};
use crate::domain::model::DateSelector;
use crate::utils::error::{MarsPhotosError, Result};
use regex::Regex;
use std::sync::LazyLock;

// ASCII classes on purpose: `\d` would also accept non-ASCII digits.
static SOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("sol pattern is valid"));
static EARTH_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("earth date pattern is valid")
});

/// True for a sol day count such as `"1000"`.
pub fn is_sol_date(date: &str) -> bool {
    SOL_PATTERN.is_match(date)
}

/// True for a `YYYY-MM-DD` shaped string. Month and day ranges are not checked.
pub fn is_valid_earth_date_format(date: &str) -> bool {
    EARTH_DATE_PATTERN.is_match(date)
}

pub fn is_valid_sol(sol: i128) -> bool {
    sol >= 0
}

pub fn validate_rover(name: &str) -> Result<RoverId> {
    RoverId::from_canonical(&name.to_lowercase()).ok_or_else(|| {
        let valid: Vec<&str> = RoverId::ALL.iter().map(|rover| rover.as_str()).collect();
        MarsPhotosError::validation(format!(
            "Invalid rover name: \"{}\". Valid rovers: {}",
            name,
            valid.join(", ")
        ))
    })
}

/// Classifies `date` as a sol (all digits) or an earth date (`YYYY-MM-DD`).
pub fn validate_date(date: &str) -> Result<DateSelector> {
    if is_sol_date(date) {
        // An all-digit string is never negative; only a value past u64 fails here.
        return match date.parse::<u64>() {
            Ok(sol) if is_valid_sol(i128::from(sol)) => Ok(DateSelector::Sol(sol)),
            _ => Err(MarsPhotosError::validation(
                "Sol date must be a non-negative integer",
            )),
        };
    }

    if is_valid_earth_date_format(date) {
        return Ok(DateSelector::EarthDate(date.to_string()));
    }

    Err(MarsPhotosError::validation(format!(
        "Invalid date format: \"{}\". Use sol number (e.g., \"1000\") or earth date (YYYY-MM-DD)",
        date
    )))
}

/// Checks `camera` against the cameras of `rover` only.
pub fn validate_camera(camera: &str, rover: RoverId) -> Result<CameraId> {
    let valid = rover.cameras();
    CameraId::lookup(valid, &camera.to_uppercase()).ok_or_else(|| {
        MarsPhotosError::validation(format!(
            "Invalid camera \"{}\" for rover \"{}\". Valid cameras: {}",
            camera,
            rover,
            valid.join(", ")
        ))
    })
}

/// Rover-agnostic check for callers that have no rover yet.
pub fn validate_any_camera(camera: &str) -> Result<CameraId> {
    CameraId::lookup(ALL_CAMERAS, &camera.to_uppercase()).ok_or_else(|| {
        MarsPhotosError::validation(format!("Invalid camera name: \"{}\"", camera))
    })
}

pub fn validate_page(page: i64) -> Result<u64> {
    u64::try_from(page)
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| MarsPhotosError::validation("Page must be a positive integer"))
}
