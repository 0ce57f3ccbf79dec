pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::{toml_config::TomlConfig, ClientConfig};
pub use core::client::{MarsPhotosClient, PhotosRequest};
pub use domain::catalog::{CameraId, RoverId, RoverStatus};
pub use domain::model::{Camera, DateSelector, Manifest, ManifestEntry, Photo, Rover};
pub use domain::ports::Transport;
pub use utils::error::{ErrorKind, MarsPhotosError, Result};
