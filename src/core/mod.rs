pub mod client;
pub mod normalizer;
pub mod query;
pub mod validators;

pub use crate::domain::model::{DateSelector, Manifest, ManifestEntry, Photo, QueryParameters};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
