use crate::utils::error::Result;
use async_trait::async_trait;

/// The single network collaborator: perform a GET and return the decoded body.
///
/// Implementations report send failures as `Network`, non-success statuses as
/// `Api` and undecodable bodies as `Parse`. Callers never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<serde_json::Value>;
}
