use crate::adapters::http::ReqwestTransport;
use crate::config::ClientConfig;
use crate::core::normalizer::{normalize_latest_photos, normalize_manifest, normalize_photos};
use crate::core::query::{
    build_latest_photos_target, build_manifest_target, build_photos_target, RequestTarget,
};
use crate::core::validators::{validate_camera, validate_date, validate_page, validate_rover};
use crate::domain::model::{Manifest, Photo, QueryParameters};
use crate::domain::ports::Transport;
use crate::utils::error::Result;

/// Raw, unvalidated arguments for the photos endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotosRequest {
    /// Rover name, any case.
    pub rover: String,
    /// Sol number (`"1000"`) or earth date (`"2024-01-15"`).
    pub date: String,
    /// Camera abbreviation, any case. An empty string counts as not supplied.
    pub camera: Option<String>,
    pub page: Option<i64>,
}

impl PhotosRequest {
    pub fn new(rover: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            rover: rover.into(),
            date: date.into(),
            camera: None,
            page: None,
        }
    }

    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Runs the validators in order (rover, date, camera, page) and stops at the
    /// first failure.
    pub fn validate(&self, credential: &str) -> Result<QueryParameters> {
        let rover = validate_rover(&self.rover)?;
        let selector = validate_date(&self.date)?;
        let camera = match self.camera.as_deref().filter(|camera| !camera.is_empty()) {
            Some(camera) => Some(validate_camera(camera, rover)?),
            None => None,
        };
        let page = self.page.map(validate_page).transpose()?;

        Ok(QueryParameters {
            rover,
            selector,
            camera,
            page,
            credential: credential.to_string(),
        })
    }
}

/// Client for the rover photo archive.
///
/// Each operation validates its input, builds the request target, performs
/// exactly one transport call and normalizes the payload. Invalid input fails
/// before the transport is touched; transport errors are returned unchanged.
pub struct MarsPhotosClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

impl MarsPhotosClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.normalize()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> MarsPhotosClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        Ok(Self {
            transport,
            config: config.normalize()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Photos taken by a rover on a sol or earth date, optionally filtered by
    /// camera and page. Only the requested page is fetched.
    pub async fn photos(&self, request: &PhotosRequest) -> Result<Vec<Photo>> {
        let params = request.validate(&self.config.api_key)?;
        let target = build_photos_target(&params);

        tracing::debug!(
            "Fetching photos for {} ({}, camera {:?}, page {:?})",
            params.rover,
            params.selector,
            params.camera.map(|camera| camera.as_str()),
            params.page
        );
        let photos = normalize_photos(self.fetch(&target).await?)?;
        tracing::debug!("Normalized {} photos", photos.len());

        Ok(photos)
    }

    /// The most recent photos a rover has sent back.
    pub async fn latest_photos(&self, rover: &str) -> Result<Vec<Photo>> {
        let rover = validate_rover(rover)?;
        let target = build_latest_photos_target(rover, &self.config.api_key);

        tracing::debug!("Fetching latest photos for {}", rover);
        let photos = normalize_latest_photos(self.fetch(&target).await?)?;
        tracing::debug!("Normalized {} latest photos", photos.len());

        Ok(photos)
    }

    /// Mission manifest: rover metadata plus the per-sol photo inventory.
    pub async fn manifest(&self, rover: &str) -> Result<Manifest> {
        let rover = validate_rover(rover)?;
        let target = build_manifest_target(rover, &self.config.api_key);

        tracing::debug!("Fetching manifest for {}", rover);
        normalize_manifest(self.fetch(&target).await?)
    }

    async fn fetch(&self, target: &RequestTarget) -> Result<serde_json::Value> {
        // the query carries the credential, so only the path is logged
        tracing::debug!("Making API request to: {}{}", self.config.base_url, target.path());
        self.transport.get(&target.to_url(&self.config.base_url)).await
    }
}
