//! Request target construction.
//!
//! Targets are built from already validated values and are byte-for-byte
//! deterministic: keys are always appended in the same order and the
//! credential key always comes last.

use crate::domain::catalog::RoverId;
use crate::domain::model::QueryParameters;
use std::fmt::{Debug, Formatter};
use url::form_urlencoded;

pub const CREDENTIAL_KEY: &str = "api_key";

/// Path plus encoded query string, relative to the configured base URL.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestTarget {
    path: String,
    query: String,
}

impl RequestTarget {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// `path?query`, including the credential.
    pub fn as_target(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }

    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.as_target())
    }
}

impl Debug for RequestTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTarget")
            .field("path", &self.path)
            .field("query", &"<contains credential>")
            .finish()
    }
}

pub fn build_photos_target(params: &QueryParameters) -> RequestTarget {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(params.selector.query_key(), &params.selector.query_value());

    if let Some(camera) = params.camera {
        query.append_pair("camera", camera.as_str());
    }

    if let Some(page) = params.page {
        query.append_pair("page", &page.to_string());
    }

    query.append_pair(CREDENTIAL_KEY, &params.credential);

    RequestTarget {
        path: format!("/rovers/{}/photos", params.rover),
        query: query.finish(),
    }
}

pub fn build_latest_photos_target(rover: RoverId, credential: &str) -> RequestTarget {
    RequestTarget {
        path: format!("/rovers/{}/latest_photos", rover),
        query: credential_only(credential),
    }
}

pub fn build_manifest_target(rover: RoverId, credential: &str) -> RequestTarget {
    RequestTarget {
        path: format!("/manifests/{}", rover),
        query: credential_only(credential),
    }
}

fn credential_only(credential: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(CREDENTIAL_KEY, credential)
        .finish()
}
