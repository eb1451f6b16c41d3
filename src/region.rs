use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::S3Config;

#[derive(Debug, Error)]
pub enum RegionError {
    /// Endpoint unreachable, timed out, answered non-2xx or with a body that
    /// is not an identity document.
    #[error("instance metadata lookup failed: {0}")]
    Lookup(#[from] reqwest::Error),

    #[error("instance identity document carries no region")]
    MissingRegion,
}

#[derive(Debug, Deserialize)]
struct InstanceIdentity {
    region: Option<String>,
}

/// Picks the S3 region: the explicit one when given, otherwise the region of
/// the instance we run on.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    metadata_url: String,
    timeout: Duration,
}

impl RegionResolver {
    pub fn new(config: &S3Config) -> Self {
        Self {
            metadata_url: config.metadata_url.clone(),
            timeout: config.metadata_timeout,
        }
    }

    pub async fn resolve(&self, explicit: Option<&str>) -> Result<String, RegionError> {
        match explicit {
            Some(region) if !region.is_empty() => Ok(region.to_string()),
            _ => self.lookup().await,
        }
    }

    async fn lookup(&self) -> Result<String, RegionError> {
        tracing::debug!(url = %self.metadata_url, "Looking up region from instance metadata");
        // link-local, never proxied
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .no_proxy()
            .build()?;
        let identity: InstanceIdentity = http
            .get(&self.metadata_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let region = identity
            .region
            .filter(|r| !r.is_empty())
            .ok_or(RegionError::MissingRegion)?;
        tracing::debug!(%region, "Resolved region");
        Ok(region)
    }
}
