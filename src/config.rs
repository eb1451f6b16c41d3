use std::{collections::HashMap, time::Duration};

use crate::error::CheckError;

pub const INSTANCE_IDENTITY_URL: &str =
    "http://169.254.169.254/latest/dynamic/instance-identity/document";
const METADATA_TIMEOUT: u64 = 3;

const KEY_METADATA_URL: &str = "s3.metadata_url";
const KEY_METADATA_TIMEOUT: &str = "s3.metadata_timeout";
const KEY_ENDPOINT_URL: &str = "s3.endpoint_url";
const KEY_FORCE_PATH_STYLE: &str = "s3.force_path_style";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Config {
    /// Instance identity document queried when no region is given.
    pub metadata_url: String,
    pub metadata_timeout: Duration,
    /// Overrides the regional S3 endpoint (S3-compatible stores).
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            metadata_url: INSTANCE_IDENTITY_URL.to_string(),
            metadata_timeout: Duration::from_secs(METADATA_TIMEOUT),
            endpoint_url: None,
            force_path_style: false,
        }
    }
}

impl S3Config {
    /// Reads the `s3.*` keys of the worker configuration. Other keys belong to
    /// other plugins and are ignored.
    pub fn from_conf(conf: &HashMap<String, String>) -> Result<Self, CheckError> {
        let mut config = Self::default();

        if let Some(url) = conf.get(KEY_METADATA_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(invalid(KEY_METADATA_URL, "is empty"));
            }
            config.metadata_url = url.to_string();
        }

        if let Some(raw) = conf.get(KEY_METADATA_TIMEOUT) {
            let Ok(secs) = raw.trim().parse::<u64>() else {
                let reason = format!("is not a number: {raw}");
                return Err(invalid(KEY_METADATA_TIMEOUT, &reason));
            };
            if secs == 0 {
                return Err(invalid(KEY_METADATA_TIMEOUT, "must be positive"));
            }
            config.metadata_timeout = Duration::from_secs(secs);
        }

        config.endpoint_url = conf
            .get(KEY_ENDPOINT_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if let Some(raw) = conf.get(KEY_FORCE_PATH_STYLE) {
            let Ok(flag) = raw.trim().parse::<bool>() else {
                return Err(invalid(KEY_FORCE_PATH_STYLE, "must be true or false"));
            };
            config.force_path_style = flag;
        }

        Ok(config)
    }
}

fn invalid(key: &str, reason: &str) -> CheckError {
    CheckError::configuration(format!("{key} {reason}"))
}
