//! Service config loader (strict parsing).
//!
//! Both services read the same schema from `<service>.yaml`. The original
//! deployment passes no configuration, so a missing file falls back to the
//! defaults; a present-but-invalid file is an error.

use std::path::Path;
use std::time::Duration;
use std::{fs, io};

use serde::Deserialize;

use crate::error::{Result, SkybookError};
use crate::metadata;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub service: ServiceSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            service: ServiceSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SkybookError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.service.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metadata_endpoint")]
    pub metadata_endpoint: String,

    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metadata_endpoint: default_metadata_endpoint(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
        }
    }
}

impl ServiceSection {
    pub fn validate(&self) -> Result<()> {
        if self.metadata_endpoint.is_empty() {
            return Err(SkybookError::BadRequest(
                "service.metadata_endpoint must not be empty".into(),
            ));
        }
        if !(100..=30000).contains(&self.metadata_timeout_ms) {
            return Err(SkybookError::BadRequest(
                "service.metadata_timeout_ms must be between 100 and 30000".into(),
            ));
        }
        Ok(())
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_millis(self.metadata_timeout_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metadata_endpoint() -> String {
    metadata::DEFAULT_ENDPOINT.into()
}
fn default_metadata_timeout_ms() -> u64 {
    5000
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| SkybookError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise return the validated defaults.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    match fs::read_to_string(Path::new(path)) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let cfg = ServiceConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(SkybookError::Internal(format!("read config failed: {e}"))),
    }
}
