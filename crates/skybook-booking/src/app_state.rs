//! Shared application state for the booking service.

use std::sync::Arc;

use skybook_core::config::ServiceConfig;
use skybook_core::error::Result;
use skybook_core::metadata::MetadataClient;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metadata: MetadataClient,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let metadata = MetadataClient::new(
            cfg.service.metadata_endpoint.clone(),
            cfg.service.metadata_timeout(),
        )?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metadata }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metadata(&self) -> &MetadataClient {
        &self.inner.metadata
    }
}
