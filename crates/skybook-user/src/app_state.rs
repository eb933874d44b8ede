//! Shared application state for the user service.

use std::sync::Arc;

use skybook_core::auth::{CredentialVerifier, StaticCredentials};
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
    verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Build application state with the demo credential verifier.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        Self::with_verifier(cfg, Arc::new(StaticCredentials::demo()))
    }

    /// Inject a different verifier (real auth later, fakes in tests).
    pub fn with_verifier(cfg: ServiceConfig, verifier: Arc<dyn CredentialVerifier>) -> Result<Self> {
        let metadata = MetadataClient::new(
            cfg.service.metadata_endpoint.clone(),
            cfg.service.metadata_timeout(),
        )?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metadata,
                verifier,
            }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metadata(&self) -> &MetadataClient {
        &self.inner.metadata
    }

    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.inner.verifier.as_ref()
    }
}
