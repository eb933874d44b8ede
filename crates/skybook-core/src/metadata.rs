//! ECS task-metadata client shared by both services.
//!
//! The services run on Fargate; the v2 task-metadata endpoint is a fixed
//! link-local address documented at
//! <https://docs.aws.amazon.com/AmazonECS/latest/userguide/task-metadata-endpoint-v2.html>.
//! `/info` renders two fields from it. The call is single-shot with a hard
//! timeout; every failure mode (connect error, timeout, non-2xx, bad JSON,
//! missing field) is reported as `MetadataUnavailable` so the handling
//! thread never crashes on a slow or absent endpoint.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SkybookError};

/// v2 task-metadata endpoint on Fargate.
pub const DEFAULT_ENDPOINT: &str = "http://169.254.170.2/v2/metadata";

/// Hard cap on the single outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The two fields `/info` reports, taken verbatim from the metadata JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub task_arn: String,
    pub availability_zone: String,
}

impl fmt::Display for TaskReport {
    /// Two-line plain-text report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TaskARN={},\nAvailabilityZone={}",
            self.task_arn, self.availability_zone
        )
    }
}

/// Subset of the v2 metadata document we care about. Extra fields (task
/// family, containers, limits) are ignored; the two we need are mandatory.
#[derive(Debug, Deserialize)]
struct TaskMetadata {
    #[serde(rename = "TaskARN")]
    task_arn: String,
    #[serde(rename = "AvailabilityZone")]
    availability_zone: String,
}

/// Outbound client for the task-metadata endpoint.
pub struct MetadataClient {
    client: reqwest::Client,
    endpoint: String,
}

impl MetadataClient {
    /// Build a client against a specific endpoint (tests point this at a
    /// mock server).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SkybookError::Internal(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build a client against the Fargate endpoint with the default timeout.
    pub fn fargate() -> Result<Self> {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single GET, no retry. All failures map to `MetadataUnavailable`.
    pub async fn task_report(&self) -> Result<TaskReport> {
        tracing::debug!(endpoint = %self.endpoint, "requesting task metadata");
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SkybookError::MetadataUnavailable(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SkybookError::MetadataUnavailable(format!(
                "endpoint returned {status}"
            )));
        }

        let meta: TaskMetadata = resp
            .json()
            .await
            .map_err(|e| SkybookError::MetadataUnavailable(format!("invalid metadata: {e}")))?;

        Ok(TaskReport {
            task_arn: meta.task_arn,
            availability_zone: meta.availability_zone,
        })
    }
}
