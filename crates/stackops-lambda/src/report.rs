// Job status reporting back to CodePipeline
//
// Exactly one of success/failure is put per job. A failure of the
// report call itself has no fallback channel, so it propagates to the
// runtime.

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_codepipeline::types::{FailureDetails, FailureType};
use aws_sdk_codepipeline::Client;
use tracing::info;

#[async_trait]
pub trait JobReporter: Send + Sync {
    async fn report_success(&self, job_id: &str, message: &str) -> Result<()>;
    async fn report_failure(&self, job_id: &str, message: &str) -> Result<()>;
}

pub struct CodePipelineReporter {
    client: Client,
}

impl CodePipelineReporter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobReporter for CodePipelineReporter {
    async fn report_success(&self, job_id: &str, message: &str) -> Result<()> {
        info!(job_id, "putting job success: {message}");
        self.client
            .put_job_success_result()
            .job_id(job_id)
            .send()
            .await
            .context("Failed to put job success result")?;
        Ok(())
    }

    async fn report_failure(&self, job_id: &str, message: &str) -> Result<()> {
        info!(job_id, "putting job failure: {message}");
        let details = FailureDetails::builder()
            .r#type(FailureType::JobFailed)
            .message(message)
            .build()
            .context("Failed to build failure details")?;
        self.client
            .put_job_failure_result()
            .job_id(job_id)
            .failure_details(details)
            .send()
            .await
            .context("Failed to put job failure result")?;
        Ok(())
    }
}
