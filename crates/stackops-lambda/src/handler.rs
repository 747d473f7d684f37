// Placeholder pipeline stage
//
// Validates the stage's user parameters and reports the result. Every
// path through the stage funnels into exactly one success or failure
// report; only a failure of the report call itself escapes.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::event::{CodePipelineEvent, JobData};
use crate::params::parse_user_params;
use crate::report::JobReporter;

/// Handle one CodePipeline job invocation. The returned string is
/// informational only; the pipeline contract is the reported status.
pub async fn handle_job(event: CodePipelineEvent, reporter: &dyn JobReporter) -> Result<String> {
    let job_id = event.job.id;

    match run_stage(&event.job.data) {
        Ok(message) => reporter.report_success(&job_id, &message).await?,
        Err(err) => {
            reporter
                .report_failure(&job_id, &format!("Function exception: {err}"))
                .await?
        }
    }

    Ok("Complete.".to_string())
}

/// The stage itself. Placeholder behavior: validate parameters and
/// inspect the input artifacts without acting on them.
fn run_stage(data: &JobData) -> Result<String> {
    let raw = data
        .action_configuration
        .as_ref()
        .and_then(|ac| ac.configuration.user_parameters.as_deref())
        .ok_or_else(|| anyhow!("UserParameters missing from action configuration"))?;

    let params = parse_user_params(raw)?;
    info!(
        "stage parameters: stack={} artifact={} file={}",
        params["stack"], params["artifact"], params["file"]
    );

    for artifact in &data.input_artifacts {
        debug!("input artifact: {:?}", artifact.name);
    }
    info!("received {} input artifact(s)", data.input_artifacts.len());

    Ok("Everything is fine".to_string())
}
