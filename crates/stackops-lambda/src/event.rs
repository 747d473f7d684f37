// CodePipeline job event model
//
// Only the fields this stage reads; CodePipeline sends more and serde
// ignores the rest.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CodePipelineEvent {
    #[serde(rename = "CodePipeline.job")]
    pub job: PipelineJob,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineJob {
    pub id: String,
    #[serde(default)]
    pub data: JobData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    #[serde(default)]
    pub action_configuration: Option<ActionConfiguration>,
    #[serde(default)]
    pub input_artifacts: Vec<InputArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionConfiguration {
    #[serde(default)]
    pub configuration: StageConfiguration,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageConfiguration {
    /// JSON-encoded string carrying the stage's user parameters.
    #[serde(rename = "UserParameters")]
    pub user_parameters: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputArtifact {
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<ArtifactLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLocation {
    #[serde(rename = "type")]
    pub location_type: Option<String>,
    pub s3_location: Option<S3Location>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Location {
    pub bucket_name: Option<String>,
    pub object_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape documented in the CodePipeline Lambda integration guide
    const FIXTURE: &str = r#"{
        "CodePipeline.job": {
            "id": "11111111-abcd-1111-abcd-111111abcdef",
            "accountId": "111111111111",
            "data": {
                "actionConfiguration": {
                    "configuration": {
                        "FunctionName": "stackops-stage",
                        "UserParameters": "{\"stack\":\"a4tp-web\",\"artifact\":\"template-source\",\"file\":\"web.yaml\"}"
                    }
                },
                "inputArtifacts": [
                    {
                        "location": {
                            "s3Location": {
                                "bucketName": "a4tp-artifacts",
                                "objectKey": "template-source/abc123"
                            },
                            "type": "S3"
                        },
                        "revision": null,
                        "name": "template-source"
                    }
                ],
                "outputArtifacts": [],
                "artifactCredentials": {
                    "accessKeyId": "AKIA...",
                    "secretAccessKey": "...",
                    "sessionToken": "..."
                }
            }
        }
    }"#;

    #[test]
    fn fixture_decodes() {
        let event: CodePipelineEvent = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(event.job.id, "11111111-abcd-1111-abcd-111111abcdef");

        let params = event
            .job
            .data
            .action_configuration
            .unwrap()
            .configuration
            .user_parameters
            .unwrap();
        assert!(params.contains("a4tp-web"));

        let artifacts = event.job.data.input_artifacts;
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].name.as_deref(), Some("template-source"));
        let location = artifacts[0].location.as_ref().unwrap();
        assert_eq!(location.location_type.as_deref(), Some("S3"));
        assert_eq!(
            location
                .s3_location
                .as_ref()
                .unwrap()
                .bucket_name
                .as_deref(),
            Some("a4tp-artifacts")
        );
    }

    #[test]
    fn minimal_event_decodes() {
        let event: CodePipelineEvent =
            serde_json::from_str(r#"{"CodePipeline.job":{"id":"abc","data":{}}}"#).unwrap();
        assert_eq!(event.job.id, "abc");
        assert!(event.job.data.action_configuration.is_none());
        assert!(event.job.data.input_artifacts.is_empty());
    }
}
