//! AWS Lambda handler for generating pitch reports
//!
//! Accepts a pitch request as the JSON event payload and returns the report,
//! its Markdown rendering and the execution time. Generation settings come from
//! the environment (see `GenerationSettings::from_env`) and may be overridden
//! per request under `settings`.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use pitch_polisher::generation::SettingsOverrides;
use pitch_polisher::report::render_markdown;
use pitch_polisher::{GeminiClient, GenerationSettings, PitchReport, PitchRequest, ReportBuilder};

/// Event payload: a pitch request plus optional generation overrides
#[derive(Debug, Deserialize)]
pub struct LambdaRequest {
    #[serde(flatten)]
    pub request: PitchRequest,

    #[serde(default)]
    pub settings: SettingsOverrides,
}

#[derive(Debug, Serialize)]
pub struct LambdaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PitchReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    pub failed_sections: usize,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LambdaResponse {
    fn failure(message: String, start: Instant) -> Self {
        log::warn!("request rejected: {}", message);
        Self {
            report: None,
            markdown: None,
            failed_sections: 0,
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: Some(message),
        }
    }
}

/// Resolve settings, validate, build the report. Errors are reported in the response body.
async fn process(event: LambdaRequest, mut settings: GenerationSettings) -> LambdaResponse {
    let start = Instant::now();

    settings.apply(&event.settings);
    if let Err(e) = settings.validate() {
        return LambdaResponse::failure(e.to_string(), start);
    }
    if let Err(e) = event.request.validate() {
        return LambdaResponse::failure(e.to_string(), start);
    }

    let client = match GeminiClient::new(&settings) {
        Ok(client) => client,
        Err(e) => return LambdaResponse::failure(e.to_string(), start),
    };

    match ReportBuilder::new(client).build(&event.request).await {
        Ok(report) => LambdaResponse {
            markdown: Some(render_markdown(&report)),
            failed_sections: report.failure_count(),
            report: Some(report),
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => LambdaResponse::failure(e.to_string(), start),
    }
}

async fn handler(event: LambdaEvent<LambdaRequest>) -> Result<LambdaResponse, Error> {
    Ok(process(event.payload, GenerationSettings::from_env()).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: &str) -> LambdaRequest {
        serde_json::from_str(json).unwrap()
    }

    fn settings_with_key() -> GenerationSettings {
        GenerationSettings {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_parses_request_and_settings() {
        let e = event(r#"{"idea": "x", "sections": ["financials"], "settings": {"model": "gemini-1.5-pro", "temperature": 0.2}}"#);
        assert_eq!(e.request.context.idea, "x");
        assert_eq!(e.settings.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(e.settings.temperature, Some(0.2));
    }

    #[tokio::test]
    async fn test_blank_idea_reported() {
        let response = process(event(r#"{"idea": "  "}"#), settings_with_key()).await;
        assert!(response.report.is_none());
        assert!(response.error.unwrap().contains("idea"));
    }

    #[tokio::test]
    async fn test_missing_api_key_reported() {
        let response = process(event(r#"{"idea": "x"}"#), GenerationSettings::default()).await;
        assert!(response.error.unwrap().contains("API key missing"));
    }

    #[tokio::test]
    async fn test_unsupported_model_reported() {
        let response = process(
            event(r#"{"idea": "x", "settings": {"model": "gpt-4o"}}"#),
            settings_with_key(),
        )
        .await;
        assert!(response.error.unwrap().starts_with("invalid model"));
    }

    #[tokio::test]
    async fn test_oversized_horizon_rejected() {
        let response = process(
            event(r#"{"idea": "x", "sections": ["financials"], "projection": {"months": 4000000000}}"#),
            settings_with_key(),
        )
        .await;
        assert!(response.report.is_none());
        assert!(response.error.unwrap().starts_with("invalid months"));
    }

    #[tokio::test]
    async fn test_computed_sections_need_no_network() {
        let response = process(
            event(r#"{"idea": "x", "sections": ["financials", "market_size"], "projection": {"months": 3}}"#),
            settings_with_key(),
        )
        .await;

        assert!(response.error.is_none());
        let report = response.report.unwrap();
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.projection().unwrap().rows[2].revenue, 661.25);
        assert!(response.markdown.unwrap().contains("**TAM**: $1,000,000,000"));
    }
}
