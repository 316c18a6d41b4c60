//! Walks the selected sections and assembles a report

use chrono::Utc;

use super::{PitchReport, PitchRequest, SectionBody, SectionOutput};
use crate::error::PitchError;
use crate::generation::TextGenerator;
use crate::projection::ProjectionEngine;
use crate::prompts::{competitors_or_placeholders, PitchSection};

/// Builds reports with a given text generator
pub struct ReportBuilder<G> {
    generator: G,
}

impl<G: TextGenerator> ReportBuilder<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validate the request, then produce every selected section in dispatch order.
    ///
    /// Validation errors abort before any generation call. A generation failure
    /// only fails its own section; later sections still run.
    pub async fn build(&self, request: &PitchRequest) -> Result<PitchReport, PitchError> {
        request.validate()?;

        let context = request.context.trimmed();
        let competitors = competitors_or_placeholders(&request.competitors);
        let sections = request.selected_sections();
        let mut outputs = Vec::with_capacity(sections.len());

        for section in sections {
            log::debug!("building section {:?}", section);

            let body = match section {
                PitchSection::Financials => {
                    SectionBody::Projection(ProjectionEngine::new(request.projection.clone()).run())
                }
                PitchSection::MarketSize => SectionBody::Market(request.market.estimate()),
                _ => match section.prompt(&context, &competitors) {
                    Some(prompt) => match self.generator.generate(&prompt).await {
                        Ok(text) => SectionBody::Text(text),
                        Err(e) => {
                            log::warn!("section {:?} failed: {}", section, e);
                            SectionBody::Failed(e.to_string())
                        }
                    },
                    None => continue,
                },
            };

            outputs.push(SectionOutput {
                section,
                title: section.title().to_string(),
                body,
            });
        }

        let report = PitchReport {
            generated_at: Utc::now(),
            model: self.generator.model().to_string(),
            sections: outputs,
        };

        log::info!(
            "built pitch report: {} sections, {} failed",
            report.sections.len(),
            report.failure_count()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::prompts::PitchContext;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records prompts and answers with a canned reply; fails prompts containing `fail_on`
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingGenerator {
        fn new() -> Self {
            Self { prompts: Mutex::new(Vec::new()), fail_on: None }
        }

        fn failing_on(marker: &'static str) -> Self {
            Self { prompts: Mutex::new(Vec::new()), fail_on: Some(marker) }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(marker) = self.fail_on {
                if prompt.contains(marker) {
                    return Err(GenerationError::Provider { status: 429, message: "quota exceeded".to_string() });
                }
            }
            Ok(format!("reply #{}", self.prompts.lock().unwrap().len()))
        }

        fn model(&self) -> &str {
            "test-model"
        }
    }

    fn request(sections: Option<Vec<PitchSection>>) -> PitchRequest {
        PitchRequest {
            sections,
            ..PitchRequest::new(PitchContext {
                idea: "  Peer-to-peer textbook exchange  ".to_string(),
                industry: "Edtech".to_string(),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_default_selection_dispatch() {
        let builder = ReportBuilder::new(RecordingGenerator::new());
        let report = builder.build(&request(None)).await.unwrap();

        let produced: Vec<PitchSection> = report.sections.iter().map(|s| s.section).collect();
        assert_eq!(produced, PitchSection::default_selection());
        assert_eq!(report.model, "test-model");
        assert_eq!(report.failure_count(), 0);

        // 11 default sections, 2 of them computed locally
        let prompts = builder.generator().prompts();
        assert_eq!(prompts.len(), 9);
        assert!(prompts.iter().all(|p| p.contains("Idea: Peer-to-peer textbook exchange\n")));
    }

    #[tokio::test]
    async fn test_computed_sections_skip_generator() {
        let builder = ReportBuilder::new(RecordingGenerator::new());
        let report = builder
            .build(&request(Some(vec![PitchSection::MarketSize, PitchSection::Financials])))
            .await
            .unwrap();

        assert!(builder.generator().prompts().is_empty());
        assert_eq!(report.sections[0].section, PitchSection::Financials);
        assert_eq!(report.projection().unwrap().len(), 12);
        match &report.section(PitchSection::MarketSize).unwrap().body {
            SectionBody::Market(e) => assert_eq!(e.tam, 1_000_000_000.0),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_competitor_placeholders_used() {
        let builder = ReportBuilder::new(RecordingGenerator::new());
        builder.build(&request(Some(vec![PitchSection::Competitors]))).await.unwrap();

        let prompts = builder.generator().prompts();
        assert!(prompts[0].contains("Competitor A, Competitor B, Competitor C"));
    }

    #[tokio::test]
    async fn test_failure_recorded_and_later_sections_run() {
        let builder = ReportBuilder::new(RecordingGenerator::failing_on("SWOT"));
        let report = builder
            .build(&request(Some(vec![PitchSection::Swot, PitchSection::Risks, PitchSection::Qna])))
            .await
            .unwrap();

        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.failure_count(), 1);
        match &report.sections[0].body {
            SectionBody::Failed(msg) => assert!(msg.contains("429")),
            other => panic!("unexpected body: {:?}", other),
        }
        assert_eq!(report.sections[1].body, SectionBody::Text("reply #2".to_string()));
        assert_eq!(report.sections[2].title, "Pitch Practice Mode (Q&A)");
    }

    #[tokio::test]
    async fn test_validation_aborts_before_generation() {
        let builder = ReportBuilder::new(RecordingGenerator::new());
        let mut bad = request(None);
        bad.projection.cogs_pct = 2.0;

        let err = builder.build(&bad).await.unwrap_err();
        assert!(matches!(err, PitchError::Validation(ref v) if v.field == "cogs_pct"));
        assert!(builder.generator().prompts().is_empty());
    }
}
