//! Pitch report: request, per-section output, builder and renderers

mod builder;
pub mod render;

pub use builder::ReportBuilder;
pub use render::{format_whole_dollars, render_markdown, write_projection_csv, write_projection_csv_file};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::market::{MarketInputs, MarketSizeEstimate};
use crate::projection::{ProjectionAssumptions, ProjectionTable};
use crate::prompts::{PitchContext, PitchSection};

/// Everything needed to build one report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitchRequest {
    #[serde(flatten)]
    pub context: PitchContext,

    /// Comma-separated competitor names
    #[serde(default)]
    pub competitors: String,

    /// Sections to produce; the default selection when absent
    #[serde(default)]
    pub sections: Option<Vec<PitchSection>>,

    #[serde(default)]
    pub projection: ProjectionAssumptions,

    #[serde(default)]
    pub market: MarketInputs,
}

impl PitchRequest {
    pub fn new(context: PitchContext) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }

    /// Selected sections, deduplicated, in dispatch order
    pub fn selected_sections(&self) -> Vec<PitchSection> {
        match &self.sections {
            Some(sections) => sections.iter().copied().collect::<BTreeSet<_>>().into_iter().collect(),
            None => PitchSection::default_selection(),
        }
    }

    /// Boundary checks; calculator inputs are only checked when their section is selected
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.context.idea.trim().is_empty() {
            return Err(ValidationError::new("idea", "please enter your raw idea first"));
        }
        let sections = self.selected_sections();
        if sections.contains(&PitchSection::Financials) {
            self.projection.validate()?;
        }
        if sections.contains(&PitchSection::MarketSize) {
            self.market.validate()?;
        }
        Ok(())
    }
}

/// Content of one report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Text(String),
    Projection(ProjectionTable),
    Market(MarketSizeEstimate),
    /// Generation failed; the message is shown in place of the text
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionOutput {
    pub section: PitchSection,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchReport {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub sections: Vec<SectionOutput>,
}

impl PitchReport {
    pub fn section(&self, section: PitchSection) -> Option<&SectionOutput> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// The projection table, if the financials section was produced
    pub fn projection(&self) -> Option<&ProjectionTable> {
        self.sections.iter().find_map(|s| match &s.body {
            SectionBody::Projection(table) => Some(table),
            _ => None,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Failed(_)))
            .count()
    }
}
