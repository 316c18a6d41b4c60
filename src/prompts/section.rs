//! Selectable outputs of a pitch report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::context::PitchContext;
use super::templates;
use crate::error::ValidationError;

/// One selectable output, listed in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchSection {
    InvestorSummary,
    ElevatorPitch,
    Swot,
    PitchEmail,
    /// Monthly projection table, computed locally
    Financials,
    /// TAM / SAM / SOM estimate, computed locally
    MarketSize,
    Competitors,
    Storytelling,
    Risks,
    TeamAnalyzer,
    FundingAsk,
    /// Investor Q&A practice, off by default
    Qna,
}

impl PitchSection {
    /// Every section in dispatch order
    pub const ALL: [PitchSection; 12] = [
        PitchSection::InvestorSummary,
        PitchSection::ElevatorPitch,
        PitchSection::Swot,
        PitchSection::PitchEmail,
        PitchSection::Financials,
        PitchSection::MarketSize,
        PitchSection::Competitors,
        PitchSection::Storytelling,
        PitchSection::Risks,
        PitchSection::TeamAnalyzer,
        PitchSection::FundingAsk,
        PitchSection::Qna,
    ];

    /// Sections selected when the caller does not choose
    pub fn default_selection() -> Vec<PitchSection> {
        Self::ALL
            .iter()
            .copied()
            .filter(|s| s.enabled_by_default())
            .collect()
    }

    pub fn enabled_by_default(&self) -> bool {
        !matches!(self, PitchSection::Qna)
    }

    /// Computed sections never reach the text generator
    pub fn is_computed(&self) -> bool {
        matches!(self, PitchSection::Financials | PitchSection::MarketSize)
    }

    /// Request name, as used in JSON payloads and `--section` flags
    pub fn name(&self) -> &'static str {
        match self {
            PitchSection::InvestorSummary => "investor_summary",
            PitchSection::ElevatorPitch => "elevator_pitch",
            PitchSection::Swot => "swot",
            PitchSection::PitchEmail => "pitch_email",
            PitchSection::Financials => "financials",
            PitchSection::MarketSize => "market_size",
            PitchSection::Competitors => "competitors",
            PitchSection::Storytelling => "storytelling",
            PitchSection::Risks => "risks",
            PitchSection::TeamAnalyzer => "team_analyzer",
            PitchSection::FundingAsk => "funding_ask",
            PitchSection::Qna => "qna",
        }
    }

    /// Display heading
    pub fn title(&self) -> &'static str {
        match self {
            PitchSection::InvestorSummary => "Investor Summary",
            PitchSection::ElevatorPitch => "Elevator Pitch (30s)",
            PitchSection::Swot => "SWOT Analysis",
            PitchSection::PitchEmail => "Custom Pitch Email",
            PitchSection::Financials => "Financial Snapshot (Monthly Projection)",
            PitchSection::MarketSize => "Market Size Estimator (TAM-SAM-SOM)",
            PitchSection::Competitors => "Competitor Benchmarking",
            PitchSection::Storytelling => "Storytelling Enhancer (hooks & analogies)",
            PitchSection::Risks => "Risk Analysis & Mitigation",
            PitchSection::TeamAnalyzer => "Team Strength Analyzer",
            PitchSection::FundingAsk => "Funding Ask Auto-Generator",
            PitchSection::Qna => "Pitch Practice Mode (Q&A)",
        }
    }

    /// Full prompt for a generated section, `None` for computed ones
    pub fn prompt(&self, ctx: &PitchContext, competitors: &[String]) -> Option<String> {
        let task = match self {
            PitchSection::InvestorSummary => templates::INVESTOR_SUMMARY.to_string(),
            PitchSection::ElevatorPitch => templates::ELEVATOR_PITCH.to_string(),
            PitchSection::Swot => templates::SWOT.to_string(),
            PitchSection::PitchEmail => templates::PITCH_EMAIL.to_string(),
            PitchSection::Competitors => templates::competitor_table(competitors),
            PitchSection::Storytelling => templates::STORYTELLING.to_string(),
            PitchSection::Risks => templates::RISKS.to_string(),
            PitchSection::TeamAnalyzer => templates::TEAM_ANALYZER.to_string(),
            PitchSection::FundingAsk => templates::FUNDING_ASK.to_string(),
            PitchSection::Qna => templates::QNA.to_string(),
            PitchSection::Financials | PitchSection::MarketSize => return None,
        };
        Some(format!("{}\n\n{}\n", ctx.context_block(), task))
    }
}

impl fmt::Display for PitchSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchSection {
    type Err = ValidationError;

    /// Accepts the request name, case-insensitive, with `-` or `_` separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|section| section.name()).collect();
                ValidationError::new("section", format!("unknown section {:?}, expected one of {}", s, names.join(", ")))
            })
    }
}
