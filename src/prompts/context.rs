//! Free-text startup context shared by every prompt

use serde::{Deserialize, Serialize};

/// Startup details collected from the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchContext {
    /// Raw idea or draft pitch
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub industry: String,
    /// Target geography
    #[serde(default)]
    pub geo: String,
    /// Primary customers or users
    #[serde(default)]
    pub audience: String,
    /// Early traction: metrics, users, pilots, revenue
    #[serde(default)]
    pub traction: String,
    /// Founders, roles, skills
    #[serde(default)]
    pub team: String,
    /// Pricing or business model
    #[serde(default)]
    pub pricing: String,
    /// Go-to-market channels
    #[serde(default)]
    pub channels: String,
}

impl PitchContext {
    /// Create a context around an idea, other fields empty
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            ..Default::default()
        }
        .trimmed()
    }

    /// Copy of this context with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            idea: self.idea.trim().to_string(),
            industry: self.industry.trim().to_string(),
            geo: self.geo.trim().to_string(),
            audience: self.audience.trim().to_string(),
            traction: self.traction.trim().to_string(),
            team: self.team.trim().to_string(),
            pricing: self.pricing.trim().to_string(),
            channels: self.channels.trim().to_string(),
        }
    }

    /// The CONTEXT block that opens every prompt
    pub fn context_block(&self) -> String {
        format!(
            "CONTEXT\n\
             ----\n\
             Idea: {}\n\
             Industry: {}\n\
             Geography: {}\n\
             Audience: {}\n\
             Traction: {}\n\
             Team: {}\n\
             Pricing/Model: {}\n\
             GTM Channels: {}",
            self.idea,
            self.industry,
            self.geo,
            self.audience,
            self.traction,
            self.team,
            self.pricing,
            self.channels,
        )
    }
}
