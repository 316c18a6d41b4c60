//! Prompt library: startup context, section catalogue and task templates

mod context;
mod section;
pub mod templates;

pub use context::PitchContext;
pub use section::PitchSection;

/// Split comma-separated competitor names, dropping blanks
pub fn parse_competitors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Competitor names for the benchmarking prompt, with placeholders when none were given
pub fn competitors_or_placeholders(raw: &str) -> Vec<String> {
    let names = parse_competitors(raw);
    if names.is_empty() {
        templates::PLACEHOLDER_COMPETITORS.iter().map(|s| s.to_string()).collect()
    } else {
        names
    }
}
