//! Error types shared across the calculators, the generation client and the report builder

use thiserror::Error;

/// A boundary check rejected an input value
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field, as it appears in requests
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure talking to the text-generation provider
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API key missing. Set GOOGLE_API_KEY or GEMINI_API_KEY, or pass --api-key")]
    MissingApiKey,

    #[error("request to generation endpoint failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("generation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("generation provider returned no text (finish reason: {})", .finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyResponse { finish_reason: Option<String> },
}

impl From<reqwest::Error> for GenerationError {
    /// Drops the request URL so endpoint details never reach reports or logs
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Http(err.without_url())
    }
}

/// Top-level error for building and exporting a pitch report
#[derive(Debug, Error)]
pub enum PitchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check that a value is a finite number
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(field, format!("must be a finite number, got {}", value)))
    }
}

/// Check that a value lies in the closed interval `[min, max]`
pub(crate) fn ensure_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Check that a value is finite and not negative
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}
