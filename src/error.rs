use thiserror::Error;

/// Failures surfaced by the summarization pipeline. Empty sprint or issue
/// lists are valid results, not errors.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("tracking API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("summary generation failed: {0}")]
    GenerationFailed(String),
}
