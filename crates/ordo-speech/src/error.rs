//! Error types for the speech capability.

use thiserror::Error;

/// Result type for speech operations.
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Errors a speech engine can report.
///
/// Callers treat every variant as "degraded mode": the announcement proceeds
/// text-only and nothing is surfaced to the user.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No synthesis capability exists on this system.
    #[error("no speech synthesis capability available")]
    Unavailable,

    /// The TTS process could not be started.
    #[error("failed to spawn speech process: {0}")]
    Spawn(#[from] std::io::Error),
}
