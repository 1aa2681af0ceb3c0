//! Engine configuration.

use std::time::Duration;

/// Configuration for a ritual engine.
#[derive(Debug, Clone)]
pub struct RitualConfig {
    /// RNG seed for reproducible picks.
    pub seed: u64,
    /// Minimum latency before the consultation resolves. Pacing, not
    /// performance: it keeps the thinking interval perceptible.
    pub consult_delay: Duration,
    /// Fixed dwell in the Thinking state, independent of (and in addition
    /// to) the consultation latency.
    pub thinking_dwell: Duration,
    /// Reveal duration when the speech engine cannot estimate one.
    pub fallback_speech: Duration,
    /// Preferred-voice name pattern (case-sensitive substring).
    pub voice_pattern: String,
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            consult_delay: Duration::from_millis(800),
            thinking_dwell: Duration::from_millis(1_500),
            fallback_speech: Duration::from_millis(3_000),
            voice_pattern: "Male".to_string(),
        }
    }
}

impl RitualConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the consultation latency.
    pub fn with_consult_delay(mut self, delay: Duration) -> Self {
        self.consult_delay = delay;
        self
    }

    /// Set the Thinking dwell time.
    pub fn with_thinking_dwell(mut self, dwell: Duration) -> Self {
        self.thinking_dwell = dwell;
        self
    }

    /// Set the fallback reveal duration.
    pub fn with_fallback_speech(mut self, duration: Duration) -> Self {
        self.fallback_speech = duration;
        self
    }

    /// Set the preferred-voice name pattern.
    pub fn with_voice_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.voice_pattern = pattern.into();
        self
    }

    /// Zero both pacing delays. Useful for scripts and tests.
    pub fn without_pacing(self) -> Self {
        self.with_consult_delay(Duration::ZERO)
            .with_thinking_dwell(Duration::ZERO)
    }
}
