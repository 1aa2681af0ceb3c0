//! The engine trait and the no-capability engine.

use crate::error::{SpeechError, SpeechResult};
use crate::utterance::Utterance;
use crate::voice::Voice;

/// A speech synthesis backend.
///
/// Implementations are owned by the presenter with an explicit lifecycle:
/// constructed at startup, dropped with the presenter. `speak` is best-effort
/// — an error means "no audio for this announcement", never a user-facing
/// failure.
pub trait SpeechEngine {
    /// Short backend name for display.
    fn name(&self) -> &str;

    /// Voices this engine can synthesize with, in preference-fallback order.
    fn voices(&self) -> &[Voice];

    /// Start speaking `text` with the given voice (or the engine default
    /// when `None`), returning a handle to the playback in progress.
    fn speak(&mut self, text: &str, voice: Option<&Voice>) -> SpeechResult<Utterance>;
}

/// An engine with no synthesis capability.
///
/// Used for `--mute` and when no TTS program exists on the system; callers
/// fall back to text-only pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl SpeechEngine for SilentSpeech {
    fn name(&self) -> &str {
        "silent"
    }

    fn voices(&self) -> &[Voice] {
        &[]
    }

    fn speak(&mut self, _text: &str, _voice: Option<&Voice>) -> SpeechResult<Utterance> {
        Err(SpeechError::Unavailable)
    }
}
