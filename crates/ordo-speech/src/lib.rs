//! Speech synthesis capability for Ordo.
//!
//! The presenter talks to speech through the [`SpeechEngine`] trait and the
//! [`Utterance`] handle it returns. Two engines ship here: [`CommandSpeech`]
//! drives a system TTS program in a worker thread, and [`SilentSpeech`]
//! reports no capability so callers fall back to text-only pacing.

/// Subprocess-backed speech engine.
pub mod command;
/// The engine trait and the no-capability engine.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// In-flight utterance handle.
pub mod utterance;
/// Voice descriptors and preference matching.
pub mod voice;

/// Re-export the subprocess engine.
pub use command::CommandSpeech;
/// Re-export the engine trait and silent engine.
pub use engine::{SilentSpeech, SpeechEngine};
/// Re-export error types.
pub use error::{SpeechError, SpeechResult};
/// Re-export the utterance handle.
pub use utterance::{Utterance, estimate_spoken_duration};
/// Re-export voice types.
pub use voice::{Voice, choose_voice};
