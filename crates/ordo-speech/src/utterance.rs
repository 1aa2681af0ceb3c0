//! In-flight utterance handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Words-per-minute rate used for duration estimates.
pub const DEFAULT_WPM: u32 = 160;

/// Estimate how long a synthesizer will take to speak `text` at `wpm`
/// words per minute. Always at least one word's worth of time.
pub fn estimate_spoken_duration(text: &str, wpm: u32) -> Duration {
    let words = text.split_whitespace().count().max(1) as u64;
    let wpm = u64::from(wpm.max(1));
    Duration::from_millis(words * 60_000 / wpm)
}

/// Handle to a speech playback in progress.
///
/// Completion and cancellation are communicated through shared atomic flags,
/// so the worker driving the synthesizer never needs a reference back into
/// the presenter. Dropping the handle cancels playback — a discarded
/// presenter hears no late callbacks.
#[derive(Debug)]
pub struct Utterance {
    done: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
    duration: Option<Duration>,
}

impl Utterance {
    /// Create a handle over the given completion/cancel flags.
    ///
    /// `duration` is the estimated playback time, if the engine can estimate
    /// one ahead of time.
    pub fn new(done: Arc<AtomicBool>, cancel: Arc<AtomicBool>, duration: Option<Duration>) -> Self {
        Self {
            done,
            cancel,
            duration,
        }
    }

    /// Whether playback has finished (successfully or not).
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Estimated playback duration, if known ahead of time.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Request cancellation of the playback.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for Utterance {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}
