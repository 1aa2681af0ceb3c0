//! Speech + reveal in flight for one announcement.

use std::time::{Duration, Instant};

use ordo_speech::Utterance;

use crate::reveal::Reveal;

/// One announcement of a decree: an optional utterance (absent in degraded,
/// text-only mode) and the paced reveal of the description.
#[derive(Debug)]
pub struct Announcement {
    reveal: Reveal,
    utterance: Option<Utterance>,
    started_at: Instant,
}

impl Announcement {
    /// Begin an announcement at `now`, revealing `description_chars`
    /// characters over `duration`.
    pub fn begin(
        description_chars: usize,
        duration: Duration,
        utterance: Option<Utterance>,
        now: Instant,
    ) -> Self {
        Self {
            reveal: Reveal::new(description_chars, duration),
            utterance,
            started_at: now,
        }
    }

    /// Advance the reveal and observe utterance completion. When the speech
    /// finishes (or fails), the speaking flag clears and the reveal snaps to
    /// the full text — no partial-text orphaning.
    pub fn tick(&mut self, now: Instant) {
        self.reveal
            .advance(now.saturating_duration_since(self.started_at));
        if self.utterance.as_ref().is_some_and(Utterance::is_done) {
            self.utterance = None;
            self.reveal.complete();
        }
    }

    /// Whether an utterance is still playing.
    pub fn is_speaking(&self) -> bool {
        self.utterance.is_some()
    }

    /// Characters of the description currently revealed.
    pub fn revealed_chars(&self) -> usize {
        self.reveal.revealed()
    }

    /// Whether the full description is visible.
    pub fn is_reveal_complete(&self) -> bool {
        self.reveal.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn utterance(done: &Arc<AtomicBool>, duration: Option<Duration>) -> Utterance {
        Utterance::new(
            Arc::clone(done),
            Arc::new(AtomicBool::new(false)),
            duration,
        )
    }

    #[test]
    fn paces_reveal_against_duration() {
        let t0 = Instant::now();
        let done = Arc::new(AtomicBool::new(false));
        let mut a = Announcement::begin(
            4,
            Duration::from_millis(4_000),
            Some(utterance(&done, None)),
            t0,
        );

        a.tick(t0 + Duration::from_millis(2_000));
        assert_eq!(a.revealed_chars(), 2);
        assert!(a.is_speaking());
        assert!(!a.is_reveal_complete());
    }

    #[test]
    fn completion_clears_speaking_and_snaps_reveal() {
        let t0 = Instant::now();
        let done = Arc::new(AtomicBool::new(false));
        let mut a = Announcement::begin(
            10,
            Duration::from_millis(10_000),
            Some(utterance(&done, None)),
            t0,
        );

        a.tick(t0 + Duration::from_millis(1_000));
        assert_eq!(a.revealed_chars(), 1);

        done.store(true, Ordering::Relaxed);
        a.tick(t0 + Duration::from_millis(1_100));
        assert!(!a.is_speaking());
        assert_eq!(a.revealed_chars(), 10);
        assert!(a.is_reveal_complete());
    }

    #[test]
    fn degraded_mode_is_never_speaking() {
        let t0 = Instant::now();
        let mut a = Announcement::begin(6, Duration::from_millis(3_000), None, t0);
        assert!(!a.is_speaking());

        a.tick(t0 + Duration::from_millis(1_500));
        assert_eq!(a.revealed_chars(), 3);

        a.tick(t0 + Duration::from_millis(3_000));
        assert_eq!(a.revealed_chars(), 6);
        assert!(a.is_reveal_complete());
        assert!(!a.is_speaking());
    }

    #[test]
    fn tick_before_start_reveals_nothing() {
        let later = Instant::now() + Duration::from_secs(5);
        let mut a = Announcement::begin(6, Duration::from_millis(3_000), None, later);
        a.tick(Instant::now());
        assert_eq!(a.revealed_chars(), 0);
    }
}
