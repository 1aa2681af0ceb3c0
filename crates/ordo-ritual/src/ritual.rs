//! The presenter state machine.

use std::time::Instant;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ordo_core::RuleCatalog;
use ordo_speech::{SpeechEngine, Utterance, choose_voice};

use crate::announce::Announcement;
use crate::config::RitualConfig;
use crate::consult::Consultation;
use crate::decree::Decree;
use crate::log::{DecreeLog, DecreeRecord};
use crate::state::RitualState;

/// What a rendering surface needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RitualView<'a> {
    /// Current state.
    pub state: RitualState,
    /// The decree, present exactly while the state is `Decree`.
    pub decree: Option<&'a Decree>,
    /// Whether an utterance is playing.
    pub is_speaking: bool,
    /// Characters of the description currently revealed.
    pub revealed_chars: usize,
}

/// The ritual engine: a three-state machine driving consultation, speech,
/// and reveal.
///
/// Time is injected — `start`, `tick`, and `replay` take `now` — so nothing
/// here sleeps or reads a clock. All pending work is a deadline checked by
/// `tick`; dropping the engine (or calling [`Ritual::restart`]) cancels the
/// in-flight utterance through its handle.
pub struct Ritual {
    state: RitualState,
    decree: Option<Decree>,
    consultation: Option<Consultation>,
    dwell_until: Option<Instant>,
    announcement: Option<Announcement>,
    log: DecreeLog,
    catalog: RuleCatalog,
    speech: Box<dyn SpeechEngine>,
    rng: StdRng,
    config: RitualConfig,
}

impl std::fmt::Debug for Ritual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ritual")
            .field("state", &self.state)
            .field("decree", &self.decree.as_ref().map(|d| &d.rule.title))
            .field("log", &self.log.len())
            .finish()
    }
}

impl Ritual {
    /// Create an idle engine over a catalog and a speech backend.
    pub fn new(catalog: RuleCatalog, speech: Box<dyn SpeechEngine>, config: RitualConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            state: RitualState::Idle,
            decree: None,
            consultation: None,
            dwell_until: None,
            announcement: None,
            log: DecreeLog::new(),
            catalog,
            speech,
            rng,
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> RitualState {
        self.state
    }

    /// The session's decree log.
    pub fn log(&self) -> &DecreeLog {
        &self.log
    }

    /// The catalog this engine samples from.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> RitualView<'_> {
        RitualView {
            state: self.state,
            decree: self.decree.as_ref(),
            is_speaking: self
                .announcement
                .as_ref()
                .is_some_and(Announcement::is_speaking),
            revealed_chars: self
                .announcement
                .as_ref()
                .map_or(0, Announcement::revealed_chars),
        }
    }

    /// Begin a ritual. No-op outside `Idle`.
    ///
    /// Samples the decree immediately (rule, then direction), arms the
    /// consultation latency and the thinking dwell, and enters `Thinking`.
    pub fn start(&mut self, now: Instant) {
        if self.state != RitualState::Idle {
            return;
        }
        self.consultation = Some(Consultation::begin(
            &self.catalog,
            &mut self.rng,
            now,
            self.config.consult_delay,
        ));
        self.dwell_until = Some(now + self.config.thinking_dwell);
        self.state = RitualState::Thinking;
    }

    /// Advance timers and observe speech completion.
    pub fn tick(&mut self, now: Instant) {
        match self.state {
            RitualState::Idle => {}
            RitualState::Thinking => {
                // Take-max gating: the dwell timer and the consultation
                // latency are independent, and whichever lands last admits
                // the transition.
                let dwell_elapsed = self.dwell_until.is_some_and(|until| now >= until);
                let ready = self
                    .consultation
                    .as_ref()
                    .is_some_and(|c| c.is_ready(now));
                if dwell_elapsed && ready {
                    self.dwell_until = None;
                    if let Some(consultation) = self.consultation.take() {
                        self.enter_decree(consultation.into_decree(), now);
                    }
                }
            }
            RitualState::Decree => {
                if let Some(announcement) = self.announcement.as_mut() {
                    announcement.tick(now);
                }
            }
        }
    }

    /// Re-announce the current decree. No-op outside `Decree` and while an
    /// utterance is already playing — an in-flight announcement is never
    /// interrupted by a duplicate request.
    pub fn replay(&mut self, now: Instant) {
        if self.state != RitualState::Decree {
            return;
        }
        if self
            .announcement
            .as_ref()
            .is_some_and(Announcement::is_speaking)
        {
            return;
        }
        self.announce(now);
    }

    /// Discard the decree and return to `Idle`, cancelling any in-flight
    /// utterance and pending deadlines.
    pub fn restart(&mut self) {
        self.announcement = None;
        self.consultation = None;
        self.dwell_until = None;
        self.decree = None;
        self.state = RitualState::Idle;
    }

    fn enter_decree(&mut self, decree: Decree, now: Instant) {
        self.log
            .append(DecreeRecord::from_decree(&decree, Utc::now()));
        self.decree = Some(decree);
        self.state = RitualState::Decree;
        self.announce(now);
    }

    /// Fire the speech/reveal protocol for the current decree.
    ///
    /// Speech failure is degraded mode, not an error: the reveal still runs,
    /// paced against the fallback duration, and nothing is surfaced.
    fn announce(&mut self, now: Instant) {
        let (text, chars) = match self.decree.as_ref() {
            Some(decree) => (
                decree.announcement(),
                decree.rule.description.chars().count(),
            ),
            None => return,
        };
        let voice = choose_voice(self.speech.voices(), &self.config.voice_pattern).cloned();
        let utterance = self.speech.speak(&text, voice.as_ref()).ok();
        let duration = utterance
            .as_ref()
            .and_then(Utterance::duration)
            .unwrap_or(self.config.fallback_speech);
        self.announcement = Some(Announcement::begin(chars, duration, utterance, now));
    }
}
