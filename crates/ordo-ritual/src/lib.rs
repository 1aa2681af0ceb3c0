//! The Ordo ritual engine.
//!
//! A ritual runs `Idle → Thinking → Decree`: the oracle consults its catalog
//! behind a deliberate delay, then announces the chosen rule with synthesized
//! speech while the description is revealed character by character, paced to
//! the speech duration. Time is injected — every operation takes a `now:
//! Instant` — so the whole machine is testable without sleeping.

/// Speech + reveal in flight for one announcement.
pub mod announce;
/// Engine configuration.
pub mod config;
/// The in-flight selector pick and its latency.
pub mod consult;
/// The decree value: chosen rule plus rotation direction.
pub mod decree;
/// Session journal of announced decrees.
pub mod log;
/// Character-reveal pacing math.
pub mod reveal;
/// The presenter state machine.
pub mod ritual;
/// Ritual states.
pub mod state;

/// Re-export the announcement type.
pub use announce::Announcement;
/// Re-export the configuration.
pub use config::RitualConfig;
/// Re-export the consultation.
pub use consult::Consultation;
/// Re-export the decree.
pub use decree::Decree;
/// Re-export the session log types.
pub use log::{DecreeLog, DecreeRecord};
/// Re-export reveal pacing.
pub use reveal::{Reveal, revealed_at};
/// Re-export the state machine.
pub use ritual::{Ritual, RitualView};
/// Re-export the state enum.
pub use state::RitualState;
