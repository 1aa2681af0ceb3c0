//! Ritual states.

/// The presenter's state. Exactly one value is active at a time and every
/// visible change in the UI follows from a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualState {
    /// Waiting for a start command.
    Idle,
    /// Consultation in flight; advances to `Decree` on its own.
    Thinking,
    /// Holding a decree until restart.
    Decree,
}

impl std::fmt::Display for RitualState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Thinking => write!(f, "Thinking"),
            Self::Decree => write!(f, "Decree"),
        }
    }
}
