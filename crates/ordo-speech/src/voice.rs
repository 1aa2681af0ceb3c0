//! Voice descriptors and preference matching.

/// A synthesizer voice: an engine-specific id and a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Engine-specific identifier passed to the synthesizer.
    pub id: String,
    /// Descriptive name used for preference matching.
    pub name: String,
}

impl Voice {
    /// Create a voice descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Deterministic voice selection: the first voice whose name contains
/// `pattern`, else the first voice at all.
///
/// The match is a case-sensitive substring so that a "Male" preference does
/// not land on "Female". Returns `None` only when the engine has no voices.
pub fn choose_voice<'a>(voices: &'a [Voice], pattern: &str) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|v| !pattern.is_empty() && v.name.contains(pattern))
        .or_else(|| voices.first())
}
