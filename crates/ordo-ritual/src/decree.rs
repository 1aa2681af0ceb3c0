//! The decree value: chosen rule plus rotation direction.

use serde::{Deserialize, Serialize};

use ordo_core::{RotationDirection, Rule};

/// The oracle's verdict for one ritual: which rule decides the starting
/// player and which way play rotates afterwards.
///
/// Created once per ritual, held for the duration of the `Decree` state,
/// discarded on restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decree {
    /// The rotation direction, drawn by fair coin.
    pub direction: RotationDirection,
    /// The rule, drawn uniformly from the catalog.
    pub rule: Rule,
}

impl Decree {
    /// The spoken announcement for this decree.
    pub fn announcement(&self) -> String {
        self.rule.announcement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_comes_from_the_rule() {
        let decree = Decree {
            direction: RotationDirection::Clockwise,
            rule: Rule::new("B", "de"),
        };
        assert_eq!(decree.announcement(), "B. de");
    }

    #[test]
    fn serde_roundtrip() {
        let decree = Decree {
            direction: RotationDirection::CounterClockwise,
            rule: Rule::new("A", "abc"),
        };
        let json = serde_json::to_string(&decree).unwrap();
        let back: Decree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decree);
    }
}
