//! Rotation direction for the decree.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which way play proceeds once the starting player is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    /// Play passes to the left.
    Clockwise,
    /// Play passes to the right.
    CounterClockwise,
}

impl RotationDirection {
    /// Both directions in display order.
    pub const ALL: [RotationDirection; 2] = [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
    ];

    /// Fair-coin pick: each direction with probability 0.5, independent of
    /// any other draw.
    pub fn pick<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl std::fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clockwise => write!(f, "Clockwise"),
            Self::CounterClockwise => write!(f, "Counter-Clockwise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn display() {
        assert_eq!(RotationDirection::Clockwise.to_string(), "Clockwise");
        assert_eq!(
            RotationDirection::CounterClockwise.to_string(),
            "Counter-Clockwise"
        );
    }

    #[test]
    fn reversed_flips() {
        assert_eq!(
            RotationDirection::Clockwise.reversed(),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            RotationDirection::CounterClockwise.reversed(),
            RotationDirection::Clockwise
        );
    }

    #[test]
    fn pick_is_deterministic_under_a_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                RotationDirection::pick(&mut rng1),
                RotationDirection::pick(&mut rng2)
            );
        }
    }

    #[test]
    fn pick_approaches_even_split() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 10_000;
        let clockwise = (0..trials)
            .filter(|_| RotationDirection::pick(&mut rng) == RotationDirection::Clockwise)
            .count();
        // Expected 5000 with sd ~50; a ±400 band is over 8 sigma.
        assert!(
            (4_600..=5_400).contains(&clockwise),
            "clockwise count {clockwise} outside tolerance"
        );
    }
}
