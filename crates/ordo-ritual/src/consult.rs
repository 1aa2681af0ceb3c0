//! The in-flight selector pick and its latency.

use std::time::{Duration, Instant};

use rand::Rng;

use ordo_core::{RotationDirection, RuleCatalog};

use crate::decree::Decree;

/// A consultation of the oracle: the decree is drawn the moment the
/// consultation begins, but stays hidden until the latency elapses.
///
/// Draw order is fixed — rule first, then direction — so a seeded RNG
/// reproduces a ritual's picks exactly.
#[derive(Debug, Clone)]
pub struct Consultation {
    decree: Decree,
    ready_at: Instant,
}

impl Consultation {
    /// Sample a decree from the catalog and arm the latency deadline.
    pub fn begin<R: Rng>(
        catalog: &RuleCatalog,
        rng: &mut R,
        now: Instant,
        delay: Duration,
    ) -> Self {
        let rule = catalog.pick(rng).clone();
        let direction = RotationDirection::pick(rng);
        Self {
            decree: Decree { direction, rule },
            ready_at: now + delay,
        }
    }

    /// Whether the latency has elapsed.
    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    /// Consume the consultation, yielding the decree.
    pub fn into_decree(self) -> Decree {
        self.decree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn not_ready_before_delay_elapses() {
        let catalog = RuleCatalog::default();
        let mut rng = StdRng::seed_from_u64(42);
        let t0 = Instant::now();
        let c = Consultation::begin(&catalog, &mut rng, t0, Duration::from_millis(800));

        assert!(!c.is_ready(t0));
        assert!(!c.is_ready(t0 + Duration::from_millis(799)));
        assert!(c.is_ready(t0 + Duration::from_millis(800)));
        assert!(c.is_ready(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn zero_delay_is_ready_immediately() {
        let catalog = RuleCatalog::default();
        let mut rng = StdRng::seed_from_u64(42);
        let t0 = Instant::now();
        let c = Consultation::begin(&catalog, &mut rng, t0, Duration::ZERO);
        assert!(c.is_ready(t0));
    }

    #[test]
    fn draw_order_is_rule_then_direction() {
        let catalog = RuleCatalog::default();
        let t0 = Instant::now();

        let mut expected_rng = StdRng::seed_from_u64(9);
        let expected_rule = catalog.pick(&mut expected_rng).clone();
        let expected_direction = RotationDirection::pick(&mut expected_rng);

        let mut rng = StdRng::seed_from_u64(9);
        let decree = Consultation::begin(&catalog, &mut rng, t0, Duration::ZERO).into_decree();
        assert_eq!(decree.rule, expected_rule);
        assert_eq!(decree.direction, expected_direction);
    }
}
