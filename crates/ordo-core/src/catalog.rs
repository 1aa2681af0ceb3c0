//! The rule catalog: built-in entries, JSON override, uniform sampling.
//!
//! The built-in catalog ships with the application; a custom catalog can be
//! supplied as a JSON array of `{title, description}` objects. Either way the
//! catalog is validated once at construction, so sampling can never fail.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::rule::Rule;

/// Built-in tie-breaker rules (28 entries).
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    (
        "The Last to Speak",
        "On the count of three, everyone says 'Not it!' The last person to say it starts.",
    ),
    (
        "The Nose Touch",
        "On the count of three, touch your nose. The last person to do so starts.",
    ),
    (
        "The Floor is Lava",
        "The last person to touch the floor with their hand starts.",
    ),
    (
        "The Sky Reach",
        "The last person to point at the ceiling starts.",
    ),
    (
        "The Silent Clap",
        "The last person to clap their hands once starts.",
    ),
    (
        "The Ear Grab",
        "The last person to touch their left ear starts.",
    ),
    (
        "The Standing Decree",
        "The last person to stand up (or lift their hips off the chair) starts.",
    ),
    (
        "The Hand of Fate",
        "The last person to raise their hand starts.",
    ),
    ("The Blink Test", "The first person to blink starts."),
    (
        "The Finger Snap",
        "The last person to snap their fingers starts.",
    ),
    (
        "The Table Tap",
        "The last person to tap the table three times starts.",
    ),
    ("The Head Pat", "The last person to pat their head starts."),
    (
        "The Shoulder Shrug",
        "The last person to shrug their shoulders starts.",
    ),
    ("The Knee Slap", "The last person to slap their knee starts."),
    (
        "The Oracle's Name",
        "The last person to shout 'Oracle!' starts.",
    ),
    (
        "The Quickest Draw",
        "The last person to touch their phone starts.",
    ),
    (
        "The Wave of Destiny",
        "The last person to wave at the group starts.",
    ),
    (
        "The Thumb War",
        "The last person to give a thumbs-up starts.",
    ),
    (
        "The Peace Offering",
        "The last person to make a peace sign starts.",
    ),
    (
        "The Heart Beat",
        "The last person to place their hand over their heart starts.",
    ),
    (
        "The Tongue Twister",
        "The last person to stick out their tongue starts.",
    ),
    (
        "The Eye of the Storm",
        "The last person to close one eye starts.",
    ),
    (
        "The Finger Point",
        "The last person to point at the Oracle starts.",
    ),
    (
        "The Chair Grip",
        "The last person to grab the sides of their chair starts.",
    ),
    (
        "The Elbow Touch",
        "The last person to touch their right elbow with their left hand starts.",
    ),
    (
        "The Deep Breath",
        "The last person to take a visible deep breath starts.",
    ),
    (
        "The Smile of Fate",
        "The first person to smile at the group starts.",
    ),
    (
        "The Wink of Destiny",
        "The first person to wink starts.",
    ),
];

/// A validated, non-empty list of rules the oracle samples from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(title, description)| Rule::new(*title, *description))
            .collect();
        Self { rules }
    }
}

impl RuleCatalog {
    /// Build a catalog from a custom rule list.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        if rules.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = rules.iter().position(Rule::is_blank) {
            return Err(CatalogError::BlankRule { index });
        }
        Ok(Self { rules })
    }

    /// Parse a catalog from a JSON array of `{title, description}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    /// Pick one rule uniformly at random: index = uniform integer in `[0, N)`.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &Rule {
        &self.rules[rng.random_range(0..self.rules.len())]
    }

    /// Rule at the given index, if in range.
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_catalog_has_28_valid_entries() {
        let catalog = RuleCatalog::default();
        assert_eq!(catalog.len(), 28);
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|r| !r.is_blank()));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(
            RuleCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn blank_rule_rejected_with_index() {
        let rules = vec![Rule::new("A", "abc"), Rule::new("  ", "de")];
        assert!(matches!(
            RuleCatalog::new(rules),
            Err(CatalogError::BlankRule { index: 1 })
        ));
    }

    #[test]
    fn from_json_str_parses_rules() {
        let json = r#"[
            {"title": "A", "description": "abc"},
            {"title": "B", "description": "de"}
        ]"#;
        let catalog = RuleCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "B");
    }

    #[test]
    fn from_json_str_rejects_garbage() {
        assert!(matches!(
            RuleCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn pick_is_deterministic_under_a_seed() {
        let catalog = RuleCatalog::default();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(catalog.pick(&mut rng1), catalog.pick(&mut rng2));
        }
    }

    #[test]
    fn pick_approaches_uniform_frequencies() {
        let catalog = RuleCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        let trials = 28_000;
        let mut counts = vec![0usize; catalog.len()];
        for _ in 0..trials {
            let picked = catalog.pick(&mut rng);
            let index = catalog.iter().position(|r| r == picked).unwrap();
            counts[index] += 1;
        }
        // Expected 1000 per entry with sd ~31; ±300 is nearly 10 sigma.
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (700..=1_300).contains(count),
                "rule {index} picked {count} times, outside tolerance"
            );
        }
    }

    #[test]
    fn catalog_serde_roundtrip() {
        let catalog = RuleCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: RuleCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), catalog.len());
    }
}
