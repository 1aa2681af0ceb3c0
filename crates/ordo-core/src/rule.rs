//! The rule data type.

use serde::{Deserialize, Serialize};

/// A tie-breaker rule: a short mystical title and a plain-English description
/// of the physical action that decides who starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Short, evocative name (e.g. "The Nose Touch").
    pub title: String,
    /// What the players actually do.
    pub description: String,
}

impl Rule {
    /// Create a rule from title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The spoken announcement for this rule: `"{title}. {description}"`.
    pub fn announcement(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }

    /// Whether either field is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.description.trim().is_empty()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_joins_title_and_description() {
        let rule = Rule::new("The Blink Test", "The first person to blink starts.");
        assert_eq!(
            rule.announcement(),
            "The Blink Test. The first person to blink starts."
        );
    }

    #[test]
    fn blank_detection() {
        assert!(Rule::new("", "something").is_blank());
        assert!(Rule::new("something", "   ").is_blank());
        assert!(!Rule::new("a", "b").is_blank());
    }

    #[test]
    fn serde_roundtrip() {
        let rule = Rule::new("The Hand of Fate", "The last person to raise their hand starts.");
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn display_is_title() {
        let rule = Rule::new("The Sky Reach", "The last person to point at the ceiling starts.");
        assert_eq!(rule.to_string(), "The Sky Reach");
    }
}
