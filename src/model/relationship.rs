//! Relationship (undirected edge) in the social graph.

use serde::{Deserialize, Serialize};
use super::PersonId;

/// An undirected relationship between two people.
///
/// The stored `from`/`to` order carries no traversal meaning, but it is
/// preserved for edge identity and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: PersonId,
    pub to: PersonId,
}

impl Relationship {
    pub fn new(from: PersonId, to: PersonId) -> Self {
        Self { from, to }
    }

    /// The "other" end of the relationship from the given person.
    pub fn other_end(&self, from: &PersonId) -> Option<&PersonId> {
        if *from == self.from {
            Some(&self.to)
        } else if *from == self.to {
            Some(&self.from)
        } else {
            None
        }
    }

    pub fn touches(&self, id: &PersonId) -> bool {
        self.from == *id || self.to == *id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_end_both_directions() {
        let rel = Relationship::new("a".into(), "b".into());
        assert_eq!(rel.other_end(&"a".into()), Some(&"b".into()));
        assert_eq!(rel.other_end(&"b".into()), Some(&"a".into()));
        assert_eq!(rel.other_end(&"c".into()), None);
    }

    #[test]
    fn test_touches() {
        let rel = Relationship::new("a".into(), "b".into());
        assert!(rel.touches(&"a".into()));
        assert!(rel.touches(&"b".into()));
        assert!(!rel.touches(&"x".into()));
    }
}
