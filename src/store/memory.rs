//! In-memory store.
//!
//! The reference implementation of [`NetworkStore`]: plain vectors behind
//! RwLocks. Vectors, not maps, because insertion order is semantically
//! significant here: node output order follows the people sequence, and
//! relationship order fixes edge identity and first-seen dedup.

use parking_lot::RwLock;
use tracing::debug;

use super::NetworkStore;
use crate::model::{Person, PersonId, Relationship};
use crate::{Error, Result};

/// In-memory social graph storage.
#[derive(Default)]
pub struct MemoryStore {
    people: RwLock<Vec<Person>>,
    relationships: RwLock<Vec<Relationship>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NetworkStore for MemoryStore {
    fn add_person(&self, name: &str) -> Result<PersonId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let id = PersonId::random();
        debug!(id = %id, name, "person added");
        self.people.write().push(Person::new(id.clone(), name));
        Ok(id)
    }

    fn add_relationship(&self, from: &PersonId, to: &PersonId) -> Result<()> {
        if from == to {
            return Err(Error::SelfRelationship);
        }
        {
            let people = self.people.read();
            for endpoint in [from, to] {
                if !people.iter().any(|p| p.id == *endpoint) {
                    return Err(Error::PersonNotFound(endpoint.to_string()));
                }
            }
        }

        debug!(from = %from, to = %to, "relationship added");
        self.relationships
            .write()
            .push(Relationship::new(from.clone(), to.clone()));
        Ok(())
    }

    fn people(&self) -> Vec<Person> {
        self.people.read().clone()
    }

    fn relationships(&self) -> Vec<Relationship> {
        self.relationships.read().clone()
    }

    fn contains_person(&self, id: &PersonId) -> bool {
        self.people.read().iter().any(|p| p.id == *id)
    }

    fn person_count(&self) -> usize {
        self.people.read().len()
    }

    fn relationship_count(&self) -> usize {
        self.relationships.read().len()
    }
}
