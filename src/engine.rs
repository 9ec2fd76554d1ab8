//! Bounded breadth-first distance classification.
//!
//! Given a chosen index person, classify every reachable person by hop
//! distance, capped at [`MAX_HOPS`]. The cap is a hard boundary: a person
//! at the cap keeps their recorded distance but is never used as a source
//! to discover anyone further out.
//!
//! The whole module is pure functions over snapshots. It never mutates,
//! never blocks, and terminates on any input, cyclic or not.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::model::{PersonId, Relationship};

/// Maximum hop distance recorded by the engine. Distance 2 is the
/// "critical alert" boundary of the domain.
pub const MAX_HOPS: u32 = 2;

/// Hop distance per reachable person, keyed by id.
///
/// Exactly one entry holds 0 (the index person). Every other entry holds
/// the minimal BFS distance, and nothing beyond [`MAX_HOPS`] is recorded.
/// Iteration order of the map is meaningless; ordered output always
/// follows the `people` snapshot instead.
pub type DistanceMap = HashMap<PersonId, u32>;

/// Compute hop distances from `origin` over the undirected adjacency
/// implied by `relationships`.
///
/// The origin is always recorded at distance 0, even when it touches no
/// relationship. Ids referenced by a relationship but absent from the
/// store are traversed like any other id; dangling ones are simply never
/// reached from a valid origin's side of the graph.
pub fn compute_distances(origin: &PersonId, relationships: &[Relationship]) -> DistanceMap {
    let mut distances = DistanceMap::new();
    let mut visited: HashSet<PersonId> = HashSet::new();
    let mut frontier: VecDeque<(PersonId, u32)> = VecDeque::new();

    distances.insert(origin.clone(), 0);
    visited.insert(origin.clone());
    frontier.push_back((origin.clone(), 0));

    while let Some((current, distance)) = frontier.pop_front() {
        // Expansion cutoff: entries at the cap are recorded but never
        // expanded, so anyone only reachable through them stays absent.
        if distance >= MAX_HOPS {
            continue;
        }

        // Brute-force scan over all relationships. An adjacency index
        // would not change observable behavior at personal-network scale.
        for rel in relationships {
            let Some(next) = rel.other_end(&current) else {
                continue;
            };
            if visited.contains(next) {
                continue;
            }
            visited.insert(next.clone());
            distances.insert(next.clone(), distance + 1);
            frontier.push_back((next.clone(), distance + 1));
        }
    }

    trace!(origin = %origin, reached = distances.len(), "distance map computed");
    distances
}
