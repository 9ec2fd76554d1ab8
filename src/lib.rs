//! # proximity-rs: Social Proximity Graph
//!
//! Build a small social graph (people as nodes, undirected relationships
//! as edges), classify everyone reachable from a chosen "index" person by
//! hop distance (capped at 2), and derive two render-ready views of the
//! bounded subgraph: a node/link dataset for a force-directed renderer
//! and a Graphviz DOT description for export.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `NetworkStore` is the contract between the
//!    surrounding application and the visualize pipeline
//! 2. **Clean DTOs**: `Person`, `Relationship`, `GraphNode` cross all
//!    boundaries
//! 3. **The core owns nothing**: distance computation, projection, and
//!    DOT rendering are pure functions over store snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use proximity_rs::Network;
//!
//! # fn example() -> proximity_rs::Result<()> {
//! let network = Network::open_memory();
//!
//! let ana = network.add_person("Ana")?;
//! let bia = network.add_person("Bia")?;
//! let caio = network.add_person("Caio")?;
//! network.add_relationship(&ana, &bia)?;
//! network.add_relationship(&bia, &caio)?;
//!
//! // Caio is two hops from Ana: the critical-alert boundary.
//! let view = network.visualize(&ana)?;
//! assert!(view.data.nodes.iter().any(|n| n.is_critical));
//! println!("{}", view.dot);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod engine;
pub mod export;
pub mod model;
pub mod store;
pub mod viz;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Person, PersonId, Relationship};

// ============================================================================
// Re-exports: Core analysis
// ============================================================================

pub use engine::{DistanceMap, MAX_HOPS, compute_distances};
pub use export::{export_dot, render_dot};
pub use viz::{GraphLink, GraphNode, VisualizationData, node_badge, node_color, project};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{MemoryStore, NetworkStore};

use tracing::debug;

// ============================================================================
// Top-level Network handle
// ============================================================================

/// The primary entry point. A `Network` wraps a store and runs the
/// visualize pipeline on demand.
pub struct Network<S: NetworkStore> {
    store: S,
}

impl<S: NetworkStore> Network<S> {
    /// Create a Network with the given store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Add a person. Delegates validation to the store.
    pub fn add_person(&self, name: &str) -> Result<PersonId> {
        self.store.add_person(name)
    }

    /// Add an undirected relationship between two existing people.
    pub fn add_relationship(&self, from: &PersonId, to: &PersonId) -> Result<()> {
        self.store.add_relationship(from, to)
    }

    /// Run the full pipeline for the chosen index person.
    ///
    /// Snapshots the store once, then runs the three core stages
    /// sequentially over that snapshot.
    pub fn visualize(&self, origin: &PersonId) -> Result<NetworkView> {
        if !self.store.contains_person(origin) {
            return Err(Error::PersonNotFound(origin.to_string()));
        }

        let people = self.store.people();
        let relationships = self.store.relationships();

        // Stage 1: bounded BFS from the index person
        let distances = engine::compute_distances(origin, &relationships);

        // Stage 2: project the bounded subgraph for the renderer
        let data = viz::project(&people, &relationships, &distances);

        // Stage 3: render the DOT description for export
        let dot = export::render_dot(&people, &distances, &relationships);

        debug!(
            origin = %origin,
            reached = distances.len(),
            links = data.links.len(),
            "visualize pipeline complete"
        );

        Ok(NetworkView { data, dot, distances })
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory network for testing and embedding.
impl Network<MemoryStore> {
    pub fn open_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

/// Everything one visualize call produces: the renderer dataset, the DOT
/// text, and the distance map they were both derived from. Ephemeral,
/// rebuilt fresh on every call.
#[derive(Debug, Clone)]
pub struct NetworkView {
    pub data: VisualizationData,
    pub dot: String,
    pub distances: DistanceMap,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("person name must not be empty")]
    EmptyName,

    #[error("a relationship needs two distinct people")]
    SelfRelationship,

    #[error("person not found: {0}")]
    PersonNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
