//! Projection of the bounded subgraph into a render-ready dataset.
//!
//! The output is exactly what an external force-directed layout consumes:
//! a node list carrying distance classification and a link list whose
//! endpoints are guaranteed to be present among the nodes. Positions,
//! colors-as-drawn, and drag interaction are the renderer's problem.

use serde::{Deserialize, Serialize};

use crate::engine::{DistanceMap, MAX_HOPS};
use crate::model::{Person, PersonId, Relationship};

/// A node handed to the force-directed renderer.
///
/// Serializes with the camelCase field names the JS layout expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: PersonId,
    pub name: String,
    pub distance: u32,
    pub is_critical: bool,
}

/// An undirected link between two projected nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: PersonId,
    pub target: PersonId,
}

/// The dataset consumed by the external force-directed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Derive the render dataset from a store snapshot and a distance map.
///
/// Nodes are exactly the people keyed in `distances`, in `people` order.
/// Links are every relationship record whose both endpoints lie inside
/// the distance boundary; frontier-to-frontier edges stay, edges reaching
/// outside the boundary are dropped.
pub fn project(
    people: &[Person],
    relationships: &[Relationship],
    distances: &DistanceMap,
) -> VisualizationData {
    let nodes: Vec<GraphNode> = people
        .iter()
        .filter_map(|p| {
            distances.get(&p.id).map(|&distance| GraphNode {
                id: p.id.clone(),
                name: p.name.clone(),
                distance,
                is_critical: distance == MAX_HOPS,
            })
        })
        .collect();

    // Duplicate relationship records intentionally survive projection.
    // Only the DOT serializer collapses symmetric pairs.
    let links: Vec<GraphLink> = relationships
        .iter()
        .filter(|rel| distances.contains_key(&rel.from) && distances.contains_key(&rel.to))
        .map(|rel| GraphLink {
            source: rel.from.clone(),
            target: rel.to.clone(),
        })
        .collect();

    VisualizationData { nodes, links }
}

/// Fill color for a node at the given hop distance, for renderer legends.
pub fn node_color(distance: u32) -> &'static str {
    match distance {
        0 => "lightblue",
        1 => "yellow",
        2 => "red",
        _ => "gray",
    }
}

/// Short badge text for a node at the given hop distance.
pub fn node_badge(distance: u32) -> String {
    match distance {
        0 => "INDEX".to_string(),
        2 => "⚠ D2 ALERT".to_string(),
        d => format!("D{d}"),
    }
}
