//! Graphviz DOT export: serialize the bounded subgraph as DOT text.
//!
//! Produces an undirected `graph` description that any Graphviz-compatible
//! viewer can render, with per-node styling derived from hop distance.
//!
//! ```text
//! store snapshot + DistanceMap → render_dot() → "graph NetworkGraph { ... }"
//!   → display verbatim, copy to clipboard, or pipe into `dot -Tsvg`
//! ```
//!
//! Output is deterministic: people and relationships are processed in
//! their given order and edge dedup uses a stable first-seen rule, so the
//! same inputs always yield a byte-identical string.

use std::collections::HashSet;
use std::io::Write;

use crate::engine::DistanceMap;
use crate::model::{Person, Relationship};
use crate::Result;

/// Render the bounded subgraph as a DOT `graph` description.
///
/// People absent from `distances` are omitted entirely. Edges are emitted
/// once per unordered endpoint pair, and only when both endpoints lie
/// inside the distance boundary.
pub fn render_dot(
    people: &[Person],
    distances: &DistanceMap,
    relationships: &[Relationship],
) -> String {
    let mut lines: Vec<String> = vec!["graph NetworkGraph {".to_string()];
    lines.push("  rankdir=LR;".to_string());
    lines.push("  node [shape=circle, style=filled];".to_string());
    lines.push(String::new());

    for person in people {
        let Some(&distance) = distances.get(&person.id) else {
            continue;
        };
        let (label, style) = node_decoration(&person.name, distance);
        lines.push(format!("  \"{}\" [label=\"{}\", {}];", person.id, label, style));
    }

    lines.push(String::new());

    // First-seen wins: A-B vs B-A and exact duplicates collapse to one
    // edge declaration.
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for rel in relationships {
        if !distances.contains_key(&rel.from) || !distances.contains_key(&rel.to) {
            continue;
        }
        if seen.insert(edge_key(rel)) {
            lines.push(format!("  \"{}\" -- \"{}\";", rel.from, rel.to));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Stream the DOT rendering to a writer (file, stdout, a clipboard pipe).
pub fn export_dot(
    writer: &mut dyn Write,
    people: &[Person],
    distances: &DistanceMap,
    relationships: &[Relationship],
) -> Result<()> {
    writeln!(writer, "{}", render_dot(people, distances, relationships))?;
    Ok(())
}

/// Label and style attributes for a node at the given hop distance.
///
/// The distance map never records anything past hop 2, so the catch-all
/// arm is the critical-alert styling.
fn node_decoration(name: &str, distance: u32) -> (String, &'static str) {
    match distance {
        0 => (format!("{name} (INDEX)"), "fillcolor=lightblue"),
        1 => (format!("{name} (D1)"), "fillcolor=yellow"),
        _ => (
            format!("{name} (⚠ CRITICAL ALERT D2 ⚠)"),
            "fillcolor=red, fontcolor=white, penwidth=3",
        ),
    }
}

/// Canonical unordered edge key: the endpoint ids, lexicographically
/// sorted.
fn edge_key(rel: &Relationship) -> (String, String) {
    let (a, b) = (rel.from.as_str(), rel.to.as_str());
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
