//! Edge cases: duplicate records, dangling ids, degenerate inputs.

use proximity_rs::{
    Network, NetworkStore, Person, PersonId, Relationship, compute_distances, project, render_dot,
};

fn person(id: &str, name: &str) -> Person {
    Person::new(id.into(), name)
}

fn rel(a: &str, b: &str) -> Relationship {
    Relationship::new(a.into(), b.into())
}

// ============================================================================
// 1. Duplicate records: projector keeps both, serializer emits one
// ============================================================================

#[test]
fn test_duplicate_edge_projected_twice_but_serialized_once() {
    let people = vec![person("a", "Ana"), person("b", "Bia")];
    let rels = vec![rel("a", "b"), rel("a", "b")];
    let distances = compute_distances(&PersonId::from("a"), &rels);

    let data = project(&people, &rels, &distances);
    assert_eq!(data.links.len(), 2);

    let dot = render_dot(&people, &distances, &rels);
    assert_eq!(dot.lines().filter(|l| l.contains("--")).count(), 1);
}

// ============================================================================
// 2. Dangling relationship ids never reach any output
// ============================================================================

#[test]
fn test_dangling_ids_are_silently_tolerated() {
    // "ghost" has a relationship record but no Person behind it. It IS
    // reachable by BFS (the engine treats ids as opaque), but without a
    // Person it cannot appear among projected nodes, and no node
    // declaration is emitted for it.
    let people = vec![person("a", "Ana"), person("b", "Bia")];
    let rels = vec![rel("a", "b"), rel("b", "ghost")];
    let distances = compute_distances(&PersonId::from("a"), &rels);

    assert_eq!(distances.get(&PersonId::from("ghost")), Some(&2));

    let data = project(&people, &rels, &distances);
    assert_eq!(data.nodes.len(), 2);

    let dot = render_dot(&people, &distances, &rels);
    assert!(!dot.contains("[label=\"ghost"));
}

// ============================================================================
// 3. Origin absent from every relationship
// ============================================================================

#[test]
fn test_origin_absent_from_all_relationships() {
    let rels = vec![rel("x", "y")];
    let distances = compute_distances(&PersonId::from("a"), &rels);

    assert_eq!(distances.len(), 1);
    assert_eq!(distances.get(&PersonId::from("a")), Some(&0));
}

// ============================================================================
// 4. Store validation errors leave the store untouched
// ============================================================================

#[test]
fn test_rejected_mutations_do_not_dirty_the_store() {
    let network = Network::open_memory();
    let ana = network.add_person("Ana").unwrap();

    assert!(network.add_person("   ").is_err());
    assert!(network.add_relationship(&ana, &ana).is_err());
    assert!(network.add_relationship(&ana, &PersonId::random()).is_err());

    assert_eq!(network.store().person_count(), 1);
    assert_eq!(network.store().relationship_count(), 0);

    let view = network.visualize(&ana).unwrap();
    assert_eq!(view.data.nodes.len(), 1);
}

// ============================================================================
// 5. Dense cycle stays within the cap and terminates
// ============================================================================

#[test]
fn test_cycle_through_network_handle() {
    let network = Network::open_memory();
    let ids: Vec<_> = ["Ana", "Bia", "Caio", "Duda", "Edu"]
        .iter()
        .map(|name| network.add_person(name).unwrap())
        .collect();

    // Five-person ring: from Ana the two neighbors land at 1, the far
    // side of the ring is reached from both directions at 2.
    for i in 0..ids.len() {
        network
            .add_relationship(&ids[i], &ids[(i + 1) % ids.len()])
            .unwrap();
    }

    let view = network.visualize(&ids[0]).unwrap();
    assert_eq!(view.distances.len(), 5);
    assert_eq!(view.distances.get(&ids[0]), Some(&0));
    assert_eq!(view.distances.get(&ids[1]), Some(&1));
    assert_eq!(view.distances.get(&ids[4]), Some(&1));
    assert_eq!(view.distances.get(&ids[2]), Some(&2));
    assert_eq!(view.distances.get(&ids[3]), Some(&2));

    // Ring edges between two distance-2 frontier nodes are kept.
    assert_eq!(view.data.links.len(), 5);
}
