//! Integration tests for the world graph.

use satchel_storage::homestead::{self, HALLWAY, KITCHEN, ROOM, STREET};
use satchel_storage::{Description, DescriptionKey, World};

// =============================================================================
// Homestead Topology
// =============================================================================

#[test]
fn homestead_has_fixed_locations() {
    let world = World::homestead().unwrap();
    assert_eq!(world.location_count(), 4);
    for name in [KITCHEN, ROOM, HALLWAY, STREET] {
        assert!(world.find_location(name).is_some(), "missing {name}");
    }
}

#[test]
fn hallway_is_the_hub() {
    let world = World::homestead().unwrap();
    let hallway = world.find_location(HALLWAY).unwrap();
    let neighbors: Vec<_> = world
        .location(hallway)
        .unwrap()
        .neighbors()
        .iter()
        .map(|&id| world.location(id).unwrap().name())
        .collect();

    assert_eq!(neighbors, vec![KITCHEN, ROOM, STREET]);
}

#[test]
fn street_only_reaches_hallway() {
    let world = World::homestead().unwrap();
    let street = world.find_location(STREET).unwrap();
    let hallway = world.find_location(HALLWAY).unwrap();

    assert_eq!(world.location(street).unwrap().neighbors(), &[hallway]);
}

#[test]
fn homestead_adjacency_is_symmetric() {
    let world = homestead::build().unwrap();
    for loc in world.locations() {
        for &other in loc.neighbors() {
            assert!(
                world.are_adjacent(other, loc.id()),
                "{} -> {} has no way back",
                loc.name(),
                world.location(other).unwrap().name()
            );
        }
    }
}

// =============================================================================
// Building Worlds
// =============================================================================

#[test]
fn connect_twice_adds_one_edge() {
    let mut world = World::new();
    let a = world.add_location("attic").unwrap();
    let b = world.add_location("stairs").unwrap();

    world.connect(a, b).unwrap();
    world.connect(a, b).unwrap();

    assert_eq!(world.location(a).unwrap().neighbors().len(), 1);
    assert_eq!(world.location(b).unwrap().neighbors().len(), 1);
}

#[test]
fn describe_all_sets_both_keys() {
    let mut world = World::new();
    let porch = world.add_location("porch").unwrap();
    world
        .describe_all(porch, &Description::fixed("a porch"))
        .unwrap();

    let loc = world.location(porch).unwrap();
    assert_eq!(
        loc.description(DescriptionKey::Look),
        loc.description(DescriptionKey::Arrival)
    );
}

#[test]
fn add_item_to_unknown_location_fails() {
    let mut world = World::new();
    let porch = world.add_location("porch").unwrap();
    let mut other = World::new();
    other.add_location("a").unwrap();
    let far = other.add_location("b").unwrap();

    assert!(world.add_item(far, "lamp").is_err());
    assert_eq!(world.item_count(), 0);
    assert!(world.location(porch).unwrap().items().is_empty());
}
