//! Cross-component invariants of the loaded atlas.

mod common;

use common::build_test_atlas;
use geo_quiz::{
    AdjacencyGraph, CoordinateProjector, CountryFragment, CountryRegistry, GeoPoint, PairCatalog,
    WORLD, haversine_km,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn adjacency_symmetric_for_every_recorded_edge() {
    let atlas = build_test_atlas();
    let raw: serde_json::Value = serde_json::from_str(common::ADJACENCY).unwrap();
    for (country, neighbors) in raw["adjacency"].as_object().unwrap() {
        for neighbor in neighbors.as_array().unwrap() {
            let neighbor = neighbor.as_str().unwrap();
            assert!(atlas.is_adjacent(country, neighbor));
            assert!(
                atlas.is_adjacent(neighbor, country),
                "{neighbor} -> {country} should hold"
            );
        }
    }
}

#[test]
fn one_way_record_reads_both_ways() {
    let graph = AdjacencyGraph::build(vec![(
        "France".to_string(),
        vec!["Germany".to_string(), "Spain".to_string()],
    )]);
    assert!(graph.is_adjacent("Germany", "France"));
}

#[test]
fn world_region_contains_every_country() {
    let mut atlas = build_test_atlas();
    assert!(atlas.regions.set_current_region(WORLD));
    let members = atlas.regions.members_of_current().to_vec();
    for name in atlas.registry.all_names() {
        assert!(members.iter().any(|m| m == name), "{name} not in World");
        assert!(atlas.regions.is_in_current_region(name));
    }
}

#[test]
fn alias_resolution_is_normalization_insensitive() {
    let atlas = build_test_atlas();
    let expected = atlas.registry.get_by_name("United States");
    assert!(expected.is_some());
    assert_eq!(atlas.resolve("usa"), expected);
    assert_eq!(atlas.resolve("UsA"), expected);
    assert_eq!(atlas.resolve(" usa "), expected);
}

#[test]
fn unknown_region_does_not_clear_named_set() {
    let mut atlas = build_test_atlas();
    assert!(atlas.regions.set_current_region("Europe"));
    atlas.regions.mark_named("France");
    assert!(!atlas.regions.set_current_region("Nonexistent"));
    assert!(atlas.regions.is_named("France"));
}

#[test]
fn duplicate_fragments_merge() {
    let registry = CountryRegistry::load(vec![
        CountryFragment::new("Japan", "M0Z", "Asia"),
        CountryFragment::new("Japan", "M1Z", "Asia"),
    ])
    .unwrap();
    assert_eq!(registry.get_by_name("Japan").unwrap().boundary_paths.len(), 2);
}

#[test]
fn projection_round_trip() {
    let projector = CoordinateProjector::new(4096.0, 2048.0);
    let mut rng = SmallRng::seed_from_u64(2718);
    for _ in 0..1000 {
        use rand::Rng;
        let geo = GeoPoint::new(rng.random_range(-88.99..88.99), rng.random_range(-179.99..179.99));
        let back = projector.to_coordinates(projector.to_point(geo));
        assert!((back.latitude - geo.latitude).abs() < 1e-6);
        assert!((back.longitude - geo.longitude).abs() < 1e-6);
    }
}

#[test]
fn haversine_one_degree() {
    let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
    assert!((d - 111.19).abs() < 1.1119, "got {d}");
}

#[test]
fn generated_pairs_follow_fallback_rule() {
    let atlas = build_test_atlas();
    let empty = PairCatalog::default();
    let mut rng = SmallRng::seed_from_u64(31337);
    for _ in 0..100 {
        let pair = empty
            .random_pair(&atlas.registry, &atlas.adjacency, 64, &mut rng)
            .unwrap();
        assert_ne!(pair.start, pair.end);
        let same_class = atlas.registry.classification_of(&pair.start)
            == atlas.registry.classification_of(&pair.end);
        assert!(
            atlas.is_adjacent(&pair.start, &pair.end) || same_class,
            "{pair:?} is neither adjacent nor same classification"
        );
    }
}
