#![allow(dead_code)]

use std::path::Path;

use geo_quiz::{Atlas, QuizConfig, Sources};

pub const GEOMETRY: &str = r##"[
    {"id": "pt", "name": "Portugal", "styleColor": "#0a0", "pathData": "M10,10Z", "classification": "Europe"},
    {"id": "es", "name": "Spain", "styleColor": "#aa0", "pathData": "M11,10Z", "classification": "Europe"},
    {"id": "fr", "name": "France", "styleColor": "#00a", "pathData": "M12,9Z", "classification": "Europe"},
    {"id": "de", "name": "Germany", "styleColor": "#333", "pathData": "M13,8Z", "classification": "Europe"},
    {"id": "be", "name": "Belgium", "styleColor": "#ff0", "pathData": "M12,8Z", "classification": "Europe"},
    {"id": "nl", "name": "Netherlands", "styleColor": "#f80", "pathData": "M12,7Z", "classification": "Europe"},
    {"id": "it", "name": "Italy", "styleColor": "#0f0", "pathData": "M13,10Z", "classification": "Europe"},
    {"id": "pl", "name": "Poland", "styleColor": "#f00", "pathData": "M14,8Z", "classification": "Europe"},
    {"id": "gb", "name": "United Kingdom", "styleColor": "#008", "pathData": "M11,7Z", "classification": "Europe"},
    {"id": "jp1", "name": "Japan", "styleColor": "#fff", "pathData": "M30,10Z", "classification": "Asia"},
    {"id": "jp2", "name": "Japan", "styleColor": "#fff", "pathData": "M31,11Z", "classification": "Asia"},
    {"id": "ca", "name": "Canada", "styleColor": "#f00", "pathData": "M2,5Z", "classification": "North America"},
    {"id": "us", "name": "United States", "styleColor": "#00f", "pathData": "M2,7Z", "classification": "North America"},
    {"id": "mx", "name": "Mexico", "styleColor": "#0a0", "pathData": "M2,9Z", "classification": "North America"},
    {"id": "eg", "name": "Egypt", "styleColor": "#cc0", "pathData": "M15,12Z", "classification": "Africa"},
    {"id": "ly", "name": "Libya", "styleColor": "#0c0", "pathData": "M14,12Z", "classification": "Africa"}
]"##;

pub const ADJACENCY: &str = r#"{"adjacency": {
    "Portugal": ["Spain"],
    "Spain": ["France"],
    "France": ["Belgium", "Germany", "Italy"],
    "Germany": ["Netherlands", "Poland", "Belgium"],
    "Belgium": ["Netherlands"],
    "Canada": ["United States"],
    "United States": ["Mexico"],
    "Egypt": ["Libya"],
    "United Kingdom": [],
    "Japan": []
}}"#;

pub const REGIONS: &str = r#"{"regions": {
    "Europe": ["Portugal", "Spain", "France", "Germany", "Belgium", "Netherlands", "Italy", "Poland", "United Kingdom"],
    "America": ["canada", "United States", "Mexico"],
    "Africa": ["Egypt", "Libya", "Wakanda"],
    "Asia": ["Japan"]
}}"#;

pub const PAIRS: &str = r#"{"validPairs": [
    {"start": "Portugal", "end": "Poland"},
    {"start": "Canada", "end": "Mexico"},
    {"start": "Atlantis", "end": "Spain"}
]}"#;

pub const PLACES: &str = r#"{"places": [
    {"name": "Eiffel Tower", "description": "Iron lattice tower", "image": "eiffel.jpg",
     "coordinates": {"latitude": 48.8584, "longitude": 2.2945}},
    {"name": "Statue of Liberty", "description": "Copper statue", "image": "liberty.jpg",
     "coordinates": {"latitude": 40.6892, "longitude": -74.0445}},
    {"name": "Null Island", "description": "Where the data goes to die", "image": "null.jpg",
     "coordinates": {"x": 1000.0, "y": 500.0}}
]}"#;

pub fn sources() -> Sources<'static> {
    Sources {
        geometry: GEOMETRY,
        adjacency: Some(ADJACENCY),
        regions: Some(REGIONS),
        pairs: Some(PAIRS),
        places: Some(PLACES),
    }
}

pub fn build_test_atlas() -> Atlas {
    build_test_atlas_with(QuizConfig::default())
}

pub fn build_test_atlas_with(config: QuizConfig) -> Atlas {
    let (atlas, report) = Atlas::from_sources(&sources(), config).unwrap();
    assert!(report.is_clean(), "fixture should load cleanly: {report:?}");
    atlas
}

/// Write the fixture files into `dir`, skipping any listed in `omit`.
pub fn write_data_dir(dir: &Path, omit: &[&str]) {
    let files = [
        ("countries.json", GEOMETRY),
        ("adjacency.json", ADJACENCY),
        ("regions.json", REGIONS),
        ("pairs.json", PAIRS),
        ("places.json", PLACES),
    ];
    for (name, contents) in files {
        if !omit.contains(&name) {
            std::fs::write(dir.join(name), contents).unwrap();
        }
    }
}
