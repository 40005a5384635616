//! Report and catalog rendering against the shipped content.

use std::path::PathBuf;

use contest_client::{CatalogListing, CatalogSection, EvaluationReport};
use contest_runtime::{ContentOracleFactory, Runtime};

fn runtime() -> Runtime {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
    Runtime::from_content(&ContentOracleFactory::new(data_dir)).unwrap()
}

#[test]
fn report_shows_one_decimal_scores() {
    let runtime = runtime();
    let config = runtime.default_config().unwrap();
    let evaluation = runtime.evaluate(&config).unwrap();
    let report = EvaluationReport::new(&evaluation).to_string();

    assert!(report.starts_with("No.001 Fenrir (Star, Early phase, stamina 3)"));
    assert!(report.contains("Personality   Natural (no modifier)"));
    assert!(report.contains("Final stats   CT48 / ER42 / MJ56 / IP54"));
    assert!(report.contains("Cool Howl x0 (MJ×1.15 / IP×1.25 per use)"));
    assert!(report.contains("CT×1 + MJ×0.4"));
    assert!(report.contains("238.8"));
    assert!(report.contains("Grand total   743.8"));
    assert!(report.contains("Average       247.9 over 3 stage(s)"));
}

#[test]
fn report_marks_empty_slots() {
    let runtime = runtime();
    let mut config = runtime.default_config().unwrap();
    config.gambits = [None; 3];
    config.stages[1] = None;
    let evaluation = runtime.evaluate(&config).unwrap();
    let report = EvaluationReport::new(&evaluation).to_string();

    assert!(report.contains("    2. -"));
    assert!(report.contains("Stage 2: -"));
    assert!(report.contains("over 2 stage(s)"));
}

#[test]
fn catalog_groups_monsters_by_phase() {
    let runtime = runtime();
    let listing = CatalogListing::new(runtime.oracles(), CatalogSection::Monsters).to_string();

    let early = listing.find("Early phase").unwrap();
    let mid = listing.find("Mid phase").unwrap();
    let late = listing.find("Late phase").unwrap();
    assert!(early < mid && mid < late);
    assert!(listing.contains("No.001 Fenrir"));
    assert!(!listing.contains("Judges"));
}

#[test]
fn catalog_json_lists_only_the_section() {
    let runtime = runtime();
    let listing = CatalogListing::new(runtime.oracles(), CatalogSection::Judges);
    let json: serde_json::Value = serde_json::to_value(&listing).unwrap();

    let judges = json["judges"].as_array().unwrap();
    assert_eq!(judges.len(), 4);
    assert_eq!(judges[3]["id"], "dark_mystic");
    assert!(json.get("monsters").is_none());
}

#[test]
fn catalog_lists_personality_factors() {
    let runtime = runtime();
    let listing = CatalogListing::new(runtime.oracles(), CatalogSection::Personalities).to_string();

    assert!(listing.contains("natural"));
    assert!(listing.contains("CT×0.9 / IP×1.1"));
}
