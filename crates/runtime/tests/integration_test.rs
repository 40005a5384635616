//! End-to-end evaluation against the shipped content.

use std::path::PathBuf;

use contest_content::ConfigOverrides;
use contest_core::{
    AppealId, ContestConfig, ErrorSeverity, GambitId, JudgeId, MonsterId, NatureId, StageId,
    StatVector,
};
use contest_runtime::{ContentOracleFactory, Runtime, RuntimeError};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}

fn runtime() -> Runtime {
    Runtime::from_content(&ContentOracleFactory::new(data_dir()))
        .expect("shipped content should load")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| item.to_string()).collect())
}

#[test]
fn default_config_matches_shipped_config_file() {
    let runtime = runtime();
    let default = runtime.default_config().unwrap();
    assert_eq!(default, ContestConfig::new("fenrir_adult"));

    let file = ContentOracleFactory::new(data_dir()).load_defaults().unwrap();
    assert_eq!(runtime.resolve(&file).unwrap(), default);
}

#[test]
fn fenrir_default_selection() {
    let runtime = runtime();
    let config = runtime.default_config().unwrap();
    let evaluation = runtime.evaluate(&config).unwrap();

    assert_eq!(evaluation.monster.template.name, "Fenrir");
    assert_eq!(evaluation.final_stats(), StatVector::new(48, 42, 56, 54));
    assert_eq!(
        evaluation.appeal.appeal.as_ref().map(|appeal| appeal.id),
        Some(AppealId::CoolHowl)
    );

    let totals: Vec<f64> = evaluation.sheet.stages.iter().map(|s| s.total).collect();
    assert_eq!(totals.len(), 3);
    assert_close(totals[0], 238.8);
    assert_close(totals[1], 258.6);
    assert_close(totals[2], 246.36);
    assert_close(evaluation.sheet.grand_total, 743.76);
    assert_close(evaluation.average(), 247.92);
}

#[test]
fn appeal_uses_raise_the_average() {
    let runtime = runtime();
    let config = runtime.default_config().unwrap().with_appeal_uses(2);
    let evaluation = runtime.evaluate(&config).unwrap();

    assert_eq!(evaluation.final_stats(), StatVector::new(48, 42, 73, 81));
    assert_close(evaluation.average(), 306.675);
}

#[test]
fn full_selection_through_overrides() {
    let runtime = runtime();
    let overrides = ConfigOverrides {
        nature: Some("daring".into()),
        gambits: strings(&["wild_show", "stage_finale", "none"]),
        stages: strings(&["wild_show_stage", "spooky_cute_stage", "standard"]),
        appeal_uses: Some(1),
        ..Default::default()
    };

    let config = runtime.resolve(&overrides).unwrap();
    assert_eq!(config.nature, NatureId::Daring);
    assert_eq!(
        config.gambits,
        [
            Some(GambitId::WildShow),
            Some(GambitId::StageFinale),
            Some(GambitId::NoGambit)
        ]
    );
    assert_eq!(config.judges[0], Some(JudgeId::CuteFocus));

    let evaluation = runtime.evaluate(&config).unwrap();
    assert_eq!(evaluation.stats.effective, StatVector::new(43, 42, 56, 59));
    assert_eq!(evaluation.stats.after_gambits, StatVector::new(47, 42, 57, 78));
    assert_eq!(evaluation.final_stats(), StatVector::new(47, 42, 66, 98));

    let totals: Vec<f64> = evaluation.sheet.stages.iter().map(|s| s.total).collect();
    assert_close(totals[0], 332.94);
    assert_close(totals[1], 323.61);
    assert_close(totals[2], 312.0);
    assert_close(evaluation.average(), 322.85);
}

#[test]
fn unknown_ids_are_skipped() {
    let runtime = runtime();
    let overrides = ConfigOverrides {
        stages: strings(&["", "moon_stage", "standard"]),
        judges: strings(&["grumpy", "wild_focus"]),
        ..Default::default()
    };
    let evaluation = runtime.evaluate_overrides(&overrides).unwrap();

    assert_eq!(evaluation.sheet.valid_stage_count(), 1);
    let stage = &evaluation.sheet.stages[0];
    assert_eq!(stage.slot, 2);
    assert_eq!(stage.stage, StageId::Standard);
    assert_eq!(stage.judges.len(), 1);
    // 48 × 0.3 + 54 × 1.0
    assert_close(stage.total, 68.4);
    assert_close(evaluation.average(), 68.4);
}

#[test]
fn unknown_monster_is_reported() {
    let runtime = runtime();
    let err = runtime
        .evaluate(&ContestConfig::new("nessie"))
        .unwrap_err();

    assert!(matches!(err, RuntimeError::Evaluate(_)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
}

#[test]
fn roster_lists_every_monster() {
    let runtime = runtime();
    let roster = runtime.oracles().roster();
    assert_eq!(roster.len(), 25);
    assert_eq!(
        roster.first().map(|monster| monster.id.clone()),
        Some(MonsterId::from("fenrir_adult"))
    );
}
