//! Integration tests for the spellcard CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use spellcard_test_utils::TestWorkspace;

/// Get a Command for the spellcard binary, run inside `ws`
fn spellcard_cmd(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spellcard"));
    cmd.current_dir(ws.root())
        .env_remove("SPELLCARD_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Config pointing the converter at a program that cannot exist.
fn write_offline_config(ws: &TestWorkspace) {
    ws.write_file(
        "spellcard.toml",
        "[converter]\nprogram = \"spellcard-no-such-converter\"\n",
    );
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    let ws = TestWorkspace::new();
    spellcard_cmd(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("spell card"));
}

#[test]
fn test_version_output() {
    let ws = TestWorkspace::new();
    spellcard_cmd(&ws)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spellcard"));
}

#[test]
fn test_completions_bash() {
    let ws = TestWorkspace::new();
    spellcard_cmd(&ws)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spellcard"));
}

// ============================================================================
// Generate
// ============================================================================

#[test]
fn test_generate_writes_card_and_reports_progress() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);

    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball", "Magic Missile"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/2] Processing Fireball..."))
        .stderr(predicate::str::contains("[2/2] Generation complete"))
        .stdout(predicate::str::contains("2 generated, 0 skipped"));

    let card = ws.read_card("wiz", "3", "Fireball");
    assert!(card.contains("\\begin{SpellCard}{wiz}{Fireball}{3}"));
    assert!(card.contains("  A fireball spell generates a searing explosion of flame.\n"));
}

#[test]
fn test_generate_reports_conflict() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);
    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball"])
        .assert()
        .success();

    let path = ws.card_path("wiz", "3", "Fireball");
    let edited = fs::read_to_string(&path).unwrap().replace(
        "\\SpellProp{duration}{instantaneous}",
        "\\SpellProp{duration}{1 round}% original: {concentration}",
    );
    fs::write(&path, edited).unwrap();

    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fireball: duration (DB: \"concentration\" -> \"instantaneous\")",
        ));
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("\\SpellProp{duration}{1 round}% original: {instantaneous}"));
}

#[test]
fn test_generate_json_report() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);
    ws.write_card("wiz", "1", "Magic Missile", "% hand written\n");

    let output = spellcard_cmd(&ws)
        .args(["generate", "wiz", "--all", "--no-overwrite", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["generated"].as_array().unwrap().len(), 2);
    assert_eq!(report["skipped"].as_array().unwrap().len(), 1);
    assert_eq!(report["conflicts"].as_array().unwrap().len(), 0);
    assert_eq!(report["outcomes"][1]["state"], "skipped");
    assert_eq!(
        fs::read_to_string(ws.card_path("wiz", "1", "Magic Missile")).unwrap(),
        "% hand written\n"
    );
}

#[test]
fn test_generate_unknown_class_fails() {
    let ws = TestWorkspace::with_sample_data();
    spellcard_cmd(&ws)
        .args(["generate", "witch", "Fireball"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown class: witch"));
}

#[test]
fn test_generate_missing_data_fails() {
    let ws = TestWorkspace::new();
    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load spell data"));
}

#[test]
fn test_generate_with_explicit_paths() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);
    fs::rename(ws.data_path(), ws.root().join("db.tsv")).unwrap();

    spellcard_cmd(&ws)
        .args([
            "generate",
            "cleric",
            "Cure Light Wounds",
            "--tsv",
            "db.tsv",
            "--output",
            "cards",
        ])
        .assert()
        .success();
    ws.assert_file_exists("cards/cleric/1/Cure Light Wounds.tex");
}

// ============================================================================
// Scan / Inspect
// ============================================================================

#[test]
fn test_scan_json_summary() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);
    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball", "--secondary"])
        .assert()
        .success();

    let output = spellcard_cmd(&ws)
        .args(["scan", "wiz", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["count"], 1);
    assert!(summary["analyses"]["Fireball"]["secondary_qr_enabled"]
        .as_bool()
        .unwrap());
}

#[test]
fn test_scan_empty_class() {
    let ws = TestWorkspace::with_sample_data();
    spellcard_cmd(&ws)
        .args(["scan", "druid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("None"));
}

#[test]
fn test_inspect_lists_manual_edits() {
    let ws = TestWorkspace::with_sample_data();
    ws.write_card(
        "wiz",
        "3",
        "Fireball",
        "%%% SPELL-CARD-VERSION: 2.1\n\\begin{SpellCard}{wiz}{Fireball}{3}\n  \\SpellProp{range}{far}% original: {long}\n\\end{SpellCard}\n",
    );

    spellcard_cmd(&ws)
        .args(["inspect", "src/spells/wiz/3/Fireball.tex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current"))
        .stdout(predicate::str::contains("1 with manual edits"))
        .stdout(predicate::str::contains("(DB: long)"));
}

#[test]
fn test_classes_lists_present_classes() {
    let ws = TestWorkspace::with_sample_data();
    spellcard_cmd(&ws)
        .arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wizard"))
        .stdout(predicate::str::contains("Cleric"))
        .stdout(predicate::str::contains("witch").not());
}

#[test]
fn test_init_writes_default_config() {
    let ws = TestWorkspace::with_sample_data();
    spellcard_cmd(&ws)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("spellcard.toml"));
    ws.assert_file_contains("spellcard.toml", "timeout_secs = 30");

    spellcard_cmd(&ws)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_generate_fresh_description_for_one_spell() {
    let ws = TestWorkspace::with_sample_data();
    write_offline_config(&ws);
    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball", "Magic Missile"])
        .assert()
        .success();

    for (level, name) in [("3", "Fireball"), ("1", "Magic Missile")] {
        let path = ws.card_path("wiz", level, name);
        let content = fs::read_to_string(&path).unwrap();
        let start = content.find("% SPELL DESCRIPTION BEGIN\n").unwrap() + "% SPELL DESCRIPTION BEGIN\n".len();
        let end = content.find("  % SPELL DESCRIPTION END").unwrap();
        let edited = format!("{}  Tuned by hand.\n{}", &content[..start], &content[end..]);
        fs::write(&path, edited).unwrap();
    }

    spellcard_cmd(&ws)
        .args([
            "generate",
            "wiz",
            "Fireball",
            "Magic Missile",
            "--fresh-description",
            "Magic Missile",
        ])
        .assert()
        .success();

    assert!(ws.read_card("wiz", "3", "Fireball").contains("  Tuned by hand.\n"));
    assert!(!ws.read_card("wiz", "1", "Magic Missile").contains("Tuned by hand."));
}

#[test]
fn test_fresh_description_needs_selected_spell() {
    let ws = TestWorkspace::with_sample_data();
    spellcard_cmd(&ws)
        .args(["generate", "wiz", "Fireball", "--fresh-description", "Wish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wish is not among the selected spells"));
}
