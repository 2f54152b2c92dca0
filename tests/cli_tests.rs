//! End-to-end tests driving the compiled `symptom-checker` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("symptom-checker").expect("binary should build")
}

#[test]
fn test_diagnose_text_ranks_exact_match_first() {
    cmd()
        .args(["diagnose", "1", "2", "6", "11", "13"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1) COVID-like viral infection  | matched: 5  | approx fit: 100.0%",
        ))
        .stdout(predicate::str::contains(
            "NOTE: This program is educational and does NOT replace a doctor.",
        ));
}

#[test]
fn test_diagnose_without_ids_reports_no_selection() {
    cmd()
        .arg("diagnose")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have not selected any symptoms."));
}

#[test]
fn test_diagnose_json_no_matches_status() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00+00:00",
            "symptoms": [{"id": 1, "label": "Fever"}, {"id": 2, "label": "Itchy elbow"}],
            "conditions": [{"name": "Flu", "symptoms": [1], "advice": "Rest", "danger": "Breathing"}]
        }"#,
    )
    .unwrap();

    let output = cmd()
        .args(["--format", "json", "diagnose", "2", "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "no_matches");
    assert_eq!(json["selection"][0]["label"], "Itchy elbow");
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[test]
fn test_diagnose_json_results() {
    let output = cmd()
        .args(["-f", "json", "diagnose", "2", "5", "19", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "matches");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["condition"], "Common cold");
    assert_eq!(results[1]["condition"], "Flu (influenza)");
    assert_eq!(results[0]["matched_count"], 2);
}

#[test]
fn test_diagnose_rejects_zero_max_results() {
    cmd()
        .args(["-f", "json", "diagnose", "2", "-n", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--max-results"));
}

#[test]
fn test_diagnose_tsv() {
    cmd()
        .args(["--format", "tsv", "diagnose", "14"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank\tcondition\t"))
        .stdout(predicate::str::contains(
            "1\tDermatitis / skin reaction\t1\t2\t50.0\t",
        ));
}

#[test]
fn test_diagnose_unknown_id_fails() {
    cmd()
        .args(["diagnose", "2", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such symptom: 99"));
}

#[test]
fn test_diagnose_duplicate_id_is_ignored() {
    cmd()
        .args(["diagnose", "12", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1) Possible cardiac emergency  | matched: 1  | approx fit: 33.3%",
        ));
}

#[test]
fn test_catalog_symptoms_lists_all() {
    cmd()
        .args(["catalog", "symptoms"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1) Fever (high temperature)"))
        .stdout(predicate::str::contains("20) Eye redness/watery eyes"));
}

#[test]
fn test_catalog_show_and_missing_condition() {
    cmd()
        .args(["catalog", "show", "common cold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Condition: Common cold"))
        .stdout(predicate::str::contains("   2) Cough"));

    cmd()
        .args(["catalog", "show", "Gout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Condition 'Gout' not found"));
}

#[test]
fn test_catalog_export_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let exported = dir.path().join("exported.json");

    cmd()
        .args(["catalog", "export"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 20 symptoms and 8 conditions"));

    cmd()
        .args(["-f", "tsv", "catalog", "conditions", "--catalog"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Possible cardiac emergency\t3\t12,11,18\t"));
}

#[test]
fn test_invalid_catalog_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("broken.json");
    std::fs::write(
        &catalog,
        r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00+00:00",
            "symptoms": [{"id": 1, "label": "Fever"}],
            "conditions": [{"name": "Flu", "symptoms": [1, 7], "advice": "Rest", "danger": "x"}]
        }"#,
    )
    .unwrap();

    cmd()
        .args(["catalog", "conditions", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("references unknown symptom 7"));
}

#[test]
fn test_session_scripted() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.txt");

    cmd()
        .arg("session")
        .arg("--history")
        .arg(&history)
        .write_stdin("2\n4\n2\n20\n5\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1) Allergy (rhinitis/conjunctivitis)  | matched: 2  | approx fit: 66.7%",
        ))
        .stdout(predicate::str::contains("Saved to "))
        .stdout(predicate::str::ends_with("Bye!\n"));

    let contents = std::fs::read_to_string(&history).unwrap();
    assert!(contents.starts_with("---- "));
    assert!(contents.contains("Symptoms:\n - 4) Runny / stuffy nose\n - 20) Eye redness/watery eyes\n"));
}
