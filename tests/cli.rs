use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `lareqa` running in an isolated directory with no config or data file
fn lareqa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lareqa").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("LAREQA_CONFIG")
        .env_remove("LAREQA_DATA")
        .env_remove("LAREQA_SERVER_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn ask_uses_sample_data_without_repository() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["ask", "What is artificial intelligence?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 3 relevant answers"))
        .stdout(predicate::str::contains("Similarity Score: 1.000"))
        .stdout(predicate::str::contains("Category: Technology"));
}

#[test]
fn ask_without_overlap_reports_nothing_found() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["ask", "zzz qqq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No relevant answers found"));
}

#[test]
fn ask_json_respects_top_k() {
    let dir = TempDir::new().unwrap();
    let output = lareqa(&dir)
        .args(["ask", "machine learning", "--top-k", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0]["similarity_score"].as_f64().unwrap() >= results[1]["similarity_score"].as_f64().unwrap());
}

#[test]
fn add_requires_a_data_file() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["add", "-l", "en", "-q", "Q?", "-a", "A."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lareqa init"));
}

#[test]
fn init_add_and_list() {
    let dir = TempDir::new().unwrap();

    lareqa(&dir).arg("init").assert().success();
    assert!(dir.path().join(".lareqa/knowledge_base.json").exists());
    assert!(dir.path().join(".lareqa/config.toml").exists());

    lareqa(&dir)
        .args([
            "add",
            "-l",
            "pt",
            "-q",
            "O que é inteligência artificial?",
            "-a",
            "Inteligência Artificial é a capacidade de máquinas de realizar tarefas.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 11"));

    lareqa(&dir)
        .args(["list", "--language", "pt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O que é inteligência artificial?"));

    lareqa(&dir)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_entries\": 11"));
}

#[test]
fn init_twice_needs_force() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).arg("init").assert().success();
    lareqa(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    lareqa(&dir).args(["init", "--force", "--empty"]).assert().success();

    lareqa(&dir)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_entries\": 0"));
}

#[test]
fn strict_add_rejects_unsupported_language() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).arg("init").assert().success();
    lareqa(&dir)
        .args(["add", "-l", "pt", "-q", "Q?", "-a", "A.", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).args(["save", "backup.json"]).assert().success();

    let raw = std::fs::read_to_string(dir.path().join("backup.json")).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 10);
    assert!(raw.contains("人工知能とは何ですか？"));

    lareqa(&dir)
        .args(["load", "backup.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 entries"));
}

#[test]
fn load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["load", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn demo_saves_eleven_entries() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["demo", "--output", "demo.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query: computer vision"));

    let raw = std::fs::read_to_string(dir.path().join("demo.json")).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 11);
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: 99"));
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).arg("init").assert().success();
    lareqa(&dir)
        .args(["config", "search.cli_top_k", "5"])
        .assert()
        .success();
    lareqa(&dir)
        .args(["config", "search.cli_top_k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));
}

#[test]
fn config_rejects_bad_value_without_breaking_later_commands() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).arg("init").assert().success();
    lareqa(&dir)
        .args(["config", "server.port", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));

    let config = std::fs::read_to_string(dir.path().join(".lareqa/config.toml")).unwrap();
    assert!(!config.contains("abc"));

    lareqa(&dir)
        .args(["ask", "machine learning benefits"])
        .assert()
        .success();
}

#[test]
fn config_edits_the_file_given_by_config_flag() {
    let dir = TempDir::new().unwrap();
    lareqa(&dir).arg("init").assert().success();
    lareqa(&dir)
        .args(["--config", "other.toml", "config", "server.port", "8080"])
        .assert()
        .success();

    let other = std::fs::read_to_string(dir.path().join("other.toml")).unwrap();
    assert!(other.contains("8080"));
    let local = std::fs::read_to_string(dir.path().join(".lareqa/config.toml")).unwrap();
    assert!(!local.contains("8080"));
}
