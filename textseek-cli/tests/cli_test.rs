use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use tempfile::{tempdir, TempDir};

fn create_test_files(dir: &TempDir, files: &[(&str, &str)]) -> Result<()> {
    for (name, content) in files {
        let file_path = dir.path().join(name);
        let mut file = File::create(file_path)?;
        writeln!(file, "{}", content)?;
    }
    Ok(())
}

fn textseek(dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("textseek")?;
    cmd.args(["-d", dir.path().to_str().unwrap()]);
    Ok(cmd)
}

#[test]
fn test_basic_search() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(
        &temp_dir,
        &[
            ("file1.txt", "Hello world\nTODO: Fix this\nGoodbye"),
            ("file2.txt", "Another TODO here\nSome text"),
            ("ignored.md", "TODO in markdown"),
        ],
    )?;

    textseek(&temp_dir)?
        .arg("TODO")
        .assert()
        .success()
        .stdout(predicate::str::contains("file1.txt"))
        .stdout(predicate::str::contains("TODO: Fix this"))
        .stdout(predicate::str::contains("Another TODO here"))
        .stdout(predicate::str::contains("ignored.md").not())
        .stdout(predicate::str::contains(
            "Found 2 matches in 2 documents (searched 2)",
        ));
    Ok(())
}

#[test]
fn test_ignore_case_and_word() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("cats.txt", "Catalog CAT cats cat")])?;

    textseek(&temp_dir)?
        .args(["cat", "-i", "-w", "--algorithm", "naive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matches in 1 documents"));

    textseek(&temp_dir)?
        .args(["cat", "-w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matches in 1 documents"));
    Ok(())
}

#[test]
fn test_stats_only() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("a.txt", "aaaa")])?;

    textseek(&temp_dir)?
        .args(["aa", "--stats", "--parallel", "-j", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 matches in 1 documents"))
        .stdout(predicate::str::contains("a.txt").not());
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("a.txt", "one\ntwo two")])?;

    let output = textseek(&temp_dir)?.args(["two", "--json"]).output()?;
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["document_id"], "a.txt");
    assert_eq!(records[0]["line"], 1);
    assert_eq!(records[0]["column"], 0);
    assert_eq!(records[1]["offset"], 8);
    Ok(())
}

#[test]
fn test_empty_pattern_fails() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("a.txt", "text")])?;

    textseek(&temp_dir)?
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search pattern must not be empty"));
    Ok(())
}

#[test]
fn test_unknown_algorithm_fails() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("a.txt", "text")])?;

    textseek(&temp_dir)?
        .args(["text", "--algorithm", "regex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
    Ok(())
}

#[test]
fn test_invalid_utf8_reports_document() -> Result<()> {
    let temp_dir = tempdir()?;
    std::fs::write(temp_dir.path().join("bad.txt"), [b'a', 0xff, b'a'])?;

    textseek(&temp_dir)?
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.txt"));

    textseek(&temp_dir)?
        .args(["a", "--encoding", "lossy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matches"));
    Ok(())
}

#[test]
fn test_no_documents_fails() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("a.md", "text")])?;

    textseek(&temp_dir)?
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No documents match"));
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("notes.md", "Cat cat")])?;
    let config_path = temp_dir.path().join("textseek.yaml");
    std::fs::write(
        &config_path,
        "pattern: \"cat\"\ncase_sensitive: false\nfile_pattern: \"*.md\"\n",
    )?;

    textseek(&temp_dir)?
        .args(["-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matches in 1 documents"));
    Ok(())
}

#[test]
fn test_cli_algorithm_overrides_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("notes.txt", "cat cat")])?;
    let config_path = temp_dir.path().join("textseek.yaml");
    std::fs::write(&config_path, "pattern: \"cat\"\nalgorithm: naive\n")?;

    textseek(&temp_dir)?
        .env_remove("RUST_LOG")
        .args(["-c", config_path.to_str().unwrap()])
        .args(["--log-level", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting naive search"));

    textseek(&temp_dir)?
        .env_remove("RUST_LOG")
        .args(["-c", config_path.to_str().unwrap(), "-a", "automaton"])
        .args(["--log-level", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting automaton search"))
        .stdout(predicate::str::contains("Found 2 matches in 1 documents"));
    Ok(())
}

#[test]
fn test_case_sensitive_overrides_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    create_test_files(&temp_dir, &[("notes.txt", "Cat cat")])?;
    let config_path = temp_dir.path().join("textseek.yaml");
    std::fs::write(&config_path, "pattern: \"cat\"\ncase_sensitive: false\n")?;

    textseek(&temp_dir)?
        .args(["-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matches in 1 documents"));

    textseek(&temp_dir)?
        .args(["-c", config_path.to_str().unwrap(), "--case-sensitive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matches in 1 documents"));
    Ok(())
}
