//! End-to-end tests for CLI commands writing to temporary files.

use std::fs;

use clap::Parser;
use fumble::augment::config::TypoConfig;
use fumble::augment::typo::Perturber;
use fumble::cli::args::FumbleArgs;
use fumble::cli::commands::execute_command;
use fumble::error::Result;
use tempfile::TempDir;

fn run(argv: &[&str]) -> Result<()> {
    let mut full = vec!["fumble", "-q", "-f", "json"];
    full.extend_from_slice(argv);
    execute_command(FumbleArgs::try_parse_from(full).unwrap())
}

#[test]
fn test_augment_text_file_matches_library() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    let lines = ["The plot was thin", "", "but   the acting\tsaved it"];
    fs::write(&input, lines.join("\n")).unwrap();

    run(&[
        "augment",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--word-probability",
        "0.7",
        "--char-probability",
        "0.5",
        "--seed",
        "21",
    ])?;

    let written = fs::read_to_string(&output).unwrap();
    let mut perturber = Perturber::seeded(TypoConfig::new(0.7, 0.5).unwrap(), 21);
    let expected: Vec<String> = lines.iter().map(|l| perturber.perturb(l)).collect();
    assert_eq!(written.lines().collect::<Vec<_>>(), expected);
    Ok(())
}

#[test]
fn test_augment_jsonl_with_lowercase() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.jsonl");
    let output = dir.path().join("out.jsonl");
    fs::write(
        &input,
        "{\"text\": \"LOUD Review\", \"label\": 1}\n{\"text\": \"Quiet one\", \"label\": 0}\n",
    )
    .unwrap();

    run(&[
        "augment",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--input-format",
        "jsonl",
        "--lowercase",
        "--word-probability",
        "0",
    ])?;

    let written = fs::read_to_string(&output).unwrap();
    let records: Vec<serde_json::Value> = written
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records[0]["text"], "loud review");
    assert_eq!(records[0]["label"], 1);
    assert_eq!(records[1]["text"], "quiet one");
    Ok(())
}

#[test]
fn test_augment_rejects_bad_probability() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "x\n").unwrap();

    let result = run(&["augment", input.to_str().unwrap(), "--word-probability", "1.5"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_data_and_checkpoints_are_not_errors() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    run(&["stats", "--data-dir", root])?;
    run(&["checkpoints", "--root", root])?;
    run(&["resume", "--root", root, "--experiment-name", "nothing"])?;
    run(&["resume", "--root", root, "--list-checkpoints"])?;
    Ok(())
}
