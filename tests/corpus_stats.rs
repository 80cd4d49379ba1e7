//! Integration tests for corpus statistics over on-disk split files.

use std::fs;

use fumble::corpus::encoder::ByteEncoder;
use fumble::corpus::loader::load_parallel;
use fumble::corpus::stats::{compute_raw_stats, corpus_report};
use fumble::error::Result;
use tempfile::TempDir;

fn write_split(dir: &TempDir, split: &str, nl: &str, sql: &str) {
    fs::write(dir.path().join(format!("{split}.nl")), nl).unwrap();
    fs::write(dir.path().join(format!("{split}.sql")), sql).unwrap();
}

#[test]
fn test_raw_stats_from_files() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_split(
        &dir,
        "train",
        "list flights from denver\nflights to boston\n",
        "SELECT DISTINCT flight_1.flight_id FROM flight flight_1\nSELECT 1\n",
    );

    let corpus = load_parallel(dir.path().join("train.nl"), dir.path().join("train.sql"))?;
    let stats = compute_raw_stats(&corpus);

    assert_eq!(stats.num_examples, 2);
    assert_eq!(stats.mean_nl_length, 3.5);
    assert_eq!(stats.mean_sql_length, 4.0);
    assert_eq!(stats.nl_vocab_size, 6);
    assert_eq!(stats.sql_vocab_size, 7);
    Ok(())
}

#[test]
fn test_report_skips_missing_split() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_split(&dir, "train", "a b\nc\n", "x\ny z\n");
    fs::write(dir.path().join("dev.nl"), "only nl\n").unwrap();

    let splits = vec!["train".to_string(), "dev".to_string()];
    let report = corpus_report(dir.path(), &splits, &ByteEncoder::new())?;

    assert_eq!(report.splits.len(), 1);
    assert_eq!(report.splits[0].split, "train");
    assert_eq!(report.missing, vec!["dev".to_string()]);
    assert_eq!(report.encoder, "bytes");

    let train = &report.splits[0];
    assert_eq!(train.raw.num_examples, 2);
    assert_eq!(train.raw.mean_nl_length, 1.5);
    // "a b" is 3 bytes, "c" is 1
    assert_eq!(train.tokenized.mean_nl_length, 2.0);
    // a, ' ', b, c
    assert_eq!(train.tokenized.nl_vocab_size, 4);
    Ok(())
}

#[test]
fn test_report_serializes() -> Result<()> {
    let dir = TempDir::new().unwrap();
    write_split(&dir, "dev", "hi\n", "SELECT\n");

    let report = corpus_report(dir.path(), &["dev".to_string()], &ByteEncoder::new())?;
    let value = serde_json::to_value(&report)?;
    assert_eq!(value["splits"][0]["raw"]["num_examples"], 1);
    assert_eq!(value["splits"][0]["tokenized"]["sql_vocab_size"], 5);
    Ok(())
}
