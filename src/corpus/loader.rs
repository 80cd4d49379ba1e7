//! Loading parallel NL/SQL line files.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::analysis::tokenizer::whitespace::is_word_separator;
use crate::error::Result;

/// Aligned natural-language and SQL lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParallelCorpus {
    pub nl: Vec<String>,
    pub sql: Vec<String>,
}

/// Read a file as trimmed lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(content
        .lines()
        .map(|line| line.trim_matches(is_word_separator).to_string())
        .collect())
}

/// Load an NL file and its SQL counterpart.
///
/// Line counts are not required to match; a mismatch is logged and both
/// sides are returned as read.
pub fn load_parallel<P: AsRef<Path>, Q: AsRef<Path>>(nl_path: P, sql_path: Q) -> Result<ParallelCorpus> {
    let nl = read_lines(nl_path.as_ref())?;
    let sql = read_lines(sql_path.as_ref())?;

    if nl.len() != sql.len() {
        log::warn!(
            "{} has {} lines but {} has {}",
            nl_path.as_ref().display(),
            nl.len(),
            sql_path.as_ref().display(),
            sql.len()
        );
    }
    log::debug!("loaded {} NL / {} SQL lines", nl.len(), sql.len());

    Ok(ParallelCorpus { nl, sql })
}
