use anyhow::{Context, Result};
use std::io::BufRead;

/// Where the score strings for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Args,
    Config,
    Stdin,
}

/// Read one score string per line, skipping blank lines and `#` comments.
pub fn read_score_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut scores = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read score strings from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        scores.push(line.to_string());
    }
    Ok(scores)
}

/// Pick the score strings for a run: arguments first, then config, then
/// `stdin` if one is given. An empty result means no input was found.
pub fn resolve_scores<R: BufRead>(
    args: Vec<String>,
    config_scores: &[String],
    stdin: Option<R>,
) -> Result<(Vec<String>, ScoreSource)> {
    if !args.is_empty() {
        return Ok((args, ScoreSource::Args));
    }
    if !config_scores.is_empty() {
        return Ok((config_scores.to_vec(), ScoreSource::Config));
    }
    match stdin {
        Some(reader) => Ok((read_score_lines(reader)?, ScoreSource::Stdin)),
        None => Ok((Vec::new(), ScoreSource::Stdin)),
    }
}
