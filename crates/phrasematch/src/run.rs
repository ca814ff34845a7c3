//! Demonstration and line-by-line matching

use std::io::{BufRead, Write};

use phrasematch_core::{FuzzyMatcher, Matcher};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::Result;

/// One JSON output line
#[derive(Debug, Serialize)]
pub struct MatchRecord<'a> {
    pub input: &'a str,
    pub index: isize,
    /// The reference sentence as it was handed in, when one matched
    pub sentence: Option<&'a str>,
}

/// Register "bananen lekker" and show which queries match it
pub fn run_demo(out: &mut impl Write) -> Result<()> {
    let mut matcher = FuzzyMatcher::new(Matcher::new(["bananen lekker"])?);

    writeln!(out, "should match")?;
    for query in [
        "bananen lekker",
        "bananen lekkere",
        "ik vind bananen erg lekker",
    ] {
        writeln!(out, "{}", matcher.match_index(query))?;
    }

    writeln!(out, "should not match")?;
    for query in [
        "bananen",
        "lekker",
        "bananen zijn vies",
        "compleet andere string",
    ] {
        writeln!(out, "{}", matcher.match_index(query))?;
    }

    Ok(())
}

/// Match every line of `input` against the configured sentences.
///
/// Returns the number of lines that matched.
pub fn run_queries(config: &CliConfig, input: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let matcher = Matcher::with_config(&config.sentences, config.matcher_config())?;
    info!(
        sentences = matcher.len(),
        dropped = matcher.dropped().len(),
        fingerprint = %matcher.fingerprint(),
        "reference sentences compiled"
    );
    if config.stats {
        eprintln!("{}", serde_json::to_string(&matcher.stats())?);
    }

    let mut scratch = matcher.scratch();
    let mut matched = 0;

    for line in input.lines() {
        let line = line?;
        let found = matcher.find(&line, &mut scratch);
        let index = phrasematch_core::to_index(found);
        debug!(input = %line, index, "matched line");
        if found.is_some() {
            matched += 1;
        }

        if config.json {
            let sentence = found
                .and_then(|registration| matcher.input_position(registration))
                .map(|position| config.sentences[position].as_str());
            let record = MatchRecord {
                input: &line,
                index,
                sentence,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{index}")?;
        }
    }

    Ok(matched)
}
