//! Phrasematch demonstration CLI
//!
//! ## Usage
//!
//! ```bash
//! # built-in demonstration
//! phrasematch
//!
//! # match stdin lines against reference sentences
//! echo "do you also love trees? i do." | phrasematch --json "I love trees" "banana"
//! ```
//!
//! Prints one registration index per input line, `-1` when nothing matched.

use std::io::{self, BufWriter, Write};

use phrasematch::run::{run_demo, run_queries};
use phrasematch::CliConfig;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    phrasematch::tracing::init();

    let config = CliConfig::from_env(std::env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if config.sentences.is_empty() {
        run_demo(&mut out)?;
    } else {
        let matched = run_queries(&config, io::stdin().lock(), &mut out)?;
        info!(matched, "done");
    }

    out.flush()?;
    Ok(())
}
