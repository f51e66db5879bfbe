use std::fs::File;

use anyhow::{Context, Result};
use thread_hash_core::{AttackCtxBuilder, CryptVerifier, Dictionary, PoolSupervisor, SharedSink};
use tracing::{debug, info};

use crate::{input::read_passwords, priority::lower_priority, Cli};

pub fn attack(cli: Cli) -> Result<()> {
    let ctx = AttackCtxBuilder::new()
        .thread_count(cli.threads)
        .build()?;

    debug!("input file: {}", cli.input.display());
    debug!("dictionary file: {}", cli.dictionary.display());

    if cli.nice {
        lower_priority()?;
    }

    let passwords = read_passwords(&cli.input)?;
    let dictionary = Dictionary::open(&cli.dictionary)?;
    debug!(
        "{} hashes and {} words loaded",
        passwords.len(),
        dictionary.len()
    );

    let output = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not open output file {}", path.display()))?;
            SharedSink::new(Box::new(file))
        }
        None => SharedSink::stdout(),
    };

    let summary = PoolSupervisor::new(ctx).run(
        &passwords,
        &dictionary,
        &CryptVerifier::new(),
        output,
        SharedSink::stderr(),
    )?;

    info!(
        "{} of {} hashes cracked",
        summary.totals.processed - summary.totals.failed,
        summary.records
    );

    Ok(())
}
