use std::{thread, time::Instant};

use itertools::Itertools;
use tracing::{debug, info};

use crate::{
    allocator::WorkAllocator,
    attack::DictionaryVerifier,
    ctx::AttackCtx,
    dictionary::Dictionary,
    error::{ThreadHashError, ThreadHashResult},
    sink::SharedSink,
    stats::{RunSummary, StatsAggregator},
    verify::Verifier,
    worker::Worker,
};

/// Runs a fixed pool of workers over a list of hashes.
pub struct PoolSupervisor {
    ctx: AttackCtx,
}

impl PoolSupervisor {
    pub fn new(ctx: AttackCtx) -> Self {
        Self { ctx }
    }

    /// Attacks every record with the dictionary, using one OS thread per worker.
    /// Result lines go to `output`, worker and pool summaries to `diagnostics`.
    /// Blocks until every worker is done.
    pub fn run<V: Verifier>(
        &self,
        records: &[String],
        dictionary: &Dictionary,
        verifier: &V,
        output: SharedSink,
        diagnostics: SharedSink,
    ) -> ThreadHashResult<RunSummary> {
        let thread_count = self.ctx.thread_count.get();
        let allocator = WorkAllocator::new(records.len());
        let aggregator = StatsAggregator::new(diagnostics);

        info!(
            "attacking {} hashes with {} words on {thread_count} threads",
            records.len(),
            dictionary.len()
        );

        let start = Instant::now();

        thread::scope(|s| -> ThreadHashResult<()> {
            let mut handles = Vec::with_capacity(thread_count);

            for id in 0..thread_count {
                let attacker = DictionaryVerifier::new(dictionary, verifier, &output);
                let worker = Worker::new(id, records, &allocator, attacker, &aggregator);

                // the workers already started are joined when the scope ends
                let handle = thread::Builder::new()
                    .name(format!("worker-{id}"))
                    .spawn_scoped(s, move || worker.run())?;

                handles.push((id, handle));
            }

            let panicked = handles
                .into_iter()
                .filter_map(|(id, handle)| match handle.join() {
                    Ok(report) => {
                        debug!("worker {id} done in {:?}", report.elapsed);
                        None
                    }
                    Err(_) => Some(id),
                })
                .collect_vec();

            match panicked.first() {
                Some(id) => Err(ThreadHashError::WorkerPanicked(*id)),
                None => Ok(()),
            }
        })?;

        let (totals, diagnostics) = aggregator.into_parts();
        let summary = RunSummary {
            thread_count,
            elapsed: start.elapsed(),
            records: records.len(),
            totals,
        };

        diagnostics.write_line(format_args!("{summary}"))?;

        Ok(summary)
    }
}
