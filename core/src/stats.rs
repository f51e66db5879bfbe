use std::{
    fmt::{self, Display},
    sync::{Mutex, PoisonError},
    time::Duration,
};

use tracing::error;

use crate::{
    algorithm::{AlgorithmCounts, AlgorithmTag},
    attack::CrackResult,
    sink::SharedSink,
};

/// Counters of a worker, or of the whole pool once merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// The number of hashes processed for each hash family.
    pub counts: AlgorithmCounts,
    /// The number of hashes processed.
    pub processed: usize,
    /// The number of hashes no dictionary word matched.
    pub failed: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one processed hash.
    pub fn record(&mut self, tag: AlgorithmTag, result: &CrackResult) {
        self.counts[tag] += 1;
        self.processed += 1;

        if !result.is_cracked() {
            self.failed += 1;
        }
    }

    /// Adds every counter of `other` to these stats.
    pub fn merge(&mut self, other: &Stats) {
        self.counts.merge(&other.counts);
        self.processed += other.processed;
        self.failed += other.failed;
    }
}

/// The per-family columns shared by the worker and pool summary lines.
struct Columns<'a>(&'a AlgorithmCounts);

impl Display for Columns<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, count) in self.0.iter() {
            write!(f, "{:>15}: {count:>5}  ", tag.name())?;
        }

        Ok(())
    }
}

/// What a worker did during its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerReport {
    pub id: usize,
    pub elapsed: Duration,
    pub stats: Stats,
}

impl Display for WorkerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread: {:>2} {:>8.2} sec  {}total: {:>8}  failed: {:>8}",
            self.id,
            self.elapsed.as_secs_f64(),
            Columns(&self.stats.counts),
            self.stats.processed,
            self.stats.failed
        )
    }
}

/// The merged results of a whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub thread_count: usize,
    pub elapsed: Duration,
    /// The number of records given to the pool.
    pub records: usize,
    pub totals: Stats,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total:  {:>2} {:>8.2} sec  {}total: {:>8}  failed: {:>8}",
            self.thread_count,
            self.elapsed.as_secs_f64(),
            Columns(&self.totals.counts),
            self.records,
            self.totals.failed
        )
    }
}

/// Merges the stats of the workers into global totals.
/// It also owns the diagnostic sink the workers write their summaries to.
#[derive(Debug)]
pub struct StatsAggregator {
    totals: Mutex<Stats>,
    diagnostics: SharedSink,
}

impl StatsAggregator {
    pub fn new(diagnostics: SharedSink) -> Self {
        Self {
            totals: Mutex::new(Stats::new()),
            diagnostics,
        }
    }

    /// Adds the stats of a worker to the totals.
    pub fn merge(&self, stats: &Stats) {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(stats);
    }

    /// Writes a line to the diagnostic sink.
    pub fn report_line(&self, line: impl Display) {
        if let Err(err) = self.diagnostics.write_line(format_args!("{line}")) {
            error!("unable to write to the diagnostic sink: {err}");
        }
    }

    /// Returns the merged totals and the diagnostic sink.
    /// Only call this once every worker is done.
    pub fn into_parts(self) -> (Stats, SharedSink) {
        let totals = self
            .totals
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        (totals, self.diagnostics)
    }
}
