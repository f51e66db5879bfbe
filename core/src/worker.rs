use std::time::Instant;

use tracing::debug;

use crate::{
    algorithm::classify,
    allocator::WorkAllocator,
    attack::DictionaryVerifier,
    stats::{Stats, StatsAggregator, WorkerReport},
    verify::Verifier,
};

/// One worker of the pool.
/// It pulls records from the allocator until there is none left.
pub struct Worker<'a, V: Verifier> {
    id: usize,
    records: &'a [String],
    allocator: &'a WorkAllocator,
    attacker: DictionaryVerifier<'a, V>,
    aggregator: &'a StatsAggregator,
}

impl<'a, V: Verifier> Worker<'a, V> {
    pub fn new(
        id: usize,
        records: &'a [String],
        allocator: &'a WorkAllocator,
        attacker: DictionaryVerifier<'a, V>,
        aggregator: &'a StatsAggregator,
    ) -> Self {
        Self {
            id,
            records,
            allocator,
            attacker,
            aggregator,
        }
    }

    /// Processes records until the allocator is exhausted, then reports
    /// and hands the local stats to the aggregator.
    pub fn run(self) -> WorkerReport {
        let start = Instant::now();
        let mut stats = Stats::new();

        while let Some(i) = self.allocator.next() {
            let Some(record) = self.records.get(i) else {
                break;
            };

            let tag = classify(record);
            let result = self.attacker.attempt(record);
            debug!(
                worker = self.id,
                "{tag} hash #{i} processed, cracked: {}",
                result.is_cracked()
            );

            stats.record(tag, &result);
        }

        let report = WorkerReport {
            id: self.id,
            elapsed: start.elapsed(),
            stats,
        };

        self.aggregator.report_line(&report);
        self.aggregator.merge(&report.stats);

        report
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        algorithm::AlgorithmTag,
        allocator::WorkAllocator,
        attack::DictionaryVerifier,
        dictionary::Dictionary,
        sink::{testing::BufferSink, SharedSink},
        stats::StatsAggregator,
        verify::testing::MapVerifier,
        worker::Worker,
    };

    #[test]
    fn test_worker_drains_allocator() {
        let records = ["$6$salt$hash1", "plainhash2", "$1$x$y"].map(str::to_owned);
        let dictionary = Dictionary::from_words(["wrongword", "correctword"]);
        let verifier = MapVerifier::new([("correctword", "$6$salt$hash1")]);
        let output_buffer = BufferSink::default();
        let output = SharedSink::new(Box::new(output_buffer.clone()));
        let diagnostics_buffer = BufferSink::default();
        let aggregator =
            StatsAggregator::new(SharedSink::new(Box::new(diagnostics_buffer.clone())));
        let allocator = WorkAllocator::new(records.len());

        let attacker = DictionaryVerifier::new(&dictionary, &verifier, &output);
        let report = Worker::new(7, &records, &allocator, attacker, &aggregator).run();

        assert_eq!(7, report.id);
        assert_eq!(3, report.stats.processed);
        assert_eq!(2, report.stats.failed);
        assert_eq!(1, report.stats.counts[AlgorithmTag::Sha512]);
        assert_eq!(1, report.stats.counts[AlgorithmTag::Des]);
        assert_eq!(1, report.stats.counts[AlgorithmTag::Md5]);
        assert_eq!(None, allocator.next());

        assert_eq!(
            vec![
                "cracked  correctword  $6$salt$hash1",
                "*** failed to crack   plainhash2",
                "*** failed to crack   $1$x$y",
            ],
            output_buffer.lines()
        );

        let diagnostics = diagnostics_buffer.lines();
        assert_eq!(1, diagnostics.len());
        assert!(diagnostics[0].starts_with("thread:  7 "));

        assert_eq!(report.stats, aggregator.into_parts().0);
    }

    #[test]
    fn test_worker_without_records() {
        let records: Vec<String> = Vec::new();
        let dictionary = Dictionary::from_words(["word"]);
        let verifier = MapVerifier::default();
        let output_buffer = BufferSink::default();
        let output = SharedSink::new(Box::new(output_buffer.clone()));
        let aggregator = StatsAggregator::new(SharedSink::new(Box::new(BufferSink::default())));
        let allocator = WorkAllocator::new(0);

        let attacker = DictionaryVerifier::new(&dictionary, &verifier, &output);
        let report = Worker::new(0, &records, &allocator, attacker, &aggregator).run();

        assert_eq!(0, report.stats.processed);
        assert_eq!(0, verifier.calls());
        assert!(output_buffer.lines().is_empty());
    }
}
