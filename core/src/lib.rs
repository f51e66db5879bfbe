//! A multithreaded dictionary attack against crypt(3) style password hashes.

mod algorithm;
mod allocator;
mod attack;
mod ctx;
mod dictionary;
mod error;
mod pool;
mod sink;
mod stats;
mod verify;
mod worker;

pub use {
    algorithm::{classify, AlgorithmCounts, AlgorithmTag},
    allocator::WorkAllocator,
    attack::{CrackResult, DictionaryVerifier},
    ctx::{AttackCtx, AttackCtxBuilder, ThreadCount},
    dictionary::Dictionary,
    error::{ThreadHashError, ThreadHashResult, VerifyError},
    pool::PoolSupervisor,
    sink::{SharedSink, Sink},
    stats::{RunSummary, Stats, StatsAggregator, WorkerReport},
    verify::{nt_crypt, CryptVerifier, Verifier},
    worker::Worker,
};

/// The default number of worker threads.
pub const DEFAULT_THREAD_COUNT: usize = 1;

/// The minimum number of worker threads.
pub const MIN_THREAD_COUNT: usize = 1;

/// The maximum number of worker threads.
pub const MAX_THREAD_COUNT: usize = 24;
