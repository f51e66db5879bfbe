use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{algorithm::AlgorithmTag, MAX_THREAD_COUNT, MIN_THREAD_COUNT};

pub type ThreadHashResult<T> = std::result::Result<T, ThreadHashError>;

#[derive(Error, Debug)]
pub enum ThreadHashError {
    #[error(
        "Invalid thread count {0}, it should be comprised between {min} and {max}",
        min = MIN_THREAD_COUNT,
        max = MAX_THREAD_COUNT
    )]
    ThreadCount(i64),

    #[error("Unable to read the dictionary file {}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An I/O error occured while running the attack")]
    Io(#[from] io::Error),

    #[error("Worker thread {0} panicked")]
    WorkerPanicked(usize),
}

/// An error reported by the verification primitive for a single candidate.
/// The candidate is skipped, the attack on the hash goes on.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("crypt failed: {0}")]
    Crypt(#[from] pwhash::error::Error),

    #[error("no implementation available for {0} hashes")]
    Unsupported(AlgorithmTag),
}
