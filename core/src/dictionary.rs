use std::{fs, path::Path};

use tracing::debug;

use crate::error::{ThreadHashError, ThreadHashResult};

/// The list of candidate words, loaded once and shared read-only by every worker.
/// Every attack replays it from the first word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Box<[u8]>>,
}

impl Dictionary {
    /// Loads a dictionary file, one word per line.
    /// Words are kept as raw bytes, whatever their encoding.
    pub fn open(path: impl AsRef<Path>) -> ThreadHashResult<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| ThreadHashError::Dictionary {
            path: path.to_owned(),
            source,
        })?;

        let dictionary = Self::parse(&contents);
        debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Splits a byte buffer into words on `\n`, stripping a `\r` before it.
    /// A final line without terminator is still a word.
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let words = body
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line).into())
            .collect();

        Self { words }
    }

    /// Creates a dictionary from words already in memory.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            words: words.into_iter().map(|word| word.as_ref().into()).collect(),
        }
    }

    /// Iterates over the words from the start.
    pub fn words(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
