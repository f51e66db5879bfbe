use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

/// All the hash families the classifier knows about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorithmTag {
    Des,
    Nt,
    Md5,
    Sha256,
    Sha512,
    Yescrypt,
    GostYescrypt,
    Bcrypt,
    Unknown,
}

impl AlgorithmTag {
    /// Every tag, in reporting order.
    pub const ALL: [AlgorithmTag; 9] = [
        Self::Des,
        Self::Nt,
        Self::Md5,
        Self::Sha256,
        Self::Sha512,
        Self::Yescrypt,
        Self::GostYescrypt,
        Self::Bcrypt,
        Self::Unknown,
    ];

    /// The name used in the summary lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Des => "DES",
            Self::Nt => "NT",
            Self::Md5 => "MD5",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
            Self::Yescrypt => "YESCRYPT",
            Self::GostYescrypt => "GOST_YESCRYPT",
            Self::Bcrypt => "BCRYPT",
            Self::Unknown => "UNKNOWN",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

impl Display for AlgorithmTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Finds the hash family of a hash string from its prefix.
/// The tests are ordered and the first one matching wins.
pub fn classify(hash: &str) -> AlgorithmTag {
    let bytes = hash.as_bytes();

    match bytes {
        [] => AlgorithmTag::Unknown,
        [first, ..] if *first != b'$' => AlgorithmTag::Des,
        [_, b'3', ..] => AlgorithmTag::Nt,
        [_, b'1', ..] => AlgorithmTag::Md5,
        [_, b'5', ..] => AlgorithmTag::Sha256,
        [_, b'6', ..] => AlgorithmTag::Sha512,
        [_, b'y', ..] => AlgorithmTag::Yescrypt,
        [_, b'g', b'y', ..] => AlgorithmTag::GostYescrypt,
        [_, b'2', b'b', ..] => AlgorithmTag::Bcrypt,
        _ => AlgorithmTag::Unknown,
    }
}

/// A count for every algorithm tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlgorithmCounts {
    counts: [usize; AlgorithmTag::ALL.len()],
}

impl AlgorithmCounts {
    /// Creates a mapping with every count set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the tags and their counts, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AlgorithmTag, usize)> + '_ {
        AlgorithmTag::ALL.iter().map(|tag| (*tag, self[*tag]))
    }

    /// Sum of all the counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Adds every count of `other` to this mapping.
    pub fn merge(&mut self, other: &AlgorithmCounts) {
        for (tag, count) in other.iter() {
            self[tag] += count;
        }
    }
}

impl Index<AlgorithmTag> for AlgorithmCounts {
    type Output = usize;

    fn index(&self, tag: AlgorithmTag) -> &usize {
        &self.counts[tag.slot()]
    }
}

impl IndexMut<AlgorithmTag> for AlgorithmCounts {
    fn index_mut(&mut self, tag: AlgorithmTag) -> &mut usize {
        &mut self.counts[tag.slot()]
    }
}
