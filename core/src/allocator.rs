use std::sync::{Mutex, PoisonError};

/// Hands out the indexes of the records to attack, each exactly once.
/// It is shared by all the workers of a pool.
#[derive(Debug)]
pub struct WorkAllocator {
    next: Mutex<usize>,
    len: usize,
}

impl WorkAllocator {
    /// Creates an allocator over `len` records.
    pub fn new(len: usize) -> Self {
        Self {
            next: Mutex::new(0),
            len,
        }
    }

    /// Returns the next unprocessed index, or `None` once every index was handed out.
    pub fn next(&self) -> Option<usize> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);

        if *next >= self.len {
            return None;
        }

        let current = *next;
        *next += 1;
        Some(current)
    }

    /// The number of records handed out by this allocator in total.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
