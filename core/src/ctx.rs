use crate::{
    error::{ThreadHashError, ThreadHashResult},
    DEFAULT_THREAD_COUNT, MAX_THREAD_COUNT, MIN_THREAD_COUNT,
};

/// A number of worker threads, always within the supported range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThreadCount(usize);

impl ThreadCount {
    pub fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for ThreadCount {
    type Error = ThreadHashError;

    fn try_from(count: i64) -> ThreadHashResult<Self> {
        if !(MIN_THREAD_COUNT as i64..=MAX_THREAD_COUNT as i64).contains(&count) {
            return Err(ThreadHashError::ThreadCount(count));
        }

        Ok(Self(count as usize))
    }
}

/// A builder for an attack context.
#[derive(Clone)]
pub struct AttackCtxBuilder {
    thread_count: i64,
}

impl Default for AttackCtxBuilder {
    fn default() -> Self {
        Self {
            thread_count: DEFAULT_THREAD_COUNT as i64,
        }
    }
}

impl AttackCtxBuilder {
    /// Creates a new AttackCtxBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads.
    pub fn thread_count(mut self, thread_count: i64) -> Self {
        self.thread_count = thread_count;

        self
    }

    /// Builds an AttackCtx, rejecting a thread count outside the supported range.
    pub fn build(self) -> ThreadHashResult<AttackCtx> {
        Ok(AttackCtx {
            thread_count: ThreadCount::try_from(self.thread_count)?,
        })
    }
}

/// Parameters of an attack run.
#[derive(Clone, Copy, Debug)]
pub struct AttackCtx {
    /// The number of worker threads.
    pub thread_count: ThreadCount,
}

#[cfg(test)]
pub fn build_test_ctx(thread_count: i64) -> AttackCtx {
    AttackCtxBuilder::new()
        .thread_count(thread_count)
        .build()
        .unwrap()
}
