//! Worker-exclusive scratch memory.

use super::fixed_buf::FixedBuf;

/// Small, worker-exclusive working memory.
///
/// A `WorkerScratch` is owned by exactly one worker thread and is never
/// shared, so it needs no synchronization. Its buffer holds intersection
/// results whose lifetime is a single motif contribution; callers overwrite
/// it freely between calls and must not expect contents to persist.
pub struct WorkerScratch {
    inner: FixedBuf,
}

impl WorkerScratch {
    /// Creates scratch memory whose buffer holds up to `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: FixedBuf::new(capacity),
        }
    }

    /// The call-scoped intersection buffer.
    #[inline]
    pub fn buf(&mut self) -> &mut FixedBuf {
        &mut self.inner
    }
}
