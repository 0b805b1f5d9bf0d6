//! Bulk-resident staging buffers for materialized intersections.

use core::cell::UnsafeCell;

use crossbeam_utils::CachePadded;

use super::fixed_buf::FixedBuf;

/// Inter-worker staging buffers living in the bulk tier.
///
/// One fixed-capacity buffer per worker plus one shared buffer. A worker's
/// own buffer holds its pair set (the `adj(root) ∩ adj(second)` materialized
/// for the pair it is currently evaluating alone); the shared buffer holds
/// the pair set of a cooperatively processed heavy pair, written by worker 0
/// and read by everyone after a barrier.
pub struct StagingArea {
    per_worker: Box<[CachePadded<UnsafeCell<FixedBuf>>]>,
    shared: UnsafeCell<FixedBuf>,
}

// SAFETY: per-worker buffers follow the exclusive-owner discipline; the
// shared buffer follows the single-writer/then-barrier discipline. Both are
// caller contracts documented on the accessors.
unsafe impl Sync for StagingArea {}

impl StagingArea {
    /// Creates one buffer of `capacity` ids per worker, plus the shared one.
    pub fn new(workers: usize, capacity: usize) -> Self {
        let per_worker = (0..workers)
            .map(|_| CachePadded::new(UnsafeCell::new(FixedBuf::new(capacity))))
            .collect();
        Self {
            per_worker,
            shared: UnsafeCell::new(FixedBuf::new(capacity)),
        }
    }

    /// Mutable access to worker `worker`'s own staging buffer.
    ///
    /// # Safety
    /// The caller must be worker `worker`; no other reference to this buffer
    /// may be live at the same time.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn worker_mut(&self, worker: usize) -> &mut FixedBuf {
        unsafe { &mut *self.per_worker[worker].get() }
    }

    /// Mutable access to the shared buffer, reserved for worker 0.
    ///
    /// # Safety
    /// The caller must be worker 0, and no other worker may touch the shared
    /// buffer until a barrier has been passed after the write.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn shared_mut(&self) -> &mut FixedBuf {
        unsafe { &mut *self.shared.get() }
    }

    /// Read access to the shared buffer.
    ///
    /// # Safety
    /// A barrier must have been passed after worker 0's last write, and
    /// worker 0 must not write again while the returned borrow is live.
    #[inline]
    pub unsafe fn shared_ref(&self) -> &FixedBuf {
        unsafe { &*self.shared.get() }
    }
}
