//! Single-writer shared cells ordered by barrier rendezvous.
//!
//! The kernel uses no locks and no atomics. Every shared mutable location
//! falls into one of two patterns, each modeled by a type here:
//!
//! - [`BroadcastSlot`]: one designated worker writes, everyone reads, with a
//!   barrier strictly between the write and every read.
//! - [`WorkerSlots`] / [`ExclusiveSlots`]: an array of cells where each cell
//!   has exactly one writer; readers of foreign cells wait for a barrier
//!   after the last write.
//!
//! The accessors are `unsafe fn`s: the barrier discipline is a caller
//! contract, not something these types can enforce. `std::sync::Barrier`
//! establishes the happens-before edge that makes the unsynchronized reads
//! sound.

use core::cell::UnsafeCell;

use crossbeam_utils::CachePadded;

/// A single-valued broadcast cell written by one worker per round.
pub struct BroadcastSlot<T> {
    cell: UnsafeCell<T>,
}

// SAFETY: access is externally serialized by the single-writer/then-barrier
// protocol documented on `publish` and `read`.
unsafe impl<T: Send> Sync for BroadcastSlot<T> {}

impl<T: Copy> BroadcastSlot<T> {
    /// Creates a slot holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: UnsafeCell::new(value),
        }
    }

    /// Publishes `value` for the current round.
    ///
    /// # Safety
    /// The caller must be the round's sole writer, and no other worker may
    /// read or write this slot until a barrier has been passed.
    #[inline]
    pub unsafe fn publish(&self, value: T) {
        unsafe { *self.cell.get() = value }
    }

    /// Reads the value published for the current round.
    ///
    /// # Safety
    /// A barrier must have been passed after the last `publish`, and no
    /// worker may publish again before this read completes.
    #[inline]
    pub unsafe fn read(&self) -> T {
        unsafe { *self.cell.get() }
    }
}

/// Per-worker cells, cache-padded to avoid false sharing.
///
/// Cell `w` may only be mutated by worker `w`; other workers may read it
/// only after a barrier that follows the owner's last write.
pub struct WorkerSlots<T> {
    slots: Box<[CachePadded<UnsafeCell<T>>]>,
}

// SAFETY: per-cell exclusive-writer discipline plus barrier ordering, per
// the contracts on `slot_mut` and `slot`.
unsafe impl<T: Send> Sync for WorkerSlots<T> {}

impl<T> WorkerSlots<T> {
    /// Creates one cell per worker, each initialized by `init`.
    pub fn new_with(workers: usize, mut init: impl FnMut() -> T) -> Self {
        let slots = (0..workers)
            .map(|_| CachePadded::new(UnsafeCell::new(init())))
            .collect();
        Self { slots }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no cells.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Mutable access to worker `worker`'s own cell.
    ///
    /// # Safety
    /// The caller must be worker `worker`, and no other reference to this
    /// cell may exist while the returned borrow is live. Foreign readers
    /// must be separated from this write by a barrier.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn slot_mut(&self, worker: usize) -> &mut T {
        unsafe { &mut *self.slots[worker].get() }
    }

    /// Reads worker `worker`'s cell.
    ///
    /// # Safety
    /// A barrier must have been passed after the owner's last write, and the
    /// owner must not write again before this read completes.
    #[inline]
    pub unsafe fn slot(&self, worker: usize) -> &T {
        unsafe { &*self.slots[worker].get() }
    }
}

/// Position-indexed cells each written exactly once by one worker.
///
/// Used for the answer vector (and the optional per-root timing vector):
/// the dispatch protocol assigns every position to exactly one writer, and
/// the results are only harvested after all workers have joined.
pub struct ExclusiveSlots<T> {
    slots: Box<[UnsafeCell<T>]>,
}

// SAFETY: each cell has a single writer under the dispatch protocol, and
// reads happen only after the worker threads have been joined.
unsafe impl<T: Send> Sync for ExclusiveSlots<T> {}

impl<T: Default> ExclusiveSlots<T> {
    /// Creates `len` default-initialized cells.
    pub fn new(len: usize) -> Self {
        let slots = (0..len).map(|_| UnsafeCell::new(T::default())).collect();
        Self { slots }
    }
}

impl<T> ExclusiveSlots<T> {
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no cells.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Writes `value` into position `index`.
    ///
    /// # Safety
    /// The caller must be the sole writer ever assigned to `index`, and no
    /// reads may occur until the writing thread has been joined.
    #[inline]
    pub unsafe fn write(&self, index: usize, value: T) {
        unsafe { *self.slots[index].get() = value }
    }

    /// Consumes the cells into a plain vector.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
            .into_vec()
            .into_iter()
            .map(UnsafeCell::into_inner)
            .collect()
    }
}
