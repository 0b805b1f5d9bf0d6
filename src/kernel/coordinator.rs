//! Per-run coordinator state.

use std::sync::Barrier;

use crate::config::KernelConfig;
use crate::memory::{BroadcastSlot, WorkerSlots};

/// A worker's bounded list of heavy edge positions.
///
/// Positions index into the current root's adjacency slice. The list is
/// rebuilt for every collaborative root and capped at
/// `max_heavy_per_worker`; pushes past the cap are dropped, which routes the
/// excess to the light path instead of failing.
pub(crate) struct HeavyList {
    positions: Vec<usize>,
    cap: usize,
}

impl HeavyList {
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            positions: Vec::with_capacity(cap),
            cap,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }

    /// Records `position` unless the cap is reached.
    pub(crate) fn push(&mut self, position: usize) {
        if self.positions.len() < self.cap {
            self.positions.push(position);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn get(&self, k: usize) -> usize {
        self.positions[k]
    }

    /// Linear membership check; the list is small by construction.
    pub(crate) fn contains(&self, position: usize) -> bool {
        self.positions.iter().any(|&p| p == position)
    }
}

/// Shared state of one kernel run, owned for exactly that run.
///
/// Holds the barrier, the owner-broadcast scalars, and the per-worker slots
/// the protocol staggers writes into. Making this an explicit object (rather
/// than file-scope statics) keeps ownership and lifetime visible and lets
/// independent runs and tests coexist.
pub(crate) struct Coordinator {
    barrier: Barrier,
    /// Heavy-candidate count of the current owner.
    pub(crate) owner_count: BroadcastSlot<usize>,
    /// Second vertex id of the current cooperative round.
    pub(crate) second_vertex: BroadcastSlot<u32>,
    /// Written length of the shared pair set.
    pub(crate) pair_len: BroadcastSlot<usize>,
    /// Per-worker heavy lists; each touched only by its owner.
    pub(crate) heavy: WorkerSlots<HeavyList>,
    /// Per-root partial answers, summed by worker 0.
    pub(crate) partials: WorkerSlots<i64>,
    /// Per-round cooperative partials, summed by worker 0.
    pub(crate) round_partials: WorkerSlots<i64>,
    /// Per-root elapsed nanoseconds when profiling is enabled.
    pub(crate) elapsed: WorkerSlots<u64>,
}

impl Coordinator {
    pub(crate) fn new(config: &KernelConfig) -> Self {
        let workers = config.workers;
        Self {
            barrier: Barrier::new(workers),
            owner_count: BroadcastSlot::new(0),
            second_vertex: BroadcastSlot::new(0),
            pair_len: BroadcastSlot::new(0),
            heavy: WorkerSlots::new_with(workers, || HeavyList::new(config.max_heavy_per_worker)),
            partials: WorkerSlots::new_with(workers, || 0),
            round_partials: WorkerSlots::new_with(workers, || 0),
            elapsed: WorkerSlots::new_with(workers, || 0),
        }
    }

    /// Blocks until all configured workers have arrived.
    #[inline]
    pub(crate) fn wait(&self) {
        self.barrier.wait();
    }

    pub(crate) fn workers(&self) -> usize {
        self.partials.len()
    }
}
