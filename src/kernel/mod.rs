//! Dispatch, reduction, and the worker pool.
//!
//! [`MotifKernel`] owns one run of the counting kernel: it spawns a fixed
//! pool of scoped worker threads that move through the roots list in
//! lockstep, synchronized only by the coordinator's barrier.
//!
//! Per-root state machine:
//!
//! 1. **Collaborative** — while the current root's degree is at or above the
//!    branch threshold: every worker classifies its strided share of the
//!    adjacency as heavy or light, all workers jointly process each heavy
//!    candidate via the owner-broadcast protocol, each worker processes its
//!    light share alone, and worker 0 reduces the partial answers into the
//!    answer slot.
//! 2. **Round-robin fallback** — the first sub-threshold root permanently
//!    exits the collaborative state; remaining roots are assigned
//!    round-robin and evaluated depth-1 with no synchronization at all.
//!
//! Every write to shared state is either to a worker's own slot or follows
//! the single-writer/then-barrier discipline described in
//! [`crate::memory::slots`].

pub(crate) mod classify;
pub(crate) mod cooperative;
pub(crate) mod coordinator;
pub(crate) mod independent;

use std::time::Instant;

use anyhow::Result;

use crate::config::KernelConfig;
use crate::graph::CsrGraph;
use crate::memory::{ExclusiveSlots, StagingArea, WorkerScratch};
use crate::motif::Motif;

use coordinator::Coordinator;

/// The result of a profiled kernel run.
pub struct KernelRun {
    /// One signed motif count per root, in roots-list order.
    pub answers: Vec<i64>,
    /// Per-root elapsed worker time in nanoseconds, when profiling was
    /// enabled. Purely observational; summed across all workers that
    /// touched the root.
    pub elapsed_nanos: Option<Vec<u64>>,
}

/// A motif-counting kernel bound to one graph and one motif.
pub struct MotifKernel<'g, M: Motif> {
    graph: &'g CsrGraph,
    motif: M,
    config: KernelConfig,
}

impl<'g, M: Motif> MotifKernel<'g, M> {
    /// Creates a kernel after validating `config`.
    pub fn new(graph: &'g CsrGraph, motif: M, config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            motif,
            config,
        })
    }

    /// The configuration this kernel runs with.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Counts the motif rooted at each vertex of `roots`.
    ///
    /// # Panics
    /// Panics if any root id is out of bounds for the graph.
    pub fn count(&self, roots: &[u32]) -> Vec<i64> {
        self.run(roots, false).answers
    }

    /// Like `count`, but also collects per-root elapsed-time counters.
    pub fn count_profiled(&self, roots: &[u32]) -> KernelRun {
        self.run(roots, true)
    }

    fn run(&self, roots: &[u32], profile: bool) -> KernelRun {
        // Validate up front: a worker panicking mid-protocol would leave the
        // rest of the pool parked at a barrier.
        for &root in roots {
            assert!(
                (root as usize) < self.graph.vertex_count(),
                "root {root} out of bounds"
            );
        }

        let workers = self.config.workers;
        let coordinator = Coordinator::new(&self.config);
        let staging = StagingArea::new(workers, self.config.buffer_capacity);
        let answers = ExclusiveSlots::<i64>::new(roots.len());
        let elapsed = ExclusiveSlots::<u64>::new(if profile { roots.len() } else { 0 });

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("kernel_run", motif = M::NAME, roots = roots.len(), workers)
                .entered();

        std::thread::scope(|scope| {
            for id in 0..workers {
                let worker = Worker {
                    id,
                    graph: self.graph,
                    motif: &self.motif,
                    config: &self.config,
                    roots,
                    co: &coordinator,
                    staging: &staging,
                    answers: &answers,
                    elapsed_out: &elapsed,
                    profile,
                    scratch: WorkerScratch::new(self.config.buffer_capacity),
                };
                scope.spawn(move || worker.run());
            }
        });

        KernelRun {
            answers: answers.into_vec(),
            elapsed_nanos: profile.then(|| elapsed.into_vec()),
        }
    }
}

/// One worker's view of a run.
pub(crate) struct Worker<'run, M: Motif> {
    pub(crate) id: usize,
    pub(crate) graph: &'run CsrGraph,
    pub(crate) motif: &'run M,
    pub(crate) config: &'run KernelConfig,
    pub(crate) roots: &'run [u32],
    pub(crate) co: &'run Coordinator,
    pub(crate) staging: &'run StagingArea,
    pub(crate) answers: &'run ExclusiveSlots<i64>,
    pub(crate) elapsed_out: &'run ExclusiveSlots<u64>,
    pub(crate) profile: bool,
    pub(crate) scratch: WorkerScratch,
}

impl<M: Motif> Worker<'_, M> {
    fn run(mut self) {
        let workers = self.co.workers();

        let mut i = 0;
        while i < self.roots.len() {
            let root = self.roots[i];
            if self.graph.degree(root) < self.config.branch_degree_threshold {
                // Permanent cut-over: everything from here on is fallback.
                break;
            }

            self.co.wait(); // top of root
            let started = self.profile.then(Instant::now);

            // SAFETY: own slots; reset happens after the top barrier, and
            // the only foreign reads (worker 0's sums) happened before it.
            unsafe {
                *self.co.partials.slot_mut(self.id) = 0;
                self.co.heavy.slot_mut(self.id).clear();
            }

            self.classify_heavy(root);
            self.co.wait(); // classifier exit

            self.cooperative_rounds(root);
            self.process_light(root);

            if let Some(timer) = started {
                // SAFETY: own slot, read by worker 0 only after the barrier
                // below.
                unsafe {
                    *self.co.elapsed.slot_mut(self.id) = timer.elapsed().as_nanos() as u64;
                }
            }
            self.co.wait(); // pre-reduction

            if self.id == 0 {
                // SAFETY: every partial write for this root precedes the
                // barrier above; no worker writes again until after the
                // next top-of-root barrier, which waits for us.
                let total: i64 =
                    (0..workers).map(|t| unsafe { *self.co.partials.slot(t) }).sum();
                unsafe { self.answers.write(i, total) };

                #[cfg(feature = "tracing")]
                tracing::trace!(root, answer = total, "collaborative root reduced");

                if self.profile {
                    let nanos: u64 =
                        (0..workers).map(|t| unsafe { *self.co.elapsed.slot(t) }).sum();
                    unsafe { self.elapsed_out.write(i, nanos) };
                }
            }
            i += 1;
        }

        // Round-robin fallback: worker t handles roots t, t+W, t+2W, …
        // among the remainder, fully sequentially.
        let mut j = i + self.id;
        while j < self.roots.len() {
            let root = self.roots[j];
            let started = self.profile.then(Instant::now);
            let answer = self.evaluate_root(root);
            // SAFETY: index j is assigned to this worker alone, and the
            // answers are harvested only after the pool joins.
            unsafe { self.answers.write(j, answer) };
            if let Some(timer) = started {
                unsafe {
                    self.elapsed_out.write(j, timer.elapsed().as_nanos() as u64);
                }
            }
            j += workers;
        }
    }
}
