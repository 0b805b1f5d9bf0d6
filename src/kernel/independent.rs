//! Independent executor: light pairs and depth-1 fallback roots.

use crate::intersect::intersect_into;
use crate::motif::{evaluate_pair, Motif};

use super::Worker;

impl<M: Motif> Worker<'_, M> {
    /// Processes this worker's light share of `root`'s adjacency, alone.
    ///
    /// Re-walks the same stride as the classifier, skipping the positions in
    /// this worker's own heavy list (those were handled cooperatively).
    /// Uses only worker-owned buffers; no barriers.
    pub(crate) fn process_light(&mut self, root: u32) {
        let adjacency = self.graph.neighbors(root);
        let workers = self.co.workers();

        let mut partial = 0i64;
        let mut j = self.id;
        while j < adjacency.len() {
            let second = adjacency[j];
            if second >= root {
                break;
            }
            // SAFETY: own heavy list, owner-only access.
            let is_heavy = unsafe { self.co.heavy.slot_mut(self.id).contains(j) };
            if !is_heavy {
                partial += self.evaluate_pair_owned(root, second);
            }
            j += workers;
        }

        // SAFETY: own partial slot; worker 0 reads only after the
        // pre-reduction barrier.
        unsafe {
            *self.co.partials.slot_mut(self.id) += partial;
        }
    }

    /// Full depth-1 evaluation of a fallback root: every `second < root`,
    /// sequentially, no collaboration.
    pub(crate) fn evaluate_root(&mut self, root: u32) -> i64 {
        let adjacency = self.graph.neighbors(root);
        let mut answer = 0i64;
        for &second in adjacency {
            if second >= root {
                break;
            }
            answer += self.evaluate_pair_owned(root, second);
        }
        answer
    }

    /// Evaluates one `(root, second)` pair entirely on this worker, with
    /// the pair set materialized into its own staging buffer.
    fn evaluate_pair_owned(&mut self, root: u32, second: u32) -> i64 {
        // SAFETY: own staging buffer, owner-only access; the borrow ends
        // before any barrier is reached.
        let pair_buf = unsafe { self.staging.worker_mut(self.id) };
        let written = intersect_into(
            self.graph.neighbors(root),
            self.graph.neighbors(second),
            pair_buf,
        );
        let pair = &pair_buf.as_slice()[..written];
        evaluate_pair(
            self.motif,
            self.graph,
            root,
            second,
            pair,
            0,
            1,
            &mut self.scratch,
        )
    }
}
