//! Heaviness classifier.

use crate::intersect::intersect_size_only;
use crate::motif::Motif;

use super::Worker;

impl<M: Motif> Worker<'_, M> {
    /// Scans this worker's strided share of `root`'s adjacency and flags the
    /// edge positions whose pair intersection reaches the heavy threshold.
    ///
    /// Self-root enumeration is restricted to `second < root`, so the scan
    /// stops at the first neighbor `>= root` (the slice is ascending). The
    /// only write is to this worker's own heavy list; the phase is
    /// bracketed by the top-of-root and classifier-exit barriers in the
    /// dispatch loop.
    pub(crate) fn classify_heavy(&mut self, root: u32) {
        let adjacency = self.graph.neighbors(root);
        // SAFETY: own heavy list; no other worker ever touches it.
        let heavy = unsafe { self.co.heavy.slot_mut(self.id) };

        let mut j = self.id;
        while j < adjacency.len() {
            let second = adjacency[j];
            if second >= root {
                break;
            }
            let size = intersect_size_only(adjacency, self.graph.neighbors(second));
            if size >= self.config.heavy_threshold {
                heavy.push(j);
            }
            j += self.co.workers();
        }
    }
}
