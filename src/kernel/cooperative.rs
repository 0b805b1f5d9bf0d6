//! Owner-broadcast cooperative executor.
//!
//! Runs once per collaborative root. Workers take turns as **owner** in
//! worker-index order; the owner publishes how many heavy candidates it
//! holds, then publishes each candidate's second vertex, and all workers
//! jointly evaluate the pair with the inner thirds loop statically split by
//! worker index. The protocol's core invariant: exactly one worker writes a
//! given round's broadcast slot, and every read happens strictly after the
//! barrier that follows the write.

use crate::intersect::intersect_into;
use crate::motif::{evaluate_pair, Motif};

use super::Worker;

impl<M: Motif> Worker<'_, M> {
    /// Processes every worker's heavy candidates for `root`, one owner at a
    /// time.
    pub(crate) fn cooperative_rounds(&mut self, root: u32) {
        let workers = self.co.workers();

        for owner in 0..workers {
            if self.id == owner {
                // SAFETY: we are this round's sole writer; readers wait at
                // the barrier below.
                unsafe {
                    let count = self.co.heavy.slot_mut(owner).len();
                    self.co.owner_count.publish(count);
                }
            }
            self.co.wait(); // owner-count broadcast
            // SAFETY: barrier passed after the owner's publish.
            let count = unsafe { self.co.owner_count.read() };

            for k in 0..count {
                if self.id == owner {
                    // SAFETY: sole writer of the candidate broadcast; the
                    // heavy list is our own.
                    unsafe {
                        let position = self.co.heavy.slot_mut(owner).get(k);
                        let second = self.graph.neighbors(root)[position];
                        self.co.second_vertex.publish(second);
                    }
                }
                self.co.wait(); // candidate broadcast
                // SAFETY: barrier passed after the owner's publish.
                let second = unsafe { self.co.second_vertex.read() };

                self.cooperative_pair(root, second);
            }

            // Separates this owner's count broadcast from the next owner's:
            // without it a zero-candidate round would let the next owner
            // republish while laggards are still reading.
            self.co.wait();
        }
    }

    /// Jointly evaluates one heavy `(root, second)` pair across all workers.
    fn cooperative_pair(&mut self, root: u32, second: u32) {
        let workers = self.co.workers();

        if self.id == 0 {
            // SAFETY: the shared staging buffer is reserved for worker 0;
            // readers are parked at the barrier below, and their reads of
            // the previous round's contents finished before the round
            // barrier that let us get here.
            unsafe {
                let shared = self.staging.shared_mut();
                let written = intersect_into(
                    self.graph.neighbors(root),
                    self.graph.neighbors(second),
                    shared,
                );
                self.co.pair_len.publish(written);
            }
        }
        self.co.wait(); // pair-set publication

        // SAFETY: barrier passed after worker 0's writes; worker 0 does not
        // write again until after the round barrier below.
        let pair_len = unsafe { self.co.pair_len.read() };
        let pair = unsafe { &self.staging.shared_ref().as_slice()[..pair_len] };

        let partial = evaluate_pair(
            self.motif,
            self.graph,
            root,
            second,
            pair,
            self.id,
            workers,
            &mut self.scratch,
        );

        // SAFETY: own round slot; worker 0 reads only after the barrier.
        unsafe {
            *self.co.round_partials.slot_mut(self.id) = partial;
        }
        self.co.wait(); // evaluation complete

        if self.id == 0 {
            // SAFETY: all round partials were staged before the barrier
            // above; the accumulator is our own partial slot.
            let mut sum = 0i64;
            for t in 0..workers {
                sum += unsafe { *self.co.round_partials.slot(t) };
            }
            unsafe {
                *self.co.partials.slot_mut(0) += sum;
            }
        }
        self.co.wait(); // round separation
    }
}
