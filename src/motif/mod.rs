//! Motif evaluators.
//!
//! The house and triangle-chain kernels share the entire heavy/light,
//! cooperative, and fallback machinery; they differ only in where candidate
//! third vertices come from, which thirds are admissible, and how
//! intersection sizes combine into a signed contribution. [`Motif`] captures
//! exactly those three points of variation, so the dispatch protocol in
//! [`crate::kernel`] is written once.
//!
//! Every evaluation of a `(root, second)` pair starts from the **pair set**
//! `adj(root) ∩ adj(second)`, materialized by the caller into a staging
//! buffer (possibly truncated at its capacity). The contribution of each
//! admissible third vertex is then summed over a strided share of the thirds
//! domain, which is how the cooperative executor splits one heavy pair
//! across all workers.

mod house;
mod triangle_chain;

pub use house::House;
pub use triangle_chain::TriangleChain;

use crate::graph::CsrGraph;
use crate::memory::WorkerScratch;

/// A fixed subgraph pattern counted rooted at each vertex.
pub trait Motif: Sync {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// The slice candidate third vertices are drawn from.
    ///
    /// `pair` is the materialized pair set of the `(root, second)` pair
    /// under evaluation; implementations return either the root's adjacency
    /// or `pair` itself.
    fn thirds<'a>(&self, graph: &'a CsrGraph, root: u32, pair: &'a [u32]) -> &'a [u32];

    /// Whether `third` participates for the given `second`.
    ///
    /// Together with ascending adjacency order, this rule is what prevents
    /// an unordered motif instance from being counted more than once.
    fn admits(&self, second: u32, third: u32) -> bool;

    /// The signed count contribution of one `(root, second, third)` triple.
    fn contribution(
        &self,
        graph: &CsrGraph,
        root: u32,
        second: u32,
        third: u32,
        pair: &[u32],
        scratch: &mut WorkerScratch,
    ) -> i64;
}

/// Sums contributions for `(root, second)` over the strided thirds share
/// `start, start + step, …`.
///
/// Cooperative mode passes `(worker_id, worker_count)`; independent mode
/// passes `(0, 1)` and covers the whole domain. The split is the only
/// difference between the two, which is what makes path choice a
/// performance decision rather than a semantic one.
#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate_pair<M: Motif>(
    motif: &M,
    graph: &CsrGraph,
    root: u32,
    second: u32,
    pair: &[u32],
    start: usize,
    step: usize,
    scratch: &mut WorkerScratch,
) -> i64 {
    if pair.is_empty() {
        return 0;
    }
    let thirds = motif.thirds(graph, root, pair);
    let mut acc = 0i64;
    let mut j = start;
    while j < thirds.len() {
        let third = thirds[j];
        if motif.admits(second, third) {
            acc += motif.contribution(graph, root, second, third, pair, scratch);
        }
        j += step;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::intersect_into;
    use crate::memory::FixedBuf;

    fn pair_of(graph: &CsrGraph, root: u32, second: u32, buf: &mut FixedBuf) -> usize {
        intersect_into(graph.neighbors(root), graph.neighbors(second), buf)
    }

    /// Strided shares must partition the full evaluation exactly.
    #[test]
    fn strided_shares_sum_to_sequential() {
        // Two overlapping cliques (0..=5 and 3..=7) to give the evaluators
        // real work.
        let adjacency: Vec<Vec<u32>> = (0..8u32)
            .map(|u| {
                (0..8u32)
                    .filter(|&v| v != u && ((u < 6 && v < 6) || (u >= 3 && v >= 3)))
                    .collect()
            })
            .collect();
        let graph = CsrGraph::from_adjacency(&adjacency);
        let mut pair_buf = FixedBuf::new(64);
        let mut scratch = WorkerScratch::new(64);

        let root = 7u32;
        for &second in graph.neighbors(root) {
            if second >= root {
                break;
            }
            let written = pair_of(&graph, root, second, &mut pair_buf);
            let pair = &pair_buf.as_slice()[..written];

            for motif_case in 0..2 {
                let (seq, split): (i64, i64) = if motif_case == 0 {
                    let m = House;
                    let seq = evaluate_pair(&m, &graph, root, second, pair, 0, 1, &mut scratch);
                    let split = (0..3)
                        .map(|w| evaluate_pair(&m, &graph, root, second, pair, w, 3, &mut scratch))
                        .sum();
                    (seq, split)
                } else {
                    let m = TriangleChain;
                    let seq = evaluate_pair(&m, &graph, root, second, pair, 0, 1, &mut scratch);
                    let split = (0..3)
                        .map(|w| evaluate_pair(&m, &graph, root, second, pair, w, 3, &mut scratch))
                        .sum();
                    (seq, split)
                };
                assert_eq!(seq, split);
            }
        }
    }

    #[test]
    fn empty_pair_contributes_nothing() {
        // Path graph: 0 - 1 - 2; no pair set anywhere.
        let graph = CsrGraph::from_adjacency(&[vec![1], vec![0, 2], vec![1]]);
        let mut scratch = WorkerScratch::new(8);
        assert_eq!(
            evaluate_pair(&House, &graph, 2, 1, &[], 0, 1, &mut scratch),
            0
        );
        assert_eq!(
            evaluate_pair(&TriangleChain, &graph, 2, 1, &[], 0, 1, &mut scratch),
            0
        );
    }
}
