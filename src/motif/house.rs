//! The five-vertex house motif.

use super::Motif;
use crate::graph::CsrGraph;
use crate::intersect::{intersect_into, intersect_size_only};
use crate::memory::WorkerScratch;

/// Counts houses: a four-cycle `root — third — fourth — second — root`
/// with a roof apex adjacent to both `root` and `second`.
///
/// The pair set plays the roof role (`fifth = adj(second) ∩ adj(root)`).
/// For each `third` in `adj(root)` other than `second`, the wall set is
/// `fourth = adj(second) ∩ adj(third)`; the contribution removes the
/// configurations where one vertex would have to play two roles:
/// `root` always appears in `fourth`, `third` may appear in `fifth`, and a
/// vertex in both sets cannot be wall and roof at once.
pub struct House;

impl Motif for House {
    const NAME: &'static str = "house";

    #[inline]
    fn thirds<'a>(&self, graph: &'a CsrGraph, root: u32, _pair: &'a [u32]) -> &'a [u32] {
        graph.neighbors(root)
    }

    #[inline]
    fn admits(&self, second: u32, third: u32) -> bool {
        third != second
    }

    fn contribution(
        &self,
        graph: &CsrGraph,
        _root: u32,
        second: u32,
        third: u32,
        pair: &[u32],
        scratch: &mut WorkerScratch,
    ) -> i64 {
        let fourth = scratch.buf();
        let fourth_size = intersect_into(
            graph.neighbors(second),
            graph.neighbors(third),
            fourth,
        );
        if fourth_size == 0 {
            return 0;
        }

        let common = intersect_size_only(fourth.as_slice(), pair);

        // `third` cannot double as the roof apex.
        let effective_fifth = pair.len() - usize::from(pair.binary_search(&third).is_ok());

        effective_fifth as i64 * (fourth_size as i64 - 1) - common as i64
    }
}
