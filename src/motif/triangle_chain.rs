//! The six-vertex triangle-chain motif.

use super::Motif;
use crate::graph::CsrGraph;
use crate::intersect::{intersect_into, intersect_size_only};
use crate::memory::WorkerScratch;

/// Counts chains of three triangles hung on a central triangle
/// `(root, second, third)`: one extra vertex on each central edge.
///
/// Thirds are drawn from the materialized pair set
/// `a = adj(root) ∩ adj(second)` with `third < second < root`. With
/// `b = adj(second) ∩ adj(third)` and `c = adj(root) ∩ adj(third)`, the raw
/// product `(|a|-1)(|b|-1)(|c|-1)` picks one apex per edge; the correction
/// term removes choices where two apexes coincide, which can only happen for
/// vertices in the triple intersection `d = a ∩ b`.
pub struct TriangleChain;

impl Motif for TriangleChain {
    const NAME: &'static str = "triangle-chain";

    #[inline]
    fn thirds<'a>(&self, _graph: &'a CsrGraph, _root: u32, pair: &'a [u32]) -> &'a [u32] {
        pair
    }

    #[inline]
    fn admits(&self, second: u32, third: u32) -> bool {
        third < second
    }

    fn contribution(
        &self,
        graph: &CsrGraph,
        root: u32,
        second: u32,
        third: u32,
        pair: &[u32],
        scratch: &mut WorkerScratch,
    ) -> i64 {
        let b = scratch.buf();
        let b_size = intersect_into(graph.neighbors(second), graph.neighbors(third), b);
        let c_size = intersect_size_only(graph.neighbors(root), graph.neighbors(third));
        let d_size = intersect_size_only(pair, b.as_slice());

        let a = pair.len() as i64;
        let b = b_size as i64;
        let c = c_size as i64;
        let d = d_size as i64;

        (a - 1) * (b - 1) * (c - 1) - d * (a + b + c - 5)
    }
}
