//! Compressed sparse row graph with sorted adjacency slices.
//!
//! Memory layout:
//! - `row_ptr`: `Vec<usize>` of length `n + 1`, monotone edge offsets
//! - `col_idx`: `Vec<u32>` of neighbor ids, each per-vertex slice strictly
//!   ascending
//!
//! The ascending-slice invariant is load-bearing: every intersection merge
//! and every `second < root` early exit in the kernel depends on it, so the
//! constructors validate it up front rather than leaving malformed input to
//! produce silently wrong counts.

use anyhow::{ensure, Result};

/// An immutable CSR graph.
///
/// ### Performance characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `from_adjacency` | \(O(n + m \log m)\) (sorts each row) |
/// | `neighbors` | \(O(1)\), returns a slice |
/// | `degree` | \(O(1)\) |
#[derive(Debug)]
pub struct CsrGraph {
    row_ptr: Vec<usize>,
    col_idx: Vec<u32>,
}

impl CsrGraph {
    /// Builds a CSR graph from an adjacency list, sorting and deduplicating
    /// each row.
    ///
    /// # Panics
    /// Panics if any edge references a vertex out of bounds or is a
    /// self-loop.
    pub fn from_adjacency(adjacency: &[Vec<u32>]) -> Self {
        let n = adjacency.len();

        let mut row_ptr = Vec::with_capacity(n + 1);
        let mut col_idx = Vec::new();
        row_ptr.push(0);

        for (u, nbrs) in adjacency.iter().enumerate() {
            let mut row: Vec<u32> = nbrs.clone();
            row.sort_unstable();
            row.dedup();
            for &v in &row {
                assert!((v as usize) < n, "edge {u}->{v} is out of bounds for n={n}");
                assert!(v as usize != u, "self-loop at vertex {u}");
            }
            col_idx.extend_from_slice(&row);
            row_ptr.push(col_idx.len());
        }

        Self { row_ptr, col_idx }
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// # Panics
    /// Panics under the conditions `try_from_parts` reports as errors.
    pub fn from_parts(row_ptr: Vec<usize>, col_idx: Vec<u32>) -> Self {
        match Self::try_from_parts(row_ptr, col_idx) {
            Ok(graph) => graph,
            Err(err) => panic!("invalid CSR parts: {err}"),
        }
    }

    /// Builds a CSR graph from CSR parts, reporting malformed input.
    ///
    /// Validates monotone offsets, in-bounds targets, the absence of
    /// self-loops, and strictly ascending per-vertex slices.
    pub fn try_from_parts(row_ptr: Vec<usize>, col_idx: Vec<u32>) -> Result<Self> {
        ensure!(!row_ptr.is_empty(), "row_ptr must have length n+1");
        let n = row_ptr.len() - 1;
        for w in row_ptr.windows(2) {
            ensure!(w[0] <= w[1], "row_ptr must be monotone");
        }
        ensure!(
            row_ptr[n] == col_idx.len(),
            "row_ptr last entry {} must equal col_idx length {}",
            row_ptr[n],
            col_idx.len()
        );
        for u in 0..n {
            let row = &col_idx[row_ptr[u]..row_ptr[u + 1]];
            for &v in row {
                ensure!((v as usize) < n, "edge {u}->{v} out of bounds for n={n}");
                ensure!(v as usize != u, "self-loop at vertex {u}");
            }
            for w in row.windows(2) {
                ensure!(
                    w[0] < w[1],
                    "adjacency of vertex {u} is not strictly ascending"
                );
            }
        }
        Ok(Self { row_ptr, col_idx })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.row_ptr.len() - 1
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.col_idx.len()
    }

    /// The ascending neighbor slice of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        let v = vertex as usize;
        assert!(v < self.vertex_count(), "vertex {vertex} out of bounds");
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }

    /// The out-degree of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn degree(&self, vertex: u32) -> usize {
        let v = vertex as usize;
        assert!(v < self.vertex_count(), "vertex {vertex} out of bounds");
        self.row_ptr[v + 1] - self.row_ptr[v]
    }
}

#[cfg(test)]
mod tests;
