//! Tests for the CSR graph.

use super::*;

#[test]
fn from_adjacency_sorts_rows() {
    // 0 - 1, 0 - 2, 1 - 2 (undirected triangle, rows given unsorted).
    let adjacency = vec![vec![2, 1], vec![2, 0], vec![0, 1]];
    let graph = CsrGraph::from_adjacency(&adjacency);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.neighbors(0), &[1, 2]);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.degree(2), 2);
}

#[test]
fn from_parts_round_trip() {
    let row_ptr = vec![0, 2, 3, 3];
    let col_idx = vec![1, 2, 2];
    let graph = CsrGraph::from_parts(row_ptr, col_idx);

    assert_eq!(graph.neighbors(0), &[1, 2]);
    assert_eq!(graph.neighbors(1), &[2]);
    assert!(graph.neighbors(2).is_empty());
}

#[test]
fn try_from_parts_rejects_non_monotone_offsets() {
    let err = CsrGraph::try_from_parts(vec![0, 3, 2], vec![1, 2, 0]).unwrap_err();
    assert!(err.to_string().contains("monotone"));
}

#[test]
fn try_from_parts_rejects_unsorted_row() {
    // Ids are in bounds and loop-free, so only the ordering check can fire.
    let err = CsrGraph::try_from_parts(vec![0, 2, 2, 2], vec![2, 1]).unwrap_err();
    assert!(err.to_string().contains("ascending"));
}

#[test]
fn try_from_parts_rejects_duplicate_neighbor() {
    let err = CsrGraph::try_from_parts(vec![0, 2, 2, 2], vec![1, 1]).unwrap_err();
    assert!(err.to_string().contains("ascending"));
}

#[test]
fn try_from_parts_rejects_self_loop() {
    let err = CsrGraph::try_from_parts(vec![0, 1, 1], vec![0]).unwrap_err();
    assert!(err.to_string().contains("self-loop"));
}

#[test]
fn try_from_parts_rejects_out_of_bounds_target() {
    let err = CsrGraph::try_from_parts(vec![0, 1], vec![5]).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn empty_graph() {
    let graph = CsrGraph::from_adjacency(&[]);
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}
