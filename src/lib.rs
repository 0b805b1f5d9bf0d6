//! # `rooftop` — adaptive motif counting over CSR graphs
//!
//! A parallel compute kernel that counts two small subgraph patterns — a
//! five-vertex "house" and a six-vertex "triangle chain" — rooted at each
//! vertex of a large sparse graph.
//!
//! The combinatorics are the easy part. The engineering problem is skew:
//! per-root work varies by orders of magnitude because some adjacency
//! intersections are enormous. The kernel runs a fixed pool of workers in
//! lockstep (SPMD) and balances load adaptively:
//!
//! - a cheap **classifier** flags second-level neighbors whose pair
//!   intersection crosses a threshold ("heavy"),
//! - an **owner-broadcast protocol** lets all workers jointly process each
//!   heavy neighbor, one barrier-separated round at a time,
//! - everything light is processed **independently**, and small-degree roots
//!   skip the machinery entirely via round-robin fallback.
//!
//! ## Safety discipline
//!
//! Workers synchronize exclusively through barrier rendezvous — no locks,
//! no atomics, no task queue. Shared mutable state is confined to
//! single-writer cells ([`memory::slots`]) whose write is always separated
//! from every read by a barrier; the barrier provides the happens-before
//! edge, and the protocol provides the exclusion. All buffers are
//! fixed-capacity and pre-sized, so no allocation happens during
//! steady-state processing; capacity limits degrade to undercounts or lost
//! load balancing, never to unsafety.
//!
//! ## Example
//!
//! ```rust
//! use rooftop::{CsrGraph, House, KernelConfig, MotifKernel};
//!
//! // A square with a roof: exactly one house, rooted at vertex 4.
//! let graph = CsrGraph::from_adjacency(&[
//!     vec![3, 4],
//!     vec![2, 4],
//!     vec![1, 3],
//!     vec![0, 2, 4],
//!     vec![0, 1, 3],
//! ]);
//!
//! let config = KernelConfig { workers: 2, ..KernelConfig::default() };
//! let kernel = MotifKernel::new(&graph, House, config).unwrap();
//! let counts = kernel.count(&[0, 1, 2, 3, 4]);
//! assert_eq!(counts, vec![0, 0, 0, 0, 1]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

pub mod config;
pub mod graph;
pub mod intersect;
pub mod kernel;
pub mod memory;
pub mod motif;

pub use config::KernelConfig;
pub use graph::CsrGraph;
pub use kernel::{KernelRun, MotifKernel};
pub use motif::{House, Motif, TriangleChain};

// Compile-time layout checks: the shared cells must add no overhead over
// the raw values they guard.
const _: () = {
    use core::mem;

    use crate::memory::slots::BroadcastSlot;

    assert!(mem::size_of::<BroadcastSlot<u32>>() == mem::size_of::<u32>());
    assert!(mem::size_of::<BroadcastSlot<usize>>() == mem::size_of::<usize>());
    assert!(mem::align_of::<BroadcastSlot<u32>>() == mem::align_of::<u32>());
};
