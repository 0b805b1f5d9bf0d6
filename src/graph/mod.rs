//! Graph storage.

pub mod csr;

pub use csr::CsrGraph;
