//! The two-tier memory model.
//!
//! The kernel distinguishes a **bulk** tier — the immutable CSR graph plus a
//! small set of inter-worker [`StagingArea`] buffers — from a **scratch**
//! tier of small [`WorkerScratch`] areas owned by individual workers. The
//! bulk tier is shared and long-lived; scratch is worker-exclusive and
//! call-scoped. Intersection routines take explicit buffer handles, so the
//! tier an operation touches is always visible at the call site.
//!
//! [`slots`] holds the single-writer shared cells used by the cooperative
//! protocol; see that module for the barrier discipline they rely on.

pub mod fixed_buf;
pub mod scratch;
pub mod slots;
pub mod staging;

pub use fixed_buf::FixedBuf;
pub use scratch::WorkerScratch;
pub use slots::{BroadcastSlot, ExclusiveSlots, WorkerSlots};
pub use staging::StagingArea;
