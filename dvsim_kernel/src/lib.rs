//! A discrete-event simulation kernel implementing the classical
//! VHDL-style simulation cycle: a two-level `(now, delta-iteration)`
//! time model, transport-delay signal drivers, a time-ordered delta
//! queue, and the runtime ABI compiled process code calls back into.
//!
//! Parsing, elaboration, code generation, a design library, and
//! resolution functions are out of scope (see [`elaborated`] and
//! [`jit`] for the seams those would plug into). What's here is
//! everything downstream of elaboration: [`setup::setup`] binds an
//! [`elaborated::ElaboratedDesign`] to a [`kernel::Kernel`], and
//! [`kernel::Kernel::run`] drives it to completion.

pub mod abi;
pub mod cycle;
pub mod diag;
pub mod elaborated;
pub mod jit;
pub mod kernel;
pub mod process;
pub mod queue;
pub mod setup;
pub mod signal;
pub mod testkit;

pub mod prelude {
    //! Convenience re-exports for building and driving a design.
    pub use crate::elaborated::{ElaboratedDesign, ProcessDecl, SignalDecl};
    pub use crate::jit::{JitBackend, ProcFn, StdStandardNowFn};
    pub use crate::kernel::{CycleStats, Kernel};
    pub use crate::setup::setup;
    pub use crate::signal::{Signal, SignalFlags, SignalId};
    pub use crate::testkit::{DesignBuilder, MapBackend};
    pub use dvsim_common::prelude::*;
}
