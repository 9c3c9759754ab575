//! Runtime/codegen interface (§6): how the kernel reaches compiled
//! process bodies and exports its own built-ins to them.
//!
//! A real front-end would hand the kernel machine code produced by a
//! JIT; here "compiled" process code is just a Rust closure, so
//! [`JitBackend`] is a small registry the setup phase queries by
//! identifier — grounded on the driver-registry factory pattern used
//! elsewhere in this codebase for binding names to behaviour.

use crate::kernel::Kernel;
use crate::signal::SignalId;
use dvsim_common::error::KernelError;
use std::rc::Rc;

/// A compiled process body. Takes the active-process dispatch context
/// and the `reset` flag, and propagates a fatal assertion via `?`.
pub type ProcFn = Rc<dyn Fn(&mut Kernel, bool) -> Result<(), KernelError>>;

/// The `std_standard_now` built-in's shape: given the kernel, return
/// its current simulation time. A plain function pointer rather than a
/// closure, since it captures no state of its own — the kernel handle
/// it's called with *is* the state.
pub type StdStandardNowFn = fn(&Kernel) -> dvsim_common::time::Time;

/// Looks up compiled entry points and built-in bindings by identifier.
///
/// Implementations are expected to already agree with the
/// [`ElaboratedDesign`](crate::elaborated::ElaboratedDesign) passed to
/// [`setup`](crate::setup::setup) in the same call — `var_ptr` exists
/// so setup can assert that agreement rather than silently trusting it.
pub trait JitBackend {
    /// Resolve a process's compiled entry point.
    fn fun_ptr(&self, name: &str) -> Option<ProcFn>;

    /// Resolve the runtime signal id a compiled reference to `name`
    /// expects to address.
    fn var_ptr(&self, name: &str) -> Option<SignalId>;

    /// Export a runtime built-in to the backend under `name`.
    fn bind_fn(&mut self, name: &str, f: StdStandardNowFn);
}
