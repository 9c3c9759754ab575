//! A hand-built [`JitBackend`], used by the demo binary and the
//! integration tests in place of the out-of-scope parser/elaborator/
//! codegen pipeline.
//!
//! Grounded on the driver-registry pattern elsewhere in this codebase:
//! a constructor-injected map from identifier to behaviour, with a
//! builder-style API for assembling one alongside the matching
//! [`ElaboratedDesign`].

use crate::elaborated::{ElaboratedDesign, ProcessDecl, SignalDecl};
use crate::jit::{JitBackend, ProcFn, StdStandardNowFn};
use crate::signal::SignalId;
use std::collections::HashMap;

/// A `JitBackend` backed by plain maps, populated by hand.
#[derive(Default)]
pub struct MapBackend {
    funs: HashMap<String, ProcFn>,
    vars: HashMap<String, SignalId>,
    bound: Vec<String>,
}

impl MapBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as resolving to signal id `id`.
    pub fn with_signal(mut self, name: &str, id: SignalId) -> Self {
        self.vars.insert(name.to_string(), id);
        self
    }

    /// Register `name` as resolving to the compiled process body `f`.
    pub fn with_process(mut self, name: &str, f: ProcFn) -> Self {
        self.funs.insert(name.to_string(), f);
        self
    }

    /// `true` if `bind_fn` has been called for `name` — used by tests
    /// to check setup actually wired the built-in.
    pub fn was_bound(&self, name: &str) -> bool {
        self.bound.iter().any(|n| n == name)
    }
}

impl JitBackend for MapBackend {
    fn fun_ptr(&self, name: &str) -> Option<ProcFn> {
        self.funs.get(name).cloned()
    }

    fn var_ptr(&self, name: &str) -> Option<SignalId> {
        self.vars.get(name).copied()
    }

    fn bind_fn(&mut self, name: &str, _f: StdStandardNowFn) {
        self.bound.push(name.to_string());
    }
}

/// Accumulates an [`ElaboratedDesign`] and its matching [`MapBackend`]
/// together, so signal ids stay in sync with declaration order without
/// the caller having to count by hand.
#[derive(Default)]
pub struct DesignBuilder {
    signals: Vec<SignalDecl>,
    processes: Vec<ProcessDecl>,
    backend: MapBackend,
}

impl DesignBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a signal with `driver_count` drivers; returns the id it
    /// will be allocated during setup, for use by process closures.
    pub fn signal(mut self, name: &str, driver_count: u32) -> (Self, SignalId) {
        let id = self.signals.len() as SignalId;
        self.signals.push(SignalDecl::new(name, driver_count));
        self.backend = self.backend.with_signal(name, id);
        (self, id)
    }

    /// Declare a process bound to compiled body `f`.
    pub fn process(mut self, name: &str, f: ProcFn) -> Self {
        self.processes.push(ProcessDecl::new(name));
        self.backend = self.backend.with_process(name, f);
        self
    }

    /// Finish, producing the design and its backend.
    pub fn build(self, name: &str) -> (ElaboratedDesign, MapBackend) {
        (
            ElaboratedDesign { name: name.to_string(), signals: self.signals, processes: self.processes },
            self.backend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Kernel;
    use std::rc::Rc;

    #[test]
    fn design_builder_keeps_signal_ids_in_declaration_order() {
        let (builder, x) = DesignBuilder::new().signal("x", 1);
        let (builder, y) = builder.signal("y", 1);
        assert_eq!(x, 0);
        assert_eq!(y, 1);
        let noop: ProcFn = Rc::new(|_k: &mut Kernel, _r| Ok(()));
        let (design, backend) = builder.process("p", noop).build("t");
        assert_eq!(design.signals.len(), 2);
        assert_eq!(backend.var_ptr("y"), Some(1));
    }
}
