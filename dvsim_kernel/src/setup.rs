//! Setup (component E): bind an elaborated design to runtime records.
//!
//! Four steps, in order: allocate signal storage, allocate process
//! records, wire the built-ins, and hand back a [`Kernel`] ready for
//! its init phase. Grounded on the elaborated-to-runtime binding shape
//! of §4.E; structurally this plays the role a hardware-abstraction
//! layer's startup routine plays in binding named devices to driver
//! instances.

use crate::elaborated::ElaboratedDesign;
use crate::jit::JitBackend;
use crate::kernel::{CycleStats, Kernel};
use crate::process::ProcessRecord;
use crate::queue::DeltaQueue;
use crate::signal::SignalStore;
use dvsim_common::config::SimConfig;
use dvsim_common::error::SetupError;
use dvsim_common::time::Time;
use std::collections::HashSet;

fn std_standard_now(kernel: &Kernel) -> Time {
    kernel.now()
}

/// Bind `design` to a fresh [`Kernel`] through `backend`.
///
/// # Errors
/// See [`SetupError`] for the conditions each variant covers.
pub fn setup(
    design: &ElaboratedDesign,
    backend: &mut dyn JitBackend,
    config: SimConfig,
) -> Result<Kernel, SetupError> {
    if design.signals.is_empty() && design.processes.is_empty() && design.name.is_empty() {
        return Err(SetupError::DesignNotFound(design.name.clone()));
    }

    let mut signals = SignalStore::new();
    let mut seen_signals = HashSet::new();
    for decl in &design.signals {
        if !seen_signals.insert(decl.name.clone()) {
            return Err(SetupError::DuplicateSignal(decl.name.clone()));
        }
        let id = signals.allocate(decl.name.clone(), decl.driver_count);
        let bound = backend
            .var_ptr(&decl.name)
            .ok_or_else(|| SetupError::MissingSignalStorage(decl.name.clone()))?;
        if bound != id {
            return Err(SetupError::MissingSignalStorage(decl.name.clone()));
        }
    }

    let mut processes = Vec::with_capacity(design.processes.len());
    let mut seen_processes = HashSet::new();
    for decl in &design.processes {
        if !seen_processes.insert(decl.name.clone()) {
            return Err(SetupError::DuplicateProcess(decl.name.clone()));
        }
        let proc_fn = backend
            .fun_ptr(&decl.name)
            .ok_or_else(|| SetupError::MissingEntryPoint(decl.name.clone()))?;
        processes.push(ProcessRecord { name: decl.name.clone(), proc_fn });
    }

    backend.bind_fn("std_standard_now", std_standard_now);

    tracing::trace!(
        design = %design.name,
        signals = signals.len(),
        processes = processes.len(),
        "design bound"
    );

    Ok(Kernel {
        signals,
        queue: DeltaQueue::new(),
        processes,
        now: Time::ZERO,
        iteration: -1,
        active_process: None,
        stats: CycleStats::default(),
        max_time: config.max_time_fs.map(Time::from_fs),
        max_iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elaborated::{ProcessDecl, SignalDecl};
    use crate::jit::ProcFn;
    use crate::kernel::Kernel;
    use crate::testkit::MapBackend;
    use std::rc::Rc;

    fn noop() -> ProcFn {
        Rc::new(|_k: &mut Kernel, _reset: bool| Ok(()))
    }

    #[test]
    fn binds_matching_design_and_backend() {
        let design = ElaboratedDesign {
            name: "top".into(),
            signals: vec![SignalDecl::new("x", 1)],
            processes: vec![ProcessDecl::new("p")],
        };
        let mut backend = MapBackend::new().with_signal("x", 0).with_process("p", noop());
        let kernel = setup(&design, &mut backend, SimConfig::default()).unwrap();
        assert_eq!(kernel.signal(0).driver_count(), 1);
        assert!(backend.was_bound("std_standard_now"));
    }

    #[test]
    fn rejects_duplicate_signal_names() {
        let design = ElaboratedDesign {
            name: "top".into(),
            signals: vec![SignalDecl::new("x", 1), SignalDecl::new("x", 1)],
            processes: vec![],
        };
        let mut backend = MapBackend::new().with_signal("x", 0);
        assert!(matches!(
            setup(&design, &mut backend, SimConfig::default()),
            Err(SetupError::DuplicateSignal(_))
        ));
    }

    #[test]
    fn rejects_process_missing_from_backend() {
        let design = ElaboratedDesign {
            name: "top".into(),
            signals: vec![],
            processes: vec![ProcessDecl::new("ghost")],
        };
        let mut backend = MapBackend::new();
        assert!(matches!(
            setup(&design, &mut backend, SimConfig::default()),
            Err(SetupError::MissingEntryPoint(_))
        ));
    }

    #[test]
    fn rejects_signal_id_mismatch_with_backend() {
        let design = ElaboratedDesign {
            name: "top".into(),
            signals: vec![SignalDecl::new("x", 1)],
            processes: vec![],
        };
        // Backend claims "x" is signal 7, but setup will allocate id 0.
        let mut backend = MapBackend::new().with_signal("x", 7);
        assert!(matches!(
            setup(&design, &mut backend, SimConfig::default()),
            Err(SetupError::MissingSignalStorage(_))
        ));
    }

    #[test]
    fn rejects_nameless_empty_design() {
        let design = ElaboratedDesign::new("");
        let mut backend = MapBackend::new();
        assert!(matches!(
            setup(&design, &mut backend, SimConfig::default()),
            Err(SetupError::DesignNotFound(_))
        ));
    }
}
