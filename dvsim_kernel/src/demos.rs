//! Built-in demo designs, standing in for the out-of-scope design
//! library referenced by the external interfaces (§6). Each matches one
//! of the literal end-to-end scenarios this kernel is tested against.

use dvsim_common::error::Severity;
use dvsim_kernel::elaborated::ElaboratedDesign;
use dvsim_kernel::jit::ProcFn;
use dvsim_kernel::kernel::Kernel;
use dvsim_kernel::testkit::{DesignBuilder, MapBackend};
use std::rc::Rc;

/// Resolve a demo design by name.
pub fn build(name: &str) -> Option<(ElaboratedDesign, MapBackend)> {
    match name {
        "constant" => Some(constant_driver()),
        "pulse" => Some(timed_pulse()),
        "oscillator" => Some(delta_oscillator()),
        "assert" => Some(assertion_failure()),
        _ => None,
    }
}

/// A process that drives `x` to a fixed value once, at reset.
fn constant_driver() -> (ElaboratedDesign, MapBackend) {
    let (builder, x) = DesignBuilder::new().signal("x", 1);
    let p: ProcFn = Rc::new(move |k: &mut Kernel, _reset| k.sched_waveform(x, 0, 1, 0));
    builder.process("drive_x", p).build("constant")
}

/// `s` rises at 1000fs and falls at 2000fs — the scenario-3 pulse.
fn timed_pulse() -> (ElaboratedDesign, MapBackend) {
    let (builder, s) = DesignBuilder::new().signal("s", 1);
    let p: ProcFn = Rc::new(move |k: &mut Kernel, _reset| {
        k.sched_waveform(s, 0, 1, 1000)?;
        k.sched_waveform(s, 0, 0, 2000)
    });
    builder.process("pulse", p).build("pulse")
}

/// Two cross-coupled processes that flip `x` and `y` every delta cycle
/// forever — must be run with a `max_iterations` cap.
fn delta_oscillator() -> (ElaboratedDesign, MapBackend) {
    let (builder, x) = DesignBuilder::new().signal("x", 1);
    let (builder, y) = builder.signal("y", 1);

    let p1: ProcFn = Rc::new(move |k: &mut Kernel, reset| {
        let next = if reset { 1 } else { 1 - k.signal(y).resolved() };
        k.sched_waveform(x, 0, next, 0)?;
        k.sched_process(0);
        Ok(())
    });
    let p2: ProcFn = Rc::new(move |k: &mut Kernel, reset| {
        let next = if reset { 0 } else { 1 - k.signal(x).resolved() };
        k.sched_waveform(y, 0, next, 0)?;
        k.sched_process(0);
        Ok(())
    });

    builder.process("p1", p1).process("p2", p2).build("oscillator")
}

/// A process that fails an assertion during its reset invocation.
fn assertion_failure() -> (ElaboratedDesign, MapBackend) {
    let builder = DesignBuilder::new();
    let p: ProcFn = Rc::new(|k: &mut Kernel, _reset| {
        k.assert_fail(false, "bad", Severity::Failure)
    });
    builder.process("check", p).build("assert")
}
