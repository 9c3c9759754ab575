//! The runtime ABI (component D): the handful of calls compiled
//! process code makes back into the kernel. Grounded directly on §4.D;
//! each operation here is a method on [`Kernel`] so a [`ProcFn`](crate::jit::ProcFn)
//! closure can call it through its `&mut Kernel` argument.

use crate::diag;
use crate::kernel::Kernel;
use crate::queue::Payload;
use crate::signal::SignalId;
use dvsim_common::error::{KernelError, Severity};
use dvsim_common::time::Time;

impl Kernel {
    /// Schedule the currently active process to wake again.
    ///
    /// `delay > 0` schedules a real time offset; `delay <= 0` schedules
    /// an immediate (delta-0) wake-up in the next delta iteration.
    ///
    /// # Panics
    /// Panics if called while no process is active — this is an ABI
    /// contract violation by the caller, not a recoverable condition.
    pub fn sched_process(&mut self, delay: i64) {
        let pid = self
            .active_process
            .expect("sched_process called with no active process");
        let delta_abs = if delay > 0 { delay as u64 } else { 0 };
        self.queue.insert(delta_abs, self.iteration, Payload::Wake(pid));
    }

    /// Schedule a transport-delay transaction on `signal`'s
    /// `driver_index`-th driver, effective `after` femtoseconds from
    /// now, and enqueue the corresponding commit event.
    ///
    /// # Errors
    /// Returns [`KernelError::DriverIndexOutOfRange`] if `driver_index`
    /// exceeds the signal's declared driver count.
    pub fn sched_waveform(
        &mut self,
        signal: SignalId,
        driver_index: u32,
        value: u64,
        after: u64,
    ) -> Result<(), KernelError> {
        if self.signals.schedule(signal, driver_index, value, self.now.saturating_add(after)).is_none() {
            let sig = self.signals.get(signal);
            return Err(KernelError::DriverIndexOutOfRange {
                signal: sig.name().to_string(),
                index: driver_index,
                count: sig.driver_count(),
            });
        }
        self.queue.insert(after, self.iteration, Payload::Commit(signal));
        Ok(())
    }

    /// Report or assert a condition. Logs at `severity`'s level, and
    /// fails the simulation (via `Err`) when `severity.is_fatal()`.
    pub fn assert_fail(&mut self, is_report: bool, message: &str, severity: Severity) -> Result<(), KernelError> {
        diag::emit(self.now, self.iteration, is_report, severity, message);
        if severity.is_fatal() {
            Err(KernelError::Assertion { severity, message: message.to_string() })
        } else {
            Ok(())
        }
    }

    /// `std_standard_now`: the current simulation time, in femtoseconds.
    pub fn std_standard_now(&self) -> Time {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elaborated::{ElaboratedDesign, ProcessDecl, SignalDecl};
    use crate::jit::{ProcFn, StdStandardNowFn};
    use crate::setup::setup;
    use crate::testkit::MapBackend;
    use dvsim_common::config::SimConfig;
    use std::rc::Rc;

    fn noop_process() -> ProcFn {
        Rc::new(|_k: &mut Kernel, _reset: bool| Ok(()))
    }

    fn bound_kernel(signal_driver_count: u32) -> Kernel {
        let design = ElaboratedDesign {
            name: "t".into(),
            signals: vec![SignalDecl::new("s", signal_driver_count)],
            processes: vec![ProcessDecl::new("p")],
        };
        let mut backend = MapBackend::new().with_signal("s", 0).with_process("p", noop_process());
        setup(&design, &mut backend, SimConfig::default()).unwrap()
    }

    #[test]
    fn sched_waveform_rejects_bad_driver_index() {
        let mut kernel = bound_kernel(1);
        let err = kernel.sched_waveform(0, 9, 1, 0).unwrap_err();
        assert!(matches!(err, KernelError::DriverIndexOutOfRange { index: 9, count: 1, .. }));
    }

    #[test]
    fn assert_fail_is_ok_below_error_severity() {
        let mut kernel = bound_kernel(1);
        assert!(kernel.assert_fail(true, "fyi", Severity::Note).is_ok());
        assert!(kernel.assert_fail(false, "careful", Severity::Warning).is_ok());
    }

    #[test]
    fn assert_fail_errors_at_error_and_failure() {
        let mut kernel = bound_kernel(1);
        assert!(kernel.assert_fail(false, "bad", Severity::Error).is_err());
        assert!(kernel.assert_fail(false, "worse", Severity::Failure).is_err());
    }

    #[test]
    #[should_panic(expected = "no active process")]
    fn sched_process_without_active_process_panics() {
        let mut kernel = bound_kernel(1);
        kernel.sched_process(0);
    }

    fn _type_check(_f: StdStandardNowFn) {}
}
