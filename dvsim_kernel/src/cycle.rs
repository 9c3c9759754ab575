//! The cycle driver (component F): the classical VHDL simulation loop —
//! one init phase, then repeated cycles until the delta queue drains.
//!
//! Grounded on the init-then-repeat shape of the teacher's
//! `CycleRunner`, generalised from a fixed-period real-time tick to a
//! queue-driven logical-time advance. `step()` exposes one cycle at a
//! time so tests can observe intermediate state (e.g. the delta
//! oscillator's toggle pattern); `run()` drives `step()` to completion.

use crate::kernel::Kernel;
use crate::queue::Payload;
use dvsim_common::error::KernelError;

impl Kernel {
    /// Invoke every bound process exactly once with `reset = true`.
    /// Must be called before the first [`step`](Kernel::step) or
    /// [`run`](Kernel::run).
    pub fn init(&mut self) -> Result<(), KernelError> {
        self.now = dvsim_common::time::Time::ZERO;
        self.iteration = -1;
        for pid in 0..self.processes.len() as u32 {
            self.dispatch(pid, true)?;
        }
        Ok(())
    }

    /// Drain the delta queue to completion, honouring the optional
    /// `max_time`/`max_iterations` caps from configuration. These caps
    /// are not part of the simulation cycle's own termination
    /// contract — they are an outer bound for otherwise-unbounded
    /// designs.
    pub fn run(&mut self) -> Result<(), KernelError> {
        self.init()?;
        loop {
            if self.queue.is_empty() {
                break;
            }
            if let Some(cap) = self.max_time {
                if self.now.saturating_add(self.queue.head_delta().unwrap_or(0)) > cap {
                    tracing::info!(now = %self.now, "max_time reached, stopping");
                    break;
                }
            }
            if let Some(cap) = self.max_iterations {
                if self.stats.cycles >= cap {
                    tracing::info!(cycles = self.stats.cycles, "max_iterations reached, stopping");
                    break;
                }
            }
            self.step()?;
        }
        tracing::info!(
            cycles = self.stats.cycles,
            events = self.stats.events,
            final_time = %self.now,
            "simulation complete"
        );
        Ok(())
    }

    /// Run exactly one cycle: advance time to the next cohort, drain it
    /// (processes and signal commits interleaved in queue order), then
    /// clear the flags that cohort set.
    ///
    /// Flags are cleared at the *end* of the cycle that set them (spec
    /// §4.F step 3 / invariant AS1), not at the start of the next one:
    /// a signal's `ACTIVE`/`EVENT` bits are visible only to code that
    /// runs within the same cohort as the commit — later dispatches in
    /// this same drain loop — never to a caller inspecting the signal
    /// after `step()` has returned.
    ///
    /// # Panics
    /// Panics if the delta queue is empty; callers must check
    /// [`Kernel::is_idle`] first.
    pub fn step(&mut self) -> Result<(), KernelError> {
        let head_delta = self.queue.head_delta().expect("step() called on an idle kernel");

        if head_delta > 0 {
            self.now = self.now.saturating_add(head_delta);
            self.queue.zero_head_delta();
            self.iteration = 0;
        } else {
            self.iteration = self
                .queue
                .head_iteration()
                .expect("step() called on an idle kernel");
        }
        let cohort = self.iteration;

        loop {
            let (payload, _) = self.queue.pop().expect("cohort head disappeared mid-drain");
            match payload {
                Payload::Wake(pid) => self.dispatch(pid, false)?,
                Payload::Commit(sid) => self.signals.commit(sid, self.now, self.iteration),
            }
            self.record_event();

            if !self.queue.head_is_same_cohort(cohort) {
                break;
            }
        }

        self.signals.clear_active();
        self.record_cycle(cohort);
        Ok(())
    }

    fn dispatch(&mut self, pid: u32, reset: bool) -> Result<(), KernelError> {
        self.active_process = Some(pid);
        let proc_fn = self.processes[pid as usize].proc_fn.clone();
        tracing::trace!(process = %self.processes[pid as usize].name, reset, "dispatch");
        let result = proc_fn(self, reset);
        self.active_process = None;
        result
    }
}
