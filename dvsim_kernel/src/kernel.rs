//! The bound runtime: everything [`setup`](crate::setup::setup)
//! produces and the cycle driver (`cycle.rs`) and runtime ABI
//! (`abi.rs`) operate on.

use crate::process::{ProcessId, ProcessRecord};
use crate::queue::DeltaQueue;
use crate::signal::{Signal, SignalId, SignalStore};
use dvsim_common::time::Time;

/// Counters describing a completed (or in-progress) run, surfaced for
/// diagnostics and tests rather than anything the cycle contract itself
/// depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Number of cohorts (`(now, iteration)` pairs) dispatched so far.
    pub cycles: u64,
    /// Total number of queue nodes dispatched (wakes + commits).
    pub events: u64,
    /// The largest delta-iteration number reached at any time.
    pub max_iteration: i32,
}

impl CycleStats {
    fn record_event(&mut self) {
        self.events += 1;
    }

    fn record_cycle(&mut self, iteration: i32) {
        self.cycles += 1;
        self.max_iteration = self.max_iteration.max(iteration);
    }
}

/// The bound simulation runtime: signal/waveform store, delta queue,
/// process table, and the handful of scalars (`now`, `iteration`,
/// active-process slot) the runtime ABI reads and writes.
#[derive(Debug)]
pub struct Kernel {
    pub(crate) signals: SignalStore,
    pub(crate) queue: DeltaQueue,
    pub(crate) processes: Vec<ProcessRecord>,
    pub(crate) now: Time,
    pub(crate) iteration: i32,
    pub(crate) active_process: Option<ProcessId>,
    pub(crate) stats: CycleStats,
    pub(crate) max_time: Option<Time>,
    pub(crate) max_iterations: Option<u64>,
}

impl Kernel {
    /// The current simulation time.
    #[inline]
    pub fn now(&self) -> Time {
        self.now
    }

    /// The current delta-iteration counter.
    #[inline]
    pub fn iteration(&self) -> i32 {
        self.iteration
    }

    /// Borrow a signal's current state by id.
    #[inline]
    pub fn signal(&self, id: SignalId) -> &Signal {
        self.signals.get(id)
    }

    /// `true` once the delta queue has fully drained.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Counters for the run so far.
    #[inline]
    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    pub(crate) fn record_event(&mut self) {
        self.stats.record_event();
    }

    pub(crate) fn record_cycle(&mut self, iteration: i32) {
        self.stats.record_cycle(iteration);
    }
}
