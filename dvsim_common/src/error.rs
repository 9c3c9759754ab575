//! Kernel error types.
//!
//! Two enums cover the recoverable error kinds from the error-handling
//! design: [`SetupError`] for binding an elaborated design to runtime
//! records, and [`KernelError`] for the one expected runtime failure —
//! a process assertion at `Error`/`Failure` severity. Kernel-internal
//! invariant violations remain `assert!`/`panic!` at their call sites;
//! they are bugs, not values callers are expected to handle.

use thiserror::Error;

/// Assertion severity, matching VHDL's four report/assert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Informational; never affects control flow.
    Note = 0,
    /// Informational; never affects control flow.
    Warning = 1,
    /// Terminates the process with failure status.
    Error = 2,
    /// Terminates the process with failure status.
    Failure = 3,
}

impl Severity {
    /// `true` for `Error` and `Failure` — the two levels that abort
    /// the simulation rather than just being logged.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        (self as u8) >= (Severity::Error as u8)
    }

    /// Decode the runtime ABI's `0..3` severity word.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Note),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            3 => Some(Severity::Failure),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Note => "Note",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Failure => "Failure",
        };
        f.write_str(s)
    }
}

/// Errors raised while binding an elaborated design to runtime
/// signal/process records (setup, §4.E).
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// The requested top-level design was not found in the elaborated
    /// tree (or the tree was empty).
    #[error("top-level design '{0}' not found")]
    DesignNotFound(String),

    /// Two signal declarations share an identifier.
    #[error("duplicate signal identifier: {0}")]
    DuplicateSignal(String),

    /// Two process statements share an identifier.
    #[error("duplicate process identifier: {0}")]
    DuplicateProcess(String),

    /// The JIT backend could not resolve a process entry point.
    #[error("JIT backend has no function pointer for process '{0}'")]
    MissingEntryPoint(String),

    /// The JIT backend could not resolve a signal's storage address.
    #[error("JIT backend has no storage address for signal '{0}'")]
    MissingSignalStorage(String),
}

/// Errors surfaced by the runtime ABI during simulation.
#[derive(Debug, Clone, Error)]
pub enum KernelError {
    /// A process called `assert_fail` with `severity >= Error`. The
    /// cycle driver maps this to the simulation's non-zero exit code
    /// rather than unwinding — see §6 "Exit codes".
    #[error("assertion {severity}: {message}")]
    Assertion {
        /// The severity the process supplied.
        severity: Severity,
        /// The message the process supplied.
        message: String,
    },

    /// A driver index passed to `sched_waveform` is out of range for
    /// the signal's declared driver count.
    #[error("driver index {index} out of range for signal '{signal}' (has {count} drivers)")]
    DriverIndexOutOfRange {
        /// The signal identifier.
        signal: String,
        /// The offending driver index.
        index: u32,
        /// The signal's declared driver count.
        count: u32,
    },
}
