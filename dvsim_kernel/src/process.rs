//! Runtime process records bound during setup.

use crate::jit::ProcFn;

/// Identifies a process within a [`Kernel`](crate::kernel::Kernel)'s
/// process table.
pub type ProcessId = u32;

/// A process bound to its compiled entry point.
pub struct ProcessRecord {
    pub(crate) name: String,
    pub(crate) proc_fn: ProcFn,
}

impl std::fmt::Debug for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessRecord").field("name", &self.name).finish_non_exhaustive()
    }
}
