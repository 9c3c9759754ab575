//! Common re-exports for convenience.
//!
//! ```rust
//! use dvsim_common::prelude::*;
//! ```

pub use crate::config::{ConfigError, ConfigLoader, SimConfig};
pub use crate::error::{KernelError, Severity, SetupError};
pub use crate::time::Time;
