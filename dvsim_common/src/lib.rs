//! dvsim Common Library
//!
//! Shared building blocks used by the `dvsim` discrete-event simulation
//! kernel: the two-level time model, the kernel's error types, and
//! configuration loading.
//!
//! # Module Structure
//!
//! - [`time`] - Simulated time (`T`, femtoseconds) and delta-iteration counter
//! - [`error`] - `SetupError` / `KernelError`
//! - [`config`] - `SimConfig` loading from TOML
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! dvsim_common = { path = "../dvsim_common" }
//! ```
//!
//! ```rust
//! use dvsim_common::prelude::*;
//!
//! let t = Time::from_fs(500_000);
//! assert_eq!(t.format(), "500ps");
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod time;
