//! The external interface to an elaborated design (§6).
//!
//! Parsing, elaboration, and code generation are out of scope; this
//! module is the seam those stages would plug into. An
//! [`ElaboratedDesign`] is just the static shape the setup phase needs:
//! signal identifiers with their declared driver count, and process
//! identifiers. Everything else a real front-end would carry (types,
//! expressions, sensitivity lists) lives on the other side of that seam.

/// A single elaborated signal declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDecl {
    /// The signal's identifier, as the code generator names it.
    pub name: String,
    /// The number of drivers (`D`) this signal was elaborated with.
    pub driver_count: u32,
}

impl SignalDecl {
    pub fn new(name: impl Into<String>, driver_count: u32) -> Self {
        Self { name: name.into(), driver_count }
    }
}

/// A single elaborated process statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDecl {
    /// The process's identifier, as the code generator names it.
    pub name: String,
}

impl ProcessDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The static shape of one elaborated design, ready for setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElaboratedDesign {
    /// The top-level design unit's identifier.
    pub name: String,
    /// Every signal declared anywhere in the design, flattened.
    pub signals: Vec<SignalDecl>,
    /// Every concurrent process statement, flattened.
    pub processes: Vec<ProcessDecl>,
}

impl ElaboratedDesign {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), signals: Vec::new(), processes: Vec::new() }
    }
}
