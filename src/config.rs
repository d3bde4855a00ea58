/// Type of a single cell of the cell list. Cells hold code and stack values alike and are unbounded.
pub type Cell = num_bigint::BigUint;

/// Type representing an index into the cell list.
pub type CellAddress = usize;

/// Symbol emitted once per repeat by the default meow effect.
pub const CAT_SYMBOL: &str = "🐈";

/// Symbol framing error reports.
pub const ERROR_SYMBOL: &str = "👽";

/// Character terminating each group of symbolic source.
pub const SEPARATOR: char = ';';

/// Runtime limits of the virtual machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VMConfig {
    /// Maximum number of instructions to execute before the run is aborted. `None` runs until the
    /// instruction pointer leaves the cell list, which may be never.
    pub step_limit: Option<u64>,
}

impl VMConfig {
    /// Creates a configuration without limits.
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the maximum number of instructions to execute.
    pub fn with_step_limit(self: Self, step_limit: u64) -> Self {
        VMConfig { step_limit: Some(step_limit), ..self }
    }
}
