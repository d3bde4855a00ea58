use crate::{Cell, CellAddress};

/// Represents the various possible runtime error-kinds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// An instruction that takes an operand is the last cell of the list.
    #[error("operand not found")]
    OperandNotFound,
    /// LOAD/SAVE addressed a cell outside of the list.
    #[error("invalid index {0}")]
    InvalidIndex(Cell),
    /// JMP/JE targeted a cell outside of the list.
    #[error("invalid jump target {0}")]
    InvalidJumpTarget(Cell),
    /// An instruction required more cells than the list holds.
    #[error("stack underflow: {needed} cells required, {available} available")]
    StackUnderflow { needed: CellAddress, available: CellAddress },
    /// The configured step limit was reached before the program terminated.
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),
}

/// An error reported by the runtime.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    ip: CellAddress,
}

impl RuntimeError {
    pub(crate) fn new(ip: CellAddress, kind: RuntimeErrorKind) -> RuntimeError {
        Self { kind, ip }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &RuntimeErrorKind {
        &self.kind
    }
    /// Instruction pointer of the failing instruction.
    pub fn ip(self: &Self) -> CellAddress {
        self.ip
    }
}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
