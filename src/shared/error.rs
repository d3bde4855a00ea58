use std::fmt::{self, Display};
use crate::frontend::error::ParseError;
use crate::runtime::error::RuntimeError;

/// The stage of a run an error originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Parser,
    Interpreter,
}

impl Display for Stage {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parser => write!(f, "Parser"),
            Stage::Interpreter => write!(f, "Interpreter"),
        }
    }
}

/// An error generated during program parsing or execution.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

impl Error {
    /// The stage the error originated from.
    pub fn stage(self: &Self) -> Stage {
        match self {
            Self::ParseError(_) => Stage::Parser,
            Self::RuntimeError(_) => Stage::Interpreter,
        }
    }
}
