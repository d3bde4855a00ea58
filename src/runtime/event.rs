use std::fmt::{self, Display};
use crate::{Cell, CellAddress};

/// Snapshot of the VM handed to the step hook.
///
/// One event is emitted before each instruction executes and one after the program terminated. The termination
/// event has no instruction pointer, opcode, name or operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuntimeEvent<'a> {
    /// Position of the instruction about to execute.
    pub ip      : Option<CellAddress>,
    /// Raw cell value at `ip`. Values beyond the instruction table are reported as-is.
    pub opcode  : Option<&'a Cell>,
    /// Mnemonic of the instruction the opcode resolved to.
    pub name    : Option<&'static str>,
    /// Resolved operand, if the instruction takes one.
    pub operand : Option<&'a Cell>,
    /// Current state of the cell list.
    pub cells   : &'a [Cell],
}

impl<'a> RuntimeEvent<'a> {
    pub(crate) fn step(ip: CellAddress, opcode: &'a Cell, name: &'static str, operand: Option<&'a Cell>, cells: &'a [Cell]) -> Self {
        RuntimeEvent {
            ip      : Some(ip),
            opcode  : Some(opcode),
            name    : Some(name),
            operand : operand,
            cells   : cells,
        }
    }
    pub(crate) fn termination(cells: &'a [Cell]) -> Self {
        RuntimeEvent {
            ip      : None,
            opcode  : None,
            name    : None,
            operand : None,
            cells   : cells,
        }
    }
    /// Whether this is the event emitted after the program terminated.
    pub fn is_termination(self: &Self) -> bool {
        self.ip.is_none()
    }
}

impl<'a> Display for RuntimeEvent<'a> {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ip, self.name) {
            (Some(ip), Some(name)) => {
                write!(f, "{:>5} {:<4}", ip, name)?;
                match self.operand {
                    Some(operand) => write!(f, " {:<6}", operand)?,
                    None => write!(f, "       ")?,
                }
            },
            _ => write!(f, "  end            ")?,
        }
        write!(f, " {:?}", self.cells)
    }
}
