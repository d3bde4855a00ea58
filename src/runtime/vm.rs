//! A virtual machine for running cell lists.

use crate::{Cell, CellAddress, VMConfig};
use super::error::{RuntimeError, RuntimeErrorKind, RuntimeResult};
use super::event::RuntimeEvent;
use super::hooks::Hooks;
use super::instructions::{Flow, Instruction, InstructionResult, OperandRule};

/// A virtual machine for running cell lists.
///
/// The cell list is code and stack at once: the instruction pointer walks it from the front while instructions push
/// and pop at its tail. The program terminates once the instruction pointer leaves the list.
#[derive(Debug)]
pub struct VM<'h> {
    pub(super) cells    : Vec<Cell>,
    pub(super) ip       : CellAddress,
    pub(super) hooks    : Hooks<'h>,
    config              : VMConfig,
    steps               : u64,
}

/// Public VM methods.
impl<'h> VM<'h> {
    /// Create a new VM instance for the given cell list.
    pub fn new(cells: Vec<Cell>, hooks: Hooks<'h>) -> Self {
        Self::with_config(cells, hooks, VMConfig::default())
    }

    /// Create a new VM instance with the given runtime limits.
    pub fn with_config(cells: Vec<Cell>, hooks: Hooks<'h>, config: VMConfig) -> Self {
        VM {
            cells   : cells,
            ip      : 0,
            hooks   : hooks,
            config  : config,
            steps   : 0,
        }
    }

    /// Executes instructions until the instruction pointer leaves the cell list or an error occurs.
    ///
    /// On success the step hook receives a final termination event. On error no further events are emitted.
    #[tracing::instrument(level = "debug", skip_all, fields(cells = self.cells.len()))]
    pub fn run(self: &mut Self) -> RuntimeResult {
        while self.ip < self.cells.len() {
            if let Some(limit) = self.config.step_limit {
                if self.steps >= limit {
                    return Err(RuntimeError::new(self.ip, RuntimeErrorKind::StepLimitExceeded(limit)));
                }
            }
            self.step()?;
        }
        tracing::debug!(steps = self.steps, "terminated");
        self.hooks.step(&RuntimeEvent::termination(&self.cells));
        Ok(())
    }

    /// Returns the current cell list.
    pub fn cells(self: &Self) -> &[Cell] {
        &self.cells
    }

    /// Consumes the VM, returning the cell list.
    pub fn into_cells(self: Self) -> Vec<Cell> {
        self.cells
    }

    /// Returns the current instruction pointer.
    pub fn ip(self: &Self) -> CellAddress {
        self.ip
    }

    /// Returns the number of instructions executed so far.
    pub fn steps(self: &Self) -> u64 {
        self.steps
    }

    pub(crate) fn hooks_mut(self: &mut Self) -> &mut Hooks<'h> {
        &mut self.hooks
    }

    /// Executes the instruction at the instruction pointer. Requires `ip < cells.len()`.
    fn step(self: &mut Self) -> RuntimeResult {
        let ip = self.ip;
        let instruction = Instruction::decode(&self.cells[ip]);
        let operand = self.resolve_operand(instruction).map_err(|kind| RuntimeError::new(ip, kind))?;
        tracing::trace!(ip, opcode = %self.cells[ip], name = instruction.name, ?operand, "step");
        self.hooks.step(&RuntimeEvent::step(ip, &self.cells[ip], instruction.name, operand.as_ref(), &self.cells));
        let flow = self.dispatch(instruction.opcode, operand).map_err(|kind| RuntimeError::new(ip, kind))?;
        self.ip = match flow {
            Flow::Next => ip + instruction.width(),
            Flow::Jump(target) => target,
        };
        self.steps += 1;
        Ok(())
    }

    /// Reads the operand of the given instruction, if it takes one.
    fn resolve_operand(self: &Self, instruction: &Instruction) -> InstructionResult<Option<Cell>> {
        match instruction.operand {
            OperandRule::None => Ok(None),
            OperandRule::Next => self.cells.get(self.ip + 1).cloned().map(Some).ok_or(RuntimeErrorKind::OperandNotFound),
        }
    }
}

/// Cell list access used by the instructions.
impl<'h> VM<'h> {
    /// Fails unless the list holds at least the given number of cells.
    pub(super) fn require(self: &Self, needed: CellAddress) -> InstructionResult<()> {
        let available = self.cells.len();
        if available < needed {
            Err(RuntimeErrorKind::StackUnderflow { needed, available })
        } else {
            Ok(())
        }
    }

    /// Returns the tail value without removing it.
    pub(super) fn tail(self: &Self) -> InstructionResult<&Cell> {
        self.cells.last().ok_or(RuntimeErrorKind::StackUnderflow { needed: 1, available: 0 })
    }

    /// Removes and returns the tail value.
    pub(super) fn pop_tail(self: &mut Self) -> InstructionResult<Cell> {
        self.cells.pop().ok_or(RuntimeErrorKind::StackUnderflow { needed: 1, available: 0 })
    }

    /// Removes the two tail values, returning them in list order.
    pub(super) fn pop_pair(self: &mut Self) -> InstructionResult<(Cell, Cell)> {
        self.require(2)?;
        let b = self.pop_tail()?;
        let a = self.pop_tail()?;
        Ok((a, b))
    }

    /// Validates a LOAD/SAVE index.
    pub(super) fn check_index(self: &Self, index: Cell) -> InstructionResult<CellAddress> {
        self.address(&index).ok_or(RuntimeErrorKind::InvalidIndex(index))
    }

    /// Validates a JMP/JE target.
    pub(super) fn check_target(self: &Self, target: Cell) -> InstructionResult<CellAddress> {
        self.address(&target).ok_or(RuntimeErrorKind::InvalidJumpTarget(target))
    }

    fn address(self: &Self, value: &Cell) -> Option<CellAddress> {
        CellAddress::try_from(value).ok().filter(|&address| address < self.cells.len())
    }
}
