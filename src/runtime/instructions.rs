//! Instruction definitions. Implemented on VM.

use num_traits::Zero;
use crate::{Cell, CellAddress};
use super::vm::VM;
use super::error::RuntimeErrorKind;
use super::macros::impl_instructions;

/// Where an instruction takes its operand from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandRule {
    /// The instruction takes no operand.
    None,
    /// The operand is the cell immediately following the instruction.
    Next,
}

/// Static description of an instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction {
    pub opcode  : OpCode,
    pub name    : &'static str,
    pub operand : OperandRule,
}

impl Instruction {
    /// Looks up the instruction for the given cell value. Values beyond the table resolve to the fallback NOP.
    pub fn decode(opcode: &Cell) -> &'static Instruction {
        usize::try_from(opcode).ok()
            .and_then(|index| INSTRUCTIONS.get(index))
            .unwrap_or(&INSTRUCTIONS[OpCode::Nop as usize])
    }
    /// Number of cells occupied by the instruction and its operand.
    pub fn width(self: &Self) -> CellAddress {
        match self.operand {
            OperandRule::None => 1,
            OperandRule::Next => 2,
        }
    }
}

/// Where execution continues after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance by the width of the instruction.
    Next,
    /// Continue at the given, already validated, cell.
    Jump(CellAddress),
}

pub(super) type InstructionResult<T = Flow> = Result<T, RuntimeErrorKind>;

impl_instructions!{

    /// Invokes the pause effect.
    fn ret(&mut self) {
        self.hooks.pause();
        Ok(Flow::Next)
    }

    /// Invokes the meow effect as many times as the tail value says. The tail is left in place.
    fn meow(&mut self) {
        let mut remaining = self.tail()?.clone();
        while !remaining.is_zero() {
            self.hooks.meow();
            remaining -= 1u32;
        }
        Ok(Flow::Next)
    }

    /// Appends the operand to the list.
    fn push(&mut self, value) {
        self.cells.push(value);
        Ok(Flow::Next)
    }

    /// Removes the tail value.
    fn pop(&mut self) {
        self.pop_tail()?;
        Ok(Flow::Next)
    }

    /// Appends a copy of the cell at the operand index.
    fn load(&mut self, index) {
        let index = self.check_index(index)?;
        let value = self.cells[index].clone();
        self.cells.push(value);
        Ok(Flow::Next)
    }

    /// Overwrites the cell at the operand index with the tail value. The tail is left in place.
    fn save(&mut self, index) {
        let index = self.check_index(index)?;
        let value = self.tail()?.clone();
        self.cells[index] = value;
        Ok(Flow::Next)
    }

    /// Pops 2 values from the list and pushes their sum.
    fn add(&mut self) {
        let (a, b) = self.pop_pair()?;
        self.cells.push(a + b);
        Ok(Flow::Next)
    }

    /// Pops 2 values from the list and pushes their difference, clamped to 0.
    fn sub(&mut self) {
        let (a, b) = self.pop_pair()?;
        self.cells.push(if a > b { a - b } else { Cell::zero() });
        Ok(Flow::Next)
    }

    /// Jumps to the operand index.
    fn jmp(&mut self, target) {
        let target = self.check_target(target)?;
        Ok(Flow::Jump(target))
    }

    /// Pops the tail value and jumps to the operand index if it is 0.
    fn je(&mut self, target) {
        let target = self.check_target(target)?;
        if self.pop_tail()?.is_zero() {
            Ok(Flow::Jump(target))
        } else {
            Ok(Flow::Next)
        }
    }

    /// Does nothing. Also executed for opcodes beyond the instruction table.
    fn nop(&mut self) {
        Ok(Flow::Next)
    }
}

/// Returns the disassembled instruction at the given position along with the position of the next instruction.
pub fn describe_instruction(cells: &[Cell], position: CellAddress) -> Option<(String, CellAddress)> {
    let opcode = cells.get(position)?;
    let instruction = Instruction::decode(opcode);
    let mut result = format!("{:>5} {}", position, instruction.name);
    if instruction.opcode == OpCode::Nop && *opcode != Cell::from(OpCode::Nop as u8) {
        result.push_str(&format!(" ({})", opcode));
    }
    if instruction.operand == OperandRule::Next {
        match cells.get(position + 1) {
            Some(operand) => result.push_str(&format!(" {}", operand)),
            None => result.push_str(" <missing operand>"),
        }
    }
    Some((result, position + instruction.width()))
}

/// Disassembles the cell list, assuming execution starts at the first cell and never jumps.
pub fn format_program(cells: &[Cell]) -> String {
    let mut position = 0;
    let mut result = String::new();
    while let Some((instruction, next_position)) = describe_instruction(cells, position) {
        result.push_str(&instruction);
        result.push('\n');
        position = next_position;
    }
    result
}
