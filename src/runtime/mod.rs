//! Cell list interpretation.

mod macros;
mod vm;
mod instructions;
mod hooks;
mod event;
pub mod error;

pub use self::vm::VM;
pub use self::hooks::Hooks;
pub use self::event::RuntimeEvent;
pub use self::instructions::{OpCode, Instruction, OperandRule, Flow, INSTRUCTIONS, describe_instruction, format_program};
