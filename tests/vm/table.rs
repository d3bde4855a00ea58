use crate::util::*;
use meowlang::runtime::{OperandRule, describe_instruction, format_program};

#[test]
fn table_order() {
    let names: Vec<_> = INSTRUCTIONS.iter().map(|instruction| instruction.name).collect();
    assert_eq!(names, [ "RET", "MEOW", "PUSH", "POP", "LOAD", "SAVE", "ADD", "SUB", "JMP", "JE", "NOP" ]);
    for (index, instruction) in INSTRUCTIONS.iter().enumerate() {
        assert_eq!(instruction.opcode as usize, index);
    }
}

#[test]
fn table_operands() {
    let with_operand: Vec<_> = INSTRUCTIONS.iter()
        .filter(|instruction| instruction.operand == OperandRule::Next)
        .map(|instruction| instruction.name)
        .collect();
    assert_eq!(with_operand, [ "PUSH", "LOAD", "SAVE", "JMP", "JE" ]);
    assert_eq!(Instruction::decode(&cell(PUSH)).width(), 2);
    assert_eq!(Instruction::decode(&cell(ADD)).width(), 1);
}

#[test]
fn fallback_is_last() {
    assert_eq!(INSTRUCTIONS.last().map(|instruction| instruction.opcode), Some(OpCode::Nop));
    assert_eq!(Instruction::decode(&cell(NOP)).opcode, OpCode::Nop);
    assert_eq!(Instruction::decode(&cell(11)).opcode, OpCode::Nop);
    assert_eq!(Instruction::decode(&cell(99)).opcode, OpCode::Nop);
    assert_eq!(Instruction::decode(&cell(u64::MAX)).opcode, OpCode::Nop);
    assert_eq!(Instruction::decode(&(cell(1) << 100usize)).opcode, OpCode::Nop);
}

#[test]
fn disassemble() {
    let listing = format_program(&cells(&[ PUSH, 5, RET, 99, JMP ]));
    assert_eq!(listing, "    0 PUSH 5\n    2 RET\n    3 NOP (99)\n    4 JMP <missing operand>\n");
}

#[test]
fn disassemble_single() {
    assert_eq!(describe_instruction(&cells(&[ NOP, JE, 0 ]), 1), Some(("    1 JE 0".to_string(), 3)));
    assert_eq!(describe_instruction(&cells(&[ NOP ]), 1), None);
    assert_eq!(format_program(&cells(&[])), "");
}
