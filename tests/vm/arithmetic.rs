use crate::util::*;

#[test]
fn push() {
    let result = execute(&[ PUSH, NOP ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ PUSH, NOP, NOP ]));
}

#[test]
fn pushed_value_executes() {
    // the pushed 5 is reached as SAVE without an operand
    let result = execute(&[ PUSH, 5 ]);
    assert_eq!(result.runtime_error(), Some(RuntimeErrorKind::OperandNotFound));
    assert_eq!(result.cells, cells(&[ PUSH, 5, 5 ]));
}

#[test]
fn pop() {
    let result = execute(&[ PUSH, NOP, POP ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ PUSH, NOP, POP ]));
}

#[test]
fn pop_itself() {
    let result = execute(&[ POP ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[]));
}

#[test]
fn add() {
    let result = execute(&[ PUSH, 4, PUSH, 6, ADD ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ PUSH, 4, PUSH, 6, ADD, 10 ]));
}

#[test]
fn sub() {
    let result = execute(&[ PUSH, 15, PUSH, 3, SUB ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ PUSH, 15, PUSH, 3, SUB, 12 ]));
}

#[test]
fn sub_clamps_at_zero() {
    // the clamped 0 is then reached as RET
    let result = execute(&[ PUSH, 3, PUSH, 7, SUB ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ PUSH, 3, PUSH, 7, SUB, 0 ]));
    assert_eq!(result.effects, [ Effect::Pause ]);
}

#[test]
fn add_unbounded() {
    // the sum is reached as an out of table opcode and runs as NOP
    let result = execute(&[ PUSH, u64::MAX, ADD ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, vec![ cell(PUSH), cell(u64::MAX), cell(u64::MAX) + 6u32 ]);
}

#[test]
fn sub_unbounded() {
    let big = cell(1) << 70usize;
    let program = vec![ cell(PUSH), big.clone(), cell(PUSH), cell(1), cell(SUB) ];
    let result = execute_cells(program.clone(), VMConfig::default());
    assert!(result.result.is_ok());
    assert_eq!(result.cells[..5], program[..]);
    assert_eq!(result.cells[5], big - 1u32);
    assert_eq!(result.cells.len(), 6);
}

#[test]
fn add_underflow() {
    let result = execute(&[ ADD ]);
    assert_eq!(result.runtime_error(), Some(RuntimeErrorKind::StackUnderflow { needed: 2, available: 1 }));
    assert_eq!(result.cells, cells(&[ ADD ]));
}

#[test]
fn sub_underflow() {
    let result = execute(&[ SUB ]);
    assert_eq!(result.runtime_error(), Some(RuntimeErrorKind::StackUnderflow { needed: 2, available: 1 }));
}

#[test]
fn operands_include_code() {
    // with nothing pushed, ADD consumes its own cell and the one before it
    let result = execute(&[ NOP, ADD ]);
    assert!(result.result.is_ok());
    assert_eq!(result.cells, cells(&[ 16 ]));
}
