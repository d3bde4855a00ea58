use crate::util::*;

fn step(ip: usize, opcode: u64, name: &'static str, operand: Option<u64>, values: &[u64]) -> Step {
    Step { ip: Some(ip), opcode: Some(cell(opcode)), name: Some(name), operand: operand.map(cell), cells: cells(values) }
}

fn termination(values: &[u64]) -> Step {
    Step { ip: None, opcode: None, name: None, operand: None, cells: cells(values) }
}

#[test]
fn pause_events() {
    let result = execute(&[ RET ]);
    assert_eq!(result.steps, [
        step(0, RET, "RET", None, &[ RET ]),
        termination(&[ RET ]),
    ]);
}

#[test]
fn events_precede_execution() {
    let result = execute(&[ PUSH, NOP ]);
    assert_eq!(result.steps, [
        step(0, PUSH, "PUSH", Some(NOP), &[ PUSH, NOP ]),
        step(2, NOP, "NOP", None, &[ PUSH, NOP, NOP ]),
        termination(&[ PUSH, NOP, NOP ]),
    ]);
}

#[test]
fn raw_opcode_reported() {
    let result = execute(&[ 42 ]);
    assert_eq!(result.steps[0], step(0, 42, "NOP", None, &[ 42 ]));
}

#[test]
fn no_events_after_failure() {
    let result = execute(&[ RET, LOAD, 9 ]);
    assert_eq!(result.runtime_error(), Some(RuntimeErrorKind::InvalidIndex(cell(9))));
    assert_eq!(result.effects, [ Effect::Pause ]);
    // LOAD is announced since its operand exists, then fails
    assert_eq!(result.steps, [
        step(0, RET, "RET", None, &[ RET, LOAD, 9 ]),
        step(1, LOAD, "LOAD", Some(9), &[ RET, LOAD, 9 ]),
    ]);
}

#[test]
fn missing_operand_not_announced() {
    let result = execute(&[ NOP, JMP ]);
    assert_eq!(result.runtime_error(), Some(RuntimeErrorKind::OperandNotFound));
    assert_eq!(result.steps, [ step(0, NOP, "NOP", None, &[ NOP, JMP ]) ]);
}

#[test]
fn trace_line() {
    let mut lines = Vec::new();
    let hooks = Hooks::new()
        .on_pause(|| ())
        .on_step(|event| lines.push(event.to_string()));
    VM::new(cells(&[ PUSH, NOP ]), hooks).run().unwrap();
    assert_eq!(lines, [
        "    0 PUSH 10     [2, 10]",
        "    2 NOP         [2, 10, 10]",
        "  end             [2, 10, 10]",
    ]);
}
