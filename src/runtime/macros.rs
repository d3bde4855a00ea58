
/// Macro to generate the opcode enum, the instruction table and instruction dispatch from instruction definitions.
///
/// Each definition `fn name(&mut self)` or `fn name(&mut self, operand)` becomes
/// * an `OpCode` variant (`name` in camel case) whose cell value is its position in the definition list,
/// * an entry of the `INSTRUCTIONS` table with the upper case mnemonic and the operand rule,
/// * a method on the VM executing the instruction, returning the control flow to take next.
///
/// The last definition is the fallback for opcodes beyond the table.
macro_rules! impl_instructions {
    // Map presence of an operand argument to the operand rule
    (@operand_rule) => ( OperandRule::None );
    (@operand_rule $arg:ident) => ( OperandRule::Next );
    // Unwrap the resolved operand of an instruction taking one
    (@operand $operand:ident, $arg:ident) => ( $operand.ok_or(RuntimeErrorKind::OperandNotFound)? );
    // Main definition block
    (
        $(
            $( #[ $attr:meta ] )*
            fn $name:ident ( & mut $self:ident $(, $arg:ident )? ) $code:block
        )+
    ) => {
        paste::paste! {

            /// Instruction opcodes. Generated from instruction definitions via the `impl_instructions!` macro.
            /// The cell value of an opcode is its position in the instruction table.
            #[repr(u8)]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub enum OpCode {
                $(
                    $( #[ $attr ] )*
                    [<$name:camel>],
                )+
            }

            /// The instruction table, indexed by opcode.
            pub static INSTRUCTIONS: &[Instruction] = &[
                $(
                    Instruction {
                        opcode  : OpCode::[<$name:camel>],
                        name    : stringify!([<$name:upper>]),
                        operand : impl_instructions!(@operand_rule $( $arg )?),
                    },
                )+
            ];

            /// Instruction implementations. Implemented on VM by the `impl_instructions!` macro.
            impl<'h> VM<'h> {
                $(
                    $( #[ $attr ] )*
                    fn $name ( $self: &mut Self $(, $arg: Cell )? ) -> InstructionResult {
                        $code
                    }
                )+

                /// Executes the given instruction with its resolved operand.
                pub(super) fn dispatch(self: &mut Self, opcode: OpCode, operand: Option<Cell>) -> InstructionResult {
                    match opcode {
                        $(
                            OpCode::[<$name:camel>] => self.$name( $( impl_instructions!(@operand operand, $arg) )? ),
                        )+
                    }
                }
            }
        }
    };
}

pub(crate) use impl_instructions;
