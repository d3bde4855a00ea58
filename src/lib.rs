//! Meowlang, a tiny stack language running on a single cell list.
//!
//! Source comes in two forms which both compile into a list of integer cells:
//!
//! * numeric form, one decimal cell value per line
//! * symbolic form, groups of meow tokens each terminated by `;`, one cell per group holding the number of tokens
//!
//! The cell list is program and stack at once. The VM walks it from the front, interpreting cells as opcodes and
//! operands, while instructions push and pop values at its tail.
//!
//! ```
//! use meowlang::runtime::Hooks;
//!
//! let mut meows = 0;
//! // PUSH 3, MEOW: meows three times. The pushed 3 is then reached by the instruction pointer and runs as POP.
//! meowlang::run("2\n3\n1", Hooks::new().on_meow(|| meows += 1)).unwrap();
//! assert_eq!(meows, 3);
//! ```

pub mod config;
pub mod frontend;
pub mod runtime;
pub mod shared;

pub use config::*;
pub use shared::error::{Error, Stage};
pub use shared::language::Language;

use runtime::{Hooks, VM};

/// One stop shop to parse and run the given source with the given hooks.
///
/// A failure is reported once through the `on_error` hook (or standard error) and also returned.
pub fn run(code: &str, hooks: Hooks<'_>) -> Result<(), Error> {
    run_with_config(code, hooks, VMConfig::default())
}

/// Parses and runs the given source with the given hooks and runtime limits.
pub fn run_with_config(code: &str, mut hooks: Hooks<'_>, config: VMConfig) -> Result<(), Error> {
    let cells = match frontend::parse(code) {
        Ok(cells) => cells,
        Err(err) => {
            let err = Error::from(err);
            shared::report::report(&mut hooks, &err);
            return Err(err);
        }
    };
    let mut vm = VM::with_config(cells, hooks, config);
    if let Err(err) = vm.run() {
        let err = Error::from(err);
        shared::report::report(vm.hooks_mut(), &err);
        return Err(err);
    }
    Ok(())
}
