//! Side effect hooks of a run.

use crate::CAT_SYMBOL;
use super::event::RuntimeEvent;

type ErrorHook<'h> = Box<dyn FnMut(&str) + 'h>;
type EffectHook<'h> = Box<dyn FnMut() + 'h>;
type StepHook<'h> = Box<dyn FnMut(&RuntimeEvent<'_>) + 'h>;

/// The side effects a run may trigger. Every hook is optional.
///
/// Missing `on_pause` and `on_meow` hooks fall back to printing to standard output (a blank line and the cat symbol
/// respectively), a missing `on_error` hook prints to standard error and a missing `on_step` hook does nothing.
///
/// ```
/// use meowlang::runtime::Hooks;
///
/// let mut meows = 0;
/// meowlang::run("1", Hooks::new().on_meow(|| meows += 1)).unwrap();
/// assert_eq!(meows, 1);
/// ```
#[derive(Default)]
pub struct Hooks<'h> {
    on_error    : Option<ErrorHook<'h>>,
    on_pause    : Option<EffectHook<'h>>,
    on_meow     : Option<EffectHook<'h>>,
    on_step     : Option<StepHook<'h>>,
}

impl<'h> Hooks<'h> {
    /// Creates hooks that use the default effects.
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the hook receiving the formatted error report of a failed run.
    pub fn on_error(self: Self, hook: impl FnMut(&str) + 'h) -> Self {
        Hooks { on_error: Some(Box::new(hook)), ..self }
    }
    /// Sets the hook invoked by RET.
    pub fn on_pause(self: Self, hook: impl FnMut() + 'h) -> Self {
        Hooks { on_pause: Some(Box::new(hook)), ..self }
    }
    /// Sets the hook invoked once per repeat by MEOW.
    pub fn on_meow(self: Self, hook: impl FnMut() + 'h) -> Self {
        Hooks { on_meow: Some(Box::new(hook)), ..self }
    }
    /// Sets the hook observing each step and the termination of the run.
    pub fn on_step(self: Self, hook: impl FnMut(&RuntimeEvent<'_>) + 'h) -> Self {
        Hooks { on_step: Some(Box::new(hook)), ..self }
    }
    pub(crate) fn error(self: &mut Self, message: &str) {
        match &mut self.on_error {
            Some(hook) => hook(message),
            None => eprintln!("{}", message),
        }
    }
    pub(crate) fn pause(self: &mut Self) {
        match &mut self.on_pause {
            Some(hook) => hook(),
            None => println!(),
        }
    }
    pub(crate) fn meow(self: &mut Self) {
        match &mut self.on_meow {
            Some(hook) => hook(),
            None => println!("{}", CAT_SYMBOL),
        }
    }
    pub(crate) fn step(self: &mut Self, event: &RuntimeEvent<'_>) {
        if let Some(hook) = &mut self.on_step {
            hook(event);
        }
    }
}

impl<'h> std::fmt::Debug for Hooks<'h> {
    fn fmt(self: &Self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_error", &self.on_error.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_meow", &self.on_meow.is_some())
            .field("on_step", &self.on_step.is_some())
            .finish()
    }
}
