//! Error reporting facade.

use crate::ERROR_SYMBOL;
use crate::runtime::Hooks;
use super::error::Error;

/// Formats an error report for the given stage label.
pub fn format_report(stage: impl std::fmt::Display, message: &str) -> String {
    format!("{ERROR_SYMBOL} {stage} {ERROR_SYMBOL} {message} {ERROR_SYMBOL}")
}

/// Routes the error report to the error hook (standard error by default).
pub fn report(hooks: &mut Hooks<'_>, error: &Error) {
    tracing::debug!(stage = %error.stage(), %error, "run failed");
    hooks.error(&format_report(error.stage(), &error.to_string()));
}
