//! Types shared by the front end and the runtime.

pub mod error;
pub mod language;
pub mod report;
