//! Report output: console rendering and JSON persistence

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::{JsonReporter, Report, REPORT_FILENAME};
