//! Configuration helpers shared by the scenario and the CLI.

pub mod duration;

pub use duration::{format_duration, parse_duration};
