//! Library side of the `stations-check` binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
