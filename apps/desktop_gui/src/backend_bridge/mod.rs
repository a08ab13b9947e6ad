//! Backend bridge: commands from the UI thread and the tokio worker that executes them.

pub mod commands;
pub mod runtime;
