//! unicornctl library - exposes modules for integration tests

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod render;
