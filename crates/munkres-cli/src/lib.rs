//! CLI library components for the assignment solver.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod summary;
pub mod types;
