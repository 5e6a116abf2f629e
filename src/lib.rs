//! Life Clock application library
//!
//! This exposes the terminal front end of Life Clock for testing and external
//! usage. Domain logic lives in `lifeclock-core`.

pub mod cli;
pub mod config;
pub mod report;
pub mod runtime;
pub mod tui;
