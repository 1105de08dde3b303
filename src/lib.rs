//! breathwork - guided breathing sessions in the terminal
//!
//! This crate provides a phase-stepping breathing timer with an optional
//! spoken guide, a full-screen session view, practice history, and a daily
//! mood log.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BreathworkError;
pub use features::breathing::{Catalog, Exercise, SessionTimer, Snapshot};
