//! Storage layer for breathwork.
//!
//! This module provides SQLite-based persistence for:
//! - Practice history (finished breathing sessions)
//! - The daily mood log

mod database;
mod migrations;

pub use database::Database;
