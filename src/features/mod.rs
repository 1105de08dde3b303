//! Feature modules for breathwork.
//!
//! - `breathing`: exercises, the session timer, practice history
//! - `mood`: daily mood log and trend
//! - `burnout`: five-question burnout barometer

pub mod breathing;
pub mod burnout;
pub mod mood;
