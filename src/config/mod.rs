//! Configuration management for breathwork.
//!
//! This module handles loading and saving configuration from `~/.breathwork/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    BreathingConfig, ColorSetting, Config, ExerciseConfig, GeneralConfig, MoodConfig,
};
