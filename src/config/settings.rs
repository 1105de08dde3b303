//! Configuration settings for breathwork.
//!
//! Settings are loaded from `~/.breathwork/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::BreathworkError;
use crate::features::breathing::Phase;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Breathing session settings.
    pub breathing: BreathingConfig,
    /// Mood log settings.
    pub mood: MoodConfig,
    /// User-defined exercises, appended to the built-in catalog.
    pub exercises: Vec<ExerciseConfig>,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Output format used when `--output` is not given.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to `colored`'s global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Breathing session settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BreathingConfig {
    /// Exercise selected when `breathe` is run without one.
    pub default_exercise: Option<String>,
    /// Speak phase names aloud.
    pub voice: bool,
    /// Text-to-speech command, e.g. `say -v Samantha` or `espeak -s 140`.
    /// The announcement text is appended as the last argument.
    pub voice_command: Option<String>,
}

/// Mood log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Days covered by `mood trend` when `--days` is not given.
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,
}

/// A user-defined exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseConfig {
    /// Unique id, used on the command line.
    pub id: String,
    /// Display title; defaults to the id.
    #[serde(default)]
    pub title: Option<String>,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Phase sequence, repeated until the session budget is used.
    pub phases: Vec<Phase>,
    /// Session budget in seconds.
    pub total_seconds: u32,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_trend_days() -> u32 {
    7
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            trend_days: default_trend_days(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BreathworkError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BreathworkError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            BreathworkError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), BreathworkError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| BreathworkError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            BreathworkError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::PhaseName;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.breathing.default_exercise, None);
        assert!(!config.breathing.voice);
        assert_eq!(config.mood.trend_days, 7);
        assert!(config.exercises.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.breathing.voice = true;
        config.breathing.default_exercise = Some("478-breathing".to_string());
        config.mood.trend_days = 14;

        config.save_to_path(&config_path).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert!(loaded.breathing.voice);
        assert_eq!(
            loaded.breathing.default_exercise.as_deref(),
            Some("478-breathing")
        );
        assert_eq!(loaded.mood.trend_days, 14);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
breathing:
  voice: true
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert!(config.breathing.voice);
        assert_eq!(config.breathing.voice_command, None);
        assert_eq!(config.mood.trend_days, 7);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_custom_exercises() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r"
general:
  color: never
exercises:
  - id: coherent
    title: Coherent Breathing
    phases:
      - name: inhale
        duration: 6
      - name: exhale
        duration: 6
    total_seconds: 180
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.color, ColorSetting::Never);
        assert_eq!(config.exercises.len(), 1);
        let exercise = &config.exercises[0];
        assert_eq!(exercise.id, "coherent");
        assert_eq!(exercise.title.as_deref(), Some("Coherent Breathing"));
        assert_eq!(exercise.description, "");
        assert_eq!(exercise.phases[1].name, PhaseName::Exhale);
        assert_eq!(exercise.phases[1].duration_seconds, 6);
        assert_eq!(exercise.total_seconds, 180);
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "mood: [unclosed").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(BreathworkError::Config(_))
        ));
    }
}
