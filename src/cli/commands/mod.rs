//! Command implementations for breathwork.
//!
//! Every command returns the text to print; `main` does the printing.

mod breathe;
mod burnout;
mod completions;
mod history;
mod mood;

pub use breathe::breathe;
pub use burnout::burnout;
pub use completions::completions;
pub use history::{history, report};
pub use mood::mood;

use std::path::PathBuf;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::BreathworkError;
use crate::features::breathing::{Catalog, Simulation};
use crate::output::{format_exercise, format_exercises, format_simulation};
use crate::storage::Database;

/// Everything a command needs: where data lives, settings, and the catalog.
pub struct Context {
    /// Data locations
    pub paths: Paths,
    /// Loaded configuration
    pub config: Config,
    /// Built-in plus configured exercises
    pub catalog: Catalog,
    /// Output format for this invocation
    pub format: OutputFormat,
}

impl Context {
    /// Resolve paths, load `config.yaml` and build the catalog.
    ///
    /// `output` overrides the configured default format.
    ///
    /// # Errors
    ///
    /// Returns an error if the data root cannot be resolved, the config
    /// cannot be parsed, or a configured exercise is invalid.
    pub fn load(
        data_dir: Option<PathBuf>,
        output: Option<OutputFormat>,
    ) -> Result<Self, BreathworkError> {
        let paths = Paths::resolve(data_dir)?;
        let config = Config::load_from_path(&paths.config_file)?;
        let catalog = Catalog::with_custom(&config.exercises)?;
        let format = output.unwrap_or(config.general.default_output);

        config.general.color.apply();

        Ok(Self {
            paths,
            config,
            catalog,
            format,
        })
    }

    /// Open the database under the data root.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn database(&self) -> Result<Database, BreathworkError> {
        Database::open_in(&self.paths)
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(ctx: &Context) -> Result<String, BreathworkError> {
    format_exercises(ctx.catalog.as_slice(), ctx.format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the exercise is unknown or output formatting fails.
pub fn show(ctx: &Context, exercise: &str) -> Result<String, BreathworkError> {
    let exercise = ctx.catalog.require(exercise)?;
    format_exercise(&exercise, ctx.format)
}

/// Execute simulate command
///
/// # Errors
///
/// Returns an error if the exercise is unknown or output formatting fails.
pub fn simulate(
    ctx: &Context,
    exercise: &str,
    ticks: Option<u32>,
) -> Result<String, BreathworkError> {
    let exercise = ctx.catalog.require(exercise)?;
    let simulation = Simulation::run(exercise, ticks);
    format_simulation(&simulation, ctx.format)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// A context rooted in a fresh temporary directory.
    pub fn context(format: OutputFormat) -> (TempDir, Context) {
        let dir = TempDir::new().unwrap();
        let ctx = Context::load(Some(dir.path().to_path_buf()), Some(format)).unwrap();
        (dir, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::context;
    use super::*;

    #[test]
    fn test_context_uses_config_default_output() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "general:\n  default_output: json\n",
        )
        .unwrap();

        let ctx = Context::load(Some(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(ctx.format, OutputFormat::Json);

        let ctx =
            Context::load(Some(dir.path().to_path_buf()), Some(OutputFormat::Pretty)).unwrap();
        assert_eq!(ctx.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_context_rejects_bad_exercise() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "exercises:\n  - id: broken\n    phases: []\n    total_seconds: 60\n",
        )
        .unwrap();

        let result = Context::load(Some(dir.path().to_path_buf()), None);
        assert!(matches!(result, Err(BreathworkError::Config(_))));
    }

    #[test]
    fn test_list_json() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = list(&ctx).unwrap();
        assert!(output.contains("\"count\": 3"));
    }

    #[test]
    fn test_show_unknown() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        let err = show(&ctx, "nope").unwrap_err();
        assert!(matches!(err, BreathworkError::NotFound(_)));
        assert!(err.to_string().contains("box-breathing"));
    }

    #[test]
    fn test_show_by_title() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = show(&ctx, "mindful breathing").unwrap();
        assert!(output.contains("\"id\": \"mindful-breathing\""));
    }

    #[test]
    fn test_simulate_json() {
        let (_dir, ctx) = context(OutputFormat::Json);
        let output = simulate(&ctx, "box-breathing", None).unwrap();
        assert!(output.contains("\"ticks\": 120"));
        assert!(output.contains("\"completed\": true"));
    }
}
