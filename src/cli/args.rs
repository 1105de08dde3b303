use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "breathwork")]
#[command(about = "Guided breathing sessions, practice history and mood tracking in the terminal")]
#[command(long_about = "breathwork - guided breathing in the terminal

Follow a breathing pattern phase by phase, with an optional spoken guide,
and keep a record of your practice and daily mood.

QUICK START:
  breathwork list                 Show available exercises
  breathwork breathe              Start the interactive session screen
  breathwork breathe 478-breathing   Start with 4-7-8 Breathing selected
  breathwork report --period month
  breathwork mood log good --note \"slept well\"

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

DATA:
  Configuration, history and logs live in ~/.breathwork/ unless
  --data-dir or BREATHWORK_HOME points elsewhere.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (the default unless
    /// config.yaml says otherwise), or 'json' for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml, the database and logs
    #[arg(long, global = true, env = "BREATHWORK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available breathing exercises
    ///
    /// Built-in exercises are listed first, followed by any defined under
    /// `exercises:` in config.yaml.
    #[command(alias = "ls")]
    List,

    /// Show one exercise in detail
    ///
    /// Includes every phase, the cycle length and how many full cycles fit
    /// in a session.
    Show {
        /// Exercise id or title
        exercise: String,
    },

    /// Start an interactive breathing session
    ///
    /// Opens a full-screen view with the breathing animation, the phase
    /// countdown and session progress.
    ///
    /// # Keys
    ///
    ///   space      Start / pause
    ///   r          Reset the session
    ///   j/k, ↑/↓   Select another exercise
    ///   v          Toggle the voice guide
    ///   q, Esc     Quit
    #[command(alias = "b")]
    Breathe(BreatheArgs),

    /// Run a session without the terminal UI and print every tick
    ///
    /// Ticks are delivered instantly, so a two-minute session prints in an
    /// instant. Shows what would be displayed and announced after each tick.
    Simulate {
        /// Exercise id or title
        exercise: String,

        /// Stop after this many ticks (default: run until complete)
        #[arg(short, long)]
        ticks: Option<u32>,
    },

    /// Show practice history
    History {
        /// Maximum number of sessions to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Only sessions of this exercise
        #[arg(short, long)]
        exercise: Option<String>,
    },

    /// Summarize practice over a period
    Report {
        /// Period: today, week, month, all
        #[arg(short, long, default_value = "week")]
        period: String,
    },

    /// Daily mood log
    Mood(MoodArgs),

    /// Score the five-question burnout barometer
    ///
    /// Rate how often each statement has applied over the past few weeks,
    /// from 1 (never) to 5 (always). Without answers, prints the statements.
    /// This is not a diagnostic tool.
    ///
    /// # Examples
    ///
    ///   breathwork burnout
    ///   breathwork burnout 3 4 2 5 often
    Burnout {
        /// One answer per statement: 1-5 or never/rarely/sometimes/often/always
        answers: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   breathwork completions zsh > ~/.zsh/completions/_breathwork
    ///   source <(breathwork completions bash)
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct BreatheArgs {
    /// Exercise to select first (id or title)
    pub exercise: Option<String>,

    /// Speak phase names aloud
    #[arg(long, conflicts_with = "no_voice")]
    pub voice: bool,

    /// Stay silent even if config.yaml enables the voice guide
    #[arg(long)]
    pub no_voice: bool,
}

impl BreatheArgs {
    /// Voice setting from the flags, `None` if neither was given.
    #[must_use]
    pub const fn voice_override(&self) -> Option<bool> {
        if self.voice {
            Some(true)
        } else if self.no_voice {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    pub command: MoodCommands,
}

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Log today's mood, replacing any earlier entry for today
    ///
    /// # Examples
    ///
    ///   breathwork mood log 4
    ///   breathwork mood log great --note "morning run"
    Log {
        /// 1-5, or awful/bad/okay/good/great
        level: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recent entries
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long, default_value = "14")]
        limit: usize,
    },

    /// Show the trend over recent days
    Trend {
        /// Number of days, 1-3650 (default from config, 7)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=3650))]
        days: Option<u32>,
    },
}
