//! Voice guide backends.
//!
//! The spoken guide shells out to the platform's text-to-speech program, the
//! same way other integrations drive `osascript`: one child process per
//! utterance, killed when the next one starts.

use std::process::{Child, Command, Stdio};

use crate::core::Announcer;
use crate::error::BreathworkError;

/// Announcer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&mut self, _text: &str) -> Result<(), BreathworkError> {
        Ok(())
    }

    fn cancel(&mut self) {}
}

/// Announcer that records what would have been spoken.
#[derive(Debug, Default, Clone)]
pub struct TranscriptAnnouncer {
    lines: Vec<String>,
    cancellations: usize,
}

impl TranscriptAnnouncer {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the transcript.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// How many times speech was cancelled.
    #[must_use]
    pub const fn cancellations(&self) -> usize {
        self.cancellations
    }
}

impl Announcer for TranscriptAnnouncer {
    fn announce(&mut self, text: &str) -> Result<(), BreathworkError> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancellations += 1;
    }
}

/// Spoken voice guide backed by a text-to-speech command.
#[derive(Debug)]
pub struct SpeechAnnouncer {
    enabled: bool,
    program: String,
    args: Vec<String>,
    current: Option<Child>,
}

impl SpeechAnnouncer {
    /// Create a voice guide.
    ///
    /// `command` is split on whitespace; the text to speak is appended as the
    /// final argument. `None` uses [`SpeechAnnouncer::system_command`].
    #[must_use]
    pub fn new(command: Option<&str>, enabled: bool) -> Self {
        let command = command.unwrap_or_else(|| Self::system_command());
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        let args = parts.collect();

        Self {
            enabled,
            program,
            args,
            current: None,
        }
    }

    /// The platform's default speech program.
    #[must_use]
    pub const fn system_command() -> &'static str {
        if cfg!(target_os = "macos") {
            "say"
        } else {
            "espeak"
        }
    }

    /// Whether announcements are spoken.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn the voice guide on or off. Turning it off silences it at once.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.cancel();
        }
        self.enabled = enabled;
    }

    /// Program that will be spawned.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&mut self, text: &str) -> Result<(), BreathworkError> {
        if !self.enabled || text.is_empty() {
            return Ok(());
        }

        self.cancel();

        if self.program.is_empty() {
            return Err(BreathworkError::Announce(
                "No speech command configured".to_string(),
            ));
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BreathworkError::Announce(format!("{}: {e}", self.program)))?;

        self.current = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            if matches!(child.try_wait(), Ok(None)) {
                child.kill().ok();
            }
            child.wait().ok();
        }
    }
}

impl Drop for SpeechAnnouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut announcer = TranscriptAnnouncer::new();
        announcer.announce("Inhale").unwrap();
        announcer.announce("Hold").unwrap();
        announcer.cancel();

        assert_eq!(announcer.lines(), ["Inhale", "Hold"]);
        assert_eq!(announcer.cancellations(), 1);
        assert_eq!(announcer.take(), vec!["Inhale", "Hold"]);
        assert!(announcer.lines().is_empty());
    }

    #[test]
    fn test_speech_disabled_skips() {
        let mut announcer = SpeechAnnouncer::new(Some("definitely-not-a-real-tts-binary"), false);
        assert!(announcer.announce("Inhale").is_ok());
    }

    #[test]
    fn test_speech_missing_program_errors() {
        let mut announcer = SpeechAnnouncer::new(Some("definitely-not-a-real-tts-binary"), true);
        let err = announcer.announce("Inhale").unwrap_err();
        assert!(matches!(err, BreathworkError::Announce(_)));
    }

    #[test]
    fn test_speech_empty_command_errors() {
        let mut announcer = SpeechAnnouncer::new(Some("   "), true);
        assert!(announcer.announce("Inhale").is_err());
    }

    #[test]
    fn test_speech_command_parsing() {
        let announcer = SpeechAnnouncer::new(Some("espeak -s 140"), true);
        assert_eq!(announcer.program(), "espeak");
        assert_eq!(announcer.args, vec!["-s", "140"]);
    }

    #[test]
    fn test_set_enabled() {
        let mut announcer = SpeechAnnouncer::new(None, false);
        assert!(!announcer.is_enabled());
        announcer.set_enabled(true);
        assert!(announcer.is_enabled());
        announcer.set_enabled(false);
        assert!(!announcer.is_enabled());
    }
}
