//! Command line interface for the interval timer.
//!
//! Uses clap derive macro for argument parsing. Positional minute values
//! take precedence over the corresponding flags when supplied.

use clap::Parser;

use crate::types::{InvalidNotifyMode, NotifyMode, TimerConfig};

// ============================================================================
// CLI Structure
// ============================================================================

/// Terminal work/break interval timer
#[derive(Parser, Debug)]
#[command(
    name = "pomotui",
    version,
    about = "A terminal work/break interval timer with desktop notifications"
)]
pub struct Cli {
    /// Work duration in minutes
    #[arg(long = "work", value_name = "MINUTES", default_value_t = 25)]
    pub work: u32,

    /// Break duration in minutes
    #[arg(long = "break", value_name = "MINUTES", default_value_t = 5)]
    pub break_minutes: u32,

    /// Notification mode: none, visual, audio, both
    #[arg(long = "notify", value_name = "MODE", default_value = "both")]
    pub notify: String,

    /// Minute overrides: work, then break (take precedence over the flags)
    #[arg(value_name = "MINUTES")]
    pub minutes: Vec<String>,
}

impl Cli {
    /// Resolves the parsed arguments into a timer configuration.
    ///
    /// Positional values override the flags; values that are not positive
    /// integers are silently ignored. An unrecognized notify mode is a
    /// fatal configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotifyMode`] if the notify mode string is not one
    /// of `none`, `visual`, `audio`, `both`.
    pub fn timer_config(&self) -> Result<TimerConfig, InvalidNotifyMode> {
        let notify: NotifyMode = self.notify.parse()?;

        let mut work_minutes = self.work;
        let mut break_minutes = self.break_minutes;
        if let Some(minutes) = self.minutes.first().and_then(|s| parse_minutes(s)) {
            work_minutes = minutes;
        }
        if let Some(minutes) = self.minutes.get(1).and_then(|s| parse_minutes(s)) {
            break_minutes = minutes;
        }

        Ok(TimerConfig {
            work_minutes,
            break_minutes,
            notify,
        })
    }
}

/// Parses a positional minute override, accepting only positive integers.
fn parse_minutes(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|&minutes| minutes > 0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pomotui").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).timer_config().unwrap();
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.break_minutes, 5);
        assert_eq!(config.notify, NotifyMode::Both);
    }

    #[test]
    fn test_flags() {
        let config = parse(&["--work", "50", "--break", "10", "--notify", "visual"])
            .timer_config()
            .unwrap();
        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.break_minutes, 10);
        assert_eq!(config.notify, NotifyMode::Visual);
    }

    #[test]
    fn test_one_positional_overrides_work() {
        let config = parse(&["40"]).timer_config().unwrap();
        assert_eq!(config.work_minutes, 40);
        assert_eq!(config.break_minutes, 5);
    }

    #[test]
    fn test_two_positionals_override_work_and_break() {
        let config = parse(&["40", "8"]).timer_config().unwrap();
        assert_eq!(config.work_minutes, 40);
        assert_eq!(config.break_minutes, 8);
    }

    #[test]
    fn test_positionals_take_precedence_over_flags() {
        let config = parse(&["--work", "50", "--break", "10", "30", "6"])
            .timer_config()
            .unwrap();
        assert_eq!(config.work_minutes, 30);
        assert_eq!(config.break_minutes, 6);
    }

    #[test]
    fn test_non_integer_positional_is_ignored() {
        let config = parse(&["--work", "50", "abc", "6"]).timer_config().unwrap();
        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.break_minutes, 6);
    }

    #[test]
    fn test_zero_positional_is_ignored() {
        let config = parse(&["0", "0"]).timer_config().unwrap();
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.break_minutes, 5);
    }

    #[test]
    fn test_invalid_notify_mode_is_fatal() {
        let err = parse(&["--notify", "loud"]).timer_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid notify mode: loud (use: none, visual, audio, both)"
        );
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("30"), Some(30));
        assert_eq!(parse_minutes("0"), None);
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("2.5"), None);
    }
}
