//! Core data types for the interval timer.
//!
//! This module defines the timer state machine: the current phase, the
//! remaining time, and the transition operations the event loop applies.
//! Transitions are plain methods on [`TimerState`]; a natural expiry is
//! reported as data so the caller decides how to dispatch the alert.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Currently in a work session
    Work,
    /// Currently in a break
    Break,
}

impl TimerPhase {
    /// Returns the display label for the phase.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Work => "WORK",
            TimerPhase::Break => "BREAK",
        }
    }

    /// Returns the other phase.
    #[must_use]
    pub fn other(&self) -> TimerPhase {
        match self {
            TimerPhase::Work => TimerPhase::Break,
            TimerPhase::Break => TimerPhase::Work,
        }
    }
}

// ============================================================================
// NotifyMode
// ============================================================================

/// Channels used for phase-completion alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMode {
    /// No alert
    None,
    /// Desktop notification only
    Visual,
    /// Alert sound only
    Audio,
    /// Desktop notification and alert sound
    #[default]
    Both,
}

impl NotifyMode {
    /// Returns the string representation of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyMode::None => "none",
            NotifyMode::Visual => "visual",
            NotifyMode::Audio => "audio",
            NotifyMode::Both => "both",
        }
    }

    /// Returns true if this mode dispatches a desktop notification.
    #[must_use]
    pub fn wants_visual(&self) -> bool {
        matches!(self, NotifyMode::Visual | NotifyMode::Both)
    }

    /// Returns true if this mode plays an alert sound.
    #[must_use]
    pub fn wants_audio(&self) -> bool {
        matches!(self, NotifyMode::Audio | NotifyMode::Both)
    }
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized notify mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid notify mode: {0} (use: none, visual, audio, both)")]
pub struct InvalidNotifyMode(pub String);

impl FromStr for NotifyMode {
    type Err = InvalidNotifyMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(NotifyMode::None),
            "visual" => Ok(NotifyMode::Visual),
            "audio" => Ok(NotifyMode::Audio),
            "both" => Ok(NotifyMode::Both),
            other => Err(InvalidNotifyMode(other.to_string())),
        }
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the interval timer.
///
/// Built once at startup from the CLI surface, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Work duration in minutes
    pub work_minutes: u32,
    /// Break duration in minutes
    pub break_minutes: u32,
    /// Phase-completion alert channels
    pub notify: NotifyMode,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            notify: NotifyMode::Both,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified work duration.
    #[must_use]
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified break duration.
    #[must_use]
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified notify mode.
    #[must_use]
    pub fn with_notify(mut self, mode: NotifyMode) -> Self {
        self.notify = mode;
        self
    }

    /// Returns the full length of the given phase in seconds.
    #[must_use]
    pub fn phase_seconds(&self, phase: TimerPhase) -> u64 {
        match phase {
            TimerPhase::Work => u64::from(self.work_minutes) * 60,
            TimerPhase::Break => u64::from(self.break_minutes) * 60,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The timer state machine.
///
/// One instance is owned by the event loop and mutated strictly in event
/// order. Invariant: `remaining_seconds <= total_seconds`, and
/// `total_seconds` is always the configured length of the current phase.
#[derive(Debug, Clone)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u64,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Full length of the current phase, for progress computation
    pub total_seconds: u64,
    /// Immutable configuration
    config: TimerConfig,
}

impl TimerState {
    /// Creates a new timer, paused at the start of a work phase.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        let total = config.phase_seconds(TimerPhase::Work);
        Self {
            phase: TimerPhase::Work,
            remaining_seconds: total,
            running: false,
            total_seconds: total,
            config,
        }
    }

    /// Returns the immutable configuration.
    #[must_use]
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Flips the run/pause flag.
    ///
    /// Tick delivery is unaffected; ticks are simply ignored while paused.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
    }

    /// Switches to the other phase, paused at its full length.
    ///
    /// Works regardless of the run flag or remaining time. A manual skip
    /// never raises a notification.
    pub fn skip(&mut self) {
        self.switch_phase();
    }

    /// Restores the current phase's full length and pauses.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
    }

    /// Advances the countdown by one second.
    ///
    /// Ignored while paused or already at zero. On natural expiry the phase
    /// switches in the same step and the ended phase is returned; the caller
    /// dispatches exactly one notification for it.
    pub fn tick(&mut self) -> Option<TimerPhase> {
        if !self.running || self.remaining_seconds == 0 {
            return None;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return None;
        }
        let ended = self.phase;
        self.switch_phase();
        Some(ended)
    }

    /// Returns the elapsed fraction of the current phase, in `0.0..=1.0`.
    ///
    /// A zero-length phase reports no progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.total_seconds - self.remaining_seconds) as f64 / self.total_seconds as f64
    }

    fn switch_phase(&mut self) {
        self.phase = self.phase.other();
        self.total_seconds = self.config.phase_seconds(self.phase);
        self.remaining_seconds = self.total_seconds;
        self.running = false;
    }
}

// ============================================================================
// Tests
// ============================================================================
