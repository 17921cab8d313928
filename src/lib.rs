//! Terminal work/break interval timer library.
//!
//! This library provides the functionality behind the `pomotui` binary:
//! - Timer state machine and configuration types
//! - CLI argument parsing with positional minute overrides
//! - Event-loop application driving a ratatui frame
//! - Desktop notification and alert-sound dispatch at phase completion

pub mod app;
pub mod cli;
pub mod notify;
pub mod sound;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, Effect, Event};
pub use cli::Cli;
pub use notify::{completion_message, Notifier};
pub use sound::{
    find_alert_sound, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer,
};
pub use types::{InvalidNotifyMode, NotifyMode, TimerConfig, TimerPhase, TimerState};
