//! Sound system error types.
//!
//! Alert-sound playback is best-effort; these errors exist so callers can
//! log what went wrong and degrade gracefully, never to abort the timer.

use thiserror::Error;

/// Errors that can occur during alert-sound playback.
#[derive(Debug, Error)]
pub enum SoundError {
    /// No audio output device is available.
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// The alert sound file could not be opened.
    #[error("sound file not found: {0}")]
    FileNotFound(String),

    /// Failed to decode the audio file.
    #[error("failed to decode sound file: {0}")]
    Decode(String),

    /// Generic sound playback error.
    #[error("sound playback failed: {0}")]
    Playback(String),
}

impl SoundError {
    /// Returns true if this error means audio output is unusable.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_))
    }

    /// Returns true if this error is related to the sound file itself.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::Decode(_))
    }
}
