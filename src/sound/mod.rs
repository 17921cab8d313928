//! Alert-sound playback for phase completions.
//!
//! This module provides the audio half of the notifier:
//!
//! - Platform alert-sound discovery (macOS, Linux, Windows)
//! - Synthesized beep fallback when no platform sound is available
//! - Non-blocking playback via detached rodio sinks
//! - Graceful degradation when audio is unavailable

mod error;
mod player;
mod source;

pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::{find_alert_sound, ALERT_SOUND_CANDIDATES};

/// Trait for sound playback implementations.
///
/// Abstracts the alert-sound capability so the notifier can be exercised
/// with a mock player in tests.
pub trait SoundPlayer {
    /// Plays the phase-completion alert sound.
    ///
    /// Must be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        self.play_alert()
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_count: std::sync::atomic::AtomicUsize,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::Playback("mock failure".to_string()));
        }
        self.play_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}
