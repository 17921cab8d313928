//! Phase-completion notifications.
//!
//! Dispatches a desktop notification and/or an alert sound when a phase
//! expires naturally. Delivery is best-effort: failures are logged and
//! swallowed, and nothing here ever blocks the event loop.

use notify_rust::Notification;
use tracing::{debug, warn};

use crate::sound::{RodioSoundPlayer, SoundPlayer};
use crate::types::{NotifyMode, TimerPhase};

/// Title used for all desktop notifications.
const NOTIFICATION_TITLE: &str = "Pomodoro Timer";

/// Returns the notification body for the phase that just ended.
#[must_use]
pub fn completion_message(ended: TimerPhase) -> &'static str {
    match ended {
        TimerPhase::Work => "Work session complete! Time for a break.",
        TimerPhase::Break => "Break is over! Ready to work?",
    }
}

/// Dispatches phase-completion alerts according to the configured mode.
pub struct Notifier {
    mode: NotifyMode,
    player: Option<Box<dyn SoundPlayer>>,
}

impl Notifier {
    /// Creates a notifier for the given mode.
    ///
    /// Audio initialization is best-effort: when no output device is
    /// available the notifier degrades to visual-only and logs the reason.
    #[must_use]
    pub fn new(mode: NotifyMode) -> Self {
        let player: Option<Box<dyn SoundPlayer>> = if mode.wants_audio() {
            match RodioSoundPlayer::new() {
                Ok(player) => Some(Box::new(player)),
                Err(e) => {
                    warn!("Audio not available, sound alerts disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self { mode, player }
    }

    /// Creates a notifier with a specific sound player.
    #[must_use]
    pub fn with_player(mode: NotifyMode, player: Box<dyn SoundPlayer>) -> Self {
        Self {
            mode,
            player: Some(player),
        }
    }

    /// Dispatches alerts for a naturally expired phase.
    ///
    /// Fire-and-forget: the desktop notification is shown from a detached
    /// thread and sound playback is already non-blocking.
    pub fn phase_complete(&self, ended: TimerPhase) {
        if self.mode.wants_visual() {
            show_desktop_notification(completion_message(ended));
        }

        if self.mode.wants_audio() {
            match &self.player {
                Some(player) => {
                    if let Err(e) = player.play() {
                        warn!("Failed to play alert sound: {}", e);
                    }
                }
                None => debug!("Sound alert skipped, audio unavailable"),
            }
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("mode", &self.mode)
            .field("has_player", &self.player.is_some())
            .finish()
    }
}

/// Shows a desktop notification from a detached thread.
fn show_desktop_notification(body: &'static str) {
    std::thread::spawn(move || {
        if let Err(e) = Notification::new()
            .summary(NOTIFICATION_TITLE)
            .body(body)
            .show()
        {
            warn!("Failed to show desktop notification: {}", e);
        }
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::MockSoundPlayer;
    use std::sync::Arc;

    /// Mock player handle that can be inspected after the notifier takes
    /// ownership of the boxed trait object.
    struct SharedPlayer(Arc<MockSoundPlayer>);

    impl SoundPlayer for SharedPlayer {
        fn play(&self) -> Result<(), crate::sound::SoundError> {
            self.0.play()
        }
    }

    fn audio_notifier(mode: NotifyMode) -> (Notifier, Arc<MockSoundPlayer>) {
        let player = Arc::new(MockSoundPlayer::new());
        let notifier = Notifier::with_player(mode, Box::new(SharedPlayer(player.clone())));
        (notifier, player)
    }

    #[test]
    fn test_completion_messages() {
        assert_eq!(
            completion_message(TimerPhase::Work),
            "Work session complete! Time for a break."
        );
        assert_eq!(
            completion_message(TimerPhase::Break),
            "Break is over! Ready to work?"
        );
    }

    #[test]
    fn test_audio_mode_plays_once_per_expiry() {
        let (notifier, player) = audio_notifier(NotifyMode::Audio);

        notifier.phase_complete(TimerPhase::Work);
        assert_eq!(player.play_count(), 1);

        notifier.phase_complete(TimerPhase::Break);
        assert_eq!(player.play_count(), 2);
    }

    #[test]
    fn test_none_mode_dispatches_nothing() {
        let (notifier, player) = audio_notifier(NotifyMode::None);

        notifier.phase_complete(TimerPhase::Work);

        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_visual_mode_does_not_play_sound() {
        // Visual mode never consults the player even when one is present.
        let (notifier, player) = audio_notifier(NotifyMode::Visual);

        notifier.phase_complete(TimerPhase::Work);

        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_player_failure_is_swallowed() {
        let (notifier, player) = audio_notifier(NotifyMode::Audio);
        player.set_should_fail(true);

        notifier.phase_complete(TimerPhase::Work);

        assert_eq!(player.play_count(), 0);
    }
}
