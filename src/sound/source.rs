//! Platform alert-sound selection.
//!
//! Each OS ships a conventional set of alert sounds; the candidates below
//! are probed in order and the first one present on disk wins. Callers
//! fall back to a synthesized beep when none exist.

use std::path::PathBuf;

/// Candidate alert-sound files, in order of preference.
#[cfg(target_os = "macos")]
pub const ALERT_SOUND_CANDIDATES: &[&str] = &[
    "/System/Library/Sounds/Ping.aiff",
    "/System/Library/Sounds/Glass.aiff",
];

/// Candidate alert-sound files, in order of preference.
#[cfg(target_os = "linux")]
pub const ALERT_SOUND_CANDIDATES: &[&str] = &[
    "/usr/share/sounds/freedesktop/stereo/alarm-clock-elapsed.oga",
    "/usr/share/sounds/freedesktop/stereo/complete.oga",
];

/// Candidate alert-sound files, in order of preference.
#[cfg(target_os = "windows")]
pub const ALERT_SOUND_CANDIDATES: &[&str] =
    &[r"C:\Windows\Media\Alarm01.wav", r"C:\Windows\Media\chimes.wav"];

/// Candidate alert-sound files, in order of preference.
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub const ALERT_SOUND_CANDIDATES: &[&str] = &[];

/// Returns the first candidate alert sound present on this system.
#[must_use]
pub fn find_alert_sound() -> Option<PathBuf> {
    ALERT_SOUND_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
