//! Sound player implementation using rodio.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::find_alert_sound;

/// Frequency of the synthesized fallback beep.
const BEEP_FREQUENCY_HZ: f32 = 440.0;

/// Length of the synthesized fallback beep.
const BEEP_DURATION: Duration = Duration::from_millis(300);

/// Volume of the synthesized fallback beep.
const BEEP_AMPLITUDE: f32 = 0.2;

/// A sound player backed by rodio.
///
/// Playback is non-blocking: sinks are detached and the sound finishes in
/// the background while the event loop keeps running.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Plays the platform alert sound.
    ///
    /// Falls back to the synthesized beep when no platform sound exists or
    /// the file cannot be played.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback beep cannot be played either.
    pub fn play_alert(&self) -> Result<(), SoundError> {
        match find_alert_sound() {
            Some(path) => match self.play_file(&path) {
                Ok(()) => Ok(()),
                Err(e) => {
                    warn!(
                        "Failed to play alert sound '{}': {}, falling back to beep",
                        path.display(),
                        e
                    );
                    self.play_beep()
                }
            },
            None => {
                debug!("No platform alert sound found, playing beep");
                self.play_beep()
            }
        }
    }

    /// Plays a sound file from the filesystem.
    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let reader = BufReader::new(file);
        let decoder = Decoder::new(reader).map_err(|e| SoundError::Decode(e.to_string()))?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::Playback(e.to_string()))?;
        sink.append(decoder);
        sink.detach();

        debug!("Alert sound playback started (detached)");
        Ok(())
    }

    /// Plays the synthesized fallback beep.
    fn play_beep(&self) -> Result<(), SoundError> {
        let beep = SineWave::new(BEEP_FREQUENCY_HZ)
            .take_duration(BEEP_DURATION)
            .amplify(BEEP_AMPLITUDE);

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::Playback(e.to_string()))?;
        sink.append(beep);
        sink.detach();

        debug!("Fallback beep playback started (detached)");
        Ok(())
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer").finish_non_exhaustive()
    }
}
