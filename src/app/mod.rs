//! Application event loop.
//!
//! Key presses and ticks are produced by two background tasks and
//! serialized into one mpsc channel, so the timer state is only ever
//! mutated from this loop, strictly in event order. Updates return the
//! requested side effect as data; the loop executes it and redraws.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::debug;

use crate::notify::Notifier;
use crate::types::{TimerConfig, TimerPhase, TimerState};
use crate::ui;

/// Capacity of the serialized event channel.
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Events consumed by the application loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// One second elapsed
    Tick,
}

/// Side effects requested by an update, executed by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch a phase-completion notification for the ended phase
    Notify(TimerPhase),
    /// Terminate the event loop
    Quit,
}

/// The application: the timer state plus the collaborators the loop drives.
pub struct App {
    state: TimerState,
    notifier: Notifier,
    exit: bool,
}

impl App {
    /// Creates the application from a resolved configuration.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        Self {
            state: TimerState::new(config),
            notifier: Notifier::new(config.notify),
            exit: false,
        }
    }

    /// Runs the event loop until quit.
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        spawn_input_reader(tx.clone());
        spawn_ticker(tx);

        terminal.draw(|frame| ui::draw(frame, &self.state))?;
        while !self.exit {
            let Some(event) = rx.recv().await else { break };
            if let Some(effect) = self.update(event) {
                self.apply(effect);
            }
            terminal.draw(|frame| ui::draw(frame, &self.state))?;
        }
        Ok(())
    }

    /// Applies one event to the timer state, returning the side effect the
    /// loop should execute, if any.
    fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.state.tick().map(Effect::Notify),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('q') => Some(Effect::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Effect::Quit)
            }
            KeyCode::Char('g') | KeyCode::Char(' ') => {
                self.state.toggle_run();
                None
            }
            KeyCode::Char('s') => {
                self.state.skip();
                None
            }
            KeyCode::Char('r') => {
                self.state.reset();
                None
            }
            _ => None,
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(ended) => self.notifier.phase_complete(ended),
            Effect::Quit => self.exit = true,
        }
    }

    /// Returns the current timer state.
    #[must_use]
    pub fn state(&self) -> &TimerState {
        &self.state
    }
}

/// Forwards key presses into the event channel until the loop goes away.
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.blocking_send(Event::Key(key)).is_err() {
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                debug!("Input reader stopped: {}", e);
                return;
            }
        }
    });
}

/// Delivers one tick per elapsed second.
///
/// The ticker re-arms itself after each delivery instead of running a
/// periodic background timer, so a long pause never produces a backlog
/// of queued ticks.
fn spawn_ticker(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if tx.send(Event::Tick).await.is_err() {
                return;
            }
        }
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NotifyMode;

    fn app() -> App {
        // Alerts off so tests touch neither the audio device nor the
        // desktop notification service.
        App::new(TimerConfig::default().with_notify(NotifyMode::None))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_q_requests_quit() {
        let mut app = app();
        assert_eq!(app.update(key(KeyCode::Char('q'))), Some(Effect::Quit));
    }

    #[test]
    fn test_ctrl_c_requests_quit() {
        let mut app = app();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.update(event), Some(Effect::Quit));
    }

    #[test]
    fn test_plain_c_is_ignored() {
        let mut app = app();
        assert_eq!(app.update(key(KeyCode::Char('c'))), None);
        assert!(!app.state().running);
    }

    #[test]
    fn test_g_toggles_run() {
        let mut app = app();

        assert_eq!(app.update(key(KeyCode::Char('g'))), None);
        assert!(app.state().running);

        assert_eq!(app.update(key(KeyCode::Char('g'))), None);
        assert!(!app.state().running);
    }

    #[test]
    fn test_space_toggles_run() {
        let mut app = app();

        app.update(key(KeyCode::Char(' ')));

        assert!(app.state().running);
    }

    #[test]
    fn test_s_skips_phase_without_notifying() {
        let mut app = app();

        let effect = app.update(key(KeyCode::Char('s')));

        assert_eq!(effect, None);
        assert_eq!(app.state().phase, TimerPhase::Break);
        assert_eq!(app.state().remaining_seconds, 5 * 60);
        assert!(!app.state().running);
    }

    #[test]
    fn test_r_resets_remaining() {
        let mut app = app();
        app.update(key(KeyCode::Char('g')));
        app.update(Event::Tick);
        assert_eq!(app.state().remaining_seconds, 25 * 60 - 1);

        app.update(key(KeyCode::Char('r')));

        assert_eq!(app.state().remaining_seconds, 25 * 60);
        assert!(!app.state().running);
    }

    #[test]
    fn test_tick_while_paused_changes_nothing() {
        let mut app = app();

        let effect = app.update(Event::Tick);

        assert_eq!(effect, None);
        assert_eq!(app.state().remaining_seconds, 25 * 60);
    }

    #[test]
    fn test_tick_expiry_yields_notify_effect() {
        let mut app = app();
        app.update(key(KeyCode::Char('g')));
        app.state.remaining_seconds = 1;

        let effect = app.update(Event::Tick);

        assert_eq!(effect, Some(Effect::Notify(TimerPhase::Work)));
        assert_eq!(app.state().phase, TimerPhase::Break);
        assert!(!app.state().running);
    }

    #[test]
    fn test_quit_effect_stops_loop() {
        let mut app = app();

        app.apply(Effect::Quit);

        assert!(app.exit);
    }

    #[test]
    fn test_notify_effect_with_alerts_off_is_harmless() {
        let mut app = app();

        app.apply(Effect::Notify(TimerPhase::Work));

        assert!(!app.exit);
    }
}
