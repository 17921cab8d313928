//! Frame rendering for the interval timer.
//!
//! The frame is built from pure text functions so the rendered output is
//! deterministic and testable from state alone; [`draw`] only applies
//! layout and styling on top of them.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::types::TimerState;

/// Width of the progress bar in cells, excluding the brackets.
pub const PROGRESS_WIDTH: usize = 40;

/// Key binding summary shown at the bottom of the frame.
pub const HELP_LINE: &str = "space/g: start/pause | s: skip | r: reset | q: quit";

/// Formats remaining time as zero-padded `MM:SS`.
///
/// Minutes are not capped at 59; a 90-minute phase renders as `90:00`.
#[must_use]
pub fn format_clock(remaining_seconds: u64) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

/// Header line naming the current phase.
#[must_use]
pub fn header_line(state: &TimerState) -> String {
    format!("Pomodoro Timer - {}", state.phase.label())
}

/// Progress bar with the remaining-time clock overlaid centered, followed
/// by a percentage label.
///
/// Cells before the elapsed fraction are `=`, cells after are blank; the
/// clock overwrites whatever cells it covers.
#[must_use]
pub fn progress_line(state: &TimerState) -> String {
    let clock = format_clock(state.remaining_seconds);
    let progress = state.progress();
    let filled = (progress * PROGRESS_WIDTH as f64) as usize;

    let clock_start = PROGRESS_WIDTH.saturating_sub(clock.len()) / 2;
    let clock_end = clock_start + clock.len();
    let clock = clock.as_bytes();

    let mut bar = String::with_capacity(PROGRESS_WIDTH + 8);
    bar.push('[');
    for cell in 0..PROGRESS_WIDTH {
        if (clock_start..clock_end).contains(&cell) {
            bar.push(clock[cell - clock_start] as char);
        } else if cell < filled {
            bar.push('=');
        } else {
            bar.push(' ');
        }
    }
    bar.push(']');
    bar.push_str(&format!(" {}%", (progress * 100.0).round() as u32));
    bar
}

/// Status line reflecting the run flag.
#[must_use]
pub fn status_line(state: &TimerState) -> &'static str {
    if state.running {
        "Status: Running"
    } else {
        "Status: Paused"
    }
}

/// Draws one frame from the current state.
pub fn draw(frame: &mut Frame, state: &TimerState) {
    let text = Text::from(vec![
        Line::styled(
            header_line(state),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(progress_line(state), Style::default().fg(Color::Cyan)),
        Line::raw(""),
        Line::styled(status_line(state), Style::default().fg(Color::Yellow)),
        Line::styled(HELP_LINE, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(text), frame.area());
}

// ============================================================================
// Tests
// ============================================================================
