//! TUI module for probe
//!
//! Layout for the probe demo, one column per kernel plus the impulse column
//! once `a` passes the threshold:
//!
//! ```text
//! ┌ a ═════════════════ ┐┌ Δ ════════════════════┐
//! │ f(t) = cos(3t)      ││ f(t) = cos(3t)        │ ...
//! │ in(t) = a rect(..)  ││ in(t) = a tri(..)     │
//! │ f(t)·in(t)  <f,in>  ││ f(t)·in(t)  <f,in>    │
//! └─────────────────────┘└───────────────────────┘
//! ```

mod about;
mod controls;
mod impulse;
mod panel;
pub mod series;
pub mod spectrum;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, Mode};

/// Fixed axis bounds shared by every probe chart, as in the classroom plots
pub const TIME_BOUNDS: [f64; 2] = [-3.0, 3.0];
pub const VALUE_BOUNDS: [f64; 2] = [-2.0, 2.0];

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Controls
            Constraint::Min(12),   // Plots
            Constraint::Length(1), // Status / help bar
        ])
        .split(area);

    match app.mode {
        Mode::Probe => {
            controls::render_probe_controls(frame, chunks[0], app);
            render_probe(frame, chunks[1], app);
        }
        Mode::Sine => {
            controls::render_sine_controls(frame, chunks[0], app);
            waveform::render_sine(frame, chunks[1], app);
        }
    }

    render_help(frame, chunks[2], app);

    if app.show_about {
        about::render_about(frame, area, app.mode);
    }
}

fn render_probe(frame: &mut Frame, area: Rect, app: &App) {
    let Some(probe) = app.frame.as_ref() else {
        return;
    };

    let columns = probe.panels.len() + usize::from(probe.impulse.is_some());
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let time = probe.grid.samples();
    for (panel, &col) in probe.panels.iter().zip(cols.iter()) {
        panel::render_kernel_column(frame, col, time, &probe.reference, panel);
    }

    if let Some(limit) = probe.impulse.as_ref() {
        impulse::render_impulse_column(frame, cols[columns - 1], time, &probe.reference, limit);
    }
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = app.status.as_ref() {
        let line = Paragraph::new(format!(" {status}")).style(Style::default().fg(Color::Red));
        frame.render_widget(line, area);
        return;
    }

    let text = match app.mode {
        Mode::Probe => " [←/→] a  [↑/↓] Δ  [Shift] coarse  [R] Reset  [Tab] Sine demo  [?] About  [Q] Quit",
        Mode::Sine => {
            " [←/→] f  [↑/↓] amplitude  [ [ ] ] phase  [Space] Play/Pause  [R] Reset  [Tab] Probe demo  [?] About  [Q] Quit"
        }
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
