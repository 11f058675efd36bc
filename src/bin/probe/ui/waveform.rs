//! Sine explorer view: zoomed waveform, spectrum, and period/wavelength readout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use impulse_probe::sine::{SineParams, AMPLITUDE_RANGE, ZOOM_WINDOW};

use super::super::app::App;
use super::spectrum::render_spectrum;

pub fn render_sine(frame: &mut Frame, area: Rect, app: &App) {
    // Split screen: left=waveform, right=spectrum+info
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    // Time axis in milliseconds
    let data: Vec<(f64, f64)> = app
        .clip
        .zoom(ZOOM_WINDOW)
        .into_iter()
        .map(|(t, y)| (t * 1000.0, y))
        .collect();
    let bound = AMPLITUDE_RANGE.1 + 1.0;

    let dataset = Dataset::default()
        .name("y(t)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Waveform Zoom (10 ms): a sin(2π f t + φ) ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("ms")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, ZOOM_WINDOW * 1000.0])
                .labels(vec!["0", "5", "10"]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([-bound, bound])
                .labels(vec!["-11", "0", "11"]),
        );

    frame.render_widget(chart, main_chunks[0]);
    render_spectrum(frame, right_chunks[0], app.spectrum.data());
    frame.render_widget(info(&app.sine, app.is_playing()), right_chunks[1]);
}

fn info(sine: &SineParams, playing: bool) -> Paragraph<'static> {
    let period = sine
        .period()
        .map_or_else(|| "∞ (DC)".to_string(), |t| format!("{t:.4} s"));
    let wavelength = sine
        .wavelength()
        .map_or_else(|| "∞ (DC)".to_string(), |l| format!("{l:.2} m"));
    let playback = if playing { "▶ Playing" } else { "⏸ Paused" };

    let lines = vec![
        Line::from(format!("T (Period):     {period}")),
        Line::from(format!("λ (Wavelength): {wavelength}")),
        Line::from(format!("Volume:         {:.0}%", sine.amplitude() * SineParams::playback_gain() * 100.0)),
        Line::from(playback),
    ];
    Paragraph::new(lines).block(Block::default().title(" Listen ").borders(Borders::ALL))
}
