//! Control bar - one gauge per slider, like the classroom page's sliders

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use impulse_probe::{
    probe::impulse::is_impulse_regime,
    sine::{AMPLITUDE_RANGE, FREQUENCY_RANGE, PHASE_RANGE},
};

use super::super::app::App;

/// Render the `a` and `Δ` sliders
pub fn render_probe_controls(frame: &mut Frame, area: Rect, app: &App) {
    let cols = split(area, 2);
    let a = app.params.amplification();
    let shift = app.params.shift();
    let (a_label, a_color) = amplification_label(a, app.config.impulse_threshold);
    render_slider(
        frame,
        cols[0],
        " Amplification: a ",
        a_label,
        ratio(a, app.config.amplification_range),
        a_color,
    );
    render_slider(
        frame,
        cols[1],
        " Time shift: Δ ",
        format!("{shift:+.2} s"),
        ratio(shift, app.config.shift_range),
        Color::Cyan,
    );
}

/// Gauge label and colour for `a`, flagged once the δ limit takes over
fn amplification_label(a: f64, threshold: f64) -> (String, Color) {
    if is_impulse_regime(a, threshold) {
        (format!("{a:.2}  (δ limit)"), Color::LightRed)
    } else {
        (format!("{a:.2}"), Color::Cyan)
    }
}

/// Render the amplitude / frequency / phase sliders
pub fn render_sine_controls(frame: &mut Frame, area: Rect, app: &App) {
    let cols = split(area, 3);
    let sine = &app.sine;
    render_slider(
        frame,
        cols[0],
        " Amplitude (a) ",
        format!("{:.1}", sine.amplitude()),
        ratio(sine.amplitude(), AMPLITUDE_RANGE),
        Color::Cyan,
    );
    render_slider(
        frame,
        cols[1],
        " Frequency (f) [Hz] ",
        format!("{:.0}", sine.frequency()),
        ratio(sine.frequency(), FREQUENCY_RANGE),
        Color::Cyan,
    );
    render_slider(
        frame,
        cols[2],
        " Phase (φ) [rad] ",
        format!("{:+.2}", sine.phase()),
        ratio(sine.phase(), PHASE_RANGE),
        if app.is_playing() { Color::Green } else { Color::Cyan },
    );
}

fn render_slider(frame: &mut Frame, area: Rect, title: &str, label: String, ratio: f64, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn split(area: Rect, count: u32) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area)
}

/// Slider position of `value` within `range`, in [0, 1]
fn ratio(value: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
