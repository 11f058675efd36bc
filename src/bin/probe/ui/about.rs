//! Explanatory overlay toggled with `?`

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::Mode;

const PROBE_ABOUT: &[&str] = &[
    "Suppose a black box holds an unknown signal f(t). The only thing you can do is feed it",
    "another signal in(t); the box answers with the scalar product <f(t), in(t)>.",
    "Which in(t) gives you f(Δ)?",
    "",
    "The top row shows f(t) = cos(3t). The middle row shows three candidates for in(t):",
    "rectangle, triangle and sinc, shaped by a and Δ. Each of them integrates to 1, whatever a.",
    "",
    "The bottom row multiplies each candidate by f(t). The printed scalar product is the",
    "integral of that product: the signed area under the curve.",
    "",
    "    <f(t), in(t-Δ)> = ∫ f(t) in(t-Δ) dt",
    "",
    "As a grows the three shapes differ, but they act the same inside the integral: only",
    "their values right at the peak contribute. When a tends to infinity (here, past 19.5)",
    "they can no longer be drawn. They become the Dirac impulse δ(t), shown as an arrow",
    "whose height is the integral: 1 for in(t), f(Δ) for the product.",
    "",
    "    <f(t), δ(t-Δ)> = ∫ f(t) δ(t-Δ) dt = f(Δ)",
    "",
    "The ideal input is therefore δ(t-Δ).",
];

const SINE_ABOUT: &[&str] = &[
    "A sine wave is    y(t) = a sin(2π f t + φ)",
    "",
    "Frequency f sets the pitch. The period is T = 1/f: higher f, shorter T, higher pitch.",
    "Amplitude a sets the loudness.",
    "Phase φ shifts the wave in time. A shift of 2π is one full cycle. While visually",
    "obvious, constant phase shifts are generally inaudible.",
];

pub fn render_about(frame: &mut Frame, area: Rect, mode: Mode) {
    let (title, text) = match mode {
        Mode::Probe => (" Measuring time content ", PROBE_ABOUT),
        Mode::Sine => (" The math behind the sound ", SINE_ABOUT),
    };

    let [popup] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(text.len() as u16 + 2)])
        .flex(Flex::Center)
        .areas(popup);

    let lines: Vec<Line> = text.iter().map(|&l| Line::from(l)).collect();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
