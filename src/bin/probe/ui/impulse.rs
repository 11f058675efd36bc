//! Impulse column: the Dirac limit drawn as arrows instead of curves

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Dataset, GraphType},
    Frame,
};

use impulse_probe::probe::{Arrow, ImpulseLimit};

use super::{
    panel::{chart, render_reference, split_rows},
    series::{decimate, CHART_POINTS},
    TIME_BOUNDS,
};

/// Arrow head half-width (seconds) and length (value units)
const HEAD_WIDTH: f64 = 0.15;
const HEAD_LENGTH: f64 = 0.25;

pub fn render_impulse_column(
    frame: &mut Frame,
    area: Rect,
    time: &[f64],
    reference: &[f64],
    limit: &ImpulseLimit,
) {
    let rows = split_rows(area);

    render_reference(frame, rows[0], time, reference);

    let baseline = [(TIME_BOUNDS[0], 0.0), (TIME_BOUNDS[1], 0.0)];

    let kernel_arrow = arrow_points(limit.kernel_arrow);
    let datasets = vec![
        line(&baseline, Color::DarkGray),
        line(&kernel_arrow, Color::LightRed),
    ];
    frame.render_widget(chart(datasets, " in(t) = δ(t-Δ) ".to_string()), rows[1]);

    let product_arrow = arrow_points(limit.product_arrow);
    let faded_reference = decimate(time, reference, CHART_POINTS / 4);
    let datasets = vec![
        line(&baseline, Color::DarkGray),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&faded_reference),
        line(&product_arrow, Color::LightRed),
    ];
    let title = format!(" f(t) δ(t-Δ)   <f,in> = {:.2} ", limit.rounded);
    frame.render_widget(chart(datasets, title), rows[2]);
}

fn line(data: &[(f64, f64)], color: Color) -> Dataset<'_> {
    Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

/// Polyline for an arrow from the axis to `height`: shaft, then both barbs.
pub fn arrow_points(arrow: Arrow) -> Vec<(f64, f64)> {
    let Arrow { at, height } = arrow;
    let head = HEAD_LENGTH.min(height.abs()) * height.signum();
    vec![
        (at, 0.0),
        (at, height),
        (at - HEAD_WIDTH, height - head),
        (at, height),
        (at + HEAD_WIDTH, height - head),
    ]
}
