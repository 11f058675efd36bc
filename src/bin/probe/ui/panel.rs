//! Kernel column: reference, kernel, and product charts stacked vertically

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use impulse_probe::{dsp::KernelShape, probe::KernelPanel};

use super::{
    series::{decimate, CHART_POINTS},
    TIME_BOUNDS, VALUE_BOUNDS,
};

pub fn render_kernel_column(
    frame: &mut Frame,
    area: Rect,
    time: &[f64],
    reference: &[f64],
    panel: &KernelPanel,
) {
    let rows = split_rows(area);

    render_reference(frame, rows[0], time, reference);

    let kernel = decimate(time, &panel.kernel, CHART_POINTS);
    let title = format!(" in(t) = a {}(a(t-Δ)) ", panel.shape.name());
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(kernel_color(panel.shape)))
        .data(&kernel);
    frame.render_widget(chart(vec![dataset], title), rows[1]);

    let product = decimate(time, &panel.product, CHART_POINTS);
    let title = format!(" f(t) in(t)   <f,in> = {:.2} ", panel.rounded);
    // Filled area approximated with bars down to the axis
    let area_fill = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Bar)
        .style(Style::default().fg(Color::Blue))
        .data(&product);
    let outline = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&product);
    frame.render_widget(chart(vec![area_fill, outline], title), rows[2]);
}

/// The dashed `cos(3t)` reference plot heading every column
pub fn render_reference(frame: &mut Frame, area: Rect, time: &[f64], reference: &[f64]) {
    let data = decimate(time, reference, CHART_POINTS / 4);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Yellow))
        .data(&data);
    frame.render_widget(chart(vec![dataset], " f(t) = cos(3t) ".to_string()), area);
}

pub fn split_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
}

/// Chart with the shared time/value axes
pub fn chart(datasets: Vec<Dataset<'_>>, title: String) -> Chart<'_> {
    Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds(TIME_BOUNDS)
                .labels(vec!["-3", "0", "3"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(VALUE_BOUNDS)
                .labels(vec!["-2", "0", "2"])
                .style(Style::default().fg(Color::DarkGray)),
        )
}

fn kernel_color(shape: KernelShape) -> Color {
    match shape {
        KernelShape::Rectangle => Color::Cyan,
        KernelShape::Triangle => Color::Green,
        KernelShape::Sinc => Color::Magenta,
    }
}
