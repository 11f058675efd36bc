//! Spectrum analyzer for the sine explorer
//!
//! FFT-based magnitude spectrum with log-spaced bins.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// FFT size: ~5.4 Hz resolution at 44.1 kHz
pub const FFT_SIZE: usize = 8192;
/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 96;
/// Sliders top out at 1 kHz; leave headroom above it
const MAX_DISPLAY_FREQ: f32 = 2_000.0;
const MIN_DISPLAY_FREQ: f32 = 20.0;
const FLOOR_DB: f64 = -100.0;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    /// FFT bin indices for each displayed frequency
    bin_indices: Vec<usize>,
    freq_bins: Vec<f64>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Current spectrum data: (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);

        // Hann window - reduces spectral leakage
        let denom = (FFT_SIZE - 1) as f32;
        let window: Vec<f32> = (0..FFT_SIZE)
            .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos()))
            .collect();

        let max_freq = (sample_rate / 2.0).min(MAX_DISPLAY_FREQ).max(MIN_DISPLAY_FREQ + 1.0);
        let ratio = (max_freq / MIN_DISPLAY_FREQ) as f64;
        let half = FFT_SIZE / 2;

        let mut freq_bins = Vec::with_capacity(SPECTRUM_BINS);
        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = MIN_DISPLAY_FREQ as f64 * ratio.powf(t);
            let index = ((freq * FFT_SIZE as f64 / sample_rate as f64).round() as usize).min(half - 1);
            freq_bins.push(freq);
            bin_indices.push(index);
        }

        let spectrum = freq_bins.iter().map(|&f| (f, FLOOR_DB)).collect();

        Self {
            window,
            bin_indices,
            freq_bins,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); FFT_SIZE],
            spectrum,
        }
    }

    /// Recompute from the leading `FFT_SIZE` samples (zero-padded if shorter)
    pub fn update(&mut self, samples: &[f64]) {
        for (i, slot) in self.scratch.iter_mut().enumerate() {
            let sample = samples.get(i).copied().unwrap_or(0.0) as f32;
            *slot = Complex::new(sample * self.window[i], 0.0);
        }

        self.fft.process(&mut self.scratch);

        // Amplitude-normalised: a full-scale sine reads ≈ 20·log10(a) dB
        let norm = 4.0 / FFT_SIZE as f32;
        for ((point, &freq), &idx) in self
            .spectrum
            .iter_mut()
            .zip(&self.freq_bins)
            .zip(&self.bin_indices)
        {
            let magnitude = self.scratch[idx].norm() * norm;
            let db = if magnitude > 1e-5 {
                20.0 * (magnitude as f64).log10()
            } else {
                FLOOR_DB
            };
            *point = (freq, db);
        }
    }

    /// Get the current spectrum data
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    /// Displayed bin with the highest magnitude
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.spectrum
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_freq = spectrum.iter().map(|(f, _)| *f).fold(0.0, f64::max).max(1.0);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds([0.0, max_freq])
                .labels(vec!["0".to_string(), format!("{max_freq:.0}")])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("dB")
                .bounds([FLOOR_DB, 30.0])
                .labels(vec!["-100", "-60", "-20", "20"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
