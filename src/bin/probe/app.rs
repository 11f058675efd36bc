//! Probe - interactive application state and event loop

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{info, warn};

use impulse_probe::{
    dsp::product::round_to,
    probe::{self, ProbeConfig, ProbeFrame, ProbeParams},
    sine::{SineClip, SineParams, AMPLITUDE_RANGE, FREQUENCY_RANGE, PHASE_RANGE},
};

use super::audio::AudioOutput;
use super::ui::{self, spectrum::SpectrumAnalyzer};

/// Which demo is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Probe kernels against cos(3t)
    Probe,
    /// Companion sine-wave explorer
    Sine,
}

/// Slider steps: (fine, coarse with Shift)
const AMPLIFICATION_STEP: (f64, f64) = (0.1, 1.0);
const SHIFT_STEP: (f64, f64) = (0.05, 0.5);
const SINE_AMPLITUDE_STEP: (f64, f64) = (0.1, 1.0);
const SINE_FREQUENCY_STEP: (f64, f64) = (1.0, 10.0);
const SINE_PHASE_STEP: (f64, f64) = (0.1, 0.5);

/// Main application
pub struct App {
    pub mode: Mode,
    pub config: ProbeConfig,
    pub params: ProbeParams,
    /// Latest successfully rendered probe frame
    pub frame: Option<ProbeFrame>,
    pub sine: SineParams,
    pub clip: SineClip,
    pub spectrum: SpectrumAnalyzer,
    pub audio: Option<AudioOutput>,
    pub status: Option<String>,
    pub show_about: bool,
    should_quit: bool,
}

impl App {
    pub fn new(mode: Mode, config: ProbeConfig, params: ProbeParams) -> Self {
        let sine = SineParams::default();
        let clip = SineClip::demo(&sine);
        let mut spectrum = SpectrumAnalyzer::new(clip.sample_rate as f32);
        spectrum.update(&clip.samples);

        let mut app = Self {
            mode,
            config,
            params,
            frame: None,
            sine,
            clip,
            spectrum,
            audio: None,
            status: None,
            show_about: false,
            should_quit: false,
        };
        app.recompute_probe();
        app
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        info!(mode = ?self.mode, "starting interactive session");

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            // Poll for input every 250 ms; nothing animates between interactions
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        if let Some(audio) = self.audio.as_mut() {
            audio.pause();
        }
        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Char('?') => self.show_about = !self.show_about,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            _ => match self.mode {
                Mode::Probe => self.handle_probe_key(key.code, coarse),
                Mode::Sine => self.handle_sine_key(key.code, coarse),
            },
        }
    }

    fn handle_probe_key(&mut self, code: KeyCode, coarse: bool) {
        let a_step = pick(AMPLIFICATION_STEP, coarse);
        let shift_step = pick(SHIFT_STEP, coarse);
        let (a, shift) = (self.params.amplification(), self.params.shift());
        let (a, shift) = match code {
            KeyCode::Right => (a + a_step, shift),
            KeyCode::Left => (a - a_step, shift),
            KeyCode::Up => (a, shift + shift_step),
            KeyCode::Down => (a, shift - shift_step),
            _ => return,
        };
        self.set_probe(a, shift);
    }

    fn handle_sine_key(&mut self, code: KeyCode, coarse: bool) {
        let (amp, freq, phase) = (self.sine.amplitude(), self.sine.frequency(), self.sine.phase());
        let (amp, freq, phase) = match code {
            KeyCode::Right => (amp, freq + pick(SINE_FREQUENCY_STEP, coarse), phase),
            KeyCode::Left => (amp, freq - pick(SINE_FREQUENCY_STEP, coarse), phase),
            KeyCode::Up => (amp + pick(SINE_AMPLITUDE_STEP, coarse), freq, phase),
            KeyCode::Down => (amp - pick(SINE_AMPLITUDE_STEP, coarse), freq, phase),
            KeyCode::Char(']') | KeyCode::Char('}') => (amp, freq, phase + pick(SINE_PHASE_STEP, coarse)),
            KeyCode::Char('[') | KeyCode::Char('{') => (amp, freq, phase - pick(SINE_PHASE_STEP, coarse)),
            KeyCode::Char(' ') => {
                self.toggle_playback();
                return;
            }
            _ => return,
        };
        self.set_sine(amp, freq, phase);
    }

    /// Slider semantics: clamp to the range, snap to 2 decimals so repeated
    /// steps land exactly on values like 19.5.
    fn set_probe(&mut self, a: f64, shift: f64) {
        let (a_min, a_max) = self.config.amplification_range;
        let (s_min, s_max) = self.config.shift_range;
        let a = round_to(a, 2).clamp(a_min, a_max);
        let shift = round_to(shift, 2).clamp(s_min, s_max);

        match ProbeParams::with_config(a, shift, &self.config) {
            Ok(params) => {
                self.params = params;
                self.recompute_probe();
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    fn set_sine(&mut self, amp: f64, freq: f64, phase: f64) {
        let amp = round_to(amp, 2).clamp(AMPLITUDE_RANGE.0, AMPLITUDE_RANGE.1);
        let freq = freq.round().clamp(FREQUENCY_RANGE.0, FREQUENCY_RANGE.1);
        let phase = round_to(phase, 2).clamp(PHASE_RANGE.0, PHASE_RANGE.1);

        match SineParams::new(amp, freq, phase) {
            Ok(params) => {
                self.sine = params;
                self.clip = SineClip::demo(&params);
                self.spectrum.update(&self.clip.samples);
                if let Some(audio) = self.audio.as_mut() {
                    audio.set_params(params);
                }
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    /// One full pipeline pass for the current parameters
    fn recompute_probe(&mut self) {
        match probe::render(self.params, &self.config) {
            Ok(frame) => {
                self.frame = Some(frame);
                self.status = None;
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Probe => Mode::Sine,
            Mode::Sine => Mode::Probe,
        };
        if self.mode == Mode::Probe {
            if let Some(audio) = self.audio.as_mut() {
                audio.pause();
            }
        }
        info!(mode = ?self.mode, "switched demo");
    }

    fn toggle_playback(&mut self) {
        if self.audio.is_none() {
            match AudioOutput::open(self.sine) {
                Ok(audio) => self.audio = Some(audio),
                Err(err) => {
                    self.report_error(format!("audio unavailable: {err:#}"));
                    return;
                }
            }
        }
        if let Some(audio) = self.audio.as_mut() {
            audio.toggle();
        }
    }

    fn reset(&mut self) {
        match self.mode {
            Mode::Probe => {
                let defaults = ProbeParams::default();
                self.set_probe(defaults.amplification(), defaults.shift());
            }
            Mode::Sine => {
                let defaults = SineParams::default();
                self.set_sine(defaults.amplitude(), defaults.frequency(), defaults.phase());
            }
        }
    }

    fn report_error(&mut self, message: String) {
        warn!(%message, "interaction rejected");
        self.status = Some(message);
    }

    pub fn is_playing(&self) -> bool {
        self.audio.as_ref().is_some_and(|a| a.is_playing())
    }
}

fn pick(steps: (f64, f64), coarse: bool) -> f64 {
    if coarse {
        steps.1
    } else {
        steps.0
    }
}
