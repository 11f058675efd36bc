//! Companion sine-wave explorer.

/*
The Sine Wave
=============

    y(t) = a · sin(2π · f · t + φ)

  a   Amplitude. Loudness. The slider runs 0 to 10.
  f   Frequency in Hz. Pitch. The period is T = 1/f.
  φ   Phase in radians. Shifts the wave in time; a shift of 2π is one full
      cycle. Constant phase offsets are generally inaudible.

In air the wave also has a wavelength λ = c / f, with c ≈ 343 m/s at room
temperature. At 440 Hz that is about 78 cm.

For playback the signal is divided by the largest slider amplitude (10),
so `a` behaves as a volume control and the output never leaves [-1, 1].
*/

#[cfg(feature = "rtrb")]
pub mod voice;

use std::f64::consts::{PI, TAU};

use crate::error::{check_range, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Audio sample rate for the explorer (Hz).
pub const SINE_SAMPLE_RATE: f64 = 44_100.0;
/// Length of the rendered clip (seconds).
pub const SINE_DURATION: f64 = 1.0;
/// Zoomed waveform window (seconds).
pub const ZOOM_WINDOW: f64 = 0.010;
/// Speed of sound used for the wavelength readout (m/s).
pub const SPEED_OF_SOUND: f64 = 343.0;

pub const AMPLITUDE_RANGE: (f64, f64) = (0.0, 10.0);
pub const FREQUENCY_RANGE: (f64, f64) = (0.0, 1000.0);
pub const PHASE_RANGE: (f64, f64) = (-PI, PI);

/// Validated sine-wave controls.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineParams {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl SineParams {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Result<Self> {
        Ok(Self {
            amplitude: check_range("amplitude", amplitude, AMPLITUDE_RANGE.0, AMPLITUDE_RANGE.1)?,
            frequency: check_range("frequency", frequency, FREQUENCY_RANGE.0, FREQUENCY_RANGE.1)?,
            phase: check_range("phase", phase, PHASE_RANGE.0, PHASE_RANGE.1)?,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// `y(t)`
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * t + self.phase).sin()
    }

    /// Period `1/f` in seconds, `None` for a DC (0 Hz) setting.
    pub fn period(&self) -> Option<f64> {
        (self.frequency > 0.0).then(|| 1.0 / self.frequency)
    }

    /// Wavelength in air `c/f` in metres, `None` for 0 Hz.
    pub fn wavelength(&self) -> Option<f64> {
        (self.frequency > 0.0).then(|| SPEED_OF_SOUND / self.frequency)
    }

    /// Scale factor mapping `y(t)` into [-1, 1] for playback.
    pub fn playback_gain() -> f64 {
        1.0 / AMPLITUDE_RANGE.1
    }
}

impl Default for SineParams {
    fn default() -> Self {
        Self {
            amplitude: 5.0,
            frequency: 440.0,
            phase: 0.0,
        }
    }
}

/// A rendered clip of `y(t)` sampled from t = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SineClip {
    pub sample_rate: f64,
    pub samples: Vec<f64>,
}

impl SineClip {
    /// Render `duration` seconds at `sample_rate`.
    pub fn render(params: &SineParams, sample_rate: f64, duration: f64) -> Self {
        let len = (duration * sample_rate).ceil().max(0.0) as usize;
        let samples = (0..len)
            .map(|i| params.value(i as f64 / sample_rate))
            .collect();
        Self {
            sample_rate,
            samples,
        }
    }

    /// The demo clip: one second at 44.1 kHz.
    pub fn demo(params: &SineParams) -> Self {
        Self::render(params, SINE_SAMPLE_RATE, SINE_DURATION)
    }

    /// Leading `window` seconds as `(t, y)` points.
    pub fn zoom(&self, window: f64) -> Vec<(f64, f64)> {
        let count = ((window * self.sample_rate).round().max(0.0) as usize).min(self.samples.len());
        self.samples[..count]
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64 / self.sample_rate, y))
            .collect()
    }

    /// Samples scaled into [-1, 1] for an audio sink.
    pub fn normalized(&self) -> Vec<f32> {
        let gain = SineParams::playback_gain();
        self.samples.iter().map(|&y| (y * gain) as f32).collect()
    }
}
