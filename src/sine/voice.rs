use std::f64::consts::TAU;

use rtrb::Consumer;

use super::SineParams;

/// Control messages from the UI thread to the audio callback.
#[derive(Debug, Clone, Copy)]
pub enum SineMessage {
    SetParams(SineParams),
    Play,
    Pause,
}

/// Realtime sine oscillator driven by [`SineMessage`]s.
///
/// Keeps a running phase so frequency changes stay continuous, and ramps the
/// amplitude across each block so slider moves do not click. Allocation-free
/// once constructed.
pub struct SineVoice {
    rx: Consumer<SineMessage>,
    sample_rate: f64,
    params: SineParams,
    /// Accumulated 2πft, wrapped to [0, 2π).
    running_phase: f64,
    /// Gain applied at the end of the previous block.
    current_gain: f64,
    playing: bool,
}

impl SineVoice {
    pub fn new(sample_rate: f32, params: SineParams, rx: Consumer<SineMessage>) -> Self {
        Self {
            rx,
            sample_rate: sample_rate as f64,
            params,
            running_phase: 0.0,
            current_gain: 0.0,
            playing: false,
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Ok(msg) = self.rx.pop() {
            match msg {
                SineMessage::SetParams(params) => self.params = params,
                SineMessage::Play => self.playing = true,
                SineMessage::Pause => self.playing = false,
            }
        }

        let target_gain = if self.playing {
            self.params.amplitude() * SineParams::playback_gain()
        } else {
            0.0
        };

        if out.is_empty() {
            return;
        }

        let increment = TAU * self.params.frequency() / self.sample_rate;
        let gain_step = (target_gain - self.current_gain) / out.len() as f64;
        let phase_offset = self.params.phase();

        for sample in out.iter_mut() {
            self.current_gain += gain_step;
            *sample = (self.current_gain * (self.running_phase + phase_offset).sin()) as f32;
            self.running_phase = (self.running_phase + increment) % TAU;
        }
        self.current_gain = target_gain;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn params(&self) -> SineParams {
        self.params
    }
}
