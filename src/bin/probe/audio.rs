//! cpal playback for the sine-wave explorer

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};
use tracing::{error, info, warn};

use impulse_probe::sine::{
    voice::{SineMessage, SineVoice},
    SineParams,
};

/// Largest block rendered per inner loop iteration
const MAX_BLOCK_SIZE: usize = 2048;
/// Capacity of the UI → audio control ring
const CONTROL_RING_LEN: usize = 64;

/// An open output stream plus the control channel feeding it.
///
/// The stream stops when this is dropped.
pub struct AudioOutput {
    _stream: cpal::Stream,
    tx: Producer<SineMessage>,
    playing: bool,
}

impl AudioOutput {
    /// Open the default output device and start a (silent) stream
    pub fn open(params: SineParams) -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        info!(sample_rate, channels, "opening audio output");

        let (tx, rx) = RingBuffer::<SineMessage>::new(CONTROL_RING_LEN);
        let mut voice = SineVoice::new(sample_rate, params, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;
                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        voice.render_block(block);

                        // Copy to output (mono to all channels)
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }
                        frames_written += frames_to_render;
                    }
                },
                |err| error!(%err, "audio stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        Ok(Self {
            _stream: stream,
            tx,
            playing: false,
        })
    }

    pub fn set_params(&mut self, params: SineParams) {
        self.send(SineMessage::SetParams(params));
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.send(SineMessage::Play);
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.send(SineMessage::Pause);
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn send(&mut self, message: SineMessage) {
        if let Err(err) = self.tx.push(message) {
            // Ring full means the callback has stalled; the next update supersedes this one
            warn!(?err, "dropping audio control message");
        }
    }
}
