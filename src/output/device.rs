//! The single audio output device of a session.
//!
//! `AudioDevice` is constructed explicitly by the shell and handed to the
//! player; nothing reaches for a global. Open one per session and close it
//! (or drop it) when the session ends.
//!
//! Three flavours share the same interface:
//!
//! - `open()` drives a real cpal stream. Play commands cross to the audio
//!   thread through an `rtrb` ring buffer, and the mixed output is tapped
//!   into a second ring buffer for the terminal scope.
//! - `offline(rate)` has a sample rate but no stream; it records the
//!   commands it receives. Tests and headless runs use it.
//! - `unavailable()` models a device that failed to open.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, error, info, warn};

use crate::error::AudioError;
use crate::output::mixer::{PlayCommand, VoiceMixer};
use crate::MAX_ACTIVE_VOICES;

/// Frames rendered per mixer pass inside the callback.
const MAX_BLOCK_SIZE: usize = 2048;
/// Pending play commands the game thread can queue ahead of the callback.
const COMMAND_QUEUE_SIZE: usize = 64;
/// Mono samples buffered for the scope (~170 ms at 48 kHz).
const SCOPE_QUEUE_SIZE: usize = 8192;

enum Sink {
    Closed,
    Stream {
        commands: Producer<PlayCommand>,
        _stream: cpal::Stream,
    },
    Offline {
        history: Vec<PlayCommand>,
    },
}

pub struct AudioDevice {
    sample_rate: Option<u32>,
    channels: usize,
    sink: Sink,
}

impl AudioDevice {
    /// Open the host's default output device and start the stream.
    ///
    /// Returns the device and the consumer end of the output tap.
    pub fn open() -> Result<(Self, Consumer<f32>), AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let (commands, mut command_rx) = RingBuffer::<PlayCommand>::new(COMMAND_QUEUE_SIZE);
        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE_SIZE);
        let mut mixer = VoiceMixer::new(MAX_ACTIVE_VOICES, MAX_BLOCK_SIZE);

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                while let Ok(command) = command_rx.pop() {
                    mixer.trigger(command);
                }

                mixer.render(data, channels);

                // Tap the first channel for visualization, dropping samples
                // when the UI falls behind.
                for frame in data.chunks(channels) {
                    if scope_tx.push(frame[0]).is_err() {
                        break;
                    }
                }
            },
            |err| error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;
        info!(sample_rate, channels, "audio output opened");

        Ok((
            Self {
                sample_rate: Some(sample_rate),
                channels,
                sink: Sink::Stream {
                    commands,
                    _stream: stream,
                },
            },
            scope_rx,
        ))
    }

    /// Like [`AudioDevice::open`] but degrades to an unavailable device,
    /// logging the reason, instead of failing.
    pub fn open_or_unavailable() -> (Self, Option<Consumer<f32>>) {
        match Self::open() {
            Ok((device, scope)) => (device, Some(scope)),
            Err(err) => {
                warn!("audio output unavailable, continuing without sound: {err}");
                (Self::unavailable(), None)
            }
        }
    }

    /// A device with a sample rate but no stream. Records every command.
    pub fn offline(sample_rate: u32) -> Self {
        Self {
            sample_rate: Some(sample_rate),
            channels: 2,
            sink: Sink::Offline {
                history: Vec::new(),
            },
        }
    }

    /// A device that failed to initialize.
    pub fn unavailable() -> Self {
        Self {
            sample_rate: None,
            channels: 0,
            sink: Sink::Closed,
        }
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self.sink, Sink::Closed)
    }

    /// Commands received by an offline device, oldest first.
    pub fn history(&self) -> &[PlayCommand] {
        match &self.sink {
            Sink::Offline { history } => history,
            _ => &[],
        }
    }

    /// Hand a command to the mixer. Returns false when it was dropped.
    pub(crate) fn submit(&mut self, command: PlayCommand) -> bool {
        match &mut self.sink {
            Sink::Closed => false,
            Sink::Stream { commands, .. } => match commands.push(command) {
                Ok(()) => true,
                Err(_) => {
                    debug!("play queue full, dropping sound");
                    false
                }
            },
            Sink::Offline { history } => {
                history.push(command);
                true
            }
        }
    }

    /// Stop the stream and release the device. Later plays are no-ops.
    pub fn close(&mut self) {
        if self.is_ready() {
            info!("audio output closed");
        }
        self.sink = Sink::Closed;
        self.sample_rate = None;
    }
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        self.close();
    }
}
