//! Voice mixer that runs inside the audio callback.
//!
//! The mixer holds every clip that is still ringing, sums them into the
//! interleaved device buffer, and retires voices once their buffer ends.
//! It never allocates after construction: the voice list is preallocated
//! and a full list steals its oldest voice.

use std::sync::Arc;

use crate::dsp::{mix, pan::StereoPanner};
use crate::synth::AudioBuffer;

/// A request to play one clip, sent from the game thread to the mixer.
#[derive(Debug, Clone)]
pub struct PlayCommand {
    pub buffer: Arc<AudioBuffer>,
    pub gain: f32,
    pub pan: Option<f32>,
}

struct ActiveVoice {
    buffer: Arc<AudioBuffer>,
    position: usize,
    gain: f32,
    panner: Option<StereoPanner>,
}

impl ActiveVoice {
    fn is_finished(&self) -> bool {
        self.position >= self.buffer.len()
    }
}

pub struct VoiceMixer {
    voices: Vec<ActiveVoice>,
    capacity: usize,
    scratch_left: Vec<f32>,
    scratch_right: Vec<f32>,
}

impl VoiceMixer {
    /// `capacity` voices, rendering at most `max_block` frames per pass.
    pub fn new(capacity: usize, max_block: usize) -> Self {
        Self {
            voices: Vec::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            scratch_left: vec![0.0; max_block],
            scratch_right: vec![0.0; max_block],
        }
    }

    /// Start a voice. Overlaps are allowed; when every slot is busy the
    /// oldest voice is dropped.
    pub fn trigger(&mut self, command: PlayCommand) {
        if self.voices.len() >= self.capacity {
            self.voices.remove(0);
        }

        self.voices.push(ActiveVoice {
            buffer: command.buffer,
            position: 0,
            gain: command.gain.clamp(0.0, 1.0),
            panner: command.pan.map(StereoPanner::new),
        });
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Mix all voices into an interleaved buffer with `channels` channels.
    ///
    /// Stereo voices map to the first two channels; extra channels get
    /// silence, a mono device gets the average of left and right.
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let total_frames = out.len() / channels;
        let max_block = self.scratch_left.len().max(1);
        let mut frames_written = 0;

        while frames_written < total_frames {
            let frames = (total_frames - frames_written).min(max_block);
            self.render_block(frames);

            let left = &self.scratch_left[..frames];
            let right = &self.scratch_right[..frames];
            let out_off = frames_written * channels;
            for i in 0..frames {
                let frame = &mut out[out_off + i * channels..out_off + (i + 1) * channels];
                if channels == 1 {
                    frame[0] = 0.5 * (left[i] + right[i]);
                } else {
                    frame[0] = left[i];
                    frame[1] = right[i];
                    frame[2..].fill(0.0);
                }
            }

            frames_written += frames;
        }

        self.voices.retain(|voice| !voice.is_finished());
    }

    fn render_block(&mut self, frames: usize) {
        let left = &mut self.scratch_left[..frames];
        let right = &mut self.scratch_right[..frames];
        left.fill(0.0);
        right.fill(0.0);

        for voice in self.voices.iter_mut() {
            let remaining = voice.buffer.len().saturating_sub(voice.position);
            let count = remaining.min(frames);

            for i in 0..count {
                let (l, r) = voice.buffer.frame(voice.position + i);
                let (l, r) = match voice.panner {
                    Some(panner) => panner.process(l, r),
                    None => (l, r),
                };
                left[i] += l * voice.gain;
                right[i] += r * voice.gain;
            }

            voice.position += count;
        }

        mix::hard_clip_in_place(left);
        mix::hard_clip_in_place(right);
    }
}
