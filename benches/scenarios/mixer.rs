//! Benchmarks for the voice mixer inside the audio callback.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use katamaran::output::{PlayCommand, VoiceMixer};
use katamaran::synth::{Direction, Instrument, SoundId, ToneSynthesizer, UiCue};

use crate::BLOCK_SIZES;

fn command(synth: &ToneSynthesizer, id: SoundId, gain: f32, pan: Option<f32>) -> PlayCommand {
    let buffer = synth.render(id).expect("synthesizer has a sample rate");
    PlayCommand {
        buffer: Arc::new(buffer),
        gain,
        pan,
    }
}

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");
    let synth = ToneSynthesizer::new(48_000);

    // Rhythm: a panned stimulus with the answer chime on top
    let rhythm = [
        command(&synth, SoundId::Direction(Direction::Left), 0.7, Some(-0.8)),
        command(&synth, SoundId::Ui(UiCue::Correct), 0.5, None),
    ];
    // Memory: a sequence step still ringing under the next one
    let memory = [
        command(&synth, SoundId::Instrument(Instrument::Piano), 0.7, None),
        command(&synth, SoundId::Instrument(Instrument::Guitar), 0.7, None),
        command(&synth, SoundId::Instrument(Instrument::Drum), 0.7, None),
        command(&synth, SoundId::Ui(UiCue::Wrong), 0.5, None),
    ];

    for &size in BLOCK_SIZES {
        let mut out = vec![0.0f32; size * 2];

        for (name, commands) in [("2_voice", &rhythm[..]), ("4_voice", &memory[..])] {
            let mut mixer = VoiceMixer::new(katamaran::MAX_ACTIVE_VOICES, size);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    // Retrigger once the clips have finished
                    if mixer.active_voices() == 0 {
                        for cmd in commands {
                            mixer.trigger(cmd.clone());
                        }
                    }
                    mixer.render(black_box(&mut out), black_box(2));
                })
            });
        }
    }

    group.finish();
}
