//! Spectrum analyzer widget
//!
//! FFT of the output with log-spaced bins, plus a marker at the fundamental
//! of the stimulus the player is answering.

use katamaran::synth::{presets, SoundId};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 48;

/// Floor of the magnitude axis (dB)
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    /// FFT bin index for each displayed frequency
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// (frequency_hz, magnitude_db) per displayed bin
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// `buffer_len` is the FFT size and must match the buffers passed to
    /// [`update`](Self::update).
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let buffer_len = buffer_len.max(2);
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        let denom = (buffer_len - 1) as f32;
        let window = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos()))
            .collect();

        // Log-spaced from 50 Hz (below the drum) to 4 kHz (above every cue)
        let nyquist = (sample_rate / 2.0).max(1.0) as f64;
        let min_freq = 50.0f64.min(nyquist);
        let max_freq = 4_000.0f64.min(nyquist);
        let ratio = (max_freq / min_freq).max(1.0);
        let half = buffer_len / 2;

        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = min_freq * ratio.powf(t);
            let index = (freq * buffer_len as f64 / sample_rate as f64).round() as usize;
            bin_indices.push(index.min(half - 1));
            spectrum.push((freq, FLOOR_DB));
        }

        Self {
            window,
            bin_indices,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            spectrum,
        }
    }

    /// Recompute from the newest samples. Buffers of the wrong size are skipped.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for ((_, magnitude_db), &index) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            let bin = self.scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            *magnitude_db = (10.0 * (power as f64).log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Fundamental of a stimulus, for the marker line.
pub fn stimulus_frequency(sound: SoundId) -> Option<f64> {
    presets::spec_for(sound)
        .partials
        .first()
        .map(|partial| partial.frequency as f64)
}

pub fn render_spectrum(
    frame: &mut Frame,
    area: Rect,
    spectrum: &[(f64, f64)],
    marker: Option<f64>,
) {
    let block = Block::default().title(" Espectro ").borders(Borders::ALL);

    let max_freq = spectrum
        .iter()
        .map(|(f, _)| *f)
        .fold(0.0, f64::max)
        .max(1.0);
    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(FLOOR_DB, f64::max)
        .max(0.0)
        + 10.0;

    let marker_line: Vec<(f64, f64)> = marker
        .filter(|&f| f <= max_freq)
        .map(|f| vec![(f, FLOOR_DB), (f, max_db)])
        .unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum)];
    if !marker_line.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&marker_line),
        );
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_freq])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, max_db])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use katamaran::synth::FrequencyClass;

    #[test]
    fn pure_tone_peaks_near_its_bin() {
        let sample_rate = 8_000.0;
        let mut analyzer = SpectrumAnalyzer::new(1024, sample_rate);
        let target = 30;
        let frequency = analyzer.data()[target].0 as f32;
        let tone: Vec<f32> = (0..1024)
            .map(|i| (2.0 * std::f32::consts::PI * frequency * i as f32 / sample_rate).sin())
            .collect();
        analyzer.update(&tone);

        let loudest = analyzer
            .data()
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(index, _)| index);
        assert_eq!(loudest, Some(target));
    }

    #[test]
    fn marker_uses_fundamental() {
        assert_eq!(
            stimulus_frequency(SoundId::Frequency(FrequencyClass::High)),
            Some(1800.0)
        );
    }
}
