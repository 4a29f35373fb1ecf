use super::types::{
    AudioError, ToneConfig, REFERENCE_CHANNELS, REFERENCE_FRAME_RATE, REFERENCE_SAMPLE_WIDTH,
};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::TAU;
use std::path::Path;

/// Synthesizes a sine tone and writes it as a PCM WAV file.
///
/// The container format is fixed to the reference layout: mono, 16-bit
/// integer samples at 44100 Hz. One second at the default settings
/// produces exactly 44100 frames, which is the file the `wav-info`
/// report checks against.
///
/// # Arguments
/// * `path` - Destination path for the WAV file
/// * `config` - Frequency, duration and volume of the tone
///
/// # Returns
/// * `Result<u32, AudioError>` - Number of frames written
///
/// # Errors
/// * If the configuration fails validation
/// * If the file cannot be created or written
pub fn write_tone(path: &Path, config: &ToneConfig) -> Result<u32, AudioError> {
    config.validate()?;

    let spec = WavSpec {
        channels: REFERENCE_CHANNELS,
        sample_rate: REFERENCE_FRAME_RATE,
        bits_per_sample: REFERENCE_SAMPLE_WIDTH * 8,
        sample_format: SampleFormat::Int,
    };
    let frames = (REFERENCE_FRAME_RATE as u64 * config.duration_ms as u64 / 1000) as u32;

    // Phase step per frame; the amplitude stays inside the i16 range
    let theta = config.freq * TAU / REFERENCE_FRAME_RATE as f64;
    let amp = (config.volume >> 2) as f64;

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| AudioError::ProcessingError(e.to_string()))?;
    for n in 0..frames {
        let sample = (amp * (theta * n as f64).sin()) as i16;
        writer
            .write_sample(sample)
            .map_err(|e| AudioError::ProcessingError(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| AudioError::ProcessingError(e.to_string()))?;

    Ok(frames)
}
