use super::types::{AudioError, WavSummary};
use hound::WavReader;
use std::path::Path;

/// Reads the header of a WAV file and summarizes its format.
///
/// Only the container metadata is inspected; sample data is left
/// undecoded, so this is cheap even for large files.
///
/// # Arguments
/// * `path` - Path to the WAV file to inspect
///
/// # Returns
/// * `Result<WavSummary, AudioError>` - Header summary or an error
///
/// # Errors
/// * If the file cannot be read
/// * If the RIFF/WAVE header is malformed
pub fn read_wav_summary(path: &Path) -> Result<WavSummary, AudioError> {
    let reader = WavReader::open(path).map_err(|e| AudioError::WavParse(e.to_string()))?;
    let spec = reader.spec();

    Ok(WavSummary {
        channels: spec.channels,
        sample_width: (spec.bits_per_sample + 7) / 8,
        frame_rate: spec.sample_rate,
        frames: reader.duration(),
    })
}
