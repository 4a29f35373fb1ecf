//! Audio module for the reference tone and WAV inspection.
//!
//! This module provides functionality to:
//! - Synthesize the 440 Hz reference tone and write it as a WAV file
//! - Read back the header metadata of a WAV file
//! - Render the metadata report checked against the reference layout

mod report;
mod tone;
mod types;
mod wav;

pub use report::format_summary_report;
pub use tone::write_tone;
pub use types::{
    AudioError, ToneConfig, WavSummary, REFERENCE_CHANNELS, REFERENCE_FRAMES,
    REFERENCE_FRAME_RATE, REFERENCE_SAMPLE_WIDTH, REFERENCE_TONE_FILE,
};
pub use wav::read_wav_summary;
