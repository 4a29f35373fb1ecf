/// Header fields of a WAV file, as summarized from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSummary {
    /// Number of audio channels
    pub channels: u16,
    /// Width of one sample in bytes
    pub sample_width: u16,
    /// Frame rate in Hz
    pub frame_rate: u32,
    /// Total number of frames (samples per channel)
    pub frames: u32,
}

impl WavSummary {
    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / self.frame_rate as f64
    }
}

/// Reference layout an inspected file is checked against: the shape of
/// the tone the `tone` command writes (mono 16-bit PCM, one second at
/// 44.1 kHz). The writer uses the same constants, so a freshly written
/// default tone always conforms.
pub const REFERENCE_CHANNELS: u16 = 1;
pub const REFERENCE_SAMPLE_WIDTH: u16 = 2;
pub const REFERENCE_FRAME_RATE: u32 = 44_100;
pub const REFERENCE_FRAMES: u32 = 44_100;

/// Default file name for the reference tone, shared by the writer and
/// the inspector.
pub const REFERENCE_TONE_FILE: &str = "a_four_forty.wav";

/// Parameters for the reference tone writer
#[derive(Debug, Clone)]
pub struct ToneConfig {
    /// Tone frequency in Hz
    pub freq: f64,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Peak level control; samples are scaled to `volume >> 2`
    pub volume: u16,
}

impl Default for ToneConfig {
    fn default() -> Self {
        ToneConfig {
            freq: 440.0,
            duration_ms: 1000,
            volume: 16383,
        }
    }
}

impl ToneConfig {
    /// Validates the configuration before any samples are written.
    ///
    /// # Returns
    /// * `Ok(())` if the configuration is valid
    /// * `Err(AudioError)` if the configuration is invalid
    pub fn validate(&self) -> Result<(), AudioError> {
        if !self.freq.is_finite() || self.freq <= 0.0 {
            return Err(AudioError::InvalidParams(format!(
                "Tone frequency must be positive, got {}",
                self.freq
            )));
        }

        // Check Nyquist frequency
        let nyquist = REFERENCE_FRAME_RATE as f64 / 2.0;
        if self.freq >= nyquist {
            return Err(AudioError::InvalidParams(format!(
                "Tone frequency of {:.1}Hz cannot be represented at a {}Hz frame rate (limited by Nyquist frequency of {:.1}Hz)",
                self.freq, REFERENCE_FRAME_RATE, nyquist
            )));
        }

        if self.duration_ms == 0 {
            return Err(AudioError::InvalidParams(
                "Tone duration must be at least 1ms".to_string(),
            ));
        }

        // Frame counts are carried as u32
        let max_duration_ms = u32::MAX as u64 * 1000 / REFERENCE_FRAME_RATE as u64;
        if self.duration_ms as u64 > max_duration_ms {
            return Err(AudioError::InvalidParams(format!(
                "Tone duration must be at most {}ms, got {}ms",
                max_duration_ms, self.duration_ms
            )));
        }

        Ok(())
    }
}

/// Errors that can occur during audio processing
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// IO errors when reading/writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors during WAV file parsing
    #[error("WAV parsing error: {0}")]
    WavParse(String),

    /// Invalid parameter values
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// General processing errors
    #[error("Processing error: {0}")]
    ProcessingError(String),
}
