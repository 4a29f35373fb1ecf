use thiserror::Error;

/// Number of table entries, matching the 88 keys of the piano table.
pub const NOTE_COUNT: usize = 88;

/// Reference pitch the octave-base constants divide against (A1 = 55 Hz).
///
/// This is the period table's own reference and is independent of the
/// piano table's anchor scheme; changing it changes every entry of the
/// generated hardware table.
pub const LOWEST_FREQ: f64 = 55.0;

/// Console timing reference for the period formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingMode {
    Ntsc,
    Pal,
}

impl TimingMode {
    /// Timer ticks per cycle of `lowest_freq` on this console revision.
    ///
    /// The NTSC CPU runs at 39375000/22 Hz and the PAL CPU at
    /// 266017125/(10*16) Hz; the square-wave timer counts in units of
    /// 16 CPU clocks, which accounts for the remaining divisor.
    pub fn octave_base(self, lowest_freq: f64) -> f64 {
        match self {
            TimingMode::Ntsc => 39_375_000.0 / (22.0 * 16.0 * lowest_freq),
            TimingMode::Pal => 266_017_125.0 / (10.0 * 16.0 * 16.0 * lowest_freq),
        }
    }
}

/// Inputs for one period-table run.
///
/// Tables for both timing modes can be generated in the same process by
/// building one config per mode.
#[derive(Debug, Clone)]
pub struct PeriodTableConfig {
    /// Which console timing reference to use
    pub mode: TimingMode,
    /// Reference pitch in Hz for the octave-base constant
    pub lowest_freq: f64,
    /// Number of notes to generate, starting at the reference pitch
    pub note_count: usize,
}

impl PeriodTableConfig {
    /// Creates a config with the standard reference pitch and note count.
    pub fn new(mode: TimingMode) -> Self {
        PeriodTableConfig {
            mode,
            lowest_freq: LOWEST_FREQ,
            note_count: NOTE_COUNT,
        }
    }

    /// Validates the configuration before a table is generated.
    ///
    /// # Returns
    /// * `Result<(), ApuError>` - Ok if valid, Error with details if invalid
    pub fn validate(&self) -> Result<(), ApuError> {
        if !self.lowest_freq.is_finite() || self.lowest_freq <= 0.0 {
            return Err(ApuError::InvalidParams(format!(
                "Reference pitch must be a positive frequency, got {}",
                self.lowest_freq
            )));
        }
        if self.note_count == 0 || self.note_count > NOTE_COUNT {
            return Err(ApuError::InvalidParams(format!(
                "Note count must be between 1 and {}, got {}",
                NOTE_COUNT, self.note_count
            )));
        }
        Ok(())
    }
}

impl Default for PeriodTableConfig {
    fn default() -> Self {
        PeriodTableConfig::new(TimingMode::Ntsc)
    }
}

/// Errors that can occur during period table generation
#[derive(Debug, Error)]
pub enum ApuError {
    /// Invalid generator configuration
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
