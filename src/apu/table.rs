use super::types::{ApuError, PeriodTableConfig};

/// Relative frequency of each note against the reference pitch.
///
/// An exact power-of-two octave step times the equal-tempered semitone
/// offset inside the octave. The table derivation keeps these two parts
/// separate so the octave step never picks up floating-point error.
fn relative_frequencies(note_count: usize) -> Vec<f64> {
    let semitone = 2.0_f64.powf(1.0 / 12.0);
    (0..note_count)
        .map(|i| (1u64 << (i / 12)) as f64 * semitone.powi((i % 12) as i32))
        .collect()
}

/// Builds the note period table for the configured timing mode.
///
/// Each entry is the divider value the hardware timer needs to play the
/// corresponding note: `round(octave_base / rel_freq) - 1`, clamped at
/// zero for notes faster than the timer can run.
///
/// # Arguments
/// * `config` - Timing mode, reference pitch and note count to generate
///
/// # Returns
/// * `Result<Vec<u16>, ApuError>` - Period values, lowest note first
///
/// # Errors
/// * If the configuration fails validation
pub fn period_table(config: &PeriodTableConfig) -> Result<Vec<u16>, ApuError> {
    config.validate()?;

    let octave_base = config.mode.octave_base(config.lowest_freq);
    let periods = relative_frequencies(config.note_count)
        .into_iter()
        .map(|rel_freq| {
            let period = (octave_base / rel_freq).round() - 1.0;
            period.max(0.0) as u16
        })
        .collect();

    Ok(periods)
}

/// Formats a period table as rows of twelve 4-digit hex values, one row
/// per octave, matching the layout the tables are published in.
pub fn format_period_rows(periods: &[u16]) -> String {
    let rows: Vec<String> = periods
        .chunks(12)
        .map(|row| {
            row.iter()
                .map(|period| format!("0x{:04x}", period))
                .collect::<Vec<String>>()
                .join(",")
        })
        .collect();

    rows.join("\n") + "\n"
}
