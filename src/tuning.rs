//! The 88-key equal-tempered piano frequency table.
//!
//! Key frequencies are derived iteratively: every A lands exactly on a
//! rational anchor pitch, and the eleven keys above it are successive
//! semitone multiples of that anchor.

/// Number of keys on a standard piano.
pub const PIANO_KEYS: usize = 88;

/// Reference pitches for the A of each octave, spaced twelve keys apart
/// starting at the lowest key (A0 = 27.5 Hz). Each anchor is double the
/// previous one, so all of them are exact in binary floating point.
pub const OCTAVE_ANCHORS: [f64; 8] = [27.5, 55.0, 110.0, 220.0, 440.0, 880.0, 1760.0, 3520.0];

/// Builds the fundamental frequency of each piano key, lowest first.
///
/// Keys at multiples of twelve are pinned to the rational values in
/// [`OCTAVE_ANCHORS`]; every other key is the previous key multiplied by
/// the twelfth root of two. Restarting from an anchor at each octave
/// keeps semitone rounding error from compounding across the keyboard.
///
/// # Returns
/// * `[f64; PIANO_KEYS]` - frequencies in Hz, strictly increasing
pub fn piano_frequencies() -> [f64; PIANO_KEYS] {
    let semitone = 2.0_f64.powf(1.0 / 12.0);
    let mut table = [0.0; PIANO_KEYS];

    table[0] = OCTAVE_ANCHORS[0];
    for i in 1..PIANO_KEYS {
        table[i] = if i % 12 == 0 {
            OCTAVE_ANCHORS[i / 12]
        } else {
            table[i - 1] * semitone
        };
    }

    table
}

/// Formats a frequency table as the tool prints it: one decimal value
/// per line with a trailing comma, ready to paste into a source file.
pub fn format_frequency_table(freqs: &[f64]) -> String {
    freqs.iter().map(|freq| format!("{},\n", freq)).collect()
}
