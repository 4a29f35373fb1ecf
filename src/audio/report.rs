use super::types::{
    WavSummary, REFERENCE_CHANNELS, REFERENCE_FRAMES, REFERENCE_FRAME_RATE,
    REFERENCE_SAMPLE_WIDTH,
};
use std::fmt::Display;

/// Renders the five-line metadata report for an inspected WAV file.
///
/// The first four lines report one header field each; a field that
/// deviates from the reference layout carries an `(expected ...)` note,
/// so a conforming file produces a report with no mismatch markers at
/// all. The fifth line is the combined parameter summary and is never
/// annotated.
pub fn format_summary_report(summary: &WavSummary) -> String {
    let lines = [
        field_line("channels", summary.channels, "", REFERENCE_CHANNELS),
        field_line(
            "sample width",
            summary.sample_width,
            " bytes",
            REFERENCE_SAMPLE_WIDTH,
        ),
        field_line("frame rate", summary.frame_rate, " Hz", REFERENCE_FRAME_RATE),
        field_line("frames", summary.frames, "", REFERENCE_FRAMES),
        format!(
            "params: {} ch, {}-bit, {} Hz, {} frames, {:.3} s",
            summary.channels,
            summary.sample_width * 8,
            summary.frame_rate,
            summary.frames,
            summary.duration_secs()
        ),
    ];

    lines.join("\n") + "\n"
}

fn field_line<T: Display + PartialEq>(label: &str, value: T, unit: &str, expected: T) -> String {
    if value == expected {
        format!("{}: {}{}", label, value, unit)
    } else {
        format!("{}: {}{} (expected {})", label, value, unit, expected)
    }
}
