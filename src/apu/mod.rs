//! Note period tables for the NES APU square-wave timer.
//!
//! Periods are derived from the console's CPU clock: NTSC and PAL
//! machines run at different rates, so each timing mode gets its own
//! table. Both share the same 55 Hz reference pitch and 88-note range.

mod table;
mod types;

pub use table::{format_period_rows, period_table};
pub use types::{ApuError, PeriodTableConfig, TimingMode, LOWEST_FREQ, NOTE_COUNT};
