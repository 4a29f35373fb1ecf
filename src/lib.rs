//! Note-table generation and audio inspection for chiptune work.
//!
//! The library behind the `chiptab` command line tool:
//! - [`tuning`] builds the 88-key equal-tempered piano frequency table
//! - [`apu`] derives NES APU note period tables for NTSC and PAL timing
//! - [`audio`] writes the 440 Hz reference tone and inspects WAV headers
//! - [`nsf`] parses and reports NES Sound Format headers

pub mod apu;
pub mod audio;
pub mod nsf;
pub mod tuning;
