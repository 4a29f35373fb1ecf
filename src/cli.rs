use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::Path;
use std::process;

use chiptab::apu::{self, PeriodTableConfig, TimingMode};
use chiptab::audio::{self, AudioError, ToneConfig, REFERENCE_FRAME_RATE, REFERENCE_TONE_FILE};
use chiptab::nsf::{self, NsfError};
use chiptab::tuning;

/// Chiptune Note Table and Audio Inspection Tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 88-key piano frequency table
    Freqs,

    /// Print the APU note period table
    Periods(PeriodsArgs),

    /// Write the 440 Hz reference tone as a WAV file
    Tone(ToneArgs),

    /// Report WAV header fields against the reference tone layout
    WavInfo(WavInfoArgs),

    /// Report the header of an NSF file
    NsfInfo(NsfInfoArgs),
}

/// Print the APU note period table
#[derive(Parser)]
struct PeriodsArgs {
    /// Use the PAL timing reference instead of NTSC
    #[arg(short, long)]
    pal: bool,
}

/// Write the 440 Hz reference tone as a WAV file
#[derive(Parser)]
struct ToneArgs {
    /// Path to the output WAV file
    #[arg(default_value = REFERENCE_TONE_FILE)]
    wav_file: String,

    /// Tone frequency (Hz)
    #[arg(long, default_value_t = 440.0)]
    freq: f64,

    /// Tone duration (milliseconds)
    #[arg(long, default_value_t = 1000)]
    ms: u32,

    /// Peak volume; samples are scaled to volume >> 2
    #[arg(long, default_value_t = 16383)]
    volume: u16,
}

/// Report WAV header fields against the reference tone layout
#[derive(Parser)]
struct WavInfoArgs {
    /// Path to the WAV file to inspect
    #[arg(default_value = REFERENCE_TONE_FILE)]
    wav_file: String,
}

/// Report the header of an NSF file
#[derive(Parser)]
struct NsfInfoArgs {
    /// Path to the input NSF file
    #[arg(required = true)]
    nsf_file: String,
}

fn run_freqs_command() -> io::Result<()> {
    let freqs = tuning::piano_frequencies();
    io::stdout().write_all(tuning::format_frequency_table(&freqs).as_bytes())
}

fn run_periods_command(args: &PeriodsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if args.pal {
        TimingMode::Pal
    } else {
        TimingMode::Ntsc
    };
    let periods = apu::period_table(&PeriodTableConfig::new(mode))?;

    io::stdout().write_all(apu::format_period_rows(&periods).as_bytes())?;
    Ok(())
}

fn run_tone_command(args: &ToneArgs) -> Result<(), AudioError> {
    let config = ToneConfig {
        freq: args.freq,
        duration_ms: args.ms,
        volume: args.volume,
    };
    let frames = audio::write_tone(Path::new(&args.wav_file), &config)?;

    println!(
        "Wrote {} ({} frames at {} Hz)",
        args.wav_file, frames, REFERENCE_FRAME_RATE
    );
    Ok(())
}

fn run_wav_info_command(args: &WavInfoArgs) -> Result<(), AudioError> {
    // Check if WAV file exists
    let wav_path = Path::new(&args.wav_file);
    if !wav_path.exists() {
        return Err(AudioError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("WAV file not found: {}", args.wav_file),
        )));
    }

    let summary = audio::read_wav_summary(wav_path)?;
    io::stdout().write_all(audio::format_summary_report(&summary).as_bytes())?;

    Ok(())
}

fn run_nsf_info_command(args: &NsfInfoArgs) -> Result<(), NsfError> {
    // Check if NSF file exists
    let nsf_path = Path::new(&args.nsf_file);
    if !nsf_path.exists() {
        return Err(NsfError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("NSF file not found: {}", args.nsf_file),
        )));
    }

    let header = nsf::read_nsf_header(nsf_path)?;
    io::stdout().write_all(nsf::format_header_report(&header).as_bytes())?;

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Freqs => run_freqs_command()?,
        Commands::Periods(args) => run_periods_command(args)?,
        Commands::Tone(args) => run_tone_command(args)?,
        Commands::WavInfo(args) => run_wav_info_command(args)?,
        Commands::NsfInfo(args) => run_nsf_info_command(args)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(err) => {
            eprintln!("\nERROR: {}\n", err);
            let missing_file = match err.downcast_ref::<AudioError>() {
                Some(AudioError::Io(ref io_err)) => io_err.kind() == io::ErrorKind::NotFound,
                _ => match err.downcast_ref::<NsfError>() {
                    Some(NsfError::Io(ref io_err)) => io_err.kind() == io::ErrorKind::NotFound,
                    _ => false,
                },
            };
            if missing_file {
                eprintln!("Please check that:");
                eprintln!("1. The file path is correct");
                eprintln!("2. The file exists");
                eprintln!("3. You have permission to read the file");
            }
            process::exit(1);
        }
    }
}
