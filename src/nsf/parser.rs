//! Binary parser for the fixed NSF header.
//!
//! Layout, all multi-byte fields little-endian:
//!
//! ```text
//! 0x00  5 bytes   "NESM\x1a" magic
//! 0x05  1 byte    version
//! 0x06  2 bytes   total songs, starting song
//! 0x08  6 bytes   load, init and play addresses
//! 0x0e  96 bytes  title, artist, copyright (32 bytes each, NUL padded)
//! 0x6e  2 bytes   NTSC play speed
//! 0x70  8 bytes   bankswitch init values
//! 0x78  2 bytes   PAL play speed
//! 0x7a  3 bytes   region flags, expansion flags, NSF2 reserved
//! 0x7d  3 bytes   program data length
//! ```

use super::types::{NsfError, NsfHeader, NSF_HEADER_LEN, NSF_MAGIC};
use nom::{
    bytes::complete::{tag, take},
    number::complete::{le_u16, le_u24, le_u8},
    IResult,
};
use std::fs;
use std::path::Path;

/// Reads a file and parses the NSF header at its start.
///
/// Program data after the header is ignored.
///
/// # Arguments
/// * `path` - Path to the NSF file to read
///
/// # Returns
/// * `Result<NsfHeader, NsfError>` - Parsed header or an error
///
/// # Errors
/// * If the file cannot be read
/// * If the file is shorter than the fixed header
/// * If the magic bytes are missing
pub fn read_nsf_header(path: &Path) -> Result<NsfHeader, NsfError> {
    let data = fs::read(path)?;
    parse_nsf_header(&data)
}

/// Parses the fixed 128-byte header from the start of `input`.
pub fn parse_nsf_header(input: &[u8]) -> Result<NsfHeader, NsfError> {
    if input.len() < NSF_HEADER_LEN {
        return Err(NsfError::TruncatedHeader(input.len()));
    }
    match nsf_header(input) {
        Ok((_, header)) => Ok(header),
        Err(_) => Err(NsfError::Parse(
            "missing NESM signature, not an NSF file".to_string(),
        )),
    }
}

fn nsf_header(input: &[u8]) -> IResult<&[u8], NsfHeader> {
    let (input, _) = tag(&NSF_MAGIC[..])(input)?;
    let (input, version) = le_u8(input)?;
    let (input, total_songs) = le_u8(input)?;
    let (input, starting_song) = le_u8(input)?;
    let (input, load_address) = le_u16(input)?;
    let (input, init_address) = le_u16(input)?;
    let (input, play_address) = le_u16(input)?;
    let (input, title) = text_field(input)?;
    let (input, artist) = text_field(input)?;
    let (input, copyright) = text_field(input)?;
    let (input, play_speed_ntsc) = le_u16(input)?;
    let (input, bankswitch) = take(8usize)(input)?;
    let (input, play_speed_pal) = le_u16(input)?;
    let (input, region_flags) = le_u8(input)?;
    let (input, expansion_flags) = le_u8(input)?;
    let (input, nsf2_reserved) = le_u8(input)?;
    let (input, data_length) = le_u24(input)?;

    let mut bankswitch_init = [0u8; 8];
    bankswitch_init.copy_from_slice(bankswitch);

    Ok((
        input,
        NsfHeader {
            version,
            total_songs,
            starting_song,
            load_address,
            init_address,
            play_address,
            title,
            artist,
            copyright,
            play_speed_ntsc,
            bankswitch_init,
            play_speed_pal,
            region_flags,
            expansion_flags,
            nsf2_reserved,
            data_length,
        },
    ))
}

/// One 32-byte NUL-padded text field, decoded up to the first NUL.
fn text_field(input: &[u8]) -> IResult<&[u8], String> {
    let (input, raw) = take(32usize)(input)?;
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    Ok((input, String::from_utf8_lossy(&raw[..end]).into_owned()))
}
