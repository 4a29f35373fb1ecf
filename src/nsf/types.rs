use std::fmt;
use thiserror::Error;

/// Magic bytes opening every NSF file.
pub const NSF_MAGIC: [u8; 5] = *b"NESM\x1a";

/// Size of the fixed NSF header preceding the program data.
pub const NSF_HEADER_LEN: usize = 128;

/// Expansion audio chip names, in header bit order (lowest bit first).
const EXPANSION_CHIPS: [&str; 7] = [
    "VRC6", "VRC7", "FDS", "MMC5", "Namco 163", "Sunsoft 5B", "VT02+",
];

/// Console region a tune targets, decoded from the PAL/NTSC flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ntsc,
    Pal,
    Dual,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Ntsc => write!(f, "NTSC"),
            Region::Pal => write!(f, "PAL"),
            Region::Dual => write!(f, "dual PAL/NTSC"),
        }
    }
}

/// Parsed fields of the 128-byte NSF header
#[derive(Debug, Clone)]
pub struct NsfHeader {
    /// Format version number
    pub version: u8,
    /// Total number of songs in the file
    pub total_songs: u8,
    /// 1-based index of the song to start with
    pub starting_song: u8,
    /// Address the program data is loaded at
    pub load_address: u16,
    /// Address of the music init routine
    pub init_address: u16,
    /// Address of the per-tick play routine
    pub play_address: u16,
    /// Song title, empty if the field was blank
    pub title: String,
    /// Artist name, empty if the field was blank
    pub artist: String,
    /// Copyright holder, empty if the field was blank
    pub copyright: String,
    /// Play routine speed on NTSC, in microseconds per tick
    pub play_speed_ntsc: u16,
    /// Initial bank numbers; all zero means no bankswitching
    pub bankswitch_init: [u8; 8],
    /// Play routine speed on PAL, in microseconds per tick
    pub play_speed_pal: u16,
    /// Raw PAL/NTSC flag byte, see [`NsfHeader::region`]
    pub region_flags: u8,
    /// Raw expansion chip bits, see [`NsfHeader::expansion_chips`]
    pub expansion_flags: u8,
    /// Byte reserved for NSF2 extensions
    pub nsf2_reserved: u8,
    /// Length of the program data, zero meaning "to end of file"
    pub data_length: u32,
}

impl NsfHeader {
    /// Region encoded in the PAL/NTSC flags: bit 1 marks a dual-region
    /// tune regardless of bit 0, otherwise bit 0 picks PAL over NTSC.
    pub fn region(&self) -> Region {
        if self.region_flags & 0b10 != 0 {
            Region::Dual
        } else if self.region_flags & 0b01 != 0 {
            Region::Pal
        } else {
            Region::Ntsc
        }
    }

    /// Names of the expansion chips the tune uses, lowest bit first.
    pub fn expansion_chips(&self) -> Vec<&'static str> {
        EXPANSION_CHIPS
            .iter()
            .enumerate()
            .filter(|(bit, _)| self.expansion_flags & (1 << bit) != 0)
            .map(|(_, name)| *name)
            .collect()
    }

    /// True when any initial bank value is set.
    pub fn uses_bankswitching(&self) -> bool {
        self.bankswitch_init.iter().any(|&bank| bank != 0)
    }
}

/// Errors that can occur while reading NSF files
#[derive(Debug, Error)]
pub enum NsfError {
    /// IO errors when reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input too short to hold the fixed header
    #[error("NSF header truncated: got {0} of 128 bytes")]
    TruncatedHeader(usize),

    /// Malformed header contents
    #[error("NSF parsing error: {0}")]
    Parse(String),
}
