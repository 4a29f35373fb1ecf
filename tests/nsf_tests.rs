// NSF header tests
//
// These tests build synthetic NSF files in memory and on disk, parse them,
// and check field extraction against the bytes that went in. No real NSF
// rips are shipped with the repository; the builder in test_utils produces
// the fixtures.
//
// The tests cover:
// - Field extraction from a well-formed header
// - NUL-terminated text fields and the 24-bit data length
// - Region and expansion-chip flag decoding
// - The rendered header report
// - Error handling for truncated and non-NSF input

use chiptab::nsf::{self, NsfError, Region};

use test_utils::{
    build_test_nsf, BANKSWITCH_OFFSET, DATA_LENGTH_OFFSET, EXPANSION_FLAGS_OFFSET,
    REGION_FLAGS_OFFSET, TITLE_OFFSET,
};

/// Test field extraction from a well-formed header.
///
/// This test verifies:
/// - Every fixed field comes back with the value the builder wrote
/// - Text fields are decoded without their NUL padding
#[test]
fn test_parse_synthetic_header() {
    let data = build_test_nsf("Test Tune", "An Artist", "2026 Nobody");
    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");

    assert_eq!(header.version, 1);
    assert_eq!(header.total_songs, 12);
    assert_eq!(header.starting_song, 1);
    assert_eq!(header.load_address, 0x8000);
    assert_eq!(header.init_address, 0x8003);
    assert_eq!(header.play_address, 0x8006);
    assert_eq!(header.title, "Test Tune");
    assert_eq!(header.artist, "An Artist");
    assert_eq!(header.copyright, "2026 Nobody");
    assert_eq!(header.play_speed_ntsc, 16639);
    assert_eq!(header.play_speed_pal, 19997);
    assert_eq!(header.bankswitch_init, [0; 8]);
    assert!(!header.uses_bankswitching());
    assert_eq!(header.region(), Region::Ntsc);
    assert!(header.expansion_chips().is_empty());
    assert_eq!(header.data_length, 0);
}

/// Test text field decoding details.
///
/// This test verifies:
/// - Text stops at the first NUL even when garbage follows it
/// - A fully blank field decodes as an empty string
#[test]
fn test_text_fields_stop_at_nul() {
    let mut data = build_test_nsf("Abc", "", "Copyright");
    // Plant a byte after the title's NUL terminator
    data[TITLE_OFFSET + 4] = b'X';

    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.title, "Abc");
    assert_eq!(header.artist, "");
}

/// Test the 24-bit program data length.
///
/// This test verifies:
/// - The three length bytes decode little-endian into a u32
#[test]
fn test_data_length_is_24_bit() {
    let mut data = build_test_nsf("Title", "Artist", "Copyright");
    data[DATA_LENGTH_OFFSET] = 0x34;
    data[DATA_LENGTH_OFFSET + 1] = 0x12;
    data[DATA_LENGTH_OFFSET + 2] = 0x01;

    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.data_length, 0x011234);
}

/// Test region flag decoding.
///
/// This test verifies:
/// - Bit 0 clear means NTSC, set means PAL
/// - Bit 1 means dual-region regardless of bit 0
#[test]
fn test_region_decoding() {
    let mut data = build_test_nsf("Title", "Artist", "Copyright");

    for (flags, expected) in [
        (0b00, Region::Ntsc),
        (0b01, Region::Pal),
        (0b10, Region::Dual),
        (0b11, Region::Dual),
    ] {
        data[REGION_FLAGS_OFFSET] = flags;
        let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
        assert_eq!(
            header.region(),
            expected,
            "Wrong region for flags {:#04b}",
            flags
        );
    }
}

/// Test expansion chip decoding.
///
/// This test verifies:
/// - Each set bit maps to its chip name, lowest bit first
/// - Multiple chips decode together in bit order
#[test]
fn test_expansion_chip_decoding() {
    let mut data = build_test_nsf("Title", "Artist", "Copyright");

    data[EXPANSION_FLAGS_OFFSET] = 0b0000_0001;
    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.expansion_chips(), vec!["VRC6"]);

    data[EXPANSION_FLAGS_OFFSET] = 0b0000_0101;
    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.expansion_chips(), vec!["VRC6", "FDS"]);

    data[EXPANSION_FLAGS_OFFSET] = 0b0100_0000;
    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.expansion_chips(), vec!["VT02+"]);
}

/// Test bankswitch init decoding.
///
/// This test verifies:
/// - Nonzero bank values are preserved byte for byte
/// - Any nonzero value flips the bankswitching flag
#[test]
fn test_bankswitch_decoding() {
    let mut data = build_test_nsf("Title", "Artist", "Copyright");
    let banks = [0, 1, 2, 3, 4, 5, 6, 7];
    data[BANKSWITCH_OFFSET..BANKSWITCH_OFFSET + 8].copy_from_slice(&banks);

    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    assert_eq!(header.bankswitch_init, banks);
    assert!(header.uses_bankswitching());
}

/// Test reading a header from a file on disk.
///
/// This test verifies:
/// - The header parses from a file with program data after it
/// - Trailing program data does not disturb the parsed fields
/// - A missing file reports an IO error
#[test]
fn test_read_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tune.nsf");

    let mut data = build_test_nsf("On Disk", "Artist", "Copyright");
    data.extend_from_slice(&[0xa9, 0x00, 0x8d, 0x15, 0x40]); // program bytes
    std::fs::write(&path, &data).expect("Failed to write NSF fixture");

    let header = nsf::read_nsf_header(&path).expect("Failed to read header");
    assert_eq!(header.title, "On Disk");
    assert_eq!(header.total_songs, 12);

    let missing = nsf::read_nsf_header(&dir.path().join("missing.nsf"));
    assert!(matches!(missing, Err(NsfError::Io(_))));
}

/// Test the rendered header report.
///
/// This test verifies:
/// - The report names the title, artist and region
/// - Addresses render as 4-digit hex with a $ prefix
/// - Zero data length renders as "to end of file"
#[test]
fn test_header_report_rendering() {
    let mut data = build_test_nsf("Report Tune", "Some Artist", "2026");
    data[EXPANSION_FLAGS_OFFSET] = 0b0000_0100; // FDS

    let header = nsf::parse_nsf_header(&data).expect("Failed to parse header");
    let report = nsf::format_header_report(&header);

    assert!(report.contains("title: Report Tune"));
    assert!(report.contains("artist: Some Artist"));
    assert!(report.contains("load address: $8000"));
    assert!(report.contains("region: NTSC"));
    assert!(report.contains("expansion audio: FDS"));
    assert!(report.contains("bankswitching: not used"));
    assert!(report.contains("program data: to end of file"));
}

/// Test NSF error cases.
///
/// This test verifies:
/// - Input shorter than the fixed header reports its actual length
/// - Wrong magic bytes report a parse error, not a truncation
#[test]
fn test_nsf_error_cases() {
    let short = vec![0u8; 50];
    match nsf::parse_nsf_header(&short) {
        Err(NsfError::TruncatedHeader(len)) => assert_eq!(len, 50),
        other => panic!("Expected TruncatedHeader, got {:?}", other),
    }

    let mut bad_magic = build_test_nsf("Title", "Artist", "Copyright");
    bad_magic[0] = b'X';
    assert!(matches!(
        nsf::parse_nsf_header(&bad_magic),
        Err(NsfError::Parse(_))
    ));
}
