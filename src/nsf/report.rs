use super::types::NsfHeader;

/// Renders the human-readable listing of an NSF header.
pub fn format_header_report(header: &NsfHeader) -> String {
    let chips = header.expansion_chips();
    let expansion = if chips.is_empty() {
        "none".to_string()
    } else {
        chips.join(", ")
    };

    let bankswitching = if header.uses_bankswitching() {
        let banks: Vec<String> = header
            .bankswitch_init
            .iter()
            .map(|bank| format!("{:02x}", bank))
            .collect();
        format!("yes ({})", banks.join(" "))
    } else {
        "not used".to_string()
    };

    let data_length = if header.data_length == 0 {
        "to end of file".to_string()
    } else {
        format!("{} bytes", header.data_length)
    };

    let lines = [
        format!("NSF version: {}", header.version),
        format!("title: {}", header.title),
        format!("artist: {}", header.artist),
        format!("copyright: {}", header.copyright),
        format!(
            "songs: {} (starting at {})",
            header.total_songs, header.starting_song
        ),
        format!("load address: ${:04x}", header.load_address),
        format!("init address: ${:04x}", header.init_address),
        format!("play address: ${:04x}", header.play_address),
        format!(
            "play speed: {} us/tick NTSC, {} us/tick PAL",
            header.play_speed_ntsc, header.play_speed_pal
        ),
        format!("region: {}", header.region()),
        format!("expansion audio: {}", expansion),
        format!("bankswitching: {}", bankswitching),
        format!("program data: {}", data_length),
    ];

    lines.join("\n") + "\n"
}
