/// Recover the spoken lines from an SRT document.
///
/// Processes line by line: after trimming, lines that are empty, all
/// digits (a block's sequence number), or contain `-->` (a time range)
/// are dropped. Every other line is kept verbatim, in order, joined
/// with newlines. Malformed input degrades gracefully because only
/// those three drop rules apply.
pub fn srt_to_plain_text(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_sequence_number(trimmed) || trimmed.contains("-->") {
            continue;
        }
        kept.push(trimmed);
    }

    kept.join("\n")
}

fn is_sequence_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}
