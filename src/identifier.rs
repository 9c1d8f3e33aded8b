//! Identifier extraction from input lines.
//!
//! Input lines carry the identifier wrapped in a fixed-width convention: four
//! leading characters and one trailing character, e.g. `sss"Wheat"`. The rule
//! is literal. Nothing about the stripped characters is checked.

/// Characters dropped from the start of a line
pub const PREFIX_LEN: usize = 4;

/// Characters dropped from the end of a line
pub const SUFFIX_LEN: usize = 1;

/// Remove the line terminator (`\n` or `\r\n`) left by `read_line`.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Extract the identifier from a line without its terminator.
///
/// Indices count characters, not bytes. Lines shorter than
/// `PREFIX_LEN + SUFFIX_LEN` characters yield an empty identifier.
pub fn extract_identifier(line: &str) -> &str {
    let char_count = line.chars().count();
    if char_count <= PREFIX_LEN + SUFFIX_LEN {
        return "";
    }

    let start = byte_offset(line, PREFIX_LEN);
    let end = byte_offset(line, char_count - SUFFIX_LEN);
    &line[start..end]
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_identifier() {
        assert_eq!(extract_identifier("sss\"Wheat\""), "Wheat");
        assert_eq!(extract_identifier("sss\"Totalitarian\""), "Totalitarian");
    }

    #[test]
    fn test_extract_any_prefix_and_suffix() {
        assert_eq!(extract_identifier("quotStoneToolx"), "StoneTool");
        assert_eq!(extract_identifier("    Fishery,"), "Fishery");
    }

    #[test]
    fn test_short_lines_yield_empty() {
        assert_eq!(extract_identifier(""), "");
        assert_eq!(extract_identifier("abc"), "");
        assert_eq!(extract_identifier("abcde"), "");
    }

    #[test]
    fn test_six_chars_yield_one() {
        assert_eq!(extract_identifier("abcdef"), "e");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(extract_identifier("ééé\"Meat\""), "Meat");
        assert_eq!(extract_identifier("sss\"Fishé"), "Fish");
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("sss\"Wheat\"\n"), "sss\"Wheat\"");
        assert_eq!(trim_line_ending("sss\"Wheat\"\r\n"), "sss\"Wheat\"");
        assert_eq!(trim_line_ending("sss\"Wheat\""), "sss\"Wheat\"");
    }
}
