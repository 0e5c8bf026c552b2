use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let first = rest.graphemes(true).next()?;
    Some(byte_offset + first.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let prefix = s.get(..byte_offset)?;
    prefix.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    s.get(..clamped).map_or(0, display_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_mixed() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("hello你好"), 9);
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
    }

    #[test]
    fn truncate_cjk_boundary() {
        // Each CJK char is 2 cells; budget 4 fits two of them
        assert_eq!(truncate_to_width("你好世界", 5), "你好\u{2026}");
        // Budget 3 only fits one
        assert_eq!(truncate_to_width("你好世界", 4), "你\u{2026}");
    }

    #[test]
    fn truncate_tiny_widths() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_skip_combining_marks() {
        let s = "cafe\u{0301}!";
        // "e" + combining acute is one grapheme spanning bytes 3..6
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn display_col_counts_wide_chars() {
        assert_eq!(byte_offset_to_display_col("你好", 3), 2);
        assert_eq!(byte_offset_to_display_col("ab", 99), 2);
    }
}
