use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Hangul syllables are double-width, so
/// byte or char counts are useless for layout here.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` cells, appending `…` if cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // one cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`, or None at end of string.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let mut last = 0;
    for (i, _) in s[..byte_offset].grapheme_indices(true) {
        last = i;
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_is_double_width() {
        assert_eq!(display_width("점심"), 4);
        assert_eq!(display_width("lunch"), 5);
    }

    #[test]
    fn truncates_on_cell_budget() {
        assert_eq!(truncate_to_width("집안일", 10), "집안일");
        // "집안" is 4 cells, ellipsis 1: fits in 5
        assert_eq!(truncate_to_width("집안일", 5), "집안…");
        // budget 4 leaves 3 cells for text; a 2-cell syllable + '…' fits
        assert_eq!(truncate_to_width("집안일", 4), "집…");
        assert_eq!(truncate_to_width("집안일", 1), "…");
        assert_eq!(truncate_to_width("집안일", 0), "");
    }

    #[test]
    fn grapheme_boundaries_walk_hangul() {
        let s = "강아지"; // 3 syllables, 3 bytes each
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(next_grapheme_boundary(s, 6), Some(9));
        assert_eq!(next_grapheme_boundary(s, 9), None);
        assert_eq!(prev_grapheme_boundary(s, 9), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }
}
