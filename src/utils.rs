use unicode_width::UnicodeWidthStr;

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `char_index`-th character, or `text.len()` past the end.
pub fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Terminal columns occupied by the first `char_index` characters.
pub fn cursor_column(text: &str, char_index: usize) -> usize {
    text[..byte_index(text, char_index)].width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_index_ascii() {
        assert_eq!(byte_index("cat", 0), 0);
        assert_eq!(byte_index("cat", 2), 2);
        assert_eq!(byte_index("cat", 3), 3);
        assert_eq!(byte_index("cat", 10), 3);
    }

    #[test]
    fn test_byte_index_multibyte() {
        let text = "niño";
        assert_eq!(byte_index(text, 2), 2);
        assert_eq!(byte_index(text, 3), 4);
        assert_eq!(char_count(text), 4);
    }

    #[test]
    fn test_cursor_column_wide_chars() {
        assert_eq!(cursor_column("tú", 2), 2);
        assert_eq!(cursor_column("猫a", 1), 2);
        assert_eq!(cursor_column("猫a", 2), 3);
        assert_eq!(cursor_column("", 0), 0);
    }
}
