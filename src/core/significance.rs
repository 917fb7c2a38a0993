//! Character significance table
//!
//! Insignificant characters are filler: they are revealed automatically and
//! never offered as buttons. The table is shared with existing puzzle content
//! and must not change.

/// Characters that are revealed automatically
pub const INSIGNIFICANT_CHARS: [char; 21] = [
    '：', '、', '。', ' ', '\r', '\n', '\t', '[', ']', '［', '］', '(', ')', '（', '）', '/', '／',
    '~', '・', '「', '」',
];

/// Check whether a character must be guessed by the player
///
/// # Examples
/// ```
/// use reveal_puzzle::core::is_significant_char;
///
/// assert!(is_significant_char('a'));
/// assert!(is_significant_char(','));
/// assert!(!is_significant_char(' '));
/// assert!(!is_significant_char('「'));
/// ```
#[inline]
#[must_use]
pub fn is_significant_char(ch: char) -> bool {
    !INSIGNIFICANT_CHARS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_filler() {
        for ch in [' ', '\r', '\n', '\t'] {
            assert!(!is_significant_char(ch), "{ch:?} should be filler");
        }
    }

    #[test]
    fn brackets_and_cjk_punctuation_are_filler() {
        for ch in "：、。[]［］()（）/／~・「」".chars() {
            assert!(!is_significant_char(ch), "{ch:?} should be filler");
        }
    }

    #[test]
    fn letters_digits_and_ideographs_are_significant() {
        for ch in "aZ09漢字かなカナ".chars() {
            assert!(is_significant_char(ch), "{ch:?} should be significant");
        }
    }

    #[test]
    fn unlisted_punctuation_is_significant() {
        // Only the listed characters are filler; ASCII comma and period are not
        for ch in [',', '.', '!', '?', '-', '…', '，', '『', '』'] {
            assert!(is_significant_char(ch), "{ch:?} should be significant");
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        let unique: std::collections::HashSet<char> = INSIGNIFICANT_CHARS.iter().copied().collect();
        assert_eq!(unique.len(), INSIGNIFICANT_CHARS.len());
    }
}
