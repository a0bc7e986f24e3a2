/// Lower-cases one character without changing the character count.
///
/// Characters whose lower-case form expands to several characters (such as
/// `'İ'`) are left as they are, so an offset in the folded text always points
/// at the same character in the original.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Case-folds `text` position by position
pub fn fold_case(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Prepares text and pattern for matching.
///
/// Both sides go through the same folding so a match can never be lost to an
/// asymmetric mapping. With `case_sensitive` set the characters pass through
/// unchanged.
pub fn normalize(text: &str, pattern: &str, case_sensitive: bool) -> (Vec<char>, Vec<char>) {
    if case_sensitive {
        (text.chars().collect(), pattern.chars().collect())
    } else {
        (fold_case(text), fold_case(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn test_case_insensitive() {
        let (text, pattern) = normalize("Hello World", "HELLO", false);
        assert_eq!(string(&text), "hello world");
        assert_eq!(string(&pattern), "hello");
    }

    #[test]
    fn test_case_sensitive_is_identity() {
        let (text, pattern) = normalize("Hello World", "World", true);
        assert_eq!(string(&text), "Hello World");
        assert_eq!(string(&pattern), "World");
    }

    #[test]
    fn test_idempotent() {
        let once = fold_case("already lower case");
        assert_eq!(string(&once), "already lower case");
        let twice = fold_case(&string(&once));
        assert_eq!(once, twice);

        let mixed = fold_case("ÄÖÜ Straße ΣΑΣ");
        assert_eq!(fold_case(&string(&mixed)), mixed);
    }

    #[test]
    fn test_preserves_length() {
        // 'İ' lower-cases to two chars; it must stay a single position.
        let text = "İstanbul ǅ ΑΣ";
        let folded = fold_case(text);
        assert_eq!(folded.len(), text.chars().count());
        assert_eq!(folded[0], 'İ');
        assert_eq!(folded[1], 's');
    }

    #[test]
    fn test_non_ascii_folding() {
        assert_eq!(fold_char('Ä'), 'ä');
        assert_eq!(fold_char('Σ'), 'σ');
        assert_eq!(fold_char('7'), '7');
    }
}
