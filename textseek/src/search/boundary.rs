/// Keeps only offsets whose match is not flanked by alphanumeric characters.
///
/// A match at `o` of length `pattern_len` survives when the character before
/// it (if any) and the character after it (if any) are both non-alphanumeric.
pub fn whole_words(text: &[char], pattern_len: usize, offsets: Vec<usize>) -> Vec<usize> {
    offsets
        .into_iter()
        .filter(|&o| is_word_at(text, o, pattern_len))
        .collect()
}

fn is_word_at(text: &[char], offset: usize, len: usize) -> bool {
    let end = offset + len;
    let left = offset == 0 || !text[offset - 1].is_alphanumeric();
    let right = end >= text.len() || !text[end].is_alphanumeric();
    left && right
}
