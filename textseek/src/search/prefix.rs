use std::ops::Index;

/// Failure function of a pattern.
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. The automaton matcher uses it to resume after
/// a mismatch without re-reading text it has already matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefixTable(Vec<usize>);

impl PrefixTable {
    /// Builds the table for `pattern`. The result has one entry per pattern
    /// element.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut table = vec![0; pattern.len()];
        let mut length = 0;
        let mut i = 1;

        while i < pattern.len() {
            if pattern[i] == pattern[length] {
                length += 1;
                table[i] = length;
                i += 1;
            } else if length != 0 {
                // Retry the same position against a shorter border.
                length = table[length - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }

        Self(table)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for PrefixTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.0[index]
    }
}
