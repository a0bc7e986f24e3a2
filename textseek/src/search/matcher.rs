use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::prefix::PrefixTable;
use crate::errors::SearchError;

/// Exact matching algorithm used for a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Compare the pattern at every candidate position. O(n·m), no setup.
    Naive,
    /// Prefix-function automaton. O(n + m).
    #[default]
    Automaton,
}

impl Algorithm {
    /// Returns the starting offset of every occurrence of `pattern` in `text`,
    /// overlapping occurrences included, in ascending order.
    pub fn find_all<T: PartialEq>(self, text: &[T], pattern: &[T]) -> Vec<usize> {
        match self {
            Algorithm::Naive => naive_search(text, pattern),
            Algorithm::Automaton => automaton_search(text, pattern),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Automaton => "automaton",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "brute-force" | "bruteforce" => Ok(Algorithm::Naive),
            "automaton" | "kmp" => Ok(Algorithm::Automaton),
            other => Err(SearchError::config_error(format!(
                "Unknown algorithm '{}' (expected naive or automaton)",
                other
            ))),
        }
    }
}

/// Brute-force scan
pub fn naive_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    for i in 0..=n - m {
        let mut j = 0;
        while j < m && text[i + j] == pattern[j] {
            j += 1;
        }
        if j == m {
            offsets.push(i);
        }
    }
    offsets
}

/// Linear-time scan driven by the pattern's prefix function
pub fn automaton_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    let table = PrefixTable::build(pattern);
    automaton_search_with(text, pattern, &table)
}

/// Same as [`automaton_search`] with a prebuilt table.
///
/// `table` must have been built from `pattern`.
pub fn automaton_search_with<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    table: &PrefixTable,
) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    debug_assert_eq!(table.len(), m);
    if m == 0 || m > n {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
            if j == m {
                offsets.push(i - j);
                j = table[j - 1];
            }
        } else if j != 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }
    offsets
}
