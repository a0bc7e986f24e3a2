//! Result types produced by a search run.
//!
//! Records are owned values with no references back into the documents, so a
//! caller can drop the document set as soon as `run` returns and still render
//! every match.
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single match in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Identifier of the document the match was found in
    pub document_id: String,
    /// 0-based line index of the match (0 for single-line content)
    pub line: usize,
    /// 0-based character offset of the match within its line
    pub column: usize,
    /// 0-based character offset of the match within the document
    pub offset: usize,
    /// Time spent matching this document; shared by all of its records
    pub elapsed: Duration,
}

/// Everything a run produced: the records plus the matcher time of each
/// searched document, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub records: Vec<MatchRecord>,
    pub document_times: Vec<(String, Duration)>,
}

impl SearchReport {
    pub(crate) fn push(
        &mut self,
        document_id: &str,
        records: Vec<MatchRecord>,
        elapsed: Duration,
    ) {
        self.document_times.push((document_id.to_string(), elapsed));
        self.records.extend(records);
    }
}

/// Totals over a search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of documents handed to the engine
    pub documents_searched: usize,
    /// Number of documents with at least one match
    pub documents_with_matches: usize,
    /// Total number of matches
    pub total_matches: usize,
    /// Sum of the matching time of every searched document
    pub total_elapsed: Duration,
}

impl SearchStats {
    pub fn from_report(report: &SearchReport) -> Self {
        let mut documents_with_matches = 0;
        let mut previous: Option<&str> = None;
        for record in &report.records {
            if previous != Some(record.document_id.as_str()) {
                documents_with_matches += 1;
                previous = Some(&record.document_id);
            }
        }

        SearchStats {
            documents_searched: report.document_times.len(),
            documents_with_matches,
            total_matches: report.records.len(),
            total_elapsed: report.document_times.iter().map(|(_, t)| *t).sum(),
        }
    }
}

/// Maps character offsets to (line, column) pairs
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(text: &[char]) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.iter()
                .enumerate()
                .filter(|&(_, &c)| c == '\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        (line, offset - self.line_starts[line])
    }
}
