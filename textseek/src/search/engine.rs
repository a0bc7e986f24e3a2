use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use super::boundary::whole_words;
use super::normalize::normalize;
use crate::config::SearchConfig;
use crate::document::Document;
use crate::errors::{SearchError, SearchResult};
use crate::results::{LineIndex, MatchRecord, SearchReport};

/// Monotonic time source used to measure matcher calls
pub trait Clock: Sync {
    /// Time elapsed since an arbitrary, fixed origin. Must never go backwards.
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Applies one search configuration across a document set
#[derive(Debug, Default)]
pub struct Engine<C: Clock = MonotonicClock> {
    clock: C,
}

impl<C: Clock> Engine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Searches every document in order.
    ///
    /// Records come back grouped by document in input order, ascending by
    /// offset within a document. The first failing document ends the run.
    pub fn run(
        &self,
        documents: &[Document],
        config: &SearchConfig,
    ) -> SearchResult<Vec<MatchRecord>> {
        Ok(self.run_report(documents, config)?.records)
    }

    /// Like [`Engine::run`], also keeping the matcher time of every document,
    /// including documents without matches.
    pub fn run_report(
        &self,
        documents: &[Document],
        config: &SearchConfig,
    ) -> SearchResult<SearchReport> {
        config.validate()?;
        info!(
            "Starting {} search for {:?} in {} documents",
            config.algorithm,
            config.pattern,
            documents.len()
        );

        let mut report = SearchReport::default();
        for document in documents {
            let (records, elapsed) = self.search_document(document, config)?;
            report.push(&document.id, records, elapsed);
        }

        info!("Search complete. Found {} matches", report.records.len());
        Ok(report)
    }

    /// Like [`Engine::run`] but searches documents on the rayon pool.
    ///
    /// Output order is identical to the sequential run. When several
    /// documents fail, which one is reported is unspecified.
    pub fn run_parallel(
        &self,
        documents: &[Document],
        config: &SearchConfig,
    ) -> SearchResult<Vec<MatchRecord>> {
        Ok(self.run_parallel_report(documents, config)?.records)
    }

    /// Parallel counterpart of [`Engine::run_report`]
    pub fn run_parallel_report(
        &self,
        documents: &[Document],
        config: &SearchConfig,
    ) -> SearchResult<SearchReport> {
        config.validate()?;
        info!(
            "Starting parallel {} search for {:?} in {} documents",
            config.algorithm,
            config.pattern,
            documents.len()
        );

        let per_document: Vec<(Vec<MatchRecord>, Duration)> = documents
            .par_iter()
            .map(|document| self.search_document(document, config))
            .collect::<SearchResult<_>>()?;

        let mut report = SearchReport::default();
        for (document, (records, elapsed)) in documents.iter().zip(per_document) {
            report.push(&document.id, records, elapsed);
        }

        info!("Search complete. Found {} matches", report.records.len());
        Ok(report)
    }

    fn search_document(
        &self,
        document: &Document,
        config: &SearchConfig,
    ) -> SearchResult<(Vec<MatchRecord>, Duration)> {
        trace!("Searching document: {}", document.id);

        let content = document
            .text(config.encoding)
            .map_err(|cause| SearchError::document_error(&document.id, cause))?;
        let (text, pattern) = normalize(&content, &config.pattern, config.case_sensitive);

        let start = self.clock.now();
        let mut offsets = config.algorithm.find_all(&text, &pattern);
        let elapsed = self.clock.now().saturating_sub(start);

        if config.whole_word {
            offsets = whole_words(&text, pattern.len(), offsets);
        }

        debug!(
            "Found {} matches in document {} in {:?}",
            offsets.len(),
            document.id,
            elapsed
        );

        if offsets.is_empty() {
            return Ok((Vec::new(), elapsed));
        }

        // Folding keeps one char per position, so the folded text has the
        // same line structure as the original.
        let lines = LineIndex::new(&text);
        let records: Vec<MatchRecord> = offsets
            .into_iter()
            .map(|offset| {
                let (line, column) = lines.locate(offset);
                MatchRecord {
                    document_id: document.id.clone(),
                    line,
                    column,
                    offset,
                    elapsed,
                }
            })
            .collect();
        Ok((records, elapsed))
    }
}

/// Searches `documents` sequentially with a monotonic clock
pub fn run(documents: &[Document], config: &SearchConfig) -> SearchResult<Vec<MatchRecord>> {
    Engine::<MonotonicClock>::default().run(documents, config)
}

/// Searches `documents` sequentially, keeping every document's matcher time
pub fn run_report(documents: &[Document], config: &SearchConfig) -> SearchResult<SearchReport> {
    Engine::<MonotonicClock>::default().run_report(documents, config)
}

/// Searches `documents` on the rayon pool with a monotonic clock
pub fn run_parallel(
    documents: &[Document],
    config: &SearchConfig,
) -> SearchResult<Vec<MatchRecord>> {
    Engine::<MonotonicClock>::default().run_parallel(documents, config)
}
