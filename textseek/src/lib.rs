pub mod config;
pub mod document;
pub mod errors;
pub mod filters;
pub mod loader;
pub mod results;
pub mod search;

pub use config::{AppConfig, CliOverrides, EncodingMode, SearchConfig};
pub use document::Document;
pub use errors::{SearchError, SearchResult};
pub use loader::{load_documents, LoadError};
pub use results::{MatchRecord, SearchReport, SearchStats};
pub use search::{
    run, run_parallel, run_report, Algorithm, Clock, Engine, MonotonicClock, PrefixTable,
};
