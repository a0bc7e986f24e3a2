use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{SearchError, SearchResult};
use crate::search::matcher::Algorithm;

/// How to handle content that is not valid UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Report the document as a search error
    #[default]
    FailFast,
    /// Replace invalid sequences with U+FFFD and keep going
    Lossy,
}

impl std::str::FromStr for EncodingMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "failfast" | "fail-fast" => Ok(Self::FailFast),
            "lossy" => Ok(Self::Lossy),
            other => Err(SearchError::config_error(format!(
                "Unknown encoding mode '{}' (expected failfast or lossy)",
                other
            ))),
        }
    }
}

/// Configuration for a single search run.
///
/// This is everything the engine needs to know. It is built once per run and
/// never mutated while documents are searched.
///
/// ```rust
/// use textseek::{Algorithm, SearchConfig};
///
/// let config = SearchConfig::new("needle")
///     .with_algorithm(Algorithm::Naive)
///     .case_insensitive()
///     .whole_words();
/// assert!(!config.case_sensitive);
/// assert!(config.whole_word);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The literal pattern to search for
    #[serde(default)]
    pub pattern: String,

    /// Matching algorithm
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Whether letters must match in case
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,

    /// Only keep matches not bordered by alphanumeric characters
    #[serde(default)]
    pub whole_word: bool,

    /// Treatment of invalid UTF-8 content
    #[serde(default)]
    pub encoding: EncodingMode,
}

fn default_case_sensitive() -> bool {
    true
}

impl SearchConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            algorithm: Algorithm::default(),
            case_sensitive: true,
            whole_word: false,
            encoding: EncodingMode::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn whole_words(mut self) -> Self {
        self.whole_word = true;
        self
    }

    pub fn with_encoding(mut self, encoding: EncodingMode) -> Self {
        self.encoding = encoding;
        self
    }

    /// Rejects configurations that cannot be searched
    pub fn validate(&self) -> SearchResult<()> {
        if self.pattern.is_empty() {
            return Err(SearchError::config_error("Search pattern must not be empty"));
        }
        Ok(())
    }
}

/// Application level configuration: the search itself plus loader and
/// runtime settings.
///
/// # Configuration Locations
///
/// Loaded from, in order of precedence:
/// 1. Custom config file specified via `--config`
/// 2. Local `.textseek.yaml` in the current directory
/// 3. Global `$HOME/.config/textseek/config.yaml`
///
/// # Configuration Format
///
/// ```yaml
/// pattern: "cat"
/// algorithm: automaton   # or naive
/// case_sensitive: false
/// whole_word: true
/// encoding: lossy        # or failfast
///
/// root_path: "docs"
/// file_pattern: "**/*.txt"
/// ignore_patterns:
///   - "drafts/**"
///
/// parallel: true
/// thread_count: 4
/// stats_only: false
/// log_level: "info"
/// ```
///
/// Command line arguments take precedence over file values, see
/// [`AppConfig::merge_with_cli`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pattern: String,

    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,

    #[serde(default)]
    pub whole_word: bool,

    #[serde(default)]
    pub encoding: EncodingMode,

    /// Directory the loader walks
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Glob selecting documents, relative to `root_path`
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Globs of paths to skip
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Search documents on a thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Number of threads when `parallel` is set.
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Only print totals
    #[serde(default)]
    pub stats_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_pattern() -> String {
    "*.txt".to_string()
}

pub fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Values given on the command line. `None` means "not passed", so the
/// configuration file (or the built-in default) is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub pattern: Option<String>,
    pub algorithm: Option<Algorithm>,
    pub case_sensitive: Option<bool>,
    pub whole_word: Option<bool>,
    pub encoding: Option<EncodingMode>,
    pub root_path: Option<PathBuf>,
    pub file_pattern: Option<String>,
    pub ignore_patterns: Vec<String>,
    pub parallel: Option<bool>,
    pub thread_count: Option<NonZeroUsize>,
    pub stats_only: Option<bool>,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            algorithm: Algorithm::default(),
            case_sensitive: true,
            whole_word: false,
            encoding: EncodingMode::default(),
            root_path: default_root_path(),
            file_pattern: default_file_pattern(),
            ignore_patterns: Vec::new(),
            parallel: false,
            thread_count: default_thread_count(),
            stats_only: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus an explicit file.
    /// The explicit file must exist.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("textseek/config.yaml")),
            Some(PathBuf::from(".textseek.yaml")),
        ];
        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values.
    /// Every value the user passed on the command line wins.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(pattern) = cli.pattern {
            self.pattern = pattern;
        }
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(case_sensitive) = cli.case_sensitive {
            self.case_sensitive = case_sensitive;
        }
        if let Some(whole_word) = cli.whole_word {
            self.whole_word = whole_word;
        }
        if let Some(encoding) = cli.encoding {
            self.encoding = encoding;
        }
        if let Some(root_path) = cli.root_path {
            self.root_path = root_path;
        }
        if let Some(file_pattern) = cli.file_pattern {
            self.file_pattern = file_pattern;
        }
        if !cli.ignore_patterns.is_empty() {
            self.ignore_patterns = cli.ignore_patterns;
        }
        if let Some(parallel) = cli.parallel {
            self.parallel = parallel;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(stats_only) = cli.stats_only {
            self.stats_only = stats_only;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// The part of the configuration the engine consumes
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            pattern: self.pattern.clone(),
            algorithm: self.algorithm,
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
            encoding: self.encoding,
        }
    }
}
