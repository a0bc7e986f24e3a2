use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use textseek::{
    load_documents, run_report, Algorithm, AppConfig, CliOverrides, Document, EncodingMode,
    Engine, MonotonicClock, SearchConfig, SearchReport, SearchStats,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Literal pattern to search for
    pattern: Option<String>,

    /// Root directory to load documents from [default: .]
    #[arg(short = 'd', long)]
    root: Option<PathBuf>,

    /// Glob selecting documents (e.g. "*.txt", "docs/**/*.md") [default: *.txt]
    #[arg(short = 'g', long = "glob")]
    file_pattern: Option<String>,

    /// Matching algorithm (naive|automaton) [default: automaton]
    #[arg(short = 'a', long)]
    algorithm: Option<String>,

    /// Match without regard to letter case
    #[arg(short = 'i', long, conflicts_with = "case_sensitive")]
    ignore_case: bool,

    /// Match letter case exactly, overriding the configuration file
    #[arg(long)]
    case_sensitive: bool,

    /// Match whole words only
    #[arg(short = 'w', long = "word")]
    whole_word: bool,

    /// Paths to skip (glob format)
    #[arg(long)]
    ignore: Vec<String>,

    /// How to handle invalid UTF-8 sequences (failfast|lossy) [default: failfast]
    #[arg(long)]
    encoding: Option<String>,

    /// Show only statistics, not matches
    #[arg(short, long)]
    stats: bool,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    /// Search documents in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of threads to use with --parallel [default: CPU cores]
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: warn]
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn to_overrides(&self) -> Result<CliOverrides> {
        let case_sensitive = if self.ignore_case {
            Some(false)
        } else if self.case_sensitive {
            Some(true)
        } else {
            None
        };

        Ok(CliOverrides {
            pattern: self.pattern.clone(),
            algorithm: self
                .algorithm
                .as_deref()
                .map(str::parse::<Algorithm>)
                .transpose()?,
            case_sensitive,
            whole_word: self.whole_word.then_some(true),
            encoding: self
                .encoding
                .as_deref()
                .map(str::parse::<EncodingMode>)
                .transpose()?,
            root_path: self.root.clone(),
            file_pattern: self.file_pattern.clone(),
            ignore_patterns: self.ignore.clone(),
            parallel: self.parallel.then_some(true),
            thread_count: self.threads,
            stats_only: self.stats.then_some(true),
            log_level: self.log_level.clone(),
        })
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = file_config.merge_with_cli(cli.to_overrides()?);
    init_tracing(&config.log_level);

    let search_config = config.search_config();
    search_config.validate()?;

    let documents = load_documents(
        &config.root_path,
        &config.file_pattern,
        &config.ignore_patterns,
    )?;
    let report = search(&documents, &search_config, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.records)?);
    } else {
        print_search_results(&documents, &report, config.stats_only, &search_config);
    }
    Ok(())
}

fn search(
    documents: &[Document],
    search_config: &SearchConfig,
    config: &AppConfig,
) -> Result<SearchReport> {
    if !config.parallel {
        return Ok(run_report(documents, search_config)?);
    }

    debug!("Searching with {} threads", config.thread_count);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count.get())
        .build()
        .context("Failed to build thread pool")?;
    let engine = Engine::<MonotonicClock>::default();
    Ok(pool.install(|| engine.run_parallel_report(documents, search_config))?)
}

fn print_search_results(
    documents: &[Document],
    report: &SearchReport,
    stats_only: bool,
    search_config: &SearchConfig,
) {
    let stats = SearchStats::from_report(report);
    if !stats_only {
        let lines: HashMap<&str, Vec<String>> = documents
            .iter()
            .filter_map(|doc| {
                let text = doc.text(search_config.encoding).ok()?;
                Some((doc.id.as_str(), text.lines().map(str::to_string).collect()))
            })
            .collect();

        let mut current: Option<&str> = None;
        for record in &report.records {
            if current != Some(record.document_id.as_str()) {
                println!("\n{}", record.document_id.blue());
                current = Some(&record.document_id);
            }
            let line_text = lines
                .get(record.document_id.as_str())
                .and_then(|l| l.get(record.line))
                .map(String::as_str)
                .unwrap_or_default();
            println!(
                "{}:{}: {}",
                (record.line + 1).to_string().green(),
                (record.column + 1).to_string().green(),
                line_text
            );
        }
        println!();
    }

    println!(
        "Found {} matches in {} documents (searched {}) in {}",
        stats.total_matches,
        stats.documents_with_matches,
        stats.documents_searched,
        humantime::format_duration(stats.total_elapsed)
    );
}
