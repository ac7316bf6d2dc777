//! Word Forge - CLI
//!
//! Generates letter combinations, validates them against a dictionary, and
//! reports complexity scores and throughput.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wordforge::{
    cache::InMemoryTtlCache,
    commands::{GenerateOptions, run_benchmark, run_generate, run_validate},
    core::Language,
    dictionary::StaticDictionary,
    output::{
        print_benchmark_result, print_generation_response, print_score_breakdown,
        print_validate_summary,
    },
    scoring,
    service::{SortBy, SortOrder, WordService},
    validation::{BatchValidator, CircuitBreaker},
};

#[derive(Parser)]
#[command(
    name = "wordforge",
    about = "Letter-combination generator with dictionary validation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language: en (default), es, fr, de
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Path to a newline-separated word list (default: embedded starter list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and validate combinations from a set of letters
    Generate {
        /// Source letters (2-15 alphabetic characters)
        letters: String,

        /// Minimum combination length
        #[arg(long, default_value = "2")]
        min_length: usize,

        /// Maximum combination length
        #[arg(long, default_value = "15")]
        max_length: usize,

        /// Keep only combinations at or above this complexity (1-10)
        #[arg(long)]
        min_complexity: Option<u8>,

        /// Keep only combinations at or below this complexity (1-10)
        #[arg(long)]
        max_complexity: Option<u8>,

        /// Sort results: word, length, complexity
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction: asc (default), desc
        #[arg(long)]
        sort_order: Option<String>,

        /// Print every combination, not just valid ones
        #[arg(short, long)]
        verbose: bool,

        /// Emit the full response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate specific words against the dictionary
    Validate {
        /// Words to check
        words: Vec<String>,
    },

    /// Show the complexity breakdown for a word
    Score {
        /// Word to score
        word: String,
    },

    /// Benchmark the full pipeline on random letter pools
    Benchmark {
        /// Number of letter pools to run
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Letters per pool
        #[arg(short, long, default_value = "6")]
        pool_size: usize,
    },
}

/// Build the shared service: provider, caches and one breaker per provider
fn build_service(dictionary_path: Option<&str>, language: Language) -> Result<WordService> {
    let provider = match dictionary_path {
        Some(path) => StaticDictionary::from_file(path, language)
            .with_context(|| format!("failed to load dictionary from {path}"))?,
        None => StaticDictionary::starter(),
    };

    let validator = BatchValidator::new(
        Arc::new(provider),
        Arc::new(InMemoryTtlCache::new()),
        Arc::new(CircuitBreaker::default()),
    );

    Ok(WordService::new(validator, Arc::new(InMemoryTtlCache::new())))
}

fn parse_sort_by(name: &str) -> Result<SortBy> {
    match name {
        "word" => Ok(SortBy::Word),
        "length" => Ok(SortBy::Length),
        "complexity" => Ok(SortBy::Complexity),
        other => anyhow::bail!("unknown sort key {other:?} (expected word, length, complexity)"),
    }
}

fn parse_sort_order(name: &str) -> Result<SortOrder> {
    match name {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => anyhow::bail!("unknown sort order {other:?} (expected asc, desc)"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let language = Language::from_code(&cli.language)?;

    match cli.command {
        Commands::Generate {
            letters,
            min_length,
            max_length,
            min_complexity,
            max_complexity,
            sort_by,
            sort_order,
            verbose,
            json,
        } => {
            let service = build_service(cli.dictionary.as_deref(), language)?;
            let options = GenerateOptions {
                letters,
                language,
                min_length,
                max_length,
                min_complexity,
                max_complexity,
                sort_by: sort_by.as_deref().map(parse_sort_by).transpose()?,
                sort_order: sort_order.as_deref().map(parse_sort_order).transpose()?,
            };

            let response = run_generate(&service, options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_generation_response(&response, verbose);
            }
            Ok(())
        }
        Commands::Validate { words } => {
            let service = build_service(cli.dictionary.as_deref(), language)?;
            let summary = run_validate(service.validator(), &words, language);
            print_validate_summary(&summary);
            Ok(())
        }
        Commands::Score { word } => {
            print_score_breakdown(&scoring::breakdown(&word));
            Ok(())
        }
        Commands::Benchmark { count, pool_size } => {
            let service = build_service(cli.dictionary.as_deref(), language)?;
            let result = run_benchmark(&service, count, pool_size, language);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
