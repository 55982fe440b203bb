use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docdex::{Config, Corpus, MatchMode, SearchIndex, SearchOptions, excerpt, search::tokenize};

/// Excerpt context on each side of the matched token, in characters.
const EXCERPT_RADIUS: usize = 60;

#[derive(Parser)]
#[command(name = "docdex", version, about = "Full-text search over documentation corpora")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a corpus and print ranked results.
    Search {
        /// Corpus payload (search_index.js or plain JSON).
        corpus: PathBuf,
        /// Free-text query.
        query: String,
        /// Match mode for multi-token queries: 'and' or 'or'.
        #[arg(long, default_value = "and")]
        mode: String,
        /// Restrict results to a category; repeatable.
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
        /// TOML config file with engine settings.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print results as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },
    /// Print corpus and index statistics.
    Stats {
        /// Corpus payload (search_index.js or plain JSON).
        corpus: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    docdex::tracing::init();

    match Cli::parse().command {
        Command::Search {
            corpus,
            query,
            mode,
            categories,
            limit,
            config,
            json,
        } => run_search(&corpus, &query, &mode, categories, limit, config.as_deref(), json),
        Command::Stats { corpus } => run_stats(&corpus),
    }
}

fn load_index(path: &Path, config: &Config) -> anyhow::Result<SearchIndex> {
    let corpus = Corpus::load(path)
        .with_context(|| format!("failed to load corpus from {}", path.display()))?;
    let (index, errors) = SearchIndex::build_with(&corpus, config.index_config());
    for error in &errors {
        tracing::warn!("skipped entry: {error}");
    }
    Ok(index)
}

fn run_search(
    corpus_path: &Path,
    query: &str,
    mode: &str,
    categories: Vec<String>,
    limit: Option<usize>,
    config_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let match_mode: MatchMode = mode.parse()?;

    let index = load_index(corpus_path, &config)?;
    let opts = SearchOptions {
        match_mode,
        categories,
        limit: limit.or(config.default_limit),
        weights: config.weights(),
    };
    let results = index.search(query, &opts);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no results for '{query}'");
        return Ok(());
    }

    let tokens: Vec<String> = tokenize(query, index.config().min_token_len).collect();
    for (rank, result) in results.iter().enumerate() {
        let heading = if result.title.is_empty() {
            &result.page
        } else {
            &result.title
        };
        println!(
            "{:>3}. {:>7.2}  {} ({}) [{}]",
            rank + 1,
            result.score,
            heading,
            result.location,
            result.category,
        );
        let body = index.entry(result.doc).map_or("", |e| e.text.as_str());
        if let Some(ex) = excerpt(body, &tokens, EXCERPT_RADIUS) {
            let prefix = if ex.prefix_truncated { "…" } else { "" };
            let suffix = if ex.suffix_truncated { "…" } else { "" };
            println!("     {prefix}{}{suffix}", ex.text);
        }
    }

    Ok(())
}

fn run_stats(corpus_path: &Path) -> anyhow::Result<()> {
    let index = load_index(corpus_path, &Config::default())?;

    println!("documents: {}", index.document_count());
    println!("terms:     {}", index.term_count());
    println!("postings:  {}", index.posting_count());

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, entry) in index.documents() {
        *categories.entry(entry.category.as_str()).or_insert(0) += 1;
    }
    println!("categories:");
    for (category, count) in categories {
        let label = if category.is_empty() { "(none)" } else { category };
        println!("  {label:<10} {count}");
    }

    Ok(())
}
