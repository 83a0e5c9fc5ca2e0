use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use classifier::classification::batch::{resolve_categories, CategoryBreakdown};
use classifier::config::Config;
use classifier::ingest::{read_rows, write_rows, RowFormat};
use classifier::{AppError, Categorizer, FallbackCategorizer, JobRecord, Lexicon, RuleBasedCategorizer};

/// Categorize job postings as AI/ML, General IT, Hybrid or Non-Tech.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON lexicon replacing the built-in keyword data (overrides CLASSIFIER_LEXICON_PATH).
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the category of a single posting.
    Classify(PostingArgs),
    /// Print the intermediate scores and category of a single posting as JSON.
    Explain(PostingArgs),
    /// Categorize a file of posting rows and write them back with `role_category` set.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct PostingArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Input file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: PathBuf,
    /// Row format for input and output; inferred from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Fewer distinct categories than this switches the batch to the fallback categorizer.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    min_distinct: Option<u64>,
    /// Print a per-category breakdown to stderr.
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Jsonl,
}

impl From<FormatArg> for RowFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => RowFormat::Json,
            FormatArg::Jsonl => RowFormat::Jsonl,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration first so RUST_LOG from .env reaches the subscriber
    let config = Config::from_env();
    let rust_log = config
        .as_ref()
        .map(|c| c.rust_log.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize structured logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match config.and_then(|config| run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}

fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    let lexicon = load_lexicon(cli.lexicon.as_deref().or(config.lexicon_path.as_deref()))?;
    let primary = RuleBasedCategorizer::new(&lexicon);

    match cli.command {
        Command::Classify(args) => {
            let record = posting(args);
            println!("{}", primary.categorize(&record));
        }
        Command::Explain(args) => {
            let record = posting(args);
            let scores = primary.scores(&record);
            let category = primary.categorize(&record);
            let report = json!({
                "role": &record.role,
                "scores": scores,
                "category": category,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Batch(args) => run_batch(args, &config, &primary)?,
    }

    Ok(())
}

fn run_batch(args: BatchArgs, config: &Config, primary: &dyn Categorizer) -> Result<(), AppError> {
    let from_stdin = args.input.as_os_str() == "-";
    let format = args
        .format
        .map(RowFormat::from)
        .unwrap_or_else(|| RowFormat::from_path(&args.input));
    let min_distinct = config.resolve_min_distinct(args.min_distinct.map(|n| n as usize))?;

    let mut rows = if from_stdin {
        read_rows(io::stdin().lock(), format)?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input file '{}'", args.input.display()))?;
        read_rows(BufReader::new(file), format)?
    };
    info!("Read {} posting rows", rows.len());

    if !rows.is_empty() && !rows.iter().any(|r| r.has_role_column()) {
        tracing::warn!("No 'role' or 'title' column found; every posting has an empty title");
    }

    let fallback = FallbackCategorizer::default();
    let source = resolve_categories(&mut rows, primary, &fallback, min_distinct);
    info!(?source, min_distinct, "Categories resolved");

    write_rows(io::stdout().lock(), &rows, format)?;

    if args.summary {
        let categories: Vec<_> = rows.iter().filter_map(|r| r.upstream_category()).collect();
        let breakdown = CategoryBreakdown::from_categories(&categories);
        eprintln!("{}", serde_json::to_string_pretty(&breakdown)?);
    }

    Ok(())
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, AppError> {
    match path {
        Some(path) => Lexicon::load(path),
        None => {
            info!("Using built-in lexicon");
            Lexicon::builtin()
        }
    }
}

fn posting(args: PostingArgs) -> JobRecord {
    JobRecord {
        role: args.title,
        description: args.description,
    }
}
