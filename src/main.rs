//! # lexdoc CLI
//!
//! Loads the text files named on the command line into a fresh in-memory
//! store and runs one operation against them.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lexdoc similarity <A> <B>` | Jaccard similarity of two files |
//! | `lexdoc search <FILES…> --where KEY=VALUE` | Metadata-predicate search |
//! | `lexdoc term <TERM> <FILES…>` | Files containing a term |
//! | `lexdoc inspect <FILE>` | Metadata, term count, and useful-text ratio |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lexdoc::commands::{self, parse_key_val};
use lexdoc::config;
use lexdoc::logging;

/// lexdoc — in-memory document indexing, metadata search, and lexical
/// similarity.
#[derive(Parser)]
#[command(name = "lexdoc", version, about)]
struct Cli {
    /// Path to configuration file (TOML). Defaults apply when it is absent.
    #[arg(long, global = true, default_value = "./lexdoc.toml")]
    config: PathBuf,

    /// Log filter directive (overrides `RUST_LOG` and `[logging].filter`).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the Jaccard similarity of two documents.
    Similarity {
        /// First document.
        a: PathBuf,
        /// Second document.
        b: PathBuf,
    },

    /// Find documents whose metadata matches every `--where` pair.
    ///
    /// Keys: LINES, SIZE, METADATADATE, TYPE, and for Java sources
    /// IMPORTS and AUTHOR.
    Search {
        /// Documents to load.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Required metadata pair, as `KEY=VALUE`. Repeatable.
        #[arg(long = "where", value_parser = parse_key_val, required = true)]
        pairs: Vec<(String, String)>,

        /// Maximum number of results to print.
        #[arg(long)]
        limit: Option<usize>,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List documents containing a term.
    Term {
        /// The term to look up.
        term: String,

        /// Documents to load.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show a document's metadata, term count, and useful-text ratio.
    Inspect {
        /// Document to load.
        file: PathBuf,

        /// Print the document view as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_minimal(&cli.config)?;
    let filter = logging::resolve_filter(cli.log.as_deref(), &cfg.logging);
    logging::init_logging(&filter, cfg.logging.json);

    match cli.command {
        Commands::Similarity { a, b } => {
            commands::run_similarity(&cfg, &a, &b)?;
        }
        Commands::Search {
            files,
            pairs,
            limit,
            json,
        } => {
            commands::run_search(&cfg, &files, &pairs, limit, json)?;
        }
        Commands::Term { term, files } => {
            commands::run_term(&cfg, &term, &files)?;
        }
        Commands::Inspect { file, json } => {
            commands::run_inspect(&cfg, &file, json)?;
        }
    }

    Ok(())
}
