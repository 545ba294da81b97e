//! `termlink` command line tool.
//!
//! Annotates text fields with glossary definitions, strips that markup
//! again, or reports what a definitions file loads to. Each positional
//! `TEXT` argument is one field; without arguments every line on stdin is a
//! field. Output is one line per field.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termlink::{AnnotationScope, EngineConfig, Glossary, MarkupConfig, strip_annotations_with};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "termlink", version, about = "Annotate text with glossary definitions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Wrap the first occurrence of each glossary term in definition markup.
    Annotate {
        /// Definitions file (YAML or JSON).
        #[arg(short, long)]
        definitions: PathBuf,

        /// Engine configuration file (YAML).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat all fields as one text: each term is annotated only once overall.
        #[arg(long)]
        shared_scope: bool,

        /// Fields to annotate; read from stdin when absent.
        text: Vec<String>,
    },
    /// Load a definitions file and print build statistics as JSON.
    Stats {
        /// Definitions file (YAML or JSON).
        #[arg(short, long)]
        definitions: PathBuf,

        /// Engine configuration file (YAML).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Remove definition markup and print the original text.
    Strip {
        /// Engine configuration file, for a custom markup vocabulary.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fields to strip; read from stdin when absent.
        text: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Annotate {
            definitions,
            config,
            shared_scope,
            text,
        } => {
            let cfg = load_config(config)?;
            let glossary = Glossary::from_file(&definitions, &cfg)?;
            debug!(
                definitions = %definitions.display(),
                terms = glossary.dictionary().len(),
                "definitions_loaded"
            );

            let mut scope = AnnotationScope::new();
            for_each_field(text, |field| {
                if shared_scope {
                    glossary.annotate_with_scope(field, &mut scope)
                } else {
                    glossary.annotate(field)
                }
            })
        }
        Command::Stats {
            definitions,
            config,
        } => {
            let cfg = load_config(config)?;
            let glossary = Glossary::from_file(&definitions, &cfg)?;
            let build = glossary.dictionary().stats();
            let stats = serde_json::json!({
                "terms": build.terms,
                "variants": build.variants,
                "dropped": build.dropped,
                "patterns": glossary.annotator().index().len(),
                "trie_nodes": glossary.annotator().index().node_count(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Command::Strip { config, text } => {
            let markup: MarkupConfig = load_config(config)?.markup;
            for_each_field(text, |field| strip_annotations_with(field, &markup))
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<EngineConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(EngineConfig::from_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn for_each_field<F>(args: Vec<String>, mut render: F) -> Result<(), Box<dyn Error>>
where
    F: FnMut(&str) -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", render(&line?))?;
        }
    } else {
        for field in &args {
            writeln!(out, "{}", render(field))?;
        }
    }
    out.flush()?;
    Ok(())
}
