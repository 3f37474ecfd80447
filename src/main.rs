mod catalog;
mod config;
mod error;
mod export;
mod instrumentation;
mod llm;
mod pipeline;
mod search;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::Config;
use instrumentation::RunLogger;
use llm::TogetherClient;
use pipeline::{DictionaryEntry, Pipeline};
use search::{SearchBackend, SerperClient, SerplyClient};

#[derive(Parser)]
#[command(
    name = "austrodict",
    about = "Austrian-school economic dictionary: web search context + hosted inference + DOCX export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose per-step output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Define a term according to one or more Austrian authors (max 5)
    Define {
        term: String,
        /// Author to define the term by (repeatable)
        #[arg(short, long = "author")]
        authors: Vec<String>,
        /// Output path for the DOCX document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Define a socialist/Marxist term and refute it from an Austrian stance
    Refute {
        term: String,
        /// Ground the refutation in ethics, politics and rival philosophies
        /// instead of economic arguments alone
        #[arg(long)]
        philosophical: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate one extended, reference-rich definition (scholar sources)
    Extended {
        term: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the whole extended-term catalog into one document
    Batch {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in catalogs
    Catalog {
        /// List the Austrian authors instead of terms
        #[arg(long)]
        authors: bool,
        /// List the socialist/Marxist term catalog
        #[arg(long)]
        socialist: bool,
        /// List the wider extended-definition term catalog
        #[arg(long)]
        extended: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog {
            authors,
            socialist,
            extended,
        } => {
            let list = if authors {
                catalog::AUSTRIAN_AUTHORS
            } else if socialist {
                catalog::SOCIALIST_TERMS
            } else if extended {
                catalog::EXTENDED_TERMS
            } else {
                catalog::AUSTRIAN_TERMS
            };
            for item in list {
                println!("{item}");
            }
        }

        Commands::Define {
            term,
            authors,
            output,
        } => {
            let config = Config::from_env()?;
            let pipeline = build_pipeline(&config, serper_backend(&config)?, cli.verbose)?;
            let entry = pipeline.define_by_authors(&term, &authors).await?;
            print_entry(&entry);
            write_document(
                "Diccionario Económico - Escuela Austríaca de Economía",
                "definiciones",
                &entry,
                output,
            )?;
        }

        Commands::Refute {
            term,
            philosophical,
            output,
        } => {
            let config = Config::from_env()?;
            let pipeline = build_pipeline(&config, serper_backend(&config)?, cli.verbose)?;
            let entry = pipeline.define_with_refutation(&term, philosophical).await?;
            print_entry(&entry);
            write_document(
                "Diccionario de Términos Socialistas y Marxistas con Refutaciones Austríacas",
                "Definicion_y_Refutacion",
                &entry,
                output,
            )?;
        }

        Commands::Extended { term, output } => {
            let config = Config::from_env()?;
            let pipeline = build_pipeline(&config, serply_backend(&config)?, cli.verbose)?;
            let entry = pipeline.define_extended(&term).await?;
            print_entry(&entry);
            write_document(
                "Diccionario Económico - Escuela Austríaca",
                "Definicion",
                &entry,
                output,
            )?;
        }

        Commands::Batch { output } => {
            let config = Config::from_env()?;
            let pipeline = build_pipeline(&config, serply_backend(&config)?, cli.verbose)?;
            let entries = pipeline.define_all(catalog::EXTENDED_TERMS).await?;

            let blocks =
                export::document_blocks("Diccionario Económico - Escuela Austríaca", &entries);
            let bytes = export::render_docx(&blocks)?;
            let path = output
                .unwrap_or_else(|| PathBuf::from("Diccionario_Economico_Austriaco.docx"));
            std::fs::write(&path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} entradas generadas. Documento guardado en {}",
                entries.len(),
                path.display()
            );
        }
    }

    Ok(())
}

fn serper_backend(config: &Config) -> Result<SearchBackend> {
    Ok(SearchBackend::Serper(SerperClient::new(
        config.serper_api_key()?,
    )))
}

fn serply_backend(config: &Config) -> Result<SearchBackend> {
    Ok(SearchBackend::Serply(SerplyClient::new(
        config.serply_api_key()?,
    )))
}

fn build_pipeline(config: &Config, search: SearchBackend, verbose: bool) -> Result<Pipeline> {
    let llm = TogetherClient::new(&config.together_api_key, &config.together_url, &config.model);
    let logger = RunLogger::new(&config.log_dir)?;
    Ok(Pipeline::new(search, llm, logger, verbose))
}

fn print_entry(entry: &DictionaryEntry) {
    println!("Término: {}\n", entry.term);
    for section in &entry.sections {
        println!("{}\n{}\n", section.heading, section.text);
    }
    if !entry.sources.is_empty() {
        println!("Fuentes:");
        for source in &entry.sources {
            println!("- {source}");
        }
    }
}

fn write_document(
    title: &str,
    filename_prefix: &str,
    entry: &DictionaryEntry,
    output: Option<PathBuf>,
) -> Result<()> {
    let blocks = export::document_blocks(title, std::slice::from_ref(entry));
    let bytes = export::render_docx(&blocks)?;
    let path = output
        .unwrap_or_else(|| PathBuf::from(export::export_filename(filename_prefix, &entry.term)));
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("\nDocumento guardado en {}", path.display());
    Ok(())
}
