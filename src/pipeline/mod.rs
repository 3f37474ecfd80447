pub mod composer;
pub mod splitter;

use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::PipelineError;
use crate::instrumentation::{RunLog, RunLogger, SectionLog};
use crate::llm::TogetherClient;
use crate::search::{self, SearchBackend, SearchResult};

pub use composer::Variant;
pub use splitter::{split_sections, REFUTATION_PLACEHOLDER};

use composer::{ECONOMIC_MARKER, PHILOSOPHICAL_MARKER};

pub const MAX_AUTHORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSection {
    pub heading: String,
    pub text: String,
}

/// Everything one request produces. Lives for the duration of a single user
/// action; nothing is cached across requests.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub term: String,
    pub sections: Vec<GeneratedSection>,
    pub sources: Vec<String>,
}

pub fn validate_term(term: &str) -> Result<(), PipelineError> {
    if term.trim().is_empty() {
        return Err(PipelineError::EmptyTerm);
    }
    Ok(())
}

pub fn validate_authors(authors: &[String]) -> Result<(), PipelineError> {
    if authors.is_empty() {
        return Err(PipelineError::NoAuthors);
    }
    if authors.len() > MAX_AUTHORS {
        return Err(PipelineError::TooManyAuthors(authors.len()));
    }
    Ok(())
}

pub struct Pipeline {
    search: SearchBackend,
    llm: TogetherClient,
    logger: RunLogger,
    verbose: bool,
}

impl Pipeline {
    pub fn new(search: SearchBackend, llm: TogetherClient, logger: RunLogger, verbose: bool) -> Self {
        Self {
            search,
            llm,
            logger,
            verbose,
        }
    }

    /// One terse definition per selected author, generated strictly one
    /// author at a time. Validation runs before any network call. A search
    /// failure aborts the whole request; a generation failure aborts only
    /// that author's section and keeps the ones already completed.
    pub async fn define_by_authors(
        &self,
        term: &str,
        authors: &[String],
    ) -> Result<DictionaryEntry, PipelineError> {
        validate_term(term)?;
        validate_authors(authors)?;

        let run_start = Instant::now();
        let variant = Variant::ByAuthor;
        let mut sections = Vec::new();
        let mut sources = Vec::new();
        let mut section_logs = Vec::new();
        let mut warnings = Vec::new();
        let mut last_error = None;

        for author in authors {
            let (results, search_ms) = self.retrieve(variant, term, Some(author)).await?;

            match self.generate(variant, term, Some(author), &results).await {
                Ok((text, llm_ms)) => {
                    // Citation bound is per author; context used every snippet.
                    sources.extend(search::collect_citations(
                        &results,
                        variant.citation_style(),
                        variant.citation_limit(),
                    ));
                    section_logs.push(section_log(author, search_ms, &results, llm_ms, &text));
                    sections.push(GeneratedSection {
                        heading: format!("Definición según {author}"),
                        text,
                    });
                }
                Err(e) => {
                    warn!(%author, error = %e, "generation failed; keeping completed authors");
                    warnings.push(format!("{author}: {e}"));
                    last_error = Some(e);
                }
            }
        }

        if sections.is_empty() {
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        self.finish_run(variant, term, section_logs, warnings, run_start);
        Ok(DictionaryEntry {
            term: term.to_string(),
            sections,
            sources,
        })
    }

    /// Definition of a socialist/Marxist term plus a refutation, generated as
    /// one text block and split on the variant's marker. An absent marker is
    /// recoverable: the refutation slot gets an explicit placeholder.
    pub async fn define_with_refutation(
        &self,
        term: &str,
        philosophical: bool,
    ) -> Result<DictionaryEntry, PipelineError> {
        validate_term(term)?;

        let (variant, marker, refutation_heading) = if philosophical {
            (
                Variant::PhilosophicalRefutation,
                PHILOSOPHICAL_MARKER,
                "Refutación Filosófica",
            )
        } else {
            (
                Variant::EconomicRefutation,
                ECONOMIC_MARKER,
                "Refutación Austríaca/Liberal",
            )
        };

        let run_start = Instant::now();
        let mut warnings = Vec::new();

        let (results, search_ms) = self.retrieve(variant, term, None).await?;
        let (raw, llm_ms) = self.generate(variant, term, None, &results).await?;

        let split = split_sections(&raw, marker);
        let refutation = match split.refutation {
            Some(text) => text,
            None => {
                let message =
                    format!("el texto generado no contiene el marcador '{marker}'");
                warn!(term, "{message}");
                warnings.push(message);
                REFUTATION_PLACEHOLDER.to_string()
            }
        };

        let sections = vec![
            GeneratedSection {
                heading: "Definición".to_string(),
                text: split.definition,
            },
            GeneratedSection {
                heading: refutation_heading.to_string(),
                text: refutation,
            },
        ];
        let sources =
            search::collect_citations(&results, variant.citation_style(), variant.citation_limit());

        let logs = vec![section_log(variant.name(), search_ms, &results, llm_ms, &raw)];
        self.finish_run(variant, term, logs, warnings, run_start);

        Ok(DictionaryEntry {
            term: term.to_string(),
            sections,
            sources,
        })
    }

    /// One longer, reference-rich definition with no qualifier, cited with
    /// full bibliographic lines when the provider supplies them.
    pub async fn define_extended(&self, term: &str) -> Result<DictionaryEntry, PipelineError> {
        validate_term(term)?;

        let run_start = Instant::now();
        let variant = Variant::Extended;

        let (results, search_ms) = self.retrieve(variant, term, None).await?;
        let (text, llm_ms) = self.generate(variant, term, None, &results).await?;

        let sources =
            search::collect_citations(&results, variant.citation_style(), variant.citation_limit());
        let logs = vec![section_log(variant.name(), search_ms, &results, llm_ms, &text)];
        self.finish_run(variant, term, logs, Vec::new(), run_start);

        Ok(DictionaryEntry {
            term: term.to_string(),
            sections: vec![GeneratedSection {
                heading: "Definición".to_string(),
                text,
            }],
            sources,
        })
    }

    /// Extended entries for a whole catalog, one term at a time with a pause
    /// between round trips. A failed term is reported and skipped so a long
    /// batch is not lost to one bad response.
    pub async fn define_all(&self, terms: &[&str]) -> Result<Vec<DictionaryEntry>, PipelineError> {
        let mut entries = Vec::new();

        for (i, &term) in terms.iter().enumerate() {
            eprintln!("[{}/{}] {}", i + 1, terms.len(), term);
            match self.define_extended(term).await {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(term, error = %e, "skipping term"),
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        Ok(entries)
    }

    async fn retrieve(
        &self,
        variant: Variant,
        term: &str,
        qualifier: Option<&str>,
    ) -> Result<(Vec<SearchResult>, u64), PipelineError> {
        let query = search::build_query(term, qualifier, variant.domain_hint());
        let start = Instant::now();
        let results = self.search.search(&query).await?;
        let elapsed = start.elapsed().as_millis() as u64;

        if self.verbose {
            eprintln!(
                "[search] {} results for \"{}\" in {}ms",
                results.len(),
                query,
                elapsed
            );
        }

        Ok((results, elapsed))
    }

    async fn generate(
        &self,
        variant: Variant,
        term: &str,
        qualifier: Option<&str>,
        results: &[SearchResult],
    ) -> Result<(String, u64), PipelineError> {
        let context = search::build_context(results);
        let prompt = variant.compose(term, qualifier, &context);

        let start = Instant::now();
        let text = self.llm.generate(&prompt, &variant.params()).await?;
        let elapsed = start.elapsed().as_millis() as u64;

        if self.verbose {
            eprintln!(
                "[generate] {} chars for \"{}\" in {}ms",
                text.len(),
                term,
                elapsed
            );
        }

        Ok((text, elapsed))
    }

    fn finish_run(
        &self,
        variant: Variant,
        term: &str,
        sections: Vec<SectionLog>,
        warnings: Vec<String>,
        run_start: Instant,
    ) {
        let run_log = RunLog {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            term: term.to_string(),
            variant: variant.name().to_string(),
            sections,
            warnings,
            total_latency_ms: run_start.elapsed().as_millis() as u64,
        };

        if self.verbose {
            eprintln!("{}", run_log.summary());
        }

        // A run log that cannot be written is not worth failing the run for.
        if let Err(e) = self.logger.write(&run_log) {
            warn!(error = %e, "failed to write run log");
        }
    }
}

fn section_log(
    label: &str,
    search_latency_ms: u64,
    results: &[SearchResult],
    llm_latency_ms: u64,
    text: &str,
) -> SectionLog {
    SectionLog {
        label: label.to_string(),
        search_latency_ms,
        num_results: results.len() as u32,
        llm_latency_ms,
        generated_chars: text.chars().count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_term_is_rejected() {
        assert!(matches!(validate_term(""), Err(PipelineError::EmptyTerm)));
        assert!(matches!(validate_term("   "), Err(PipelineError::EmptyTerm)));
        assert!(validate_term("Interés").is_ok());
    }

    // Validation is checked before any client is constructed or called, so a
    // rejected selection provably issues no network traffic.
    #[test]
    fn zero_authors_blocks_with_specific_warning() {
        let err = validate_authors(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::NoAuthors));
        assert_eq!(err.to_string(), "Por favor, selecciona al menos un autor.");
    }

    #[test]
    fn over_limit_authors_blocks_with_specific_warning() {
        let six = authors(&["a", "b", "c", "d", "e", "f"]);
        let err = validate_authors(&six).unwrap_err();
        assert!(matches!(err, PipelineError::TooManyAuthors(6)));
        assert!(err.to_string().contains("máximo de 5"));
    }

    #[test]
    fn up_to_five_authors_pass() {
        assert!(validate_authors(&authors(&["a"])).is_ok());
        assert!(validate_authors(&authors(&["a", "b", "c", "d", "e"])).is_ok());
    }
}
