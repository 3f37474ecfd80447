pub mod serper;
pub mod serply;

use crate::error::PipelineError;

pub use serper::SerperClient;
pub use serply::SerplyClient;

/// One web search hit, normalized across providers. Optional fields stay
/// optional here; defaulting happens in one place, at citation formatting.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: Option<String>,
    pub bib: Option<Bibliography>,
}

/// Bibliographic metadata only the scholar provider supplies.
#[derive(Debug, Clone, Default)]
pub struct Bibliography {
    pub author: Option<String>,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
}

/// How a result is rendered in the exported source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationStyle {
    /// Just the link.
    BareUrl,
    /// "Title: URL".
    TitledLink,
    /// APA-ish line built from bibliographic fields, with documented
    /// fallbacks for absent ones.
    Bibliographic,
}

impl SearchResult {
    pub fn citation(&self, style: CitationStyle) -> String {
        match style {
            CitationStyle::BareUrl => self.url.clone(),
            CitationStyle::TitledLink => format!("{}: {}", self.title, self.url),
            CitationStyle::Bibliographic => {
                let bib = self.bib.clone().unwrap_or_default();
                format!(
                    "{}. ({}). *{}*. {}, {}({}), {}. {}",
                    bib.author.as_deref().unwrap_or("Autor desconocido"),
                    bib.year.as_deref().unwrap_or("s.f."),
                    self.title,
                    bib.journal.as_deref().unwrap_or("Revista desconocida"),
                    bib.volume.as_deref().unwrap_or(""),
                    bib.issue.as_deref().unwrap_or(""),
                    bib.pages.as_deref().unwrap_or(""),
                    self.url,
                )
            }
        }
    }
}

/// Joins the query parts that are present with single spaces.
pub fn build_query(term: &str, qualifier: Option<&str>, domain_hint: &str) -> String {
    let mut parts = vec![term];
    if let Some(q) = qualifier {
        parts.push(q);
    }
    if !domain_hint.is_empty() {
        parts.push(domain_hint);
    }
    parts.join(" ")
}

/// Context block for the prompt: every available snippet, newline-separated.
/// Results without a snippet are skipped, not rendered as blanks.
pub fn build_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .filter_map(|r| r.snippet.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Source lines for the exported document. Independent of context assembly:
/// context always sees every snippet, citations may be bounded.
pub fn collect_citations(
    results: &[SearchResult],
    style: CitationStyle,
    limit: Option<usize>,
) -> Vec<String> {
    let take = limit.unwrap_or(results.len());
    results.iter().take(take).map(|r| r.citation(style)).collect()
}

pub enum SearchBackend {
    Serper(SerperClient),
    Serply(SerplyClient),
}

impl SearchBackend {
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError> {
        match self {
            SearchBackend::Serper(c) => c.search(query).await,
            SearchBackend::Serply(c) => c.search(query).await,
        }
    }
}
