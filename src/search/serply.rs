use serde::Deserialize;

use super::{Bibliography, SearchResult};
use crate::error::PipelineError;

const SCHOLAR_URL: &str = "https://api.serply.io/v1/scholar/q=";

/// Scholar search (provider B). GET with the query embedded in the path;
/// results may carry bibliographic metadata the general provider lacks.
#[derive(Debug, Clone)]
pub struct SerplyClient {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ScholarResponse {
    #[serde(default)]
    results: Vec<ScholarItem>,
}

#[derive(Debug, Deserialize)]
struct ScholarItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    snippet: Option<String>,
    author: Option<String>,
    year: Option<String>,
    journal: Option<String>,
    volume: Option<String>,
    issue: Option<String>,
    pages: Option<String>,
}

impl SerplyClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError> {
        let url = format!("{SCHOLAR_URL}{query}");
        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .header("content-type", "application/json")
            .header("X-Proxy-Location", "US")
            .header("X-User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::SearchFailed { status, body });
        }

        let api_response: ScholarResponse = response.json().await?;

        Ok(api_response
            .results
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                url: item.url,
                snippet: item.snippet,
                bib: Some(Bibliography {
                    author: item.author,
                    year: item.year,
                    journal: item.journal,
                    volume: item.volume,
                    issue: item.issue,
                    pages: item.pages,
                }),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CitationStyle;

    #[test]
    fn decodes_full_bibliographic_item() {
        let json = r#"{
            "results": [{
                "title": "The Pure Time-Preference Theory of Interest",
                "url": "https://j.example/tpt",
                "snippet": "S",
                "author": "Herbener, J.",
                "year": "2011",
                "journal": "QJAE",
                "volume": "14",
                "issue": "2",
                "pages": "147-150"
            }]
        }"#;
        let parsed: ScholarResponse = serde_json::from_str(json).unwrap();
        let item = &parsed.results[0];
        assert_eq!(item.author.as_deref(), Some("Herbener, J."));

        let result = SearchResult {
            title: item.title.clone(),
            url: item.url.clone(),
            snippet: item.snippet.clone(),
            bib: Some(Bibliography {
                author: item.author.clone(),
                year: item.year.clone(),
                journal: item.journal.clone(),
                volume: item.volume.clone(),
                issue: item.issue.clone(),
                pages: item.pages.clone(),
            }),
        };
        assert_eq!(
            result.citation(CitationStyle::Bibliographic),
            "Herbener, J.. (2011). *The Pure Time-Preference Theory of Interest*. QJAE, 14(2), 147-150. https://j.example/tpt"
        );
    }
}
