use serde::{Deserialize, Serialize};

use super::SearchResult;
use crate::error::PipelineError;

const SEARCH_URL: &str = "https://google.serper.dev/search";

/// General web search (provider A). POST with the query in a JSON body.
#[derive(Debug, Clone)]
pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicItem>,
}

#[derive(Debug, Deserialize)]
struct OrganicItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    snippet: Option<String>,
}

impl SerperClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError> {
        let response = self
            .client
            .post(SEARCH_URL)
            .header("X-API-KEY", &self.api_key)
            .header("content-type", "application/json")
            .json(&SearchRequest { q: query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::SearchFailed { status, body });
        }

        let api_response: SearchResponse = response.json().await?;

        Ok(api_response
            .organic
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                url: item.link,
                snippet: item.snippet,
                bib: None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_organic_items_with_missing_snippet() {
        let json = r#"{
            "organic": [
                {"title": "La teoría del interés", "link": "https://a.example", "snippet": "S1"},
                {"title": "Sin extracto", "link": "https://b.example"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.organic.len(), 2);
        assert_eq!(parsed.organic[0].snippet.as_deref(), Some("S1"));
        assert!(parsed.organic[1].snippet.is_none());
    }

    #[test]
    fn empty_body_yields_no_results() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.organic.is_empty());
    }
}
