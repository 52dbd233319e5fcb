//! Academic paper search against the arXiv API.
//!
//! arXiv answers with an Atom feed; entries are mapped to [`PaperResult`]
//! and any failure along the way collapses to an empty list.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{truncate_with_ellipsis, ProviderError, OUTBOUND_TIMEOUT};

const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Abstracts longer than this are cut and marked with an ellipsis.
const SUMMARY_MAX_CHARS: usize = 300;

/// Default number of papers requested per search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A paper search hit, shaped for the extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperResult {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub url: String,
    pub pdf_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    pub categories: Vec<String>,
}

/// Client for the arXiv query API.
pub struct ArxivClient {
    client: Client,
    base_url: String,
    pub(crate) call_timeout: Duration,
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArxivClient {
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_API_URL.to_string())
    }

    /// Points the client at a different endpoint. Used by tests to swap in
    /// a mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            call_timeout: OUTBOUND_TIMEOUT,
        }
    }

    /// Searches arXiv for up to `max_results` papers, relevance-sorted.
    ///
    /// Provider failures are logged and swallowed; the caller always gets a
    /// sequence, possibly empty.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<PaperResult> {
        match self.try_search(query, max_results).await {
            Ok(papers) => {
                debug!("arXiv returned {} papers for {:?}", papers.len(), query);
                papers
            }
            Err(e) => {
                warn!("arXiv search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PaperResult>, ProviderError> {
        let search_query = format!("all:{}", query);
        let max_results = max_results.to_string();

        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", "relevance"),
                ("sortOrder", "descending"),
            ])
            .send();

        let response = timeout(self.call_timeout, request)
            .await
            .map_err(|_| ProviderError::Timeout(self.call_timeout))??;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = timeout(self.call_timeout, response.text())
            .await
            .map_err(|_| ProviderError::Timeout(self.call_timeout))??;

        let feed: AtomFeed =
            quick_xml::de::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(feed.entries.into_iter().map(map_entry).collect())
    }
}

// --- Atom feed shape (only the elements we consume) ---

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    id: String,
    title: String,
    summary: String,
    #[serde(default)]
    published: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<AtomAuthor>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    #[serde(rename = "category", default)]
    categories: Vec<AtomCategory>,
}

#[derive(Debug, Deserialize)]
struct AtomAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@rel", default)]
    rel: Option<String>,
    #[serde(rename = "@title", default)]
    title: Option<String>,
    #[serde(rename = "@type", default)]
    content_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomCategory {
    #[serde(rename = "@term")]
    term: String,
}

fn map_entry(entry: AtomEntry) -> PaperResult {
    let abs_url = entry
        .links
        .iter()
        .find(|link| link.rel.as_deref() == Some("alternate"))
        .map(|link| link.href.clone())
        .unwrap_or_else(|| entry.id.clone());

    let pdf_url = entry
        .links
        .iter()
        .find(|link| {
            link.title.as_deref() == Some("pdf")
                || link.content_type.as_deref() == Some("application/pdf")
        })
        .map(|link| link.href.clone())
        .unwrap_or_else(|| abs_url.replace("/abs/", "/pdf/"));

    PaperResult {
        title: normalize_whitespace(&entry.title),
        authors: entry.authors.into_iter().map(|author| author.name).collect(),
        summary: truncate_with_ellipsis(&normalize_whitespace(&entry.summary), SUMMARY_MAX_CHARS),
        url: abs_url,
        pdf_url,
        published_date: entry.published,
        categories: entry
            .categories
            .into_iter()
            .map(|category| category.term)
            .collect(),
    }
}

// arXiv wraps titles and abstracts across lines.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
