//! Video search against the YouTube Data API, with deterministic fallbacks.
//!
//! Three outcomes, per configuration and provider health:
//! - no API key: two synthesized search links, no network call at all
//! - key + successful call: up to five mapped results
//! - key + failed call: one generic "search YouTube" link
//!
//! The caller can never distinguish the degraded modes from a real answer.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{truncate_with_ellipsis, ProviderError, OUTBOUND_TIMEOUT};

const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const YOUTUBE_RESULTS_URL: &str = "https://www.youtube.com/results";
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";

/// Descriptions longer than this are cut and marked with an ellipsis.
const DESCRIPTION_MAX_CHARS: usize = 200;

/// Results requested from the API per search.
const MAX_RESULTS: usize = 5;

/// A video search hit, shaped for the extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// Video searcher; keyless instances synthesize search links instead of
/// calling the provider.
pub struct VideoSearcher {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    pub(crate) call_timeout: Duration,
}

impl VideoSearcher {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, YOUTUBE_API_URL.to_string())
    }

    /// Points the searcher at a different endpoint. Used by tests to swap
    /// in a mock server.
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            call_timeout: OUTBOUND_TIMEOUT,
        }
    }

    /// Searches for videos about `query`.
    ///
    /// Never fails: without a key this returns the two deterministic search
    /// links; with a key, provider failures are logged and replaced by a
    /// single generic search link.
    pub async fn search(&self, query: &str) -> Vec<VideoResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no video API key configured, returning search links for {:?}", query);
            return search_link_stubs(query);
        };

        match self.try_search(api_key, query).await {
            Ok(videos) => {
                debug!("YouTube returned {} videos for {:?}", videos.len(), query);
                videos
            }
            Err(e) => {
                warn!("YouTube search failed for {:?}: {}", query, e);
                vec![generic_search_link(query)]
            }
        }
    }

    async fn try_search(&self, api_key: &str, query: &str) -> Result<Vec<VideoResult>, ProviderError> {
        let augmented_query = format!("{} tutorial explanation", query);
        let max_results = MAX_RESULTS.to_string();

        let request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("part", "snippet"),
                ("q", augmented_query.as_str()),
                ("type", "video"),
                ("order", "relevance"),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send();

        let response = timeout(self.call_timeout, request)
            .await
            .map_err(|_| ProviderError::Timeout(self.call_timeout))??;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let payload: SearchResponse = timeout(self.call_timeout, response.json())
            .await
            .map_err(|_| ProviderError::Timeout(self.call_timeout))??;

        Ok(payload.items.into_iter().filter_map(map_item).collect())
    }
}

/// The two stubs returned when no API key is configured.
fn search_link_stubs(query: &str) -> Vec<VideoResult> {
    vec![
        VideoResult {
            title: format!("{} - Tutorial", query),
            description: Some(format!("Search YouTube for {} tutorials", query)),
            url: results_url(&format!("{} tutorial", query)),
            thumbnail: None,
            channel: None,
            published_date: None,
        },
        VideoResult {
            title: format!("Introduction to {}", query),
            description: Some(format!("Search YouTube for an introduction to {}", query)),
            url: results_url(&format!("{} introduction", query)),
            thumbnail: None,
            channel: None,
            published_date: None,
        },
    ]
}

/// The single fallback returned when a keyed provider call fails.
fn generic_search_link(query: &str) -> VideoResult {
    VideoResult {
        title: format!("Search YouTube for {}", query),
        description: None,
        url: results_url(query),
        thumbnail: None,
        channel: None,
        published_date: None,
    }
}

fn results_url(query: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("search_query", query)
        .finish();
    format!("{}?{}", YOUTUBE_RESULTS_URL, encoded)
}

// --- YouTube Data API v3 response shape (only the fields we consume) ---

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "channelTitle", default)]
    channel_title: Option<String>,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

fn map_item(item: SearchItem) -> Option<VideoResult> {
    let video_id = item.id.video_id?;
    let snippet = item.snippet;

    let thumbnail = snippet
        .thumbnails
        .high
        .or(snippet.thumbnails.medium)
        .or(snippet.thumbnails.fallback)
        .map(|thumb| thumb.url);

    Some(VideoResult {
        title: snippet.title,
        description: snippet
            .description
            .map(|text| truncate_with_ellipsis(&text, DESCRIPTION_MAX_CHARS)),
        url: format!("{}?v={}", YOUTUBE_WATCH_URL, video_id),
        thumbnail,
        channel: snippet.channel_title,
        published_date: snippet.published_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_key_returns_exactly_two_search_links() {
        let searcher = VideoSearcher::new(None);
        let videos = searcher.search("machine learning").await;

        assert_eq!(videos.len(), 2);
        for video in &videos {
            assert!(video.url.contains("machine+learning"));
            assert!(video.url.starts_with(YOUTUBE_RESULTS_URL));
        }
    }

    #[test]
    fn test_search_links_encode_the_query() {
        let stubs = search_link_stubs("C++ & Rust");
        assert!(stubs[0].url.contains("C%2B%2B+%26+Rust"));
        assert!(stubs[1].url.contains("C%2B%2B+%26+Rust"));
    }

    #[test]
    fn test_generic_search_link_is_distinct_from_stubs() {
        let fallback = generic_search_link("rust");
        assert_eq!(fallback.title, "Search YouTube for rust");
        assert!(fallback.description.is_none());
        assert_eq!(
            fallback.url,
            format!("{}?search_query=rust", YOUTUBE_RESULTS_URL)
        );
    }

    #[test]
    fn test_map_item_builds_watch_url_and_truncates_description() {
        let item = SearchItem {
            id: ItemId {
                video_id: Some("abc123".to_string()),
            },
            snippet: Snippet {
                title: "Intro".to_string(),
                description: Some("d".repeat(250)),
                channel_title: Some("Some Channel".to_string()),
                published_at: Some("2024-03-01T00:00:00Z".to_string()),
                thumbnails: Thumbnails {
                    high: Some(Thumbnail {
                        url: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".to_string(),
                    }),
                    medium: None,
                    fallback: None,
                },
            },
        };

        let video = map_item(item).unwrap();
        assert_eq!(video.url, "https://www.youtube.com/watch?v=abc123");
        let description = video.description.unwrap();
        assert_eq!(description.chars().count(), 203);
        assert!(description.ends_with("..."));
        assert_eq!(video.channel.as_deref(), Some("Some Channel"));
        assert!(video.thumbnail.unwrap().contains("hqdefault"));
    }

    #[test]
    fn test_items_without_video_id_are_skipped() {
        let item = SearchItem {
            id: ItemId { video_id: None },
            snippet: Snippet {
                title: "Channel result".to_string(),
                description: None,
                channel_title: None,
                published_at: None,
                thumbnails: Thumbnails::default(),
            },
        };

        assert!(map_item(item).is_none());
    }
}
