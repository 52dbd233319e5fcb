//! External search adapters.
//!
//! Each adapter makes at most one outbound call per request and never lets a
//! provider failure escape: errors are typed as [`ProviderError`] internally
//! and collapsed to a deterministic fallback value at the adapter boundary.
//! Callers cannot tell a degraded result from a real one; the HTTP layer
//! only ever sees sequences.

pub mod papers;
pub mod videos;

use std::time::Duration;

use thiserror::Error;

pub use papers::{ArxivClient, PaperResult};
pub use videos::{VideoResult, VideoSearcher};

/// Per-call budget for outbound provider requests. Hitting it is a
/// [`ProviderError::Timeout`] and degrades like any other failure.
pub const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of an outbound provider call. Internal to the adapters.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("provider call exceeded {0:?}")]
    Timeout(Duration),
}

/// Truncates `text` to at most `max_chars` characters, appending `...` only
/// when something was actually cut. Operates on characters, not bytes, so
/// multibyte input never splits a boundary.
pub(crate) fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
