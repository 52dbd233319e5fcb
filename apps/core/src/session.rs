//! Research sessions and exports.
//!
//! Sessions are created and returned in the same request; nothing is stored.
//! The export bundle is likewise a stub that echoes the requested id with
//! empty collections. Both are constructors over a future persistence layer
//! that does not exist yet.

use chrono::Local;
use serde::Serialize;

pub const DEFAULT_SESSION_TITLE: &str = "Research Session";

const EXPORT_STUB_SUMMARY: &str = "This is a mock export. In the full version, this will contain all your research concepts, visited URLs, and insights.";

/// A freshly created research session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub created_at: String,
    pub concepts: Vec<String>,
    pub urls: Vec<String>,
    pub title: String,
}

impl SessionRecord {
    pub fn new(title: Option<String>) -> Self {
        let now = Local::now();

        Self {
            id: format!("session_{}", now.format("%Y%m%d_%H%M%S")),
            created_at: now.to_rfc3339(),
            concepts: Vec::new(),
            urls: Vec::new(),
            title: title.unwrap_or_else(|| DEFAULT_SESSION_TITLE.to_string()),
        }
    }
}

/// Export of a session as a formatted document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub session_id: String,
    pub title: String,
    pub summary: String,
    pub concepts_explored: Vec<String>,
    pub urls_visited: Vec<String>,
    pub exported_at: String,
}

impl ExportBundle {
    pub fn for_session(session_id: &str) -> Self {
        let now = Local::now();

        Self {
            session_id: session_id.to_string(),
            title: format!("Research Session Export - {}", now.format("%Y-%m-%d")),
            summary: EXPORT_STUB_SUMMARY.to_string(),
            concepts_explored: Vec::new(),
            urls_visited: Vec::new(),
            exported_at: now.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format_and_defaults() {
        let session = SessionRecord::new(None);

        assert!(session.id.starts_with("session_"));
        // session_YYYYMMDD_HHMMSS
        assert_eq!(session.id.len(), "session_".len() + 15);
        assert_eq!(session.title, DEFAULT_SESSION_TITLE);
        assert!(session.concepts.is_empty());
        assert!(session.urls.is_empty());
    }

    #[test]
    fn test_session_honors_custom_title() {
        let session = SessionRecord::new(Some("Thesis reading".to_string()));
        assert_eq!(session.title, "Thesis reading");
    }

    #[test]
    fn test_export_echoes_session_id_with_empty_collections() {
        let export = ExportBundle::for_session("session_20260101_120000");

        assert_eq!(export.session_id, "session_20260101_120000");
        assert!(export.title.starts_with("Research Session Export - "));
        assert!(export.concepts_explored.is_empty());
        assert!(export.urls_visited.is_empty());
    }

    #[test]
    fn test_wire_casing_is_camel_case() {
        let export = ExportBundle::for_session("s");
        let json = serde_json::to_value(&export).unwrap();

        assert!(json.get("sessionId").is_some());
        assert!(json.get("conceptsExplored").is_some());
        assert!(json.get("urlsVisited").is_some());
        assert!(json.get("exportedAt").is_some());
    }
}
