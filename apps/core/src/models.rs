use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/explain`.
#[derive(Debug, Deserialize, Validate)]
pub struct ExplainRequest {
    /// The highlighted text to explain.
    #[serde(default)]
    #[validate(length(min = 1, message = "No text provided"))]
    pub text: String,
    /// Context about the page the text was highlighted on.
    #[serde(default)]
    pub context: PageContext,
}

/// Page context captured by the extension's content script.
///
/// Only `domain` influences the explanation today; the other fields arrive
/// with every request and are kept for the future provider integration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub url: Option<String>,
    pub title: Option<String>,
    pub domain: Option<String>,
    // Sent by the extension for future use; nothing consumes it yet.
    #[allow(dead_code)]
    pub page_text: Option<String>,
}

/// Body of `POST /api/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    /// The concept to find papers and videos for.
    #[serde(default)]
    #[validate(length(min = 1, message = "No query provided"))]
    pub query: String,
}

/// Body of `POST /api/session`; the whole body is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_request_missing_text_fails_validation() {
        let request: ExplainRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_explain_request_parses_extension_payload() {
        let body = r#"{
            "text": "neural network",
            "context": {
                "url": "https://en.wikipedia.org/wiki/Neural_network",
                "title": "Neural network - Wikipedia",
                "domain": "en.wikipedia.org",
                "pageText": "A neural network is..."
            }
        }"#;

        let request: ExplainRequest = serde_json::from_str(body).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.context.domain.as_deref(), Some("en.wikipedia.org"));
        assert!(request.context.page_text.is_some());
    }

    #[test]
    fn test_search_request_empty_query_fails_validation() {
        let request: SearchRequest = serde_json::from_str(r#"{"query": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
