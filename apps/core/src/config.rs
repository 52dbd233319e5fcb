//! Runtime configuration.
//!
//! All environment access happens here, once, at process start. Handlers and
//! adapters receive values through [`Config`] instead of reading globals.

use std::env;

use crate::error::AppError;

/// Default listening port, matching the original deployment.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration assembled from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the future explanation provider (`OPENAI_API_KEY` or
    /// `CLAUDE_API_KEY`). Loaded but not consumed by the current engine;
    /// its absence is reported at startup.
    pub explain_api_key: Option<String>,
    /// YouTube Data API key. Absence selects the link-only fallback mode
    /// for video search; it is a configuration value, not an error.
    pub youtube_api_key: Option<String>,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Debug mode; picks the default log filter when `RUST_LOG` is unset.
    pub debug: bool,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// A malformed `PORT` is a configuration error rather than a silent
    /// default; everything else falls back.
    pub fn from_env() -> Result<Self, AppError> {
        let explain_api_key = non_empty_var("OPENAI_API_KEY").or_else(|| non_empty_var("CLAUDE_API_KEY"));
        let youtube_api_key = non_empty_var("YOUTUBE_API_KEY");

        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {:?}", raw)))?,
            None => DEFAULT_PORT,
        };

        let debug = match non_empty_var("SONA_DEBUG") {
            Some(raw) => raw.eq_ignore_ascii_case("true"),
            None => true,
        };

        Ok(Self {
            explain_api_key,
            youtube_api_key,
            port,
            debug,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
