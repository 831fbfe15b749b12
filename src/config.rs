use std::env;

use anyhow::Result;

/// Default Gemini REST endpoint base. The full request URL is
/// `{base}/models/{model}:generateContent?key={api_key}`.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for classification.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Placeholder key value that ships in .env.example — treated as unset.
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub gemini_api_key: String,
    /// Gemini REST endpoint base (defaults to the public Google endpoint).
    /// Overridable mainly so tests can point at a local stub server.
    pub api_url: String,
    /// Model name used in the generateContent path.
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default — the key is required
    /// before any classification can run.
    pub fn load() -> Result<Self> {
        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Check that the Gemini API key is configured and not the placeholder.
    /// Call this before any operation that reaches the remote service.
    pub fn require_gemini(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() || self.gemini_api_key == PLACEHOLDER_KEY {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
