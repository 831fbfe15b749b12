// Google Gemini generateContent implementation.
//
// Sends one prompt per post and expects a two-line reply: YES/NO on the
// first line, location on the second. The prompt mandates that shape but
// the service doesn't enforce it, so parsing tolerates deviation.
//
// API docs: https://ai.google.dev/api/generate-content

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{PotholeClassifier, Verdict, LOCATION_UNCLEAR};
use crate::output::truncate_chars;

/// Gemini API pothole classifier.
pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClassifier {
    /// Create a new classifier against the given endpoint base and model.
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl PotholeClassifier for GeminiClassifier {
    async fn classify(&self, text: &str) -> Result<Verdict> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(text),
                }],
            }],
            generation_config: GenerationConfig::default(),
            safety_settings: safety_settings(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let reply = result
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .context("Gemini response contained no candidates")?;

        let verdict = parse_reply(reply);

        debug!(
            verdict = ?verdict,
            text_preview = %truncate_chars(text, 50),
            "Classified post"
        );

        Ok(verdict)
    }
}

/// Build the fixed classification prompt around one post's text.
pub fn build_prompt(post_text: &str) -> String {
    format!(
        "Analyze the following social media post text.\n\
         1. Does this post primarily report a pothole or road damage? (Answer YES or NO)\n\
         2. If YES, what is the specific location mentioned? Be as precise as possible \
         (e.g., street name, intersection, landmark). If no specific location is given, \
         state 'Location Unclear'.\n\
         \n\
         Post Text:\n\
         ---\n\
         {post_text}\n\
         ---\n\
         \n\
         Respond with ONLY 'YES' or 'NO' on the first line, and the location \
         (or 'Location Unclear') on the second line."
    )
}

/// Parse the model's two-line reply into a verdict.
///
/// Only a first line that is exactly "YES" (any case, after trimming) counts
/// as a report. A missing or blank second line becomes [`LOCATION_UNCLEAR`].
/// Everything else — "NO", refusals, free-form prose — is a negative.
pub fn parse_reply(reply: &str) -> Verdict {
    let mut lines = reply.trim().lines();

    let first = lines.next().unwrap_or("").trim();
    if !first.eq_ignore_ascii_case("YES") {
        return Verdict::Negative;
    }

    let location = match lines.next().map(str::trim) {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => LOCATION_UNCLEAR.to_string(),
    };

    Verdict::Pothole { location }
}

/// The fixed safety thresholds sent with every request.
fn safety_settings() -> Vec<SafetySetting> {
    const CATEGORIES: [&str; 4] = [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];
    CATEGORIES
        .iter()
        .map(|category| SafetySetting {
            category: category.to_string(),
            threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
        })
        .collect()
}

// --- Gemini API request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Fixed, deterministic-leaning generation parameters.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Content,
}
