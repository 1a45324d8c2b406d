//! Client and response handling for the Gemini image generation API.

use std::time::Duration;

use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ImageError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model identifier used for every request (Nano Banana Pro).
pub const MODEL: &str = "gemini-3-pro-image-preview";

/// Upper bound on a single generateContent call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini client that calls the Google AI API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    /// Client pointed at an alternate endpoint; tests use this to stand in
    /// a local listener for the real API.
    fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { client: Client::new(), api_key, base_url }
    }

    /// Send one generateContent request and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Api`] when the API responds with a non-success
    /// status, or [`ImageError::Network`] if the request itself fails.
    pub async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        let url = format!("{}/{MODEL}:generateContent", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ImageError::Api { status: status.as_u16(), body });
        }

        Ok(body)
    }
}

/// Build the generateContent request body for a prompt.
///
/// Generation parameters are fixed; the endpoint is asked for both image
/// and text response modalities.
fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{"text": prompt}]
        }],
        "generationConfig": {
            "temperature": 1.0,
            "topP": 0.95,
            "topK": 40,
            "responseModalities": ["image", "text"]
        }
    })
}

/// An image decoded out of a generateContent response.
#[derive(Debug)]
pub struct InlineImage {
    /// Raw image bytes (decoded from base64).
    pub bytes: Vec<u8>,
    /// MIME type reported by the API. It never chooses the output extension.
    #[allow(dead_code)]
    pub mime_type: String,
}

/// Ways a 200 response can still fail to yield an image.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The response carried no candidates.
    #[error("No candidates in response")]
    NoCandidates,

    /// The first candidate had no part with inline image data.
    #[error("No image data in response")]
    NoImageData,

    /// The body was not valid JSON of the expected shape.
    #[error("Error parsing response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The inline data was not valid base64.
    #[error("Error parsing response: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Extract the first inline image from a raw generateContent response body.
///
/// Only the first candidate is examined; its parts are scanned in order and
/// the first one carrying inline data wins. Text parts are skipped.
///
/// # Errors
///
/// Returns an [`ExtractError`] naming what was missing or malformed.
pub fn extract_inline_image(body: &str) -> Result<InlineImage, ExtractError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        return Err(ExtractError::NoCandidates);
    };

    for part in candidate.content.parts {
        if let Some(inline) = part.inline_data {
            let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
            return Ok(InlineImage { bytes, mime_type: inline.mime_type });
        }
    }

    Err(ExtractError::NoImageData)
}

// --- Gemini API response types ---
//
// Absent fields read as empty so they map to the "no candidates" /
// "no image data" diagnostics instead of a parse error.

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default = "default_mime_type")]
    mime_type: String,
    data: String,
}

fn default_mime_type() -> String {
    "image/png".to_string()
}
