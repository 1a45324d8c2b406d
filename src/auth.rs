//! API credential resolution from the environment.

use crate::error::ImageError;

/// Environment variables checked for the API key, in priority order.
const KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Resolve the API key from the environment.
///
/// # Errors
///
/// Returns [`ImageError::MissingApiKey`] if no variable in [`KEY_VARS`]
/// holds a non-empty value.
pub fn resolve_api_key() -> Result<String, ImageError> {
    api_key_from(|name| std::env::var(name).ok())
}

/// Key lookup with an injectable environment, first non-empty value wins.
fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ImageError> {
    KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .ok_or(ImageError::MissingApiKey)
}
