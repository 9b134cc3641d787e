//! Embed result returned for every resolution attempt
//!
//! A completed call carries either `embed` + `details` or `error`, never both.
//! The only result without `original` is the input-validation failure.

use crate::error::ResolveError;
use crate::place::PlaceMatch;
use serde::{Deserialize, Serialize};

/// Location details extracted from a place URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    /// Decoded, human-readable place name
    pub place_name: String,
    /// Latitude, as a signed decimal string
    pub lat: String,
    /// Longitude, as a signed decimal string
    pub lng: String,
}

/// Outcome of resolving a Maps URL
///
/// Fields are public for reading; build values through [`EmbedResult::success`],
/// [`EmbedResult::failure`] and [`EmbedResult::invalid_input`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResult {
    /// The input URL, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// The resolved long URL, when it differs from the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<String>,
    /// iframe source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,
    /// Extracted location details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PlaceDetails>,
    /// Human-readable failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmbedResult {
    /// Result for input that is empty or not a string
    pub fn invalid_input() -> Self {
        Self {
            original: None,
            expanded: None,
            embed: None,
            details: None,
            error: Some(ResolveError::InvalidInput.to_string()),
        }
    }

    /// Successful extraction
    pub fn success(original: impl Into<String>, expanded: Option<String>, place: PlaceMatch) -> Self {
        Self {
            original: Some(original.into()),
            expanded,
            embed: Some(place.embed_url()),
            details: Some(place.into_details()),
            error: None,
        }
    }

    /// Failure after input validation; `expanded` is kept when known
    pub fn failure(original: impl Into<String>, expanded: Option<String>, error: &ResolveError) -> Self {
        Self {
            original: Some(original.into()),
            expanded,
            embed: None,
            details: None,
            error: Some(error.to_string()),
        }
    }

    /// Check if an embed URL was produced
    pub fn is_success(&self) -> bool {
        self.embed.is_some()
    }

    /// Get the error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get the embed URL, if any
    pub fn embed_url(&self) -> Option<&str> {
        self.embed.as_deref()
    }
}
