//! Error types for embed resolution
//!
//! Every variant's `Display` output is the exact text placed in the `error`
//! field of an [`EmbedResult`](crate::EmbedResult).

use networking::NetworkError;
use thiserror::Error;

/// Errors that can occur while resolving a Maps URL into an embed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Input was empty or not a string
    #[error("Invalid URL provided.")]
    InvalidInput,

    /// Fetching the short link failed
    #[error("Failed to resolve short URL: {0}")]
    ShortUrl(#[source] NetworkError),

    /// The fetch succeeded but produced no URL
    #[error("Empty resolved URL.")]
    EmptyResolution,

    /// The long URL does not have the `/maps/place/<name>/@<lat>,<lng>` shape
    #[error("Could not parse location details from URL.")]
    Unparseable,

    /// The place-name segment could not be percent-decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ResolveError {
    /// Get the broad category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::InvalidInput => ErrorKind::Input,
            ResolveError::ShortUrl(_) => ErrorKind::Resolution,
            ResolveError::EmptyResolution => ErrorKind::EmptyResolution,
            ResolveError::Unparseable => ErrorKind::Parse,
            ResolveError::Decode(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<NetworkError> for ResolveError {
    fn from(err: NetworkError) -> Self {
        ResolveError::ShortUrl(err)
    }
}

/// Broad failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed call argument, detected before any I/O
    Input,
    /// Short-link network fetch failed
    Resolution,
    /// Fetch succeeded without a usable URL
    EmptyResolution,
    /// Resolved URL does not match the expected shape
    Parse,
    /// Anything else
    Unexpected,
}

/// Percent-decoding failure
///
/// Both variants display as `URI malformed`, the message callers of a
/// `decodeURIComponent`-style decoder expect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits
    #[error("URI malformed")]
    Malformed {
        /// Byte offset of the offending `%`
        position: usize,
    },

    /// The decoded bytes are not valid UTF-8
    #[error("URI malformed")]
    InvalidUtf8,
}

/// Result type for embed resolution
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ResolveError::InvalidInput.to_string(), "Invalid URL provided.");
        assert_eq!(ResolveError::EmptyResolution.to_string(), "Empty resolved URL.");
        assert_eq!(
            ResolveError::Unparseable.to_string(),
            "Could not parse location details from URL."
        );
    }

    #[test]
    fn test_short_url_error_wraps_network_message() {
        let err = ResolveError::from(NetworkError::Request("dns error".to_string()));
        assert_eq!(err.to_string(), "Failed to resolve short URL: dns error");
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }

    #[test]
    fn test_decode_error_is_verbatim() {
        let err = ResolveError::from(DecodeError::Malformed { position: 3 });
        assert_eq!(err.to_string(), "URI malformed");
        assert_eq!(err.kind(), ErrorKind::Unexpected);

        let err = ResolveError::from(DecodeError::InvalidUtf8);
        assert_eq!(err.to_string(), "URI malformed");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ResolveError::InvalidInput.kind(), ErrorKind::Input);
        assert_eq!(ResolveError::EmptyResolution.kind(), ErrorKind::EmptyResolution);
        assert_eq!(ResolveError::Unparseable.kind(), ErrorKind::Parse);
    }
}
