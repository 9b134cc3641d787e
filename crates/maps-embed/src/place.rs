//! Place extraction from long-form Maps URLs
//!
//! Long-form place URLs look like
//! `https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z/...`.
//! The name segment uses `+` for spaces and percent-escapes for everything
//! else; the coordinates are signed decimal numbers that are carried through
//! as strings, byte for byte.

use crate::embed::PlaceDetails;
use crate::error::DecodeError;
use regex::Regex;
use std::sync::OnceLock;

/// Base of the generated iframe source URL
pub const EMBED_BASE_URL: &str = "https://maps.google.com/maps";

/// Zoom level written into every embed URL
pub const EMBED_ZOOM: u8 = 14;

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// A place name and coordinate pair pulled out of a long URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceMatch {
    /// Decoded, human-readable place name
    pub place_name: String,
    /// Place name re-encoded for use in a query string
    pub encoded_name: String,
    /// Latitude exactly as it appeared in the URL
    pub lat: String,
    /// Longitude exactly as it appeared in the URL
    pub lng: String,
}

impl PlaceMatch {
    /// Build a match from the raw (still encoded) name segment
    pub fn from_segment(
        segment: &str,
        lat: impl Into<String>,
        lng: impl Into<String>,
    ) -> Result<Self, DecodeError> {
        let place_name = decode_component(&segment.replace('+', " "))?;
        let encoded_name = encode_component(&place_name);

        Ok(Self {
            place_name,
            encoded_name,
            lat: lat.into(),
            lng: lng.into(),
        })
    }

    /// Get the iframe source URL for this place
    pub fn embed_url(&self) -> String {
        format!(
            "{}?q={}&ll={},{}&z={}&output=embed",
            EMBED_BASE_URL, self.encoded_name, self.lat, self.lng, EMBED_ZOOM
        )
    }

    /// Convert into the details reported to callers
    pub fn into_details(self) -> PlaceDetails {
        PlaceDetails {
            place_name: self.place_name,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

fn place_regex() -> &'static Regex {
    static PLACE_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACE_REGEX.get_or_init(|| {
        // /maps/place/<name>/@<lat>,<lng>
        Regex::new(r"/maps/place/([^/]+)/@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").unwrap()
    })
}

/// Extract the place name and coordinates from a long-form URL
///
/// Returns `Ok(None)` when the URL does not have the place shape, and an
/// error only when the name segment carries a malformed percent-escape.
///
/// # Examples
/// ```
/// use maps_embed::place::extract;
///
/// let place = extract("https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z")
///     .unwrap()
///     .unwrap();
/// assert_eq!(place.place_name, "Eiffel Tower");
/// assert_eq!(place.lat, "48.8584");
/// ```
pub fn extract(long_url: &str) -> Result<Option<PlaceMatch>, DecodeError> {
    let Some(caps) = place_regex().captures(long_url) else {
        return Ok(None);
    };

    PlaceMatch::from_segment(&caps[1], &caps[2], &caps[3]).map(Some)
}

/// Percent-decode a URI component
///
/// Every `%` must be followed by two hex digits and the decoded bytes must
/// form valid UTF-8; anything else is rejected rather than passed through.
pub fn decode_component(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes
                .get(i + 1..i + 3)
                .ok_or(DecodeError::Malformed { position: i })?;

            match (hex_value(escape[0]), hex_value(escape[1])) {
                (Some(hi), Some(lo)) => decoded.push((hi << 4) | lo),
                _ => return Err(DecodeError::Malformed { position: i }),
            }
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// Percent-encode a URI component
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched and escapes every other
/// UTF-8 byte as `%XX`, so spaces become `%20`.
pub fn encode_component(input: &str) -> String {
    let mut encoded = urlencoding::encode(input).into_owned();
    for (escaped, literal) in EXTRA_UNRESERVED {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, literal);
        }
    }
    encoded
}
