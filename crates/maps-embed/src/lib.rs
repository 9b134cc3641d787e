//! Google Maps embed resolver
//!
//! Turns a Google Maps URL (a `maps.app.goo.gl` short link or a long-form
//! `/maps/place/...` URL) into an iframe-ready embed URL plus the place name
//! and coordinates it points at.
//!
//! # Examples
//! ```
//! use maps_embed::get_embed_url;
//!
//! async fn example() {
//!     let result = get_embed_url("https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z").await;
//!     assert_eq!(
//!         result.embed_url(),
//!         Some("https://maps.google.com/maps?q=Eiffel%20Tower&ll=48.8584,2.2945&z=14&output=embed")
//!     );
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod embed;
pub mod error;
pub mod place;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use classify::UrlKind;
pub use embed::{EmbedResult, PlaceDetails};
pub use error::{DecodeError, ErrorKind, ResolveError, Result};
pub use place::PlaceMatch;
pub use resolver::{get_embed_url, EmbedResolver};

pub use networking::{ClientConfig, NetworkError, RedirectResolver};
