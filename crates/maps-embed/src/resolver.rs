//! URL resolution pipeline
//!
//! classify -> (resolve redirects) -> validate -> extract -> build embed.
//! Every failure is folded into the returned [`EmbedResult`]; nothing here
//! returns `Err` or panics.

use crate::classify::UrlKind;
use crate::embed::EmbedResult;
use crate::error::ResolveError;
use crate::place;
use networking::{ClientConfig, HttpClient, NetworkError, RedirectResolver};
use tracing::{debug, instrument, warn};

/// Resolves Maps URLs into embeddable URLs
///
/// The redirect collaborator is generic so tests can swap in a mock; the
/// default is the reqwest-backed [`HttpClient`].
///
/// # Examples
/// ```
/// use maps_embed::EmbedResolver;
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = EmbedResolver::with_config(Default::default())?;
///     let result = resolver
///         .resolve("https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z")
///         .await;
///
///     println!("{:?}", result.embed_url());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EmbedResolver<R = HttpClient> {
    resolver: R,
}

impl EmbedResolver<HttpClient> {
    /// Create a resolver backed by a reqwest client built from `config`
    pub fn with_config(config: ClientConfig) -> Result<Self, NetworkError> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<R: RedirectResolver> EmbedResolver<R> {
    /// Create a resolver around any redirect collaborator
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Get the redirect collaborator
    pub fn redirect_resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve a Maps URL into an embed URL and place details
    #[instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> EmbedResult {
        if url.is_empty() {
            warn!("Rejected empty URL");
            return EmbedResult::invalid_input();
        }

        let kind = UrlKind::classify(url);
        debug!(?kind, "Classified URL");

        let long_url = match kind {
            UrlKind::AlreadyLongForm => url.to_string(),
            UrlKind::NeedsResolution => match self.resolver.resolve_redirects(url).await {
                Ok(resolved) => resolved,
                Err(e) => {
                    let err = ResolveError::from(e);
                    warn!(kind = ?err.kind(), "Short URL resolution failed: {}", err);
                    return EmbedResult::failure(url, None, &err);
                }
            },
        };

        if long_url.is_empty() {
            warn!("Redirect chain produced an empty URL");
            return EmbedResult::failure(url, None, &ResolveError::EmptyResolution);
        }

        let expanded = (long_url != url).then(|| long_url.clone());
        if let Some(expanded) = &expanded {
            debug!(expanded = %expanded, "Expanded short URL");
        }

        match place::extract(&long_url) {
            Ok(Some(place)) => {
                debug!(place_name = %place.place_name, lat = %place.lat, lng = %place.lng, "Extracted place");
                EmbedResult::success(url, expanded, place)
            }
            Ok(None) => {
                warn!(long_url = %long_url, "URL does not match the place pattern");
                EmbedResult::failure(url, expanded, &ResolveError::Unparseable)
            }
            Err(e) => {
                let err = ResolveError::from(e);
                warn!(kind = ?err.kind(), "Place name could not be decoded: {}", err);
                EmbedResult::failure(url, None, &err)
            }
        }
    }

    /// Resolve dynamically typed input, such as a field of a JSON request
    ///
    /// Anything other than a string is rejected as invalid input.
    pub async fn resolve_value(&self, value: &serde_json::Value) -> EmbedResult {
        match value.as_str() {
            Some(url) => self.resolve(url).await,
            None => {
                warn!("Rejected non-string URL input");
                EmbedResult::invalid_input()
            }
        }
    }
}

/// Resolve a Maps URL using a default reqwest-backed client
///
/// # Examples
/// ```
/// use maps_embed::get_embed_url;
///
/// async fn example() {
///     let result = get_embed_url("https://maps.app.goo.gl/DLjNeKAkKsrJsvao7").await;
///     if let Some(embed) = result.embed_url() {
///         println!("<iframe src=\"{}\"></iframe>", embed);
///     }
/// }
/// ```
pub async fn get_embed_url(url: &str) -> EmbedResult {
    if url.is_empty() {
        return EmbedResult::invalid_input();
    }

    match EmbedResolver::with_config(ClientConfig::default()) {
        Ok(resolver) => resolver.resolve(url).await,
        Err(e) => EmbedResult::failure(url, None, &ResolveError::from(e)),
    }
}
