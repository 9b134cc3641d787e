//! Short-link vs long-form classification

/// Host/path fragments that mark a URL as an already-expanded Maps URL
pub const LONG_FORM_MARKERS: [&str; 2] = ["google.com/maps", "google.co.in/maps"];

/// How an input URL has to be treated before it can be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// Already a long-form Maps URL; parse it directly
    AlreadyLongForm,
    /// Anything else; follow redirects first
    NeedsResolution,
}

impl UrlKind {
    /// Classify a URL by substring inspection
    ///
    /// Any URL not carrying one of the [`LONG_FORM_MARKERS`] is treated as a
    /// short link, including links from generic shorteners that may redirect
    /// to Maps.
    pub fn classify(url: &str) -> Self {
        if LONG_FORM_MARKERS.iter().any(|marker| url.contains(marker)) {
            UrlKind::AlreadyLongForm
        } else {
            UrlKind::NeedsResolution
        }
    }

    /// Check if a network round-trip is required
    pub fn needs_resolution(&self) -> bool {
        matches!(self, UrlKind::NeedsResolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_form_urls() {
        assert_eq!(
            UrlKind::classify("https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z"),
            UrlKind::AlreadyLongForm
        );
        assert_eq!(
            UrlKind::classify("https://www.google.co.in/maps/place/India+Gate/@28.6129,77.2295,17z"),
            UrlKind::AlreadyLongForm
        );
        // Marker anywhere in the string counts, shape is checked later
        assert_eq!(
            UrlKind::classify("https://google.com/maps?q=1.0,2.0"),
            UrlKind::AlreadyLongForm
        );
    }

    #[test]
    fn test_short_links() {
        assert_eq!(
            UrlKind::classify("https://maps.app.goo.gl/DLjNeKAkKsrJsvao7"),
            UrlKind::NeedsResolution
        );
        assert_eq!(UrlKind::classify("https://goo.gl/maps/abc"), UrlKind::NeedsResolution);
        assert_eq!(UrlKind::classify("https://bit.ly/3xyz"), UrlKind::NeedsResolution);
    }

    #[test]
    fn test_other_google_domains_need_resolution() {
        // Only the two markers are recognised
        assert_eq!(
            UrlKind::classify("https://www.google.de/maps/place/Berlin/@52.52,13.40,12z"),
            UrlKind::NeedsResolution
        );
        assert_eq!(UrlKind::classify("https://maps.google.com/?q=Paris"), UrlKind::NeedsResolution);
    }

    #[test]
    fn test_needs_resolution() {
        assert!(UrlKind::NeedsResolution.needs_resolution());
        assert!(!UrlKind::AlreadyLongForm.needs_resolution());
    }
}
