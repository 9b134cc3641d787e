//! Test helpers and URL fixtures

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixture URLs
pub mod urls {
    /// Short link as produced by the Maps share button
    pub const SHORT: &str = "https://maps.app.goo.gl/DLjNeKAkKsrJsvao7";

    /// Long-form place URL on google.com
    pub const EIFFEL_LONG: &str = "https://www.google.com/maps/place/Eiffel+Tower/@48.8584,2.2945,17z";

    /// Embed URL generated for [`EIFFEL_LONG`]
    pub const EIFFEL_EMBED: &str =
        "https://maps.google.com/maps?q=Eiffel%20Tower&ll=48.8584,2.2945&z=14&output=embed";

    /// Long-form place URL on google.co.in
    pub const INDIA_GATE_LONG: &str = "https://www.google.co.in/maps/place/India+Gate/@28.6129,77.2295,17z";

    /// Long-form place URL in the southern hemisphere, with trailing data
    pub const SYDNEY_LONG: &str =
        "https://www.google.com/maps/place/Sydney+Opera+House/@-33.8567844,151.2152967,17z/data=!3m1!4b1";

    /// Coordinate-only query URL, which is not a place URL
    pub const QUERY_ONLY: &str = "https://www.google.com/maps?q=48.8584,2.2945";

    /// Place URL whose name carries a truncated percent-escape
    pub const MALFORMED_LONG: &str = "https://www.google.com/maps/place/%E0%A4%A/@48.8584,2.2945,17z";
}
