//! Coordinate extraction from maps URLs and pages
//!
//! Matchers are tried in a fixed order and the first capture pair that
//! parses into finite numbers wins. Only the first match of each pattern is
//! considered.
//!
//! # Examples
//!
//! ```
//! use cartevv_core::localization::patterns::{match_url, normalize_link};
//!
//! let url = normalize_link("www.google.com/maps/@48.858,2.294,15z");
//! assert_eq!(url, "https://www.google.com/maps/@48.858,2.294,15z");
//!
//! let coords = match_url(&url).unwrap();
//! assert_eq!((coords.lat, coords.lon), (48.858, 2.294));
//! ```

use cartevv_domain::constants::DEFAULT_LINK_SCHEME;
use cartevv_domain::Coordinates;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    /// Matchers applied to the final URL, most specific first.
    static ref URL_PATTERNS: Vec<Regex> = compile(&[
        // @lat,lon
        r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
        // ?q=lat,lon
        r"[?&]q=(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
        // !3dLAT!4dLON
        r"!3d(-?[0-9]+\.[0-9]+)!4d(-?[0-9]+\.[0-9]+)",
        // generic pair
        r"(-?[0-9]+\.[0-9]+),\s*(-?[0-9]+\.[0-9]+)",
    ]);

    /// Looser matchers applied to the page body.
    static ref BODY_PATTERNS: Vec<Regex> = compile(&[
        r"center=\s*(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)",
        r#"(?i)"latitude"\s*:\s*"?(-?[0-9]+\.[0-9]+)"?[ ,\n]+"longitude"\s*:\s*"?(-?[0-9]+\.[0-9]+)"?"#,
    ]);
}

// Invalid literals are dropped; `all_patterns_compile` guards the counts.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

fn has_http_scheme(link: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        link.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Prefix `https://` unless the link already starts with an HTTP scheme.
pub fn normalize_link(link: &str) -> String {
    let link = link.trim();
    if has_http_scheme(link) {
        link.to_string()
    } else {
        format!("{DEFAULT_LINK_SCHEME}{link}")
    }
}

/// Coordinates carried directly by a link, read without following it.
///
/// Only the `@lat,lon` form is trusted here, and only when the link parses
/// as a URL. Anything else must be followed first so that the final URL
/// decides which pattern applies.
pub fn match_direct_link(link: &str) -> Option<Coordinates> {
    Url::parse(link).ok()?;
    first_match(URL_PATTERNS.get(..1)?, link)
}

/// Extract coordinates from a URL.
pub fn match_url(url: &str) -> Option<Coordinates> {
    first_match(&URL_PATTERNS, url)
}

/// Extract coordinates from a page body.
pub fn match_body(body: &str) -> Option<Coordinates> {
    first_match(&BODY_PATTERNS, body)
}

fn first_match(patterns: &[Regex], haystack: &str) -> Option<Coordinates> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.captures(haystack)?;
        Coordinates::parse(caps.get(1)?.as_str(), caps.get(2)?.as_str())
    })
}
