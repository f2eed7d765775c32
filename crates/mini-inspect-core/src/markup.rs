#![forbid(unsafe_code)]

//! Label text derived from an element's outer markup.

/// Cut `outer` right after the first `>`.
///
/// Only the opening tag (with its attributes) survives; children and the
/// closing tag are dropped. No parsing is attempted, so a `>` inside an
/// attribute value ends the tag early. Markup without any `>` yields `""`.
#[must_use]
pub fn opening_tag(outer: &str) -> &str {
    match outer.find('>') {
        Some(end) => &outer[..=end],
        None => "",
    }
}
