#![forbid(unsafe_code)]

//! Inline style properties written onto the overlay and label nodes.

/// The subset of inline style properties the inspector mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProp {
    Width,
    Height,
    Top,
    Left,
    Display,
}

impl StyleProp {
    /// CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Top => "top",
            Self::Left => "left",
            Self::Display => "display",
        }
    }
}

/// CSS `display` values used to show and hide the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Display {
    None,
    Block,
    InlineBlock,
}

impl Display {
    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
        }
    }

    /// Parse a CSS `display` value. Anything else yields `None`.
    #[must_use]
    pub fn from_css_value(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(Self::None),
            "block" => Some(Self::Block),
            "inline-block" => Some(Self::InlineBlock),
            _ => None,
        }
    }
}

/// Format a pixel length the way a JS number concatenated with `"px"` reads.
///
/// `100.0` becomes `100px`, `10.5` becomes `10.5px`. Negative zero prints as
/// `0px` and infinities as `Infinitypx`/`-Infinitypx`, matching JS.
#[must_use]
pub fn px(value: f64) -> String {
    if value == 0.0 {
        return "0px".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinitypx".to_string()
        } else {
            "-Infinitypx".to_string()
        };
    }
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(-30.0), "-30px");
    }

    #[test]
    fn fractional_values_keep_digits() {
        assert_eq!(px(10.5), "10.5px");
        assert_eq!(px(0.1 + 0.2), "0.30000000000000004px");
    }

    #[test]
    fn negative_zero_and_infinity_match_js() {
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(f64::INFINITY), "Infinitypx");
        assert_eq!(px(f64::NEG_INFINITY), "-Infinitypx");
        assert_eq!(px(f64::NAN), "NaNpx");
    }

    #[test]
    fn display_values_roundtrip_through_css() {
        for d in [Display::None, Display::Block, Display::InlineBlock] {
            assert_eq!(Display::from_css_value(d.css_value()), Some(d));
        }
        assert_eq!(Display::from_css_value("flex"), None);
    }

    #[test]
    fn property_names() {
        assert_eq!(StyleProp::Width.css_name(), "width");
        assert_eq!(StyleProp::Display.css_name(), "display");
    }
}
