//! Computed-style access and CSS length parsing.
//!
//! Hosts hand the calculator string-valued CSS properties, exactly as a
//! browser's computed style reports them (`"800px"`, `"12.5px"`, `""`).
//! Values are read as whole pixels: leading whitespace is skipped, an optional
//! sign is honoured, digits are consumed up to the first non-digit, and
//! anything after that (units, fractions) is ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    PROP_PADDING_BOTTOM, PROP_PADDING_LEFT, PROP_PADDING_RIGHT, PROP_PADDING_TOP, PX_SUFFIX,
};

/// Read-only view of an element's computed style
pub trait ComputedStyle {
    /// Value of a CSS property; an empty string when the property is unset
    fn property_value(&self, name: &str) -> String;

    /// Property parsed as whole pixels, `None` when it holds no leading integer
    fn px(&self, name: &str) -> Option<i64> {
        parse_css_int(&self.property_value(name))
    }
}

/// Parse the leading base-10 integer of a CSS value.
///
/// Returns `None` when no digits follow the optional sign. Values beyond the
/// range of `i64` saturate.
pub fn parse_css_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut magnitude: i64 = 0;
    for digit in digits {
        seen = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Format a pixel count as a CSS length (`800` -> `"800px"`)
pub fn css_px(value: i64) -> String {
    format!("{}{}", value, PX_SUFFIX)
}

/// In-memory computed style, used by headless hosts and tests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: HashMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property setter
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.properties.insert(name.to_string(), value.into());
    }
}

impl ComputedStyle for StyleMap {
    fn property_value(&self, name: &str) -> String {
        self.properties.get(name).cloned().unwrap_or_default()
    }
}

/// Padding of an element in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Padding {
    /// Read all four paddings; a side that doesn't parse counts as zero
    pub fn from_style(style: &impl ComputedStyle) -> Self {
        Self {
            top: style.px(PROP_PADDING_TOP).unwrap_or(0),
            bottom: style.px(PROP_PADDING_BOTTOM).unwrap_or(0),
            left: style.px(PROP_PADDING_LEFT).unwrap_or(0),
            right: style.px(PROP_PADDING_RIGHT).unwrap_or(0),
        }
    }

    #[inline]
    pub fn vertical(&self) -> i64 {
        self.top.saturating_add(self.bottom)
    }

    #[inline]
    pub fn horizontal(&self) -> i64 {
        self.left.saturating_add(self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_pixels() {
        assert_eq!(parse_css_int("800px"), Some(800));
        assert_eq!(parse_css_int("0px"), Some(0));
        assert_eq!(parse_css_int("42"), Some(42));
    }

    #[test]
    fn test_parse_truncates_fractions() {
        assert_eq!(parse_css_int("800.75px"), Some(800));
        assert_eq!(parse_css_int("-3.9px"), Some(-3));
    }

    #[test]
    fn test_parse_sign_and_whitespace() {
        assert_eq!(parse_css_int("  -12px"), Some(-12));
        assert_eq!(parse_css_int("+7px"), Some(7));
        assert_eq!(parse_css_int("\t15px"), Some(15));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_css_int(""), None);
        assert_eq!(parse_css_int("auto"), None);
        assert_eq!(parse_css_int("px"), None);
        assert_eq!(parse_css_int("-"), None);
        assert_eq!(parse_css_int(".5px"), None);
    }

    #[test]
    fn test_parse_stops_at_exponent() {
        // Only the leading digits count, same as a browser's parseInt
        assert_eq!(parse_css_int("1e3px"), Some(1));
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_css_int("99999999999999999999999px"), Some(i64::MAX));
    }

    #[test]
    fn test_css_px() {
        assert_eq!(css_px(800), "800px");
        assert_eq!(css_px(-4), "-4px");
    }

    #[test]
    fn test_padding_from_style() {
        let style = StyleMap::new()
            .with(PROP_PADDING_TOP, "5px")
            .with(PROP_PADDING_BOTTOM, "10px")
            .with(PROP_PADDING_LEFT, "garbage")
            .with(PROP_PADDING_RIGHT, "8.5px");

        let padding = Padding::from_style(&style);
        assert_eq!(padding.top, 5);
        assert_eq!(padding.bottom, 10);
        assert_eq!(padding.left, 0);
        assert_eq!(padding.right, 8);
        assert_eq!(padding.vertical(), 15);
        assert_eq!(padding.horizontal(), 8);
    }

    #[test]
    fn test_missing_properties_read_as_empty() {
        let style = StyleMap::new();
        assert_eq!(style.property_value("width"), "");
        assert_eq!(style.px("width"), None);
        assert_eq!(Padding::from_style(&style), Padding::default());
    }
}
