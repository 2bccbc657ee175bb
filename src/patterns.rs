/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Shared regex fragments and fail-soft pattern compilation. The numeric
//! grammars are defined once here and spliced into every family's pattern
//! sources, so a change to one grammar reaches every constructor spelling
//! that uses it.

use crate::error::EngineError;
use regex::Regex;

// ─── Numeric grammar fragments ─────────────────────────────────────────────

/// Unit-range float in Swift syntax.
/// Valid: 0; 1; 0.0; 1.0; 0.9; 0.25; 0.97453
pub(crate) const SWIFT_UNIT_FLOAT: &str = r"([01]|[01]\.[0-9]+)";

/// 0-255 component in Swift syntax, integer or decimal. No bounds check.
/// Valid: 0; 0.0; 255; 127.55
pub(crate) const SWIFT_COMPONENT_255: &str = r"([0-9]+|[0-9]+\.[0-9]+)";

/// Integer HSB component: hue degrees or a percentage. No bounds check.
pub(crate) const SWIFT_COMPONENT_INT: &str = r"([0-9]+)";

/// Optional explicit `.init` before the argument list. Non-capturing so it
/// never shifts group numbering.
pub(crate) const SWIFT_INIT: &str = r"(?:\.init)?";

/// Unit-range float in Objective-C syntax. The leading digit may be omitted
/// and a literal suffix may follow; the suffix stays outside the capture.
/// Valid: 0; 1; .5f; 0.97f
pub(crate) const OBJC_UNIT_FLOAT: &str = r"([01]|[01]?\.[0-9]+)f?";

/// 0-255 component in Objective-C syntax.
pub(crate) const OBJC_COMPONENT_255: &str = r"([0-9]+|[0-9]+\.[0-9]+)f?";

/// Digit run of a packed hex integer literal, 24-bit or 32-bit.
pub(crate) const HEX_INT_DIGITS: &str = r"([0-9a-fA-F]{6}|[0-9a-fA-F]{8})";

/// Digit run of a hex string literal; accepts the 3-digit shorthand.
pub(crate) const HEX_STRING_DIGITS: &str = r"([0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})";

// ─── Compilation ───────────────────────────────────────────────────────────

pub(crate) fn compile_pattern(source: &str) -> Result<Regex, EngineError> {
    Ok(Regex::new(source)?)
}

/// The compiled patterns of one constructor family, in registration order.
pub(crate) struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every source, dropping the ones that fail. A malformed
    /// pattern loses that one spelling; the rest of the family and every
    /// other family stay active.
    pub(crate) fn compile(family: &str, sources: &[String]) -> Self {
        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            match compile_pattern(source) {
                Ok(regex) => patterns.push(regex),
                Err(err) => log::warn!("skipping malformed {family} pattern {source:?}: {err}"),
            }
        }
        Self { patterns }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.patterns.iter()
    }
}

// ─── Parsing under the grammars ────────────────────────────────────────────

pub(crate) fn parse_unit_float(text: &str) -> Result<f64, EngineError> {
    text.strip_suffix('f')
        .unwrap_or(text)
        .parse()
        .map_err(|_| malformed(text, "unit float"))
}

pub(crate) fn parse_component_255(text: &str) -> Result<f64, EngineError> {
    text.strip_suffix('f')
        .unwrap_or(text)
        .parse()
        .map_err(|_| malformed(text, "numeric component"))
}

pub(crate) fn parse_int_component(text: &str) -> Result<f64, EngineError> {
    text.parse::<u32>()
        .map(f64::from)
        .map_err(|_| malformed(text, "integer component"))
}

pub(crate) fn parse_hex_digits(text: &str) -> Result<u32, EngineError> {
    u32::from_str_radix(text, 16).map_err(|_| malformed(text, "hexadecimal"))
}

fn malformed(text: &str, grammar: &'static str) -> EngineError {
    EngineError::MalformedNumber { text: text.to_string(), grammar }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_whole(fragment: &str, text: &str) -> bool {
        let regex = Regex::new(&format!("^{fragment}$")).unwrap();
        regex.is_match(text)
    }

    #[test]
    fn test_swift_unit_float_grammar() {
        for ok in ["0", "1", "0.0", "1.0", "0.97453"] {
            assert!(matches_whole(SWIFT_UNIT_FLOAT, ok), "{ok} should match");
        }
        for bad in ["2", "255", ".5", "0.", "01"] {
            assert!(!matches_whole(SWIFT_UNIT_FLOAT, bad), "{bad} should not match");
        }
    }

    #[test]
    fn test_objc_unit_float_allows_bare_fraction_and_suffix() {
        for ok in [".5f", ".5", "0.97f", "1", "0f"] {
            assert!(matches_whole(OBJC_UNIT_FLOAT, ok), "{ok} should match");
        }
        assert!(!matches_whole(OBJC_UNIT_FLOAT, "2.5f"));
    }

    #[test]
    fn test_component_255_grammar() {
        for ok in ["0", "255", "127.55", "0.0"] {
            assert!(matches_whole(SWIFT_COMPONENT_255, ok), "{ok} should match");
        }
        for bad in ["127.", ".5", "-3"] {
            assert!(!matches_whole(SWIFT_COMPONENT_255, bad), "{bad} should not match");
        }
    }

    #[test]
    fn test_hex_digit_runs() {
        assert!(matches_whole(HEX_INT_DIGITS, "FF00AA"));
        assert!(matches_whole(HEX_INT_DIGITS, "ff00aa80"));
        assert!(!matches_whole(HEX_INT_DIGITS, "FF00A"));
        assert!(matches_whole(HEX_STRING_DIGITS, "F0A"));
        assert!(!matches_whole(HEX_STRING_DIGITS, "F0AB"));
    }

    #[test]
    fn test_compile_drops_only_the_malformed_pattern() {
        let set = PatternSet::compile(
            "probe",
            &["(valid".to_string(), "[0-9]+".to_string()],
        );
        assert_eq!(set.iter().count(), 1);
        assert!(set.iter().next().unwrap().is_match("42"));
    }

    #[test]
    fn test_parse_rejects_out_of_grammar_text() {
        assert!(parse_unit_float("banana").is_err());
        assert!(parse_int_component("1.5").is_err());
        assert!(parse_hex_digits("GG").is_err());
        assert_eq!(parse_unit_float(".5f").unwrap(), 0.5);
        assert_eq!(parse_component_255("127.55").unwrap(), 127.55);
    }
}
