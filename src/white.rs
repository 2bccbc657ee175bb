/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! White constructor family: a single unit-range level.
//! `NSColor(calibratedWhite:alpha:)`, `UIColor(white:)`,
//! `[NSColor colorWithDeviceWhite:alpha:]`, and friends. The calibrated /
//! device / genericGamma22 spelling sits outside the capture groups, so a
//! rewrite leaves the author's choice alone.

use crate::builder::RewritePlan;
use crate::color::Rgba;
use crate::error::EngineError;
use crate::format;
use crate::matcher::{self, ColorFamily, ColorMatch};
use crate::patterns::{self, OBJC_UNIT_FLOAT, PatternSet, SWIFT_INIT, SWIFT_UNIT_FLOAT};
use regex::Captures;
use std::sync::OnceLock;

static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

pub(crate) fn pattern_set() -> &'static PatternSet {
    PATTERNS.get_or_init(|| {
        // Both Swift spellings end identically, so the tails are shared and
        // only the head differs ("w" vs "…W" keeps one tail for both).
        let swift_alpha_tail =
            format!(r"hite:\s*{SWIFT_UNIT_FLOAT}\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}\s*\)");
        let swift_plain_tail = format!(r"hite:\s*{SWIFT_UNIT_FLOAT}\s*\)");
        let objc_tail = format!(r"hite:\s*{OBJC_UNIT_FLOAT}\s*alpha:\s*{OBJC_UNIT_FLOAT}\s*\]");

        let sources = vec![
            format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*w{swift_alpha_tail}"),
            format!(r"NSColor{SWIFT_INIT}\s*\(\s*(?:calibrated|device|genericGamma22)W{swift_alpha_tail}"),
            format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*w{swift_plain_tail}"),
            format!(r"NSColor{SWIFT_INIT}\s*\(\s*(?:calibrated|device|genericGamma22)W{swift_plain_tail}"),
            // The message-send form always carries alpha.
            format!(r"\[\s*(?:NS|UI)Color\s+colorWithW{objc_tail}"),
            format!(r"\[\s*NSColor\s+colorWith(?:Calibrated|Device|GenericGamma22)W{objc_tail}"),
        ];
        PatternSet::compile("white", &sources)
    })
}

pub(crate) fn extract(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    let groups = matcher::captured_groups(caps, line);
    let level = patterns::parse_unit_float(&matcher::required_group(&groups, 1)?.text)?;
    let alpha = matcher::alpha_or_opaque(&groups, 2)?;

    let matched = matcher::required_group(&groups, 0)?;
    let dialect = matcher::dialect_of(&matched.text);
    let kind = matcher::kind_of(&matched.text);

    Ok(ColorMatch {
        family: ColorFamily::White,
        dialect,
        kind,
        color: Rgba::new(level, level, level, alpha),
        groups,
    })
}

pub(crate) fn plan(color: &Rgba) -> RewritePlan {
    RewritePlan {
        channel_texts: vec![format::unit_float(color.gray_level())],
        alpha_group: 2,
        alpha_text: Some(format::unit_float(color.alpha)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_replacement;
    use crate::matcher::{SourceDialect, find_color_at};

    #[test]
    fn test_swift_white_with_alpha_roundtrip() {
        let line = "view.color = NSColor(calibratedWhite: 0.5, alpha: 0.25)";
        let result = find_color_at(line, 20).unwrap();
        assert_eq!(result.family, ColorFamily::White);
        assert_eq!(result.matched_text(), "NSColor(calibratedWhite: 0.5, alpha: 0.25)");
        assert_eq!(result.color, Rgba::new(0.5, 0.5, 0.5, 0.25));

        let rebuilt = build_replacement(&result, &result.color).unwrap();
        assert_eq!(rebuilt, "NSColor(calibratedWhite: 0.5, alpha: 0.25)");
    }

    #[test]
    fn test_explicit_init_call_matches() {
        let line = "NSColor.init(deviceWhite: 1, alpha: 0.5)";
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(result.matched_text(), line);
    }

    #[test]
    fn test_alpha_clause_is_inserted_when_needed() {
        let line = "NSColor(calibratedWhite: 0.5)";
        let result = find_color_at(line, 10).unwrap();
        assert!(result.groups[1].is_some());
        assert_eq!(result.groups.len(), 2);

        let translucent = result.color.with_alpha(0.3);
        let rebuilt = build_replacement(&result, &translucent).unwrap();
        assert_eq!(rebuilt, "NSColor(calibratedWhite: 0.5, alpha: 0.3)");
    }

    #[test]
    fn test_opaque_color_leaves_alphaless_fragment_alone() {
        let line = "NSColor(calibratedWhite: 0.5)";
        let result = find_color_at(line, 10).unwrap();
        let rebuilt = build_replacement(&result, &result.color).unwrap();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_objc_white_preserves_suffix_outside_group() {
        let line = "[NSColor colorWithCalibratedWhite:0.5f alpha:1.0f]";
        let result = find_color_at(line, 20).unwrap();
        assert_eq!(result.dialect, SourceDialect::ObjC);
        assert_eq!(result.color, Rgba::new(0.5, 0.5, 0.5, 1.0));

        let rebuilt = build_replacement(&result, &Rgba::new(0.75, 0.75, 0.75, 0.5)).unwrap();
        assert_eq!(rebuilt, "[NSColor colorWithCalibratedWhite:0.75f alpha:0.5f]");
    }

    #[test]
    fn test_rewrite_reformats_bare_integers_deterministically() {
        let line = "UIColor(white: 1, alpha: 1)";
        let result = find_color_at(line, 10).unwrap();
        let rebuilt = build_replacement(&result, &result.color).unwrap();
        assert_eq!(rebuilt, "UIColor(white: 1.0, alpha: 1.0)");

        let again = find_color_at(&rebuilt, 10).unwrap();
        assert_eq!(build_replacement(&again, &again.color).unwrap(), rebuilt);
    }
}
