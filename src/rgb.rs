/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! RGB constructor families. The same `red:green:blue:` spellings exist in
//! two channel models: unit-range floats (the platform API) and 0-255
//! components (the convenience extensions). Both compile here; the search
//! order tries the float family first, so unit-range arguments resolve as
//! floats and anything larger falls through to the byte family.

use crate::builder::RewritePlan;
use crate::color::Rgba;
use crate::error::EngineError;
use crate::format;
use crate::matcher::{self, ColorFamily, ColorMatch};
use crate::patterns::{
    self, OBJC_COMPONENT_255, OBJC_UNIT_FLOAT, PatternSet, SWIFT_COMPONENT_255, SWIFT_INIT,
    SWIFT_UNIT_FLOAT,
};
use regex::Captures;
use std::sync::OnceLock;

static FLOAT_PATTERNS: OnceLock<PatternSet> = OnceLock::new();
static BYTE_PATTERNS: OnceLock<PatternSet> = OnceLock::new();

fn sources_for(swift_component: &str, objc_component: &str) -> Vec<String> {
    let swift_tail = |alpha: bool| {
        let mut tail = format!(
            r"ed:\s*{swift_component}\s*,\s*green:\s*{swift_component}\s*,\s*blue:\s*{swift_component}"
        );
        if alpha {
            tail.push_str(&format!(r"\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}"));
        }
        tail.push_str(r"\s*\)");
        tail
    };
    let objc_tail = format!(
        r"ed:\s*{objc_component}\s*green:\s*{objc_component}\s*blue:\s*{objc_component}\s*alpha:\s*{OBJC_UNIT_FLOAT}\s*\]"
    );

    vec![
        format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*r{}", swift_tail(true)),
        format!(
            r"NSColor{SWIFT_INIT}\s*\(\s*(?:calibrated|device|srgb|displayP3)R{}",
            swift_tail(true)
        ),
        format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*r{}", swift_tail(false)),
        format!(r"\[\s*(?:NS|UI)Color\s+colorWithR{objc_tail}"),
        format!(r"\[\s*NSColor\s+colorWith(?:Calibrated|Device|SRGB|DisplayP3)R{objc_tail}"),
    ]
}

pub(crate) fn float_pattern_set() -> &'static PatternSet {
    FLOAT_PATTERNS.get_or_init(|| {
        PatternSet::compile("rgb-float", &sources_for(SWIFT_UNIT_FLOAT, OBJC_UNIT_FLOAT))
    })
}

pub(crate) fn byte_pattern_set() -> &'static PatternSet {
    BYTE_PATTERNS.get_or_init(|| {
        PatternSet::compile("rgb-byte", &sources_for(SWIFT_COMPONENT_255, OBJC_COMPONENT_255))
    })
}

fn extract_with(
    caps: &Captures<'_>,
    line: &str,
    family: ColorFamily,
    parse: fn(&str) -> Result<f64, EngineError>,
    scale: f64,
) -> Result<ColorMatch, EngineError> {
    let groups = matcher::captured_groups(caps, line);
    let red = parse(&matcher::required_group(&groups, 1)?.text)? / scale;
    let green = parse(&matcher::required_group(&groups, 2)?.text)? / scale;
    let blue = parse(&matcher::required_group(&groups, 3)?.text)? / scale;
    let alpha = matcher::alpha_or_opaque(&groups, 4)?;

    let matched = matcher::required_group(&groups, 0)?;
    let dialect = matcher::dialect_of(&matched.text);
    let kind = matcher::kind_of(&matched.text);

    Ok(ColorMatch { family, dialect, kind, color: Rgba::new(red, green, blue, alpha), groups })
}

pub(crate) fn extract_float(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    extract_with(caps, line, ColorFamily::RgbFloat, patterns::parse_unit_float, 1.0)
}

pub(crate) fn extract_byte(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    extract_with(caps, line, ColorFamily::RgbByte, patterns::parse_component_255, 255.0)
}

pub(crate) fn plan_float(color: &Rgba) -> RewritePlan {
    RewritePlan {
        channel_texts: vec![
            format::unit_float(color.red),
            format::unit_float(color.green),
            format::unit_float(color.blue),
        ],
        alpha_group: 4,
        alpha_text: Some(format::unit_float(color.alpha)),
    }
}

pub(crate) fn plan_byte(color: &Rgba) -> RewritePlan {
    RewritePlan {
        channel_texts: vec![
            format::byte_component(color.red),
            format::byte_component(color.green),
            format::byte_component(color.blue),
        ],
        alpha_group: 4,
        alpha_text: Some(format::unit_float(color.alpha)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_replacement;
    use crate::matcher::{SourceDialect, find_color_at};

    #[test]
    fn test_unit_components_resolve_as_the_float_family() {
        let line = "UIColor(red: 1, green: 0, blue: 0, alpha: 1)";
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(result.family, ColorFamily::RgbFloat);
        assert_eq!(result.color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_large_components_fall_through_to_the_byte_family() {
        let line = "UIColor(red: 255, green: 128, blue: 0, alpha: 1)";
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(result.family, ColorFamily::RgbByte);
        assert_eq!(result.color.red_byte(), 255);
        assert_eq!(result.color.green_byte(), 128);
    }

    #[test]
    fn test_float_roundtrip_is_exact_for_canonical_text() {
        let line = "UIColor(red: 0.25, green: 0.5, blue: 0.75, alpha: 0.5)";
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(build_replacement(&result, &result.color).unwrap(), line);
    }

    #[test]
    fn test_calibrated_spelling_survives_rewrite() {
        let line = "NSColor(calibratedRed: 0.25, green: 0.5, blue: 0.75, alpha: 1.0)";
        let result = find_color_at(line, 10).unwrap();
        let rebuilt = build_replacement(&result, &Rgba::opaque(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(rebuilt, "NSColor(calibratedRed: 0.0, green: 1.0, blue: 0.0, alpha: 1.0)");
    }

    #[test]
    fn test_swift_float_alpha_insertion() {
        let line = "UIColor(red: 0.25, green: 0.5, blue: 0.75)";
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(result.groups.len(), 4);

        let rebuilt = build_replacement(&result, &result.color.with_alpha(0.3)).unwrap();
        assert_eq!(rebuilt, "UIColor(red: 0.25, green: 0.5, blue: 0.75, alpha: 0.3)");
    }

    #[test]
    fn test_objc_float_with_bare_fraction_components() {
        let line = "[UIColor colorWithRed:.5f green:0 blue:1 alpha:.25f]";
        let result = find_color_at(line, 20).unwrap();
        assert_eq!(result.dialect, SourceDialect::ObjC);
        assert_eq!(result.family, ColorFamily::RgbFloat);
        assert!((result.color.alpha - 0.25).abs() < 1e-9);

        let rebuilt = build_replacement(&result, &result.color).unwrap();
        assert_eq!(rebuilt, "[UIColor colorWithRed:0.5f green:0.0 blue:1.0 alpha:0.25f]");
    }

    #[test]
    fn test_byte_decimal_components_reformat_to_integers() {
        let line = "UIColor(red: 127.55, green: 0.5, blue: 12, alpha: 1)";
        // green 0.5 is a valid byte-family decimal too; the whole call only
        // fits the byte family because of the 127.55 and 12 components.
        let result = find_color_at(line, 10).unwrap();
        assert_eq!(result.family, ColorFamily::RgbByte);

        let rebuilt = build_replacement(&result, &result.color).unwrap();
        assert_eq!(rebuilt, "UIColor(red: 128, green: 1, blue: 12, alpha: 1.0)");
    }
}
