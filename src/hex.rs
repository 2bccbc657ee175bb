/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Packed hex constructor families: integer literals
//! (`UIColor(rgb: 0xFF00AA)`, `[UIColor colorWithRGB:0xFF00AA alpha:0.5f]`)
//! and string literals (`UIColor(hexString: "#FF00AA")`). A 24-bit capture
//! keeps alpha as a separate literal; a 32-bit capture packs it into the
//! low byte. The hex digits and the alpha literal are rewritten
//! independently; their spans do not move in lockstep.

use crate::builder::RewritePlan;
use crate::color::Rgba;
use crate::error::EngineError;
use crate::format;
use crate::matcher::{self, ColorFamily, ColorMatch};
use crate::patterns::{
    self, HEX_INT_DIGITS, HEX_STRING_DIGITS, OBJC_UNIT_FLOAT, PatternSet, SWIFT_INIT,
    SWIFT_UNIT_FLOAT,
};
use regex::Captures;
use std::sync::OnceLock;

static INT_PATTERNS: OnceLock<PatternSet> = OnceLock::new();
static STRING_PATTERNS: OnceLock<PatternSet> = OnceLock::new();

pub(crate) fn int_pattern_set() -> &'static PatternSet {
    INT_PATTERNS.get_or_init(|| {
        let sources = vec![
            format!(
                r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*(?:rgb|rgba|hex):\s*0[xX]{HEX_INT_DIGITS}\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}\s*\)"
            ),
            format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*(?:rgb|rgba|hex):\s*0[xX]{HEX_INT_DIGITS}\s*\)"),
            format!(
                r"\[\s*(?:NS|UI)Color\s+colorWith(?:RGB|Hex):\s*0[xX]{HEX_INT_DIGITS}\s*alpha:\s*{OBJC_UNIT_FLOAT}\s*\]"
            ),
            format!(r"\[\s*(?:NS|UI)Color\s+colorWith(?:RGB|Hex):\s*0[xX]{HEX_INT_DIGITS}\s*\]"),
        ];
        PatternSet::compile("hex-int", &sources)
    })
}

pub(crate) fn string_pattern_set() -> &'static PatternSet {
    STRING_PATTERNS.get_or_init(|| {
        let sources = vec![
            format!(
                r##"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*hexString:\s*"#?{HEX_STRING_DIGITS}"\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}\s*\)"##
            ),
            format!(r##"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*hexString:\s*"#?{HEX_STRING_DIGITS}"\s*\)"##),
            format!(
                r##"\[\s*(?:NS|UI)Color\s+colorWithHexString:\s*@"#?{HEX_STRING_DIGITS}"\s*alpha:\s*{OBJC_UNIT_FLOAT}\s*\]"##
            ),
            format!(r##"\[\s*(?:NS|UI)Color\s+colorWithHexString:\s*@"#?{HEX_STRING_DIGITS}"\s*\]"##),
        ];
        PatternSet::compile("hex-string", &sources)
    })
}

/// Resolve a hex digit run of any supported width into a color. 3-digit
/// shorthand doubles each nibble; 8 digits carry alpha in the low byte.
fn color_from_digits(text: &str) -> Result<Rgba, EngineError> {
    let value = patterns::parse_hex_digits(text)?;
    Ok(match text.len() {
        3 => Rgba::from_bytes(
            (((value >> 8) & 0xF) * 17) as u8,
            (((value >> 4) & 0xF) * 17) as u8,
            ((value & 0xF) * 17) as u8,
        ),
        8 => Rgba::from_packed_rgba(value),
        _ => Rgba::from_packed_rgb(value),
    })
}

fn extract_with(
    caps: &Captures<'_>,
    line: &str,
    family: ColorFamily,
) -> Result<ColorMatch, EngineError> {
    let groups = matcher::captured_groups(caps, line);
    let mut color = color_from_digits(&matcher::required_group(&groups, 1)?.text)?;
    // A separate alpha literal overrides whatever the digits said.
    if let Some(group) = groups.get(2).and_then(Option::as_ref) {
        color.alpha = patterns::parse_unit_float(&group.text)?;
    }

    let matched = matcher::required_group(&groups, 0)?;
    let dialect = matcher::dialect_of(&matched.text);
    let kind = matcher::kind_of(&matched.text);

    Ok(ColorMatch { family, dialect, kind, color, groups })
}

pub(crate) fn extract_int(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    extract_with(caps, line, ColorFamily::HexInt)
}

pub(crate) fn extract_string(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    extract_with(caps, line, ColorFamily::HexString)
}

pub(crate) fn plan_int(result: &ColorMatch, color: &Rgba) -> Result<RewritePlan, EngineError> {
    let digits = result.group(1)?;
    let has_alpha_group = result.groups.get(2).is_some_and(Option::is_some);
    if digits.text.len() == 8 && !has_alpha_group {
        // Alpha lives inside the literal; nothing to insert.
        return Ok(RewritePlan {
            channel_texts: vec![format::hex32(color)],
            alpha_group: 2,
            alpha_text: None,
        });
    }
    Ok(RewritePlan {
        channel_texts: vec![format::hex24(color)],
        alpha_group: 2,
        alpha_text: Some(format::unit_float(color.alpha)),
    })
}

pub(crate) fn plan_string(result: &ColorMatch, color: &Rgba) -> Result<RewritePlan, EngineError> {
    let digits = result.group(1)?;
    let has_alpha_group = result.groups.get(2).is_some_and(Option::is_some);
    if has_alpha_group {
        return Ok(RewritePlan {
            channel_texts: vec![format::hex24(color)],
            alpha_group: 2,
            alpha_text: Some(format::unit_float(color.alpha)),
        });
    }
    // No separate alpha argument to overwrite, and the quote after the
    // digits rules out splicing one in. Translucency packs into an
    // 8-digit literal instead.
    let text = if digits.text.len() == 8 || !color.is_opaque() {
        format::hex32(color)
    } else {
        format::hex24(color)
    };
    Ok(RewritePlan { channel_texts: vec![text], alpha_group: 2, alpha_text: None })
}
