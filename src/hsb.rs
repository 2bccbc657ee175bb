/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! HSB constructor family. Components are integers, hue in degrees (0-359)
//! with saturation and brightness as percentages (0-100), and carry no
//! bounds check at match time; out-of-range values are clamped during
//! conversion. `UIColor(hue360: 210, saturation: 50, brightness: 100)`.

use crate::builder::RewritePlan;
use crate::color::Rgba;
use crate::error::EngineError;
use crate::format;
use crate::matcher::{self, ColorFamily, ColorMatch};
use crate::patterns::{
    self, OBJC_UNIT_FLOAT, PatternSet, SWIFT_COMPONENT_INT, SWIFT_INIT, SWIFT_UNIT_FLOAT,
};
use regex::Captures;
use std::sync::OnceLock;

static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

pub(crate) fn pattern_set() -> &'static PatternSet {
    PATTERNS.get_or_init(|| {
        let swift_args = format!(
            r"hue360:\s*{SWIFT_COMPONENT_INT}\s*,\s*saturation:\s*{SWIFT_COMPONENT_INT}\s*,\s*brightness:\s*{SWIFT_COMPONENT_INT}"
        );
        let sources = vec![
            format!(
                r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*{swift_args}\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}\s*\)"
            ),
            format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*{swift_args}\s*\)"),
            // One message-send pattern; the alpha clause is an optional
            // group, so an absent alpha shows up as a non-participating
            // group rather than a shorter group list.
            format!(
                r"\[\s*(?:NS|UI)Color\s+colorWithHue360:\s*{SWIFT_COMPONENT_INT}\s*saturation:\s*{SWIFT_COMPONENT_INT}\s*brightness:\s*{SWIFT_COMPONENT_INT}(?:\s*alpha:\s*{OBJC_UNIT_FLOAT})?\s*\]"
            ),
        ];
        PatternSet::compile("hsb", &sources)
    })
}

pub(crate) fn extract(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    let groups = matcher::captured_groups(caps, line);
    let hue = patterns::parse_int_component(&matcher::required_group(&groups, 1)?.text)?;
    let saturation = patterns::parse_int_component(&matcher::required_group(&groups, 2)?.text)? / 100.0;
    let brightness = patterns::parse_int_component(&matcher::required_group(&groups, 3)?.text)? / 100.0;
    let alpha = matcher::alpha_or_opaque(&groups, 4)?;

    let matched = matcher::required_group(&groups, 0)?;
    let dialect = matcher::dialect_of(&matched.text);
    let kind = matcher::kind_of(&matched.text);

    Ok(ColorMatch {
        family: ColorFamily::Hsb,
        dialect,
        kind,
        color: Rgba::from_hsb(hue, saturation, brightness, alpha),
        groups,
    })
}

pub(crate) fn plan(color: &Rgba) -> RewritePlan {
    let (hue, saturation, brightness) = color.to_hsb();
    RewritePlan {
        channel_texts: vec![
            format::hue_component(hue),
            format::percent_component(saturation),
            format::percent_component(brightness),
        ],
        alpha_group: 4,
        alpha_text: Some(format::unit_float(color.alpha)),
    }
}
