/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Gray constructor family: one 0-255 level, the convenience-extension
//! cousin of the white family. `UIColor(gray: 128)`,
//! `[NSColor colorWithGray:128 alpha:0.5f]`.

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

static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

pub(crate) fn pattern_set() -> &'static PatternSet {
    PATTERNS.get_or_init(|| {
        let sources = vec![
            format!(
                r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*gray:\s*{SWIFT_COMPONENT_255}\s*,\s*alpha:\s*{SWIFT_UNIT_FLOAT}\s*\)"
            ),
            format!(r"(?:NS|UI)Color{SWIFT_INIT}\s*\(\s*gray:\s*{SWIFT_COMPONENT_255}\s*\)"),
            format!(
                r"\[\s*(?:NS|UI)Color\s+colorWithGray:\s*{OBJC_COMPONENT_255}\s*alpha:\s*{OBJC_UNIT_FLOAT}\s*\]"
            ),
            format!(r"\[\s*(?:NS|UI)Color\s+colorWithGray:\s*{OBJC_COMPONENT_255}\s*\]"),
        ];
        PatternSet::compile("gray", &sources)
    })
}

pub(crate) fn extract(caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
    let groups = matcher::captured_groups(caps, line);
    let level = patterns::parse_component_255(&matcher::required_group(&groups, 1)?.text)? / 255.0;
    let alpha = matcher::alpha_or_opaque(&groups, 2)?;

    let matched = matcher::required_group(&groups, 0)?;
    let dialect = matcher::dialect_of(&matched.text);
    let kind = matcher::kind_of(&matched.text);

    Ok(ColorMatch {
        family: ColorFamily::Gray,
        dialect,
        kind,
        color: Rgba::new(level, level, level, alpha),
        groups,
    })
}

pub(crate) fn plan(color: &Rgba) -> RewritePlan {
    RewritePlan {
        channel_texts: vec![format::byte_component(color.gray_level())],
        alpha_group: 2,
        alpha_text: Some(format::unit_float(color.alpha)),
    }
}
