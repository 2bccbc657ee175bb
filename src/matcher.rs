/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Color-constructor recognition over one line of source text.
//!
//! Each constructor family registers a pattern set; the search entry points
//! run them in a fixed priority order, keep the first match that contains
//! the caret, and hand back a [`ColorMatch`] carrying the resolved color
//! plus every captured span needed to rewrite the fragment later.

use crate::color::Rgba;
use crate::error::EngineError;
use crate::patterns::{self, PatternSet};
use crate::span::{self, Span};
use crate::{gray, hex, hsb, rgb, white};
use regex::Captures;
use serde::{Deserialize, Serialize};

// ─── Data model ────────────────────────────────────────────────────────────

/// The semantic category of a recognized constructor call. One family owns
/// one channel model, one pattern set, and one canonical rewrite policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorFamily {
    White,
    Gray,
    RgbFloat,
    RgbByte,
    Hsb,
    HexInt,
    HexString,
}

/// The source-syntax style the fragment was written in. A bracketed
/// message-send is Objective-C; everything else is Swift. Never mixed
/// within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceDialect {
    Swift,
    ObjC,
}

/// Whether the fragment constructs an `NSColor` or a `UIColor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorKind {
    AppKit,
    UiKit,
}

/// One captured piece of the pattern: its span in the line and the verbatim
/// text. Optional groups that did not participate are `None`, never an
/// empty string; absence means "insert", presence means "overwrite".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedGroup {
    pub span: Span,
    pub text: String,
}

/// An immutable record of one recognized constructor. Group 0 is the whole
/// match; groups 1+ mirror the pattern's group numbering. Created fresh per
/// search and never retained by the engine, it is only valid against the
/// exact line text it was extracted from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorMatch {
    pub family: ColorFamily,
    pub dialect: SourceDialect,
    pub kind: ColorKind,
    pub groups: Vec<Option<CapturedGroup>>,
    pub color: Rgba,
}

impl ColorMatch {
    /// The span of the whole matched fragment in the original line.
    pub fn span(&self) -> Span {
        self.groups
            .first()
            .and_then(Option::as_ref)
            .map(|group| group.span)
            .unwrap_or_default()
    }

    pub fn matched_text(&self) -> &str {
        self.groups
            .first()
            .and_then(Option::as_ref)
            .map(|group| group.text.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn group(&self, index: usize) -> Result<&CapturedGroup, EngineError> {
        required_group(&self.groups, index)
    }
}

// ─── Family dispatch ───────────────────────────────────────────────────────

/// Fixed search priority. Hex families run first so a `0x`/`"#…"` literal
/// never falls through to a more generic spelling, and the unit-float RGB
/// family runs before the 0-255 one so `red: 1, green: 0, blue: 0` resolves
/// as the float API.
pub(crate) const SEARCH_ORDER: [ColorFamily; 7] = [
    ColorFamily::HexInt,
    ColorFamily::HexString,
    ColorFamily::White,
    ColorFamily::Gray,
    ColorFamily::Hsb,
    ColorFamily::RgbFloat,
    ColorFamily::RgbByte,
];

impl ColorFamily {
    pub(crate) fn pattern_set(self) -> &'static PatternSet {
        match self {
            Self::White => white::pattern_set(),
            Self::Gray => gray::pattern_set(),
            Self::RgbFloat => rgb::float_pattern_set(),
            Self::RgbByte => rgb::byte_pattern_set(),
            Self::Hsb => hsb::pattern_set(),
            Self::HexInt => hex::int_pattern_set(),
            Self::HexString => hex::string_pattern_set(),
        }
    }

    fn extract(self, caps: &Captures<'_>, line: &str) -> Result<ColorMatch, EngineError> {
        match self {
            Self::White => white::extract(caps, line),
            Self::Gray => gray::extract(caps, line),
            Self::RgbFloat => rgb::extract_float(caps, line),
            Self::RgbByte => rgb::extract_byte(caps, line),
            Self::Hsb => hsb::extract(caps, line),
            Self::HexInt => hex::extract_int(caps, line),
            Self::HexString => hex::extract_string(caps, line),
        }
    }
}

// ─── Search entry points ───────────────────────────────────────────────────

/// Find the color constructor under a caret. Offsets are Unicode-scalar
/// offsets into `line`. `None` means no recognized constructor contains the
/// caret, which is an expected outcome rather than a failure.
pub fn find_color_at(line: &str, cursor: u32) -> Option<ColorMatch> {
    find_color_in_selection(line, Span::new(cursor, cursor))
}

/// Selection-range variant of [`find_color_at`]. A zero-length selection
/// behaves exactly like a caret offset.
pub fn find_color_in_selection(line: &str, selection: Span) -> Option<ColorMatch> {
    for family in SEARCH_ORDER {
        for regex in family.pattern_set().iter() {
            for caps in regex.captures_iter(line) {
                let Some(whole) = caps.get(0) else { continue };
                let whole_span = Span::new(
                    span::char_offset(line, whole.start()),
                    span::char_offset(line, whole.end()),
                );
                if !whole_span.contains_span(&selection) {
                    continue;
                }
                return match family.extract(&caps, line) {
                    Ok(result) => Some(result),
                    Err(err) => {
                        log::warn!("failed to extract {family:?} match: {err}");
                        None
                    }
                };
            }
        }
    }
    None
}

/// Scan the whole line, caret-free. Families claim regions in priority
/// order; results come back sorted by start offset. For host-side
/// decorations rather than interactive editing.
pub fn find_colors(line: &str) -> Vec<ColorMatch> {
    let mut results: Vec<ColorMatch> = Vec::new();
    for family in SEARCH_ORDER {
        for regex in family.pattern_set().iter() {
            for caps in regex.captures_iter(line) {
                let Some(whole) = caps.get(0) else { continue };
                let whole_span = Span::new(
                    span::char_offset(line, whole.start()),
                    span::char_offset(line, whole.end()),
                );
                if results.iter().any(|result| result.span().overlaps(&whole_span)) {
                    continue;
                }
                match family.extract(&caps, line) {
                    Ok(result) => results.push(result),
                    Err(err) => log::warn!("skipping {family:?} match: {err}"),
                }
            }
        }
    }
    results.sort_by_key(|result| result.span().start);
    results
}

// ─── Extraction helpers shared by the families ─────────────────────────────

/// Materialize every declared group of a match, keeping non-participating
/// optional groups as `None` so their absence survives into the builder.
pub(crate) fn captured_groups(caps: &Captures<'_>, line: &str) -> Vec<Option<CapturedGroup>> {
    (0..caps.len())
        .map(|index| {
            caps.get(index).map(|m| CapturedGroup {
                span: Span::new(
                    span::char_offset(line, m.start()),
                    span::char_offset(line, m.end()),
                ),
                text: m.as_str().to_string(),
            })
        })
        .collect()
}

pub(crate) fn required_group(
    groups: &[Option<CapturedGroup>],
    index: usize,
) -> Result<&CapturedGroup, EngineError> {
    groups
        .get(index)
        .and_then(Option::as_ref)
        .ok_or(EngineError::RangeResolution { start: 0, end: 0 })
}

/// Parse an alpha group if it participated; a structurally absent alpha
/// defaults to fully opaque.
pub(crate) fn alpha_or_opaque(
    groups: &[Option<CapturedGroup>],
    index: usize,
) -> Result<f64, EngineError> {
    match groups.get(index).and_then(Option::as_ref) {
        Some(group) => patterns::parse_unit_float(&group.text),
        None => Ok(1.0),
    }
}

pub(crate) fn dialect_of(matched: &str) -> SourceDialect {
    if matched.contains('[') {
        SourceDialect::ObjC
    } else {
        SourceDialect::Swift
    }
}

pub(crate) fn kind_of(matched: &str) -> ColorKind {
    if matched.contains("UIColor") {
        ColorKind::UiKit
    } else {
        ColorKind::AppKit
    }
}
