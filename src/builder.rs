/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Fragment rewriting. Regenerating the whole call from a template would
//! lose the author's formatting, so the builder substitutes freshly
//! formatted text into the captured spans only, applied in descending
//! start-offset order because an edit never moves the offsets of anything
//! before it. The result replaces the full matched span; the host splices
//! it and discards the match.

use crate::color::Rgba;
use crate::error::EngineError;
use crate::matcher::{ColorFamily, ColorMatch, SourceDialect};
use crate::span::Span;
use crate::{gray, hex, hsb, patterns, rgb, white};

/// One family's answer to "what should the captured groups say now":
/// canonical text for each channel group (1..=N, in group order) and the
/// formatted alpha, if this variant writes alpha as a separate literal.
pub(crate) struct RewritePlan {
    pub(crate) channel_texts: Vec<String>,
    pub(crate) alpha_group: usize,
    pub(crate) alpha_text: Option<String>,
}

/// Regenerate the matched fragment for a new color. Returns the full
/// replacement text for `result.span()`; any internal inconsistency fails
/// the whole build rather than producing a partially edited fragment.
pub fn build_replacement(result: &ColorMatch, color: &Rgba) -> Result<String, EngineError> {
    let plan = match result.family {
        ColorFamily::White => white::plan(color),
        ColorFamily::Gray => gray::plan(color),
        ColorFamily::RgbFloat => rgb::plan_float(color),
        ColorFamily::RgbByte => rgb::plan_byte(color),
        ColorFamily::Hsb => hsb::plan(color),
        ColorFamily::HexInt => hex::plan_int(result, color)?,
        ColorFamily::HexString => hex::plan_string(result, color)?,
    };
    assemble(result, color, plan)
}

fn assemble(result: &ColorMatch, color: &Rgba, plan: RewritePlan) -> Result<String, EngineError> {
    let whole = result.group(0)?;
    let base = whole.span.start;
    let mut channel_texts = plan.channel_texts;
    let mut edits: Vec<(Span, String)> = Vec::new();

    if let Some(alpha_text) = plan.alpha_text {
        match result.groups.get(plan.alpha_group).and_then(Option::as_ref) {
            Some(group) => {
                // The group is about to be overwritten, but garbage here
                // means the match no longer describes the text.
                patterns::parse_unit_float(&group.text)?;
                edits.push((group.span.relative_to(base)?, alpha_text));
            }
            None if !color.is_opaque() => {
                // No alpha argument in the source and the new color needs
                // one: splice the clause into the last channel group's
                // replacement, which is the text right before the spot
                // where the argument belongs.
                let last = channel_texts
                    .last_mut()
                    .ok_or(EngineError::RangeResolution { start: base, end: whole.span.end })?;
                let spliced = match result.dialect {
                    SourceDialect::Swift => format!("{last}, alpha: {alpha_text}"),
                    SourceDialect::ObjC => format!("{last} alpha:{alpha_text}"),
                };
                *last = spliced;
            }
            None => {}
        }
    }

    for (offset, text) in channel_texts.into_iter().enumerate() {
        let group = result.group(offset + 1)?;
        edits.push((group.span.relative_to(base)?, text));
    }

    apply_edits(&whole.text, edits)
}

/// Apply replacements to `text`, highest start offset first. Descending
/// order keeps every remaining span valid without recomputing offsets:
/// an edit can only move text that comes after lower-offset spans.
pub(crate) fn apply_edits(text: &str, mut edits: Vec<(Span, String)>) -> Result<String, EngineError> {
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    let mut output = text.to_string();
    for (span, replacement) in edits {
        output = replace_span(&output, span, &replacement)?;
    }
    Ok(output)
}

/// Splice `replacement` over a scalar-offset span of `text`.
pub(crate) fn replace_span(text: &str, span: Span, replacement: &str) -> Result<String, EngineError> {
    let chars: Vec<char> = text.chars().collect();
    let (start, end) = (span.start as usize, span.end as usize);
    if end > chars.len() {
        return Err(EngineError::RangeResolution { start: span.start, end: span.end });
    }
    let mut output: String = chars[..start].iter().collect();
    output.push_str(replacement);
    output.extend(&chars[end..]);
    Ok(output)
}
