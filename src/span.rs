/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of Unicode-scalar offsets into one line
/// of text. Every offset in the engine uses this unit; regex byte offsets
/// are converted at extraction time and never escape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        if start > end {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// A caret sitting on the closing delimiter still addresses the
    /// construct, so the end offset is included here.
    pub fn contains_offset(&self, offset: u32) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub fn contains_span(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Rebase this span against the start of an enclosing span.
    pub(crate) fn relative_to(&self, base: u32) -> Result<Span, EngineError> {
        if self.start < base {
            return Err(EngineError::RangeResolution { start: self.start, end: self.end });
        }
        Ok(Span { start: self.start - base, end: self.end - base })
    }
}

/// Translate a byte offset produced by the regex engine into the scalar
/// offset unit used by `Span`. The byte offset must lie on a character
/// boundary, which regex match boundaries always do.
pub(crate) fn char_offset(text: &str, byte_offset: usize) -> u32 {
    text[..byte_offset].chars().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_reversed_bounds() {
        assert_eq!(Span::new(7, 3), Span::new(3, 7));
    }

    #[test]
    fn test_contains_offset_includes_both_ends() {
        let span = Span::new(4, 9);
        assert!(span.contains_offset(4));
        assert!(span.contains_offset(9));
        assert!(!span.contains_offset(3));
        assert!(!span.contains_offset(10));
    }

    #[test]
    fn test_contains_span_accepts_empty_selection_at_end() {
        let span = Span::new(4, 9);
        assert!(span.contains_span(&Span::new(9, 9)));
        assert!(!span.contains_span(&Span::new(8, 10)));
    }

    #[test]
    fn test_relative_to_rejects_span_before_base() {
        assert!(Span::new(2, 5).relative_to(3).is_err());
        assert_eq!(Span::new(6, 9).relative_to(4).unwrap(), Span::new(2, 5));
    }

    #[test]
    fn test_char_offset_counts_scalars_not_bytes() {
        let text = "a\u{1F308}b";
        assert_eq!(char_offset(text, 0), 0);
        assert_eq!(char_offset(text, 1), 1);
        assert_eq!(char_offset(text, 5), 2);
    }
}
