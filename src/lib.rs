/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! RIDE Color Engine
//!
//! Recognizes color-constructor expressions in a line of Swift or
//! Objective-C source, resolves them into canonical RGBA values, and
//! rewrites the fragment for a new color by substituting only the captured
//! value spans, so the author's formatting, initializer spelling, and
//! optional-argument choices stay untouched:
//! - White, gray, RGB (unit-float and 0-255), HSB, and packed-hex families
//! - Caret / selection containment to pick between neighboring constructors
//! - Descending-offset multi-span substitution for safe in-place rewrites
//! - Locale-invariant numeric formatting of the regenerated literals

mod builder;
mod color;
mod error;
mod format;
mod gray;
mod hex;
mod hsb;
mod matcher;
mod patterns;
mod rgb;
mod span;
mod white;

pub use builder::build_replacement;
pub use color::Rgba;
pub use error::EngineError;
pub use matcher::{
    CapturedGroup, ColorFamily, ColorKind, ColorMatch, SourceDialect, find_color_at,
    find_color_in_selection, find_colors,
};
pub use span::Span;
