/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Failure taxonomy for the color engine. "Nothing under the cursor" is not
//! a failure and is reported as `None` by the search entry points; these
//! variants cover the cases where a match or rewrite went wrong and the host
//! must leave the buffer untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("pattern failed to compile: {0}")]
    PatternCompilation(#[from] regex::Error),

    #[error("captured text {text:?} is not a valid {grammar} literal")]
    MalformedNumber { text: String, grammar: &'static str },

    #[error("span {start}..{end} does not resolve within the text being rewritten")]
    RangeResolution { start: u32, end: u32 },
}
