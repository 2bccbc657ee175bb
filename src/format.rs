/*---------------------------------------------------------------------------------------------
 *  Copyright (c) RIDE Contributors. All rights reserved.
 *  Licensed under the MIT License. See License.txt in the project root for license information.
 *--------------------------------------------------------------------------------------------*/

//! Numeric formatting bridge. Rewritten fragments must be valid source code
//! on every machine, so all formatting goes through Rust's locale-invariant
//! formatter: `.` decimal separator, no grouping, fixed rules per channel
//! kind.

use crate::color::Rgba;

/// Upper bound on fractional digits for unit-float channels. The lower
/// bound is always one digit, so `1` renders as `1.0`.
pub(crate) const MAX_FRACTION_DIGITS: usize = 3;

/// Format a unit-range channel (color component or alpha) with between one
/// and [`MAX_FRACTION_DIGITS`] fractional digits.
pub(crate) fn unit_float(value: f64) -> String {
    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value.clamp(0.0, 1.0));
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Format a unit-range channel as a 0-255 integer component.
pub(crate) fn byte_component(value: f64) -> String {
    ((value.clamp(0.0, 1.0) * 255.0).round() as u32).to_string()
}

/// Format a unit-range value as a 0-100 percentage component.
pub(crate) fn percent_component(value: f64) -> String {
    ((value.clamp(0.0, 1.0) * 100.0).round() as u32).to_string()
}

/// Format a hue angle as an integer number of degrees in 0-359.
pub(crate) fn hue_component(degrees: f64) -> String {
    (degrees.round() as i64).rem_euclid(360).to_string()
}

/// Fixed-width uppercase `RRGGBB` digits for a 24-bit hex literal.
pub(crate) fn hex24(color: &Rgba) -> String {
    format!("{:06X}", color.packed_rgb())
}

/// Fixed-width uppercase `RRGGBBAA` digits for a 32-bit hex literal.
pub(crate) fn hex32(color: &Rgba) -> String {
    format!("{:08X}", color.packed_rgba())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_float_keeps_at_least_one_fraction_digit() {
        assert_eq!(unit_float(1.0), "1.0");
        assert_eq!(unit_float(0.0), "0.0");
        assert_eq!(unit_float(0.5), "0.5");
    }

    #[test]
    fn test_unit_float_caps_fraction_digits() {
        assert_eq!(unit_float(0.97453), "0.975");
        assert_eq!(unit_float(0.25), "0.25");
        assert_eq!(unit_float(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_unit_float_clamps_out_of_range_values() {
        assert_eq!(unit_float(1.7), "1.0");
        assert_eq!(unit_float(-0.2), "0.0");
    }

    #[test]
    fn test_integer_components_round() {
        assert_eq!(byte_component(0.5), "128");
        assert_eq!(percent_component(0.499), "50");
        assert_eq!(hue_component(359.6), "0");
        assert_eq!(hue_component(210.2), "210");
    }

    #[test]
    fn test_hex_is_zero_padded_uppercase() {
        assert_eq!(hex24(&Rgba::from_packed_rgb(0x00FF00)), "00FF00");
        assert_eq!(hex24(&Rgba::from_packed_rgb(0x0000AB)), "0000AB");
        assert_eq!(hex32(&Rgba::from_packed_rgba(0x0000AB7F)), "0000AB7F");
    }
}
