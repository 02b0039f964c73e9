//! Text rendering for the put operations.
//!
//! Each renderer appends to a caller-provided byte buffer and reproduces one
//! printf conversion exactly as the C runtime emitted it:
//!
//! | value   | conversion | example            |
//! |---------|------------|--------------------|
//! | integer | `%d`       | `-42`              |
//! | boolean | `%s`       | `true` / `false`   |
//! | float   | `%f`       | `3.140000`         |
//! | float   | `%g`       | `3.14`, `1e+06`    |
//!
//! Floats are widened to `f64` before formatting, matching C's default
//! argument promotion, so `0.1f32` renders as `0.100000` and not as the
//! shortest `f32` representation.

extern crate alloc;

/// Default fractional precision of `%f` and significant digits of `%g`.
pub const DEFAULT_PRECISION: usize = 6;

/// Render a boolean as `true` or `false`.
pub fn format_bool(value: bool, buf: &mut Vec<u8>) {
    buf.extend_from_slice(if value { b"true" } else { b"false" });
}

/// Render a signed integer in base 10 (`%d`).
pub fn format_signed(value: i64, buf: &mut Vec<u8>) {
    if value < 0 {
        buf.push(b'-');
    }
    let mut digits = [0u8; 20];
    let count = render_digits(value.unsigned_abs(), &mut digits);
    buf.extend_from_slice(&digits[digits.len() - count..]);
}

/// Render a float in fixed notation with `precision` fractional digits (`%f`).
pub fn format_fixed(value: f64, precision: usize, buf: &mut Vec<u8>) {
    if !value.is_finite() {
        return format_special(value, buf);
    }
    if value.is_sign_negative() {
        buf.push(b'-');
    }
    let body = alloc::format!("{:.prec$}", value.abs(), prec = precision);
    buf.extend_from_slice(body.as_bytes());
}

/// Render a float with `precision` significant digits (`%g`).
///
/// Uses exponent notation when the decimal exponent is below -4 or at least
/// `precision`, fixed notation otherwise. Trailing fractional zeros and a
/// trailing decimal point are removed.
pub fn format_general(value: f64, precision: usize, buf: &mut Vec<u8>) {
    if !value.is_finite() {
        return format_special(value, buf);
    }
    if value.is_sign_negative() {
        buf.push(b'-');
    }
    let body = format_g(value.abs(), precision.max(1));
    buf.extend_from_slice(body.as_bytes());
}

/// Render `value` in base 10 into the END of `buf`. Returns the digit count.
fn render_digits(mut value: u64, buf: &mut [u8; 20]) -> usize {
    if value == 0 {
        buf[19] = b'0';
        return 1;
    }
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    buf.len() - pos
}

/// `nan`, `-nan`, `inf`, `-inf`, as glibc prints them.
fn format_special(value: f64, buf: &mut Vec<u8>) {
    if value.is_sign_negative() {
        buf.push(b'-');
    }
    buf.extend_from_slice(if value.is_nan() { b"nan" } else { b"inf" });
}

fn format_g(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".into();
    }
    // The exponent must come from the rounded value: 999999.5 at six
    // significant digits is 1e+06, not 999999 or 1000000.
    let scientific = alloc::format!("{:.prec$e}", value, prec = precision - 1);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let mut mantissa = mantissa.to_string();
        strip_trailing_zeros(&mut mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        alloc::format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        let frac_digits = (precision as i32 - 1 - exp).max(0) as usize;
        let mut fixed = alloc::format!("{:.prec$}", value, prec = frac_digits);
        strip_trailing_zeros(&mut fixed);
        fixed
    }
}

/// Remove trailing zeros after the decimal point, then a bare point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
