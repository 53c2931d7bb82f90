//! Numeric normalizers.
//!
//! Resolved style values carry their unit inline (`16px`, `0.5`, `45deg`).
//! The parsers here read the leading numeric prefix and ignore whatever
//! follows, so `"16px"` and `"16"` both read as `16.0`. Input without a
//! leading number reads as `None`, which mappers treat as "absent".

/// Parse the leading floating-point prefix of a value.
///
/// Accepts optional leading whitespace, a sign, digits, a fractional part
/// and an exponent. Trailing units are ignored.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut literal = String::new();
    let mut pos = 0;

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        literal.push(sign as char);
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;
    literal.push_str(&s[int_start..pos]);

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = frac_end - frac_start;
        if frac_digits > 0 {
            literal.push('.');
            literal.push_str(&s[frac_start..frac_end]);
            pos = frac_end;
        } else if int_digits > 0 {
            pos = frac_end;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it.
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_end = pos + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            literal.push_str(&s[pos..exp_end]);
        }
    }

    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the leading integer prefix of a value (`"10px"` → 10, `"1.9"` → 1).
pub fn parse_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}
