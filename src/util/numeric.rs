//! Lenient number parsing for form fields.

/// Parses the longest numeric prefix of `raw`, falling back to `0.0`.
///
/// Leading whitespace is ignored and trailing garbage is dropped, so
/// `"12kg"` reads as `12.0`. Empty, non-numeric and NaN inputs all become
/// `0.0`; a bare `Infinity` (optionally signed) is honoured.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = numeric_prefix(trimmed);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_nan() => 0.0,
        Ok(value) => value,
        Err(_) => 0.0,
    }
}

fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    if input[idx..].starts_with("Infinity") {
        return &input[..idx + "Infinity".len()];
    }

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        digits += end - frac_start;
        if digits > 0 {
            idx = end;
        }
    }

    if digits == 0 {
        return "";
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let exp_digits = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_digits {
            idx = end;
        }
    }

    &input[..idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(coerce_number("160"), 160.0);
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
    }

    #[test]
    fn junk_becomes_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(coerce_number("  42kg"), 42.0);
        assert_eq!(coerce_number("7.25%"), 7.25);
        assert_eq!(coerce_number("1e3x"), 1000.0);
        assert_eq!(coerce_number("2e"), 2.0);
        assert_eq!(coerce_number("2e+"), 2.0);
        assert_eq!(coerce_number("1.2.3"), 1.2);
    }

    #[test]
    fn infinity_is_honoured() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(coerce_number("inf"), 0.0);
    }
}
