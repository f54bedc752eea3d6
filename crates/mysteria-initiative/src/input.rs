//! Lenient numeric input from the calculator form.
//!
//! The calculator never rejects a keystroke outright: text is read the way a
//! browser's `parseFloat` reads it, and turn counts are floored and clamped.

/// Parse the leading decimal number of `text`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so `"42abc"`
/// reads as 42 and `"12,5"` as 12. `Infinity` with an optional sign is
/// accepted. Returns `None` when no number starts the text.
pub fn parse_initiative(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Coerce a raw turn count to an integer of at least 1.
///
/// Fractions are floored; NaN and anything below 1 read as 1.
pub fn coerce_turns(value: f64) -> i64 {
    if value.is_nan() {
        return 1;
    }
    // `as` saturates at the i64 bounds
    (value.floor() as i64).max(1)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
