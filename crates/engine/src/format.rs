// Number formatting shared by step descriptions, matrix rendering and the
// result summary, so the same value never shows up rounded two ways.

/// Round `value` half-up to `digits` fractional digits and drop trailing
/// zeros (and a trailing point).
///
/// Rounding works on the shortest decimal text that round-trips to `value`,
/// so `2.675` rounds to `2.68` rather than following its binary expansion.
/// `NaN` prints as `"NaN"`, infinities as `"∞"` / `"-∞"`. A value that
/// rounds to zero prints as `"0"`, never `"-0"`.
pub fn format_smart(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // f64's Display never uses exponent notation
    let plain = format!("{}", value.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let kept_frac = frac_part.len().min(digits);
    let mut decimal: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(kept_frac))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&b| b >= b'5');
    if round_up && carry(&mut decimal) {
        decimal.insert(0, 1);
        int_len += 1;
    }

    if decimal.iter().all(|&d| d == 0) {
        return "0".to_string();
    }

    let mut out = String::with_capacity(decimal.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(decimal[..int_len].iter().map(|&d| char::from(b'0' + d)));

    let frac: String = decimal[int_len..]
        .iter()
        .map(|&d| char::from(b'0' + d))
        .collect();
    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// Add one unit in the last place. Returns true when the carry runs off the
// most significant digit.
fn carry(decimal: &mut [u8]) -> bool {
    for digit in decimal.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
