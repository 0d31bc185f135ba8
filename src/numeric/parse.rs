// ============================================================================
// Comma-Decimal Parsing
// The single validation gate for every text operand
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Separator between the integer and fractional digits of a text operand.
pub const DECIMAL_SEPARATOR: char = ',';

/// Parse text holding a number written with `,` as the decimal separator.
///
/// Accepted form (surrounding whitespace is ignored):
///
/// ```text
/// [+|-] digits [ "," digits ] [ (e|E) [+|-] digits ]
/// ```
///
/// The mantissa needs at least one digit on either side of the separator,
/// so `"5,"` and `",5"` are accepted. A period anywhere, a second comma,
/// group separators and spelled-out specials such as `inf` or `NaN` are
/// rejected.
///
/// # Examples
/// - `"5,5"` -> 5.5
/// - `"-0,25"` -> -0.25
/// - `"1,5e3"` -> 1500.0
/// - `"3.5"` -> `InvalidFormat`
///
/// # Errors
/// Returns `InvalidFormat` when the text is not a comma-decimal number.
pub fn parse_numeric_string(text: &str) -> CalcResult<f64> {
    match normalize(text.trim()) {
        Some(normalized) => {
            let value = normalized.parse::<f64>().map_err(|_| {
                tracing::trace!(input = text, "rejected numeric text");
                CalcError::InvalidFormat
            })?;
            tracing::trace!(input = text, value, "parsed numeric text");
            Ok(value)
        },
        None => {
            tracing::trace!(input = text, "rejected numeric text");
            Err(CalcError::InvalidFormat)
        },
    }
}

/// Rewrite comma-decimal text into the form `str::parse::<f64>` accepts.
///
/// Returns `None` if the text violates the grammar.
fn normalize(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }

    // Split off the exponent
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (sign, unsigned) = split_sign(mantissa);

    // Split on the decimal separator
    let (int_digits, frac_digits) = match unsigned.find(DECIMAL_SEPARATOR) {
        Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
        None => (unsigned, ""),
    };

    if !is_digits(int_digits) || !is_digits(frac_digits) {
        return None;
    }
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(s.len() + 1);
    normalized.push_str(sign);
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }

    if let Some(exponent) = exponent {
        let (exp_sign, exp_digits) = split_sign(exponent);
        if exp_digits.is_empty() || !is_digits(exp_digits) {
            return None;
        }
        normalized.push('e');
        normalized.push_str(exp_sign);
        normalized.push_str(exp_digits);
    }

    Some(normalized)
}

#[inline]
fn split_sign(s: &str) -> (&str, &str) {
    match s.as_bytes().first() {
        Some(b'-') | Some(b'+') => s.split_at(1),
        _ => ("", s),
    }
}

/// True if every byte is an ASCII digit (vacuously true for "").
#[inline]
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Tests
// ============================================================================
