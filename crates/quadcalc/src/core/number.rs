//! Number <-> text conversion for the displays
//!
//! Results are rendered the way a browser renders a number as text, so the
//! readout shows `NaN`, `Infinity` and `1e+21` rather than Rust's `NaN`,
//! `inf` and `1000000000000000000000`.

/// Formats a number for display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0 as well
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e2`
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (head, tail) = digits.split_at(1);
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        if tail.is_empty() {
            format!("{head}e{sign}{}", (n - 1).abs())
        } else {
            format!("{head}.{tail}e{sign}{}", (n - 1).abs())
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Parses a token back into a number
///
/// Anything that is not a number reads as NaN.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
