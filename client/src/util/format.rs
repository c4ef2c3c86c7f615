//! Display formatting for catalog values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a baht price the way the course cards show it: `฿` followed by the
/// amount with comma thousands separators and at most three fraction digits.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("฿{}", group_thousands(price))
}

/// Render `value` with comma-grouped integer digits, rounding to
/// `MAX_FRACTION_DIGITS` and trimming trailing zeros.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }

    let (digits, fraction) = split_scaled(value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 8);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let width = MAX_FRACTION_DIGITS as usize;
        let fraction = format!("{fraction:0width$}");
        grouped.push('.');
        grouped.push_str(fraction.trim_end_matches('0'));
    }

    if value < 0.0 && (fraction > 0 || digits != "0") {
        grouped.insert(0, '-');
    }
    grouped
}

/// Integer digits and rounded thousandths of a non-negative finite `abs`.
///
/// Past the `u128` range the fraction is below `f64` precision anyway, so the
/// integer part is taken from the float's exact decimal expansion.
fn split_scaled(abs: f64) -> (String, u128) {
    let scale = 10_u128.pow(MAX_FRACTION_DIGITS);
    #[allow(clippy::cast_precision_loss)]
    let scaled = (abs * scale as f64).round();
    #[allow(clippy::cast_precision_loss)]
    let limit = u128::MAX as f64;
    if scaled >= limit {
        return (format!("{abs:.0}"), 0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = scaled as u128;
    ((scaled / scale).to_string(), scaled % scale)
}
