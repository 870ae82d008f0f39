//! Display formatting for peso amounts and percentage changes.
//!
//! The mobile client previously carried several divergent copies of these
//! helpers; this module is the single shared implementation. Chart and
//! summary-card values arrive as plain floats, so the float entry points
//! guard against non-finite input instead of panicking.

/// Fixed rendering for amounts that cannot be formatted.
pub const ZERO_PESOS: &str = "₱0.00";

/// Insert thousands separators into a plain digit string.
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a numeric amount as a two-decimal peso string (`₱1,234.56`).
///
/// Non-finite input yields [`ZERO_PESOS`] rather than failing.
#[must_use]
pub fn peso(amount: f64) -> String {
    if !amount.is_finite() {
        return ZERO_PESOS.to_owned();
    }
    let plain = format!("{:.2}", amount.abs());
    // A negative amount can still round to zero; zero carries no sign
    let sign = if amount < 0.0 && plain != "0.00" { "-" } else { "" };
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("₱{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Format like [`peso`], abbreviating values at or above 1000 with a `k`
/// suffix at one decimal place (`₱12.3k`).
#[must_use]
pub fn peso_compact(amount: f64) -> String {
    if !amount.is_finite() {
        return ZERO_PESOS.to_owned();
    }
    if amount >= 1000.0 {
        format!("₱{:.1}k", amount / 1000.0)
    } else {
        peso(amount)
    }
}

/// Format the relative change from `previous` to `current` as a signed
/// one-decimal percentage string (`+12.5%`, `-3.1%`).
///
/// Edge policy: a zero baseline has no meaningful percentage, so
/// `previous == 0` renders `"N/A"` when `current` is positive and a dash
/// otherwise. An exact zero change also renders a dash.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> String {
    if !current.is_finite() || !previous.is_finite() {
        return "–".to_owned();
    }
    if previous == 0.0 {
        return if current > 0.0 {
            "N/A".to_owned()
        } else {
            "–".to_owned()
        };
    }
    let percent = (current - previous) / previous * 100.0;
    if percent == 0.0 {
        return "–".to_owned();
    }
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{sign}{percent:.1}%")
}
