//! Formatting helpers for presenting dashboard metrics (en-US conventions).

use time::{macros::format_description, Date, Time};

const PLACEHOLDER: &str = "—";

/// Compact unit suffixes, smallest first.
const COMPACT_UNITS: [(u64, &str); 4] = [
    (1_000, "K"),
    (1_000_000, "M"),
    (1_000_000_000, "B"),
    (1_000_000_000_000, "T"),
];

/// Whole percent, half rounds up: `0.88` -> `88%`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.0}%", (fraction * 100.0).round())
}

/// Standard currency without fraction digits: `13150` -> `$13,150`.
pub fn format_currency(dollars: u64) -> String {
    format!("${}", group_thousands(dollars))
}

/// Short compact currency: `9450` -> `$9.5K`, `70740` -> `$71K`.
///
/// Scaled values below 10 keep one decimal, larger ones round to whole units.
/// Rounding is half up and carries into the next unit (`$999,950` -> `$1M`).
pub fn format_compact_currency(dollars: u64) -> String {
    let Some(mut index) = COMPACT_UNITS
        .iter()
        .rposition(|(unit, _)| dollars >= *unit)
    else {
        return format_currency(dollars);
    };

    loop {
        let (unit, suffix) = COMPACT_UNITS[index];
        let tenths = round_div(u128::from(dollars) * 10, u128::from(unit));

        let body = if tenths < 100 {
            // One decimal place, dropping a trailing ".0".
            let (whole, frac) = (tenths / 10, tenths % 10);
            if frac == 0 {
                whole.to_string()
            } else {
                format!("{whole}.{frac}")
            }
        } else {
            let whole = round_div(u128::from(dollars), u128::from(unit));
            if whole >= 1_000 && index + 1 < COMPACT_UNITS.len() {
                index += 1;
                continue;
            }
            whole.to_string()
        };

        return format!("${body}{suffix}");
    }
}

/// `Tue, Jun 11`
pub fn format_day_label(date: Date) -> String {
    date.format(&format_description!(
        "[weekday repr:short], [month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// `Tuesday, June 11`
pub fn format_headline_date(date: Date) -> String {
    date.format(&format_description!(
        "[weekday repr:long], [month repr:long] [day padding:none]"
    ))
    .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// `Jun 11`
pub fn format_range_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// `08:30`
pub fn format_clock(time: Time) -> String {
    time.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

fn round_div(numerator: u128, denominator: u128) -> u128 {
    (numerator + denominator / 2) / denominator
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
