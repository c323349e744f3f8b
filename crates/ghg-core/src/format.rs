// File: crates/ghg-core/src/format.rs
// Summary: Number and date label formatting for axes, tooltips and legends.

use chrono::{Datelike, NaiveDate};

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Four-digit year label (`%Y`).
pub fn year(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

/// Fixed one-decimal value with thousands separators, e.g. `15,234.5`.
pub fn grouped_1dp(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let fixed = format!("{:.1}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "-0.0" reads as zero
    let negative = v < 0.0 && fixed.chars().any(|c| c != '0' && c != '.');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Axis tick label with thousands separators and no trailing `.0`, e.g. `5,000`.
pub fn grouped_tick(v: f64) -> String {
    let s = grouped_1dp(v);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// SI-prefixed value with `precision` significant digits, e.g. `15k`, `2.5k`, `500`.
pub fn si(v: f64, precision: usize) -> String {
    let p = precision.max(1);
    if v == 0.0 || !v.is_finite() {
        return format!("{:.*}", p - 1, v);
    }
    // exponent after rounding to `p` significant digits (9990 -> 1.0e4)
    let sci = format!("{:.*e}", p - 1, v.abs());
    let exponent: i32 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    let k = exponent.div_euclid(3).clamp(-8, 8);
    let scaled = v / 10f64.powi(3 * k);
    let decimals = (p as i32 - 1 - (exponent - 3 * k)).max(0) as usize;
    format!("{:.*}{}", decimals, scaled, SI_PREFIXES[(k + 8) as usize])
}

/// Escape text for inclusion in HTML fragments.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_values() {
        assert_eq!(grouped_1dp(0.0), "0.0");
        assert_eq!(grouped_1dp(999.94), "999.9");
        assert_eq!(grouped_1dp(15234.46), "15,234.5");
        assert_eq!(grouped_1dp(1234567.0), "1,234,567.0");
        assert_eq!(grouped_1dp(-1200.0), "-1,200.0");
        assert_eq!(grouped_1dp(-0.01), "0.0");
    }

    #[test]
    fn tick_labels_drop_zero_fraction() {
        assert_eq!(grouped_tick(5000.0), "5,000");
        assert_eq!(grouped_tick(2.5), "2.5");
    }

    #[test]
    fn si_values() {
        assert_eq!(si(0.0, 2), "0.0");
        assert_eq!(si(15000.0, 2), "15k");
        assert_eq!(si(2500.0, 2), "2.5k");
        assert_eq!(si(1000.0, 2), "1.0k");
        assert_eq!(si(500.0, 2), "500");
        assert_eq!(si(9990.0, 2), "10k");
        assert_eq!(si(0.5, 2), "500m");
        assert_eq!(si(250000.0, 2), "250k");
    }

    #[test]
    fn year_label() {
        let d = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        assert_eq!(year(d), "2016");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
    }
}
