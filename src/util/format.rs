//! Display formatting for listing metrics.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder shown for a metric the listing does not provide.
pub const MISSING_METRIC: &str = "—";

/// Format a metric with thin-space thousands grouping and at most one decimal.
#[must_use]
pub fn format_metric(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return MISSING_METRIC.to_owned();
    };
    let rounded = (v * 10.0).round() / 10.0;
    let text = if rounded.fract() == 0.0 { format!("{rounded:.0}") } else { format!("{rounded:.1}") };
    group_thousands(&text)
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = text.strip_prefix('-').map_or(("", text), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned.split_once('.').map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\u{2009}');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
