//! Display helpers for recommendation fields. All functions are pure.

use crate::domain::recommendation::Action;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Badge styling category for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Positive,
    Negative,
    Neutral,
    Default,
}

/// Badge icon for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Up,
    Down,
    Flat,
}

pub fn color_for(action: &Action) -> ColorCategory {
    match action {
        Action::Buy => ColorCategory::Positive,
        Action::Sell => ColorCategory::Negative,
        Action::Hold => ColorCategory::Neutral,
        Action::Other(_) => ColorCategory::Default,
    }
}

/// `None` for actions outside buy/sell/hold.
pub fn icon_for(action: &Action) -> Option<Icon> {
    match action {
        Action::Buy => Some(Icon::Up),
        Action::Sell => Some(Icon::Down),
        Action::Hold => Some(Icon::Flat),
        Action::Other(_) => None,
    }
}

/// Styling for a signed change: zero counts as positive.
pub fn change_color(ratio: f64) -> ColorCategory {
    if ratio >= 0.0 {
        ColorCategory::Positive
    } else {
        ColorCategory::Negative
    }
}

/// Formats a ratio as a signed percentage with two decimals: `0.05` -> `+5.00%`.
pub fn format_signed_percent(ratio: f64) -> String {
    // -0.0 compares equal to 0.0 but would print as "-0.00".
    let ratio = if ratio == 0.0 { 0.0 } else { ratio };
    let sign = if ratio >= 0.0 { "+" } else { "" };
    format!("{sign}{:.2}%", ratio * 100.0)
}

/// Timestamp layouts without an offset; these are read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Human-readable `created_at`. Input that is neither RFC 3339 nor a naive
/// timestamp is returned as-is.
pub fn format_created_at(raw: &str) -> String {
    let trimmed = raw.trim();
    let ts = DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NAIVE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
                .map(|naive| naive.and_utc())
        });

    match ts {
        Some(ts) => ts.format("%b %-d, %Y, %-I:%M:%S %p UTC").to_string(),
        None => raw.to_string(),
    }
}

/// Capitalizes the first character, used by the secondary badge.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
