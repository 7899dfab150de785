//! Server-side rendering of the dashboard page.
//!
//! The page is a pure function of the current [`FetchState`]:
//! - `overview.rs`: primary panel (symbol, badge, change, stats, rationale)
//! - `details.rs`: secondary metadata panel
//! - `skeleton.rs`: loading placeholder
//! - `error.rs`: error panel with the retry form

use peakagent_core::domain::recommendation::Recommendation;
use peakagent_core::fetch::FetchState;
use peakagent_core::format::{ColorCategory, Icon};

mod css;
mod details;
mod error;
mod overview;
mod skeleton;

const TITLE: &str = "PeakAgent Insights";
const LOADING_REFRESH_SECS: u32 = 2;

/// Render the complete HTML document for a fetch state.
pub fn render_page(state: &FetchState) -> String {
    match state {
        FetchState::Loading => document(&skeleton::render(), Some(LOADING_REFRESH_SECS)),
        FetchState::Error(message) => document(&error::render(message), None),
        FetchState::Success(rec) => document(&dashboard(rec), None),
    }
}

fn dashboard(rec: &Recommendation) -> String {
    format!(
        r#"{header}
    <main class="container">
        <div class="grid">
{overview}
{details}
        </div>
{footer}
    </main>"#,
        header = header(),
        overview = overview::render(rec),
        details = details::render(rec),
        footer = footer(),
    )
}

fn document(body: &str, refresh_secs: Option<u32>) -> String {
    let refresh = refresh_secs
        .map(|secs| format!(r#"<meta http-equiv="refresh" content="{secs}">"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {refresh}
    <title>{TITLE}</title>
    <style>{css}</style>
</head>
<body>
{body}
</body>
</html>"#,
        css = css::STYLES,
    )
}

fn header() -> String {
    format!(
        r#"    <header>
        <div class="container brand">
            <div class="brand-mark">&#129302;</div>
            <div>
                <h1>{TITLE}</h1>
                <p class="subtitle">AI-powered trading signals</p>
            </div>
        </div>
    </header>"#
    )
}

fn footer() -> &'static str {
    r#"        <footer>
            <p>Financial recommendations are AI-generated and should not be considered financial advice.</p>
        </footer>"#
}

pub(crate) fn badge_class(category: ColorCategory) -> &'static str {
    match category {
        ColorCategory::Positive => "badge-positive",
        ColorCategory::Negative => "badge-negative",
        ColorCategory::Neutral => "badge-neutral",
        ColorCategory::Default => "badge-default",
    }
}

pub(crate) fn icon_glyph(icon: Option<Icon>) -> &'static str {
    match icon {
        Some(Icon::Up) => "&#9650;",
        Some(Icon::Down) => "&#9660;",
        Some(Icon::Flat) => "&#9644;",
        None => "",
    }
}

/// Escape HTML special characters
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
