use super::html_escape;
use peakagent_core::domain::recommendation::Recommendation;
use peakagent_core::format::{capitalize, format_created_at};

/// Secondary panel: symbol, action and creation time.
pub fn render(rec: &Recommendation) -> String {
    format!(
        r#"            <aside class="card details">
                <h3>Overview</h3>
                <p class="muted">Meta information</p>
                <div class="meta-row">
                    <span class="muted">Symbol</span>
                    <span>{symbol}</span>
                </div>
                <div class="meta-row">
                    <span class="muted">Recommendation</span>
                    <span class="badge badge-outline">{action}</span>
                </div>
                <div class="meta-row">
                    <span class="muted">Created</span>
                    <span>{created}</span>
                </div>
            </aside>"#,
        symbol = html_escape(&rec.symbol),
        action = html_escape(&capitalize(rec.recommendation.label())),
        created = html_escape(&format_created_at(&rec.created_at)),
    )
}
