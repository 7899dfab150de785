use super::{badge_class, html_escape, icon_glyph};
use peakagent_core::domain::recommendation::Recommendation;
use peakagent_core::format::{change_color, color_for, format_signed_percent, icon_for, ColorCategory};

/// Primary panel: symbol, action badge, signed change, stat tiles and rationale.
pub fn render(rec: &Recommendation) -> String {
    let change_class = match change_color(rec.change_percent) {
        ColorCategory::Negative => "negative",
        _ => "positive",
    };

    format!(
        r#"            <section class="card overview">
                <div class="card-head">
                    <div>
                        <div class="symbol">{symbol}</div>
                        <p class="muted">Latest Trading Recommendation</p>
                    </div>
                    <span class="badge {badge}">{icon}{action}</span>
                </div>
                <div class="change">
                    <div class="change-value"><span class="{change_class}">{change}</span></div>
                    <div class="muted">Based on a {window}-day window</div>
                </div>
                <div class="stats">
                    <div class="stat">
                        <div class="stat-label">Model</div>
                        <div class="stat-value">{model}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-label">Window</div>
                        <div class="stat-value">{window} days</div>
                    </div>
                    <div class="stat">
                        <div class="stat-label">Trade Date</div>
                        <div class="stat-value">{trade_date}</div>
                    </div>
                </div>
                <div class="analysis">
                    <h4>&#129302; AI Analysis</h4>
                    <p>{rationale}</p>
                </div>
            </section>"#,
        symbol = html_escape(&rec.symbol),
        badge = badge_class(color_for(&rec.recommendation)),
        icon = icon_glyph(icon_for(&rec.recommendation)),
        action = html_escape(&rec.recommendation.label().to_uppercase()),
        change = format_signed_percent(rec.change_percent),
        window = rec.window_days,
        model = html_escape(&rec.model_name),
        trade_date = html_escape(&rec.trade_date),
        rationale = html_escape(&rec.rationale),
    )
}
