/// Placeholder layout shown while the request is in flight.
pub fn render() -> String {
    let bar = |w: &str, h: &str| format!(r#"<div class="skeleton" style="width:{w};height:{h}"></div>"#);

    format!(
        r#"    <header>
        <div class="container brand">
            {mark}
            <div>{title}{subtitle}</div>
        </div>
    </header>
    <main class="container" aria-busy="true">
        <div class="grid">
            <section class="card">
                <div class="card-head">
                    <div>{symbol}{caption}</div>
                    {badge}
                </div>
                <div class="change">{change}{window}</div>
                <div class="stats">{tile}{tile}{tile}</div>
                <div class="analysis">{heading}{line}{short_line}</div>
            </section>
            <aside class="card">
                {heading}{caption}
                <div class="meta-row">{label}{value}</div>
                <div class="meta-row">{label}{value}</div>
                <div class="meta-row">{label}{wide_value}</div>
            </aside>
        </div>
    </main>"#,
        mark = bar("2.25rem", "2.25rem"),
        title = bar("10rem", "1rem"),
        subtitle = bar("14rem", "0.75rem"),
        symbol = bar("6rem", "1.75rem"),
        caption = bar("12rem", "1rem"),
        badge = bar("7rem", "1.75rem"),
        change = bar("8rem", "2.5rem"),
        window = bar("10rem", "1rem"),
        tile = bar("100%", "4rem"),
        heading = bar("7rem", "1.25rem"),
        line = bar("100%", "1rem"),
        short_line = bar("75%", "1rem"),
        label = bar("6rem", "1rem"),
        value = bar("5rem", "1rem"),
        wide_value = bar("7rem", "1rem"),
    )
}
