use super::html_escape;

/// Error panel with the failure message and a retry form.
pub fn render(message: &str) -> String {
    format!(
        r#"    <main class="container">
        <div class="error-panel">
            <div class="error-title">Error loading data</div>
            <p class="error-message">{message}</p>
            <form method="post" action="/retry">
                <button type="submit" class="btn">&#8635; Try Again</button>
            </form>
        </div>
    </main>"#,
        message = html_escape(message),
    )
}
