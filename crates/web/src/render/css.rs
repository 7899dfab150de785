pub const STYLES: &str = r#"
:root {
    --bg: #0b0f17;
    --card: #121826;
    --border: #1f2937;
    --text: #e5e7eb;
    --muted: #9ca3af;
    --primary: #6366f1;
    --green: #22c55e;
    --red: #ef4444;
    --yellow: #eab308;
    --skeleton: #1f2937;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
}
header {
    position: sticky;
    top: 0;
    border-bottom: 1px solid var(--border);
    background: rgba(11, 15, 23, 0.8);
    backdrop-filter: blur(8px);
}
.container { max-width: 72rem; margin: 0 auto; padding: 1rem; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-mark {
    display: grid; place-items: center;
    width: 2.25rem; height: 2.25rem;
    border-radius: 0.5rem;
    background: rgba(99, 102, 241, 0.15);
    color: var(--primary);
}
.brand h1 { font-size: 1.25rem; font-weight: 600; }
.subtitle, .muted { color: var(--muted); font-size: 0.8rem; }
main { padding-top: 2.5rem; padding-bottom: 2.5rem; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: 2fr 1fr; }
@media (max-width: 900px) { .grid { grid-template-columns: 1fr; } }
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 1.5rem;
}
.card-head { display: flex; justify-content: space-between; align-items: flex-start; }
.symbol { font-size: 1.875rem; font-weight: 700; }
.badge {
    display: inline-flex; align-items: center; gap: 0.25rem;
    padding: 0.25rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem; font-weight: 600;
}
.badge-positive { background: var(--green); color: #fff; }
.badge-negative { background: var(--red); color: #fff; }
.badge-neutral { background: var(--yellow); color: #fff; }
.badge-default { background: var(--border); color: var(--muted); }
.badge-outline { border: 1px solid var(--border); font-weight: 500; }
.change { display: flex; flex-wrap: wrap; align-items: flex-end; gap: 1rem; margin: 1.5rem 0; }
.change-value { font-size: 2.25rem; font-weight: 700; line-height: 1; }
.positive { color: var(--green); }
.negative { color: var(--red); }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
.stat { border: 1px solid var(--border); border-radius: 0.5rem; padding: 1rem; }
.stat-label { color: var(--muted); font-size: 0.75rem; }
.stat-value { margin-top: 0.25rem; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.analysis { margin-top: 1.5rem; border: 1px solid var(--border); border-radius: 0.5rem; padding: 1.25rem; background: rgba(31, 41, 55, 0.4); }
.analysis h4 { margin-bottom: 0.5rem; }
.analysis p { font-size: 0.875rem; line-height: 1.6; }
.meta-row { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; font-size: 0.875rem; }
footer {
    margin-top: 3rem; padding-top: 2rem;
    border-top: 1px solid var(--border);
    text-align: center; color: var(--muted); font-size: 0.875rem;
}
.skeleton { background: var(--skeleton); border-radius: 0.375rem; animation: pulse 1.5s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }
.error-panel {
    display: flex; flex-direction: column; align-items: center; justify-content: center;
    gap: 1.25rem; min-height: 320px; padding-top: 5rem;
}
.error-title { color: var(--red); font-size: 1.125rem; font-weight: 500; }
.error-message { color: var(--muted); max-width: 40rem; text-align: center; }
.btn {
    background: transparent; color: var(--text);
    border: 1px solid var(--border); border-radius: 0.375rem;
    padding: 0.5rem 1rem; cursor: pointer; font-size: 0.875rem;
}
.btn:hover { border-color: var(--primary); }
"#;
