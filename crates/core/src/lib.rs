pub mod client;
pub mod domain;
pub mod fetch;
pub mod format;

pub mod config {
    use anyhow::Context;
    use std::time::Duration;

    const DEFAULT_TIMEOUT_SECS: u64 = 15;
    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_base_url: Option<String>,
        pub api_timeout: Duration,
        pub sentry_dsn: Option<String>,
        pub port: u16,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let api_timeout_secs =
                parse_timeout_secs(std::env::var("API_TIMEOUT_SECS").ok().as_deref())?;

            Ok(Self {
                api_base_url: std::env::var("API_BASE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                api_timeout: Duration::from_secs(api_timeout_secs),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            })
        }

        pub fn require_api_base_url(&self) -> anyhow::Result<&str> {
            self.api_base_url
                .as_deref()
                .context("API_BASE_URL is required")
        }
    }

    fn parse_timeout_secs(raw: Option<&str>) -> anyhow::Result<u64> {
        let Some(raw) = raw else {
            return Ok(DEFAULT_TIMEOUT_SECS);
        };
        let secs = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("API_TIMEOUT_SECS is not a number: {raw}"))?;
        anyhow::ensure!(secs > 0, "API_TIMEOUT_SECS must be greater than 0");
        Ok(secs)
    }

}
