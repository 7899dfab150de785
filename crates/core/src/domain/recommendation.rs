use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Latest trading recommendation as served by `GET /recommendations/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub symbol: String,
    pub recommendation: Action,
    /// Signed ratio, e.g. `0.0534` is +5.34%.
    pub change_percent: f64,
    #[serde(deserialize_with = "positive_days")]
    pub window_days: u32,
    pub trade_date: String,
    pub model_name: String,
    pub rationale: String,
    pub created_at: String,
}

fn positive_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let days = u32::deserialize(deserializer)?;
    if days == 0 {
        return Err(serde::de::Error::custom("window_days must be positive"));
    }
    Ok(days)
}

/// Recommended action. Values outside buy/sell/hold are kept as `Other` so the
/// page can still render them with neutral styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Buy,
    Sell,
    Hold,
    Other(String),
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
            Action::Hold => "hold",
            Action::Other(raw) => raw,
        }
    }
}

impl From<String> for Action {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buy" => Action::Buy,
            "sell" => Action::Sell,
            "hold" => Action::Hold,
            _ => Action::Other(raw),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
