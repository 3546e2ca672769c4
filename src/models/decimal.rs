//! Importes del backend: llegan como número (`12.5`) o como texto (`"12.50"`)

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

/// "12.50 €"
pub fn format_euros(amount: f64) -> String {
    format!("{:.2} €", amount)
}
