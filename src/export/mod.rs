use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Result;
use crate::models::InfoMessage;

pub mod json;
pub mod text;

/// Output format for training summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One fixed-template line per workout
    #[default]
    Text,
    /// Pretty-printed JSON array of info messages
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Render messages in the chosen format
pub fn render(messages: &[InfoMessage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_messages(messages)),
        OutputFormat::Json => json::render_messages(messages),
    }
}
