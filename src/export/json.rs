use crate::error::{Result, TrainStatError};
use crate::models::InfoMessage;

/// Render messages as a pretty-printed JSON array
pub fn render_messages(messages: &[InfoMessage]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(messages)
        .map_err(|e| TrainStatError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_messages() {
        let messages = vec![InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }];

        let json = render_messages(&messages).unwrap();
        let parsed: Vec<InfoMessage> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, messages);
        assert!(json.contains("\"training_type\": \"Swimming\""));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_messages(&[]).unwrap(), "[]\n");
    }
}
