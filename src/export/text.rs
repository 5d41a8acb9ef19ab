use std::fmt;

use crate::models::InfoMessage;

impl InfoMessage {
    /// Render the one-line training summary
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Render one summary line per message
pub fn render_messages(messages: &[InfoMessage]) -> String {
    messages
        .iter()
        .map(|message| format!("{}\n", message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn test_message_template() {
        let text = message(1.0, 9.75, 9.75, 797.805).get_message();
        assert_eq!(
            text,
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 797.805."
        );
    }

    #[test]
    fn test_large_and_small_values_keep_three_decimals() {
        let text = message(0.0004, 123456.789012, 1e-7, 2.5).get_message();
        assert!(text.contains("Duration: 0.000 h"));
        assert!(text.contains("Distance: 123456.789 km"));
        assert!(text.contains("Avg speed: 0.000 km/h"));
        assert!(text.contains("Calories: 2.500."));
    }

    #[test]
    fn test_render_messages_one_line_each() {
        let rendered = render_messages(&[message(1.0, 1.0, 1.0, 1.0), message(2.0, 2.0, 1.0, 1.0)]);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.ends_with('\n'));
    }
}
