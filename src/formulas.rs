//! Distance, speed and calorie formulas for each workout type
//!
//! Every workout shares the step-based distance calculation. Mean speed is
//! distance over duration, except for swimming, where it comes from the pool
//! length and lap count. Each workout type has its own calorie formula with
//! fixed constants.
//!
//! # Example
//!
//! ```rust
//! use trainstat::models::{TrainingRecord, Workout};
//!
//! let record = TrainingRecord::new(15000, 1.0, 75.0).unwrap();
//! let info = Workout::running(record).show_training_info();
//!
//! assert!((info.distance - 9.75).abs() < 1e-9);
//! ```

use crate::error::ReadingError;
use crate::models::{InfoMessage, Workout};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length in metres for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Stroke length in metres for swimming
pub const LEN_STROKE: f64 = 1.38;

/// Running calorie constants
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 1.79;

/// Walking calorie constants
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

/// Swimming calorie constants
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

impl Workout {
    /// Distance covered per step or stroke, in metres
    pub fn step_length(&self) -> f64 {
        match self {
            Workout::Running(_) | Workout::SportsWalking { .. } => LEN_STEP,
            Workout::Swimming { .. } => LEN_STROKE,
        }
    }

    /// Distance in kilometres
    pub fn distance(&self) -> f64 {
        f64::from(self.record().action()) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming {
                record,
                length_pool,
                count_pool,
            } => length_pool * f64::from(*count_pool) / M_IN_KM / record.duration(),
            _ => self.distance() / self.record().duration(),
        }
    }

    /// Kilocalories burned over the session
    pub fn spent_calories(&self) -> f64 {
        let record = self.record();
        let speed = self.mean_speed();

        match self {
            Workout::Running(_) => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * record.weight() / M_IN_KM
                    * record.duration()
                    * MIN_IN_H
            }
            Workout::SportsWalking { height, .. } => {
                let speed_ms = speed * KMH_IN_MSEC;
                (WALK_WEIGHT_MULTIPLIER * record.weight()
                    + speed_ms.powi(2) / (height / CM_IN_M)
                        * WALK_SPEED_HEIGHT_MULTIPLIER
                        * record.weight())
                    * record.duration()
                    * MIN_IN_H
            }
            Workout::Swimming { .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * record.weight()
                    * record.duration()
            }
        }
    }

    /// Collect the computed statistics into an info message
    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.record().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }

    /// Info message, rejecting statistics that overflowed past `f64` range
    pub fn checked_training_info(&self) -> Result<InfoMessage, ReadingError> {
        let info = self.show_training_info();

        for (field, value) in [
            ("distance", info.distance),
            ("speed", info.speed),
            ("calories", info.calories),
        ] {
            if !value.is_finite() {
                return Err(ReadingError::InvalidValue {
                    field,
                    value,
                    reason: "computed statistic is not a finite number",
                });
            }
        }

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingRecord;

    const EPS: f64 = 1e-9;

    fn record(action: u32, duration: f64, weight: f64) -> TrainingRecord {
        TrainingRecord::new(action, duration, weight).unwrap()
    }

    #[test]
    fn test_running_statistics() {
        let workout = Workout::running(record(15000, 1.0, 75.0));

        assert!((workout.distance() - 9.75).abs() < EPS);
        assert!((workout.mean_speed() - 9.75).abs() < EPS);
        // (18 * 9.75 + 1.79) * 75 / 1000 * 60
        assert!((workout.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_walking_statistics() {
        let workout = Workout::sports_walking(record(9000, 1.0, 75.0), 180.0).unwrap();

        assert!((workout.distance() - 5.85).abs() < EPS);
        assert!((workout.mean_speed() - 5.85).abs() < EPS);
        assert!((workout.spent_calories() - 349.2517475).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_speed_uses_pool_laps() {
        let workout = Workout::swimming(record(720, 1.0, 80.0), 25.0, 40).unwrap();

        // Stroke-based distance, lap-based speed
        assert!((workout.distance() - 0.9936).abs() < EPS);
        assert!((workout.mean_speed() - 1.0).abs() < EPS);
        assert!((workout.spent_calories() - 336.0).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scales_with_duration() {
        let one_hour = Workout::running(record(10000, 1.0, 70.0));
        let two_hours = Workout::running(record(10000, 2.0, 70.0));

        assert!((one_hour.mean_speed() - 2.0 * two_hours.mean_speed()).abs() < EPS);
    }

    #[test]
    fn test_step_lengths() {
        assert_eq!(Workout::running(record(1, 1.0, 1.0)).step_length(), LEN_STEP);
        let swim = Workout::swimming(record(1, 1.0, 1.0), 25.0, 1).unwrap();
        assert_eq!(swim.step_length(), LEN_STROKE);
    }

    #[test]
    fn test_show_training_info() {
        let info = Workout::running(record(15000, 1.0, 75.0)).show_training_info();

        assert_eq!(info.training_type, "Running");
        assert_eq!(info.duration, 1.0);
        assert!((info.speed - 9.75).abs() < EPS);
    }

    #[test]
    fn test_checked_info_rejects_overflowing_speed() {
        let workout = Workout::running(record(15000, 1e-308, 75.0));

        let err = workout.checked_training_info().unwrap_err();
        assert!(matches!(err, ReadingError::InvalidValue { field: "speed", .. }));
    }

    #[test]
    fn test_checked_info_rejects_overflowing_calories() {
        let workout = Workout::swimming(record(720, 1.0, 1e308), 25.0, 40).unwrap();

        let err = workout.checked_training_info().unwrap_err();
        assert!(matches!(err, ReadingError::InvalidValue { field: "calories", .. }));
    }

    #[test]
    fn test_checked_info_matches_plain_info() {
        let workout = Workout::sports_walking(record(9000, 1.0, 75.0), 180.0).unwrap();
        assert_eq!(workout.checked_training_info().unwrap(), workout.show_training_info());
    }
}
