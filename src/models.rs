use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReadingError, TrainStatError};

/// Workout types understood by the package dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Every supported kind, in dispatch table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code sent by the sensor block
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the training summary
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of readings a package of this kind carries
    pub fn reading_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| TrainStatError::UnknownWorkoutType {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw inputs shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    /// Steps or strokes counted by the sensor
    action: u32,

    /// Session length in hours
    duration: f64,

    /// Athlete weight in kilograms
    weight: f64,
}

impl TrainingRecord {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, ReadingError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(ReadingError::InvalidValue {
                field: "duration",
                value: duration,
                reason: "must be greater than zero",
            });
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(ReadingError::InvalidValue {
                field: "weight",
                value: weight,
                reason: "must be a non-negative number",
            });
        }

        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A training session with its type-specific extras
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(TrainingRecord),
    SportsWalking {
        record: TrainingRecord,
        /// Athlete height in centimetres
        height: f64,
    },
    Swimming {
        record: TrainingRecord,
        /// Pool length in metres
        length_pool: f64,
        /// Number of pool lengths swum
        count_pool: u32,
    },
}

impl Workout {
    pub fn running(record: TrainingRecord) -> Self {
        Workout::Running(record)
    }

    pub fn sports_walking(record: TrainingRecord, height: f64) -> Result<Self, ReadingError> {
        if !(height.is_finite() && height > 0.0) {
            return Err(ReadingError::InvalidValue {
                field: "height",
                value: height,
                reason: "must be greater than zero",
            });
        }
        Ok(Workout::SportsWalking { record, height })
    }

    pub fn swimming(
        record: TrainingRecord,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, ReadingError> {
        if !(length_pool.is_finite() && length_pool >= 0.0) {
            return Err(ReadingError::InvalidValue {
                field: "length_pool",
                value: length_pool,
                reason: "must be a non-negative number",
            });
        }
        Ok(Workout::Swimming {
            record,
            length_pool,
            count_pool,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn record(&self) -> &TrainingRecord {
        match self {
            Workout::Running(record)
            | Workout::SportsWalking { record, .. }
            | Workout::Swimming { record, .. } => record,
        }
    }
}

/// Computed statistics for one training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,

    /// Hours
    pub duration: f64,

    /// Kilometres
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Kilocalories burned
    pub calories: f64,
}

/// One raw package as delivered by the sensor block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (RUN, WLK, SWM)
    pub code: String,

    /// Readings in constructor order
    pub readings: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }

    /// Packages processed when no other source is given
    pub fn demo_packages() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
