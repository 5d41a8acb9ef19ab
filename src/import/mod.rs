use std::path::Path;
use tracing::{debug, info};

use crate::error::{ImportError, ReadingError, Result, TrainStatError};
use crate::models::{SensorPackage, TrainingRecord, Workout, WorkoutKind};

pub mod csv;
pub mod json;

/// Build a workout from a sensor package code and its readings.
///
/// Readings follow constructor order: action, duration, weight, then
/// height for `WLK` or pool length and pool count for `SWM`.
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = code.parse()?;

    let workout = match (kind, readings) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Workout::running(record_from(action, duration, weight)?)
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Workout::sports_walking(record_from(action, duration, weight)?, height)?
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Workout::swimming(
                record_from(action, duration, weight)?,
                length_pool,
                whole_count("count_pool", count_pool)?,
            )?
        }
        _ => {
            return Err(ReadingError::ArgumentCount {
                kind: kind.name(),
                expected: kind.reading_count(),
                actual: readings.len(),
            }
            .into())
        }
    };

    // Extreme but positive readings can still overflow the formulas
    workout.checked_training_info()?;

    debug!(code, kind = %kind, "Package dispatched");
    Ok(workout)
}

/// Dispatch every package in order, stopping at the first bad one
pub fn read_packages(packages: &[SensorPackage]) -> Result<Vec<Workout>> {
    packages
        .iter()
        .map(|package| read_package(&package.code, &package.readings))
        .collect()
}

fn record_from(action: f64, duration: f64, weight: f64) -> Result<TrainingRecord> {
    Ok(TrainingRecord::new(
        whole_count("action", action)?,
        duration,
        weight,
    )?)
}

/// Counts arrive as floats from the sensor block but must be whole numbers
fn whole_count(field: &'static str, value: f64) -> std::result::Result<u32, ReadingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ReadingError::InvalidValue {
            field,
            value,
            reason: "must be a non-negative whole number",
        })
    }
}

/// Trait for reading sensor packages from different file formats
pub trait PackageFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read all packages from the file, in file order
    fn import_file(&self, file_path: &Path) -> Result<Vec<SensorPackage>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Manager for coordinating the package file formats
pub struct ImportManager {
    importers: Vec<Box<dyn PackageFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn PackageFormat>> = vec![
            Box::new(csv::CsvImporter::new()),
            Box::new(json::JsonImporter::new()),
        ];

        Self { importers }
    }

    /// Import a single file, picking the format from its extension
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| {
                TrainStatError::from(ImportError::UnsupportedFormat {
                    path: file_path.to_path_buf(),
                })
            })?;

        let packages = importer.import_file(file_path)?;
        info!(
            path = %file_path.display(),
            format = importer.get_format_name(),
            count = packages.len(),
            "Packages imported"
        );
        Ok(packages)
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive extension check shared by the importers
pub(crate) fn has_extension(file_path: &Path, extension: &str) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_running_package() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert!((workout.distance() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_read_walking_package() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(workout, Workout::SportsWalking { height, .. } if height == 180.0));
    }

    #[test]
    fn test_read_swimming_package() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!((workout.mean_speed() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_code_ignores_arguments() {
        for readings in [&[][..], &[1.0][..], &[15000.0, 1.0, 75.0][..]] {
            let err = read_package("XYZ", readings).unwrap_err();
            assert!(matches!(err, TrainStatError::UnknownWorkoutType { ref code } if code == "XYZ"));
        }
    }

    #[test]
    fn test_argument_count_mismatch() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        match err {
            TrainStatError::Reading(ReadingError::ArgumentCount {
                kind,
                expected,
                actual,
            }) => {
                assert_eq!(kind, "SportsWalking");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fractional_action_rejected() {
        let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainStatError::Reading(ReadingError::InvalidValue { field: "action", .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainStatError::Reading(ReadingError::InvalidValue { field: "duration", .. })
        ));
    }

    #[test]
    fn test_tiny_duration_rejected() {
        let err = read_package("RUN", &[15000.0, 1e-308, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainStatError::Reading(ReadingError::InvalidValue { field: "speed", .. })
        ));
    }

    #[test]
    fn test_read_packages_keeps_order() {
        let workouts = read_packages(&SensorPackage::demo_packages()).unwrap();
        let kinds: Vec<WorkoutKind> = workouts.iter().map(Workout::kind).collect();
        assert_eq!(
            kinds,
            vec![WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking]
        );
    }

    #[test]
    fn test_read_packages_stops_at_unknown_code() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("BIKE", vec![1.0, 1.0, 1.0]),
        ];
        assert!(matches!(
            read_packages(&packages),
            Err(TrainStatError::UnknownWorkoutType { .. })
        ));
    }

    #[test]
    fn test_manager_rejects_unknown_extension() {
        let err = ImportManager::new()
            .import_file(&PathBuf::from("packages.xml"))
            .unwrap_err();
        assert!(matches!(
            err,
            TrainStatError::Import(ImportError::UnsupportedFormat { .. })
        ));
    }
}
