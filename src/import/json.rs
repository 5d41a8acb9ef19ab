use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, PackageFormat};
use crate::models::SensorPackage;

/// JSON importer for an array of `{ "code": ..., "readings": [...] }` objects
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn read_packages(&self, content: &str) -> Result<Vec<SensorPackage>> {
        let packages = serde_json::from_str(content).map_err(ImportError::from)?;
        Ok(packages)
    }
}

impl Default for JsonImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "json")
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let content = std::fs::read_to_string(file_path)?;
        self.read_packages(&content)
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainStatError;

    #[test]
    fn test_read_packages() {
        let content = r#"[
            {"code": "RUN", "readings": [15000, 1, 75]},
            {"code": "SWM", "readings": [720, 1, 80, 25, 40]}
        ]"#;
        let packages = JsonImporter::new().read_packages(content).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].readings.len(), 5);
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonImporter::new().read_packages("{\"code\": \"RUN\"").unwrap_err();
        assert!(matches!(err, TrainStatError::Import(ImportError::Json(_))));
    }

    #[test]
    fn test_extension_check_ignores_case() {
        assert!(JsonImporter::new().can_import(Path::new("packages.JSON")));
        assert!(!JsonImporter::new().can_import(Path::new("packages.csv")));
    }
}
