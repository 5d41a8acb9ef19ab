use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, PackageFormat};
use crate::models::SensorPackage;

/// CSV importer for headerless package rows.
///
/// Each row is a workout code followed by its readings, e.g.
/// `WLK,9000,1,75,180`. Rows may differ in length; `#` starts a comment line.
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse packages from any reader
    pub fn read_packages<R: Read>(&self, source: R) -> Result<Vec<SensorPackage>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(source);

        let mut packages = Vec::new();
        for row in reader.records() {
            let row = row.map_err(ImportError::from)?;
            let line = row.position().map_or(0, |pos| pos.line());

            let mut fields = row.iter();
            let code = match fields.next() {
                Some(code) if !code.is_empty() => code,
                _ => return Err(ImportError::EmptyRow { line }.into()),
            };

            let readings = fields
                .map(|field| {
                    field.parse::<f64>().map_err(|_| ImportError::Parse {
                        line,
                        value: field.to_string(),
                    })
                })
                .collect::<std::result::Result<Vec<f64>, _>>()?;

            packages.push(SensorPackage::new(code, readings));
        }

        Ok(packages)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "csv")
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let file = std::fs::File::open(file_path)?;
        self.read_packages(file)
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}
