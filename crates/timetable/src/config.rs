/// Portal configuration: seed rosters and CSV sources
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::course::{Course, LabSession};
use crate::error::TimetableError;

/// Top-level portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Courses visible to students at start-up
    #[serde(default)]
    pub catalog: Vec<Course>,
    /// Courses the instructor already teaches
    #[serde(default)]
    pub teaching: Vec<Course>,
    /// Courses the student is already enrolled in
    #[serde(default)]
    pub enrolled: Vec<Course>,
    /// Courses awaiting admin approval
    #[serde(default)]
    pub pending: Vec<Course>,
    /// CSV files imported into the catalog at start-up
    #[serde(default)]
    pub csv_imports: Vec<PathBuf>,
}

impl PortalConfig {
    /// Loads the configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON config file
    ///
    /// # Returns
    /// * `Ok(PortalConfig)` - Loaded configuration; relative CSV paths are
    ///   resolved against the config file's directory
    /// * `Err` - If the file can't be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self, TimetableError> {
        let content = fs::read_to_string(path).map_err(|e| TimetableError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        let mut config: PortalConfig = serde_json::from_str(&content)?;

        if let Some(base) = path.parent() {
            for csv in &mut config.csv_imports {
                if csv.is_relative() {
                    *csv = base.join(&*csv);
                }
            }
        }

        Ok(config)
    }

    /// Creates a configuration with no courses at all
    pub fn empty() -> Self {
        PortalConfig {
            catalog: Vec::new(),
            teaching: Vec::new(),
            enrolled: Vec::new(),
            pending: Vec::new(),
            csv_imports: Vec::new(),
        }
    }
}

/// Seed data every fresh portal starts with.
impl Default for PortalConfig {
    fn default() -> Self {
        let data_structures = Course::new("CS201", "Data Structures", "L5", 3)
            .with_lab(LabSession::with_defaults("LB5"));

        PortalConfig {
            catalog: Vec::new(),
            teaching: vec![
                data_structures.clone(),
                Course::new("CS301", "Artificial Intelligence", "L6", 2),
            ],
            enrolled: vec![
                data_structures,
                Course::new("CS301", "Operating Systems", "L6", 2),
            ],
            pending: vec![
                Course::new("CS F213", "Object Oriented Programming", "L1", 3)
                    .with_lab(LabSession::with_defaults("P1")),
            ],
            csv_imports: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let config = PortalConfig::default();
        assert_eq!(config.teaching.len(), 2);
        assert_eq!(config.enrolled.len(), 2);
        assert_eq!(config.pending[0].course_code, "CS F213");
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PortalConfig = serde_json::from_str(
            r#"{
                "pending": [{
                    "course_code": "CS500",
                    "course_name": "Thesis",
                    "lecture_section": "L1",
                    "lecture_count": 1,
                    "lecture_days": "F",
                    "lecture_time": "4:00 - 5:00"
                }]
            }"#,
        )
        .unwrap();
        assert!(config.catalog.is_empty());
        assert_eq!(config.pending.len(), 1);
    }

    #[test]
    fn test_bad_day_pattern_is_rejected() {
        let result: Result<PortalConfig, _> = serde_json::from_str(
            r#"{
                "catalog": [{
                    "course_code": "CS500",
                    "course_name": "Thesis",
                    "lecture_section": "L1",
                    "lecture_count": 1,
                    "lecture_days": "MZ",
                    "lecture_time": "4:00 - 5:00"
                }]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = PortalConfig::load_from_file(Path::new("/nonexistent/portal.json")).unwrap_err();
        assert!(matches!(err, TimetableError::Config { .. }));
    }
}
