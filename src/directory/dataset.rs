//! Static hospital directory, loaded once at startup and read-only after.

use std::path::Path;
use std::sync::Arc;

use crate::models::{Hospital, HospitalListing};

use super::filter::{filter_hospitals, list_hospitals};
use super::DirectoryError;

/// Dataset shipped with the binary, used when no file is configured.
const BUNDLED_HOSPITALS: &str = include_str!("../../data/hospitals.json");

/// Read-only hospital directory. Cheap to clone; clones share the data.
#[derive(Debug, Clone)]
pub struct HospitalDirectory {
    hospitals: Arc<[Hospital]>,
}

impl HospitalDirectory {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self {
            hospitals: hospitals.into(),
        }
    }

    /// Parse a JSON array of hospitals.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let hospitals: Vec<Hospital> = serde_json::from_str(json)?;
        Ok(Self::new(hospitals))
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json(BUNDLED_HOSPITALS)
    }

    /// Load a JSON dataset from disk.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            hospitals = directory.len(),
            "Hospital directory loaded"
        );
        Ok(directory)
    }

    /// Load from `path` when given, otherwise use the bundled dataset.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, DirectoryError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let directory = Self::bundled()?;
                tracing::info!(hospitals = directory.len(), "Using bundled hospital directory");
                Ok(directory)
            }
        }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    pub fn filter(&self, city: Option<&str>, department: Option<&str>) -> Vec<&Hospital> {
        filter_hospitals(&self.hospitals, city, department)
    }

    pub fn list(&self, city: Option<&str>, department: Option<&str>) -> HospitalListing {
        list_hospitals(&self.hospitals, city, department)
    }
}
