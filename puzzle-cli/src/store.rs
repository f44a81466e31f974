//! Local store of puzzle input files
//!
//! Inputs are plain files named `{year}_day{day:02}.txt` under a single
//! directory. Nothing is fetched: a missing file stays missing and is
//! reported to the user.

use crate::error::StoreError;
use std::fs;
use std::path::PathBuf;

/// Directory-backed lookup of puzzle inputs
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Create a store over a directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path where the input for a specific year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for year/day, or None if the file is absent
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, StoreError> {
        let path = self.input_path(year, day);
        if path.is_file() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        let path = store.input_path(2025, 4);
        assert!(path.to_string_lossy().ends_with("2025_day04.txt"));

        let path = store.input_path(2023, 25);
        assert!(path.to_string_lossy().ends_with("2023_day25.txt"));
    }

    #[test]
    fn test_missing_input_is_none() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2025, 4));
        assert!(store.get(2025, 4).unwrap().is_none());
    }

    #[test]
    fn test_present_input_is_read() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let content = ".@@.\n@@@@\n.@@.\n";
        fs::write(store.input_path(2025, 4), content).unwrap();

        assert!(store.contains(2025, 4));
        assert_eq!(store.get(2025, 4).unwrap(), Some(content.to_string()));
    }
}
