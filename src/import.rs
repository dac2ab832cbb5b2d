// 📂 CSV Import - Bulk registrations
// Expects a header row: username,password

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
}

/// Load registration requests from a CSV file
///
/// Fields are taken verbatim (no trimming), so "Jastine " keeps its space
/// until normalization.
pub fn load_registrations(csv_path: &Path) -> Result<Vec<Registration>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;

    let mut registrations = Vec::new();

    for (row, result) in rdr.deserialize().enumerate() {
        let registration: Registration = result
            .with_context(|| format!("Failed to deserialize registration on row {}", row + 1))?;
        registrations.push(registration);
    }

    Ok(registrations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_registrations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username,password").unwrap();
        writeln!(file, "Jastine ,S3cur3Pa$$").unwrap();
        writeln!(file, "mochi,weak").unwrap();
        file.flush().unwrap();

        let registrations = load_registrations(file.path()).unwrap();

        assert_eq!(registrations.len(), 2);
        assert_eq!(registrations[0].username, "Jastine ");
        assert_eq!(registrations[0].password, "S3cur3Pa$$");
        assert_eq!(registrations[1].username, "mochi");
    }

    #[test]
    fn test_load_registrations_missing_column_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username").unwrap();
        writeln!(file, "jastine").unwrap();
        file.flush().unwrap();

        assert!(load_registrations(file.path()).is_err());
    }

    #[test]
    fn test_load_registrations_missing_file_fails() {
        let err = load_registrations(Path::new("/nonexistent/registrations.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
