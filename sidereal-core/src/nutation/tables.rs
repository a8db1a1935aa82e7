//! The immutable coefficient dataset shared by every computation.
//!
//! [`CoefficientTables`] owns the luni-solar and planetary nutation series and
//! the CIO locator series. It is built once, wrapped in an `Arc`, and handed
//! to [`NutationIAU2006A`](super::NutationIAU2006A) and the sidereal-time
//! pipeline; nothing mutates it afterwards.

use std::fs;
use std::path::Path;

use super::parse::{parse_lunisolar_table, parse_planetary_table};
use super::terms::{LunisolarTerm, PlanetaryTerm};
use crate::cio::CioLocatorSeries;
use crate::errors::{AstroError, AstroResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTables {
    lunisolar: Vec<LunisolarTerm>,
    planetary: Vec<PlanetaryTerm>,
    cio_locator: CioLocatorSeries,
}

impl CoefficientTables {
    /// Assembles the dataset from parsed rows and the standard CIO locator series.
    ///
    /// # Errors
    ///
    /// `MissingCoefficientTable` if either series is empty.
    pub fn new(lunisolar: Vec<LunisolarTerm>, planetary: Vec<PlanetaryTerm>) -> AstroResult<Self> {
        if lunisolar.is_empty() {
            return Err(AstroError::missing_table("lunisolar"));
        }
        if planetary.is_empty() {
            return Err(AstroError::missing_table("planetary"));
        }
        Ok(Self {
            lunisolar,
            planetary,
            cio_locator: CioLocatorSeries::iau2006(),
        })
    }

    /// Replaces the CIO locator series.
    pub fn with_cio_locator(mut self, series: CioLocatorSeries) -> Self {
        self.cio_locator = series;
        self
    }

    /// Parses both tables from their text.
    pub fn from_strs(lunisolar: &str, planetary: &str) -> AstroResult<Self> {
        let ls = parse_lunisolar_table(lunisolar, "lunisolar table")?;
        let pl = parse_planetary_table(planetary, "planetary table")?;
        Self::new(ls, pl)
    }

    /// Reads and parses both tables from disk.
    pub fn from_files(lunisolar: &Path, planetary: &Path) -> AstroResult<Self> {
        let ls_text = read_table(lunisolar)?;
        let pl_text = read_table(planetary)?;

        let ls = parse_lunisolar_table(&ls_text, &lunisolar.display().to_string())?;
        tracing::info!(path = %lunisolar.display(), rows = ls.len(), "loaded lunisolar nutation table");

        let pl = parse_planetary_table(&pl_text, &planetary.display().to_string())?;
        tracing::info!(path = %planetary.display(), rows = pl.len(), "loaded planetary nutation table");

        Self::new(ls, pl)
    }

    pub fn lunisolar(&self) -> &[LunisolarTerm] {
        &self.lunisolar
    }

    pub fn planetary(&self) -> &[PlanetaryTerm] {
        &self.planetary
    }

    pub fn cio_locator(&self) -> &CioLocatorSeries {
        &self.cio_locator
    }
}

fn read_table(path: &Path) -> AstroResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AstroError::data_error(
            "nutation table",
            "read",
            &format!("{}: {}", path.display(), e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_tables, FIXTURE_LUNISOLAR, FIXTURE_PLANETARY};
    use std::io::Write;

    #[test]
    fn fixtures_parse() {
        let tables = fixture_tables();
        assert_eq!(tables.lunisolar().len(), 77);
        assert_eq!(tables.planetary().len(), 3);
        assert_eq!(tables.cio_locator().term_count(), 66);
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let ls_path = dir.path().join("nut_ls.txt");
        let pl_path = dir.path().join("nut_pl.txt");
        fs::File::create(&ls_path)
            .unwrap()
            .write_all(FIXTURE_LUNISOLAR.as_bytes())
            .unwrap();
        fs::File::create(&pl_path)
            .unwrap()
            .write_all(FIXTURE_PLANETARY.as_bytes())
            .unwrap();

        let tables = CoefficientTables::from_files(&ls_path, &pl_path).unwrap();
        assert_eq!(tables, fixture_tables());
    }

    #[test]
    fn missing_file_is_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoefficientTables::from_files(
            &dir.path().join("absent_ls.txt"),
            &dir.path().join("absent_pl.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, AstroError::DataError { .. }));
        assert!(err.to_string().contains("absent_ls.txt"));
    }

    #[test]
    fn empty_series_is_missing_table() {
        let ls = parse_lunisolar_table(FIXTURE_LUNISOLAR, "ls").unwrap();
        let err = CoefficientTables::new(ls, Vec::new()).unwrap_err();
        assert!(matches!(err, AstroError::MissingCoefficientTable { .. }));
    }

    #[test]
    fn cio_locator_can_be_replaced() {
        let series = CioLocatorSeries::new(
            [0.0; 6],
            [Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        );
        let tables = fixture_tables().with_cio_locator(series);
        assert_eq!(tables.cio_locator().term_count(), 0);
    }
}
