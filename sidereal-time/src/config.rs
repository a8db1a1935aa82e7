//! Location of the nutation coefficient tables.
//!
//! Each table path is taken from, in order:
//!
//! 1. an explicit path (the `--ls-table` / `--pl-table` flags)
//! 2. `SIDEREAL_NUTATION_LS` / `SIDEREAL_NUTATION_PL`
//! 3. `nut_ls.txt` / `nut_pl.txt` in `SIDEREAL_TABLE_DIR`
//! 4. the first of `$XDG_DATA_HOME/sidereal`, `$HOME/.local/share/sidereal`
//!    and `/usr/local/share/sidereal` that holds the file
//!
//! The tables are loaded once into an `Arc<CoefficientTables>` and shared.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sidereal_core::{AstroError, CoefficientTables};

use crate::TimeResult;

pub const LUNISOLAR_FILE: &str = "nut_ls.txt";
pub const PLANETARY_FILE: &str = "nut_pl.txt";

pub const ENV_LUNISOLAR: &str = "SIDEREAL_NUTATION_LS";
pub const ENV_PLANETARY: &str = "SIDEREAL_NUTATION_PL";
pub const ENV_TABLE_DIR: &str = "SIDEREAL_TABLE_DIR";

const SYSTEM_TABLE_DIR: &str = "/usr/local/share/sidereal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub lunisolar: PathBuf,
    pub planetary: PathBuf,
}

impl TableConfig {
    pub fn new(lunisolar: impl Into<PathBuf>, planetary: impl Into<PathBuf>) -> Self {
        Self {
            lunisolar: lunisolar.into(),
            planetary: planetary.into(),
        }
    }

    /// Both tables under their standard names in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(LUNISOLAR_FILE), dir.join(PLANETARY_FILE))
    }

    /// Resolves both paths against the process environment.
    pub fn resolve(lunisolar: Option<PathBuf>, planetary: Option<PathBuf>) -> TimeResult<Self> {
        Self::resolve_with(lunisolar, planetary, |key| std::env::var_os(key))
    }

    /// Same as [`resolve`](Self::resolve) with a caller-supplied environment.
    ///
    /// # Errors
    ///
    /// `MissingCoefficientTable` naming the searched locations when a table
    /// cannot be found.
    pub fn resolve_with<F>(lunisolar: Option<PathBuf>, planetary: Option<PathBuf>, env: F) -> TimeResult<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let lunisolar = match lunisolar {
            Some(path) => path,
            None => locate(ENV_LUNISOLAR, LUNISOLAR_FILE, "lunisolar", &env)?,
        };
        let planetary = match planetary {
            Some(path) => path,
            None => locate(ENV_PLANETARY, PLANETARY_FILE, "planetary", &env)?,
        };
        Ok(Self { lunisolar, planetary })
    }

    /// Directories searched when no explicit path or `SIDEREAL_TABLE_DIR` is set.
    pub fn candidate_dirs<F>(env: F) -> Vec<PathBuf>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut dirs = Vec::new();
        if let Some(xdg) = env("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            dirs.push(PathBuf::from(xdg).join("sidereal"));
        }
        if let Some(home) = env("HOME").filter(|v| !v.is_empty()) {
            dirs.push(PathBuf::from(home).join(".local/share/sidereal"));
        }
        dirs.push(PathBuf::from(SYSTEM_TABLE_DIR));
        dirs
    }

    /// Reads and parses both tables.
    pub fn load(&self) -> TimeResult<Arc<CoefficientTables>> {
        let tables = CoefficientTables::from_files(&self.lunisolar, &self.planetary)?;
        Ok(Arc::new(tables))
    }
}

fn locate<F>(env_key: &str, file: &str, table: &str, env: &F) -> TimeResult<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(path) = env(env_key).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(dir) = env(ENV_TABLE_DIR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir).join(file));
    }

    let candidates: Vec<PathBuf> = TableConfig::candidate_dirs(env)
        .into_iter()
        .map(|dir| dir.join(file))
        .collect();
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        tracing::debug!(table, path = %found.display(), "found coefficient table");
        return Ok(found.clone());
    }

    let searched: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
    Err(AstroError::missing_table(&format!(
        "{} (set {} or {}; searched {})",
        table,
        env_key,
        ENV_TABLE_DIR,
        searched.join(", ")
    ))
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidereal_core::test_helpers::{FIXTURE_LUNISOLAR, FIXTURE_PLANETARY};
    use std::collections::HashMap;
    use std::fs;

    fn env_from(pairs: &[(&str, &Path)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.as_os_str().to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_paths_win() {
        let env = env_from(&[(ENV_TABLE_DIR, Path::new("/elsewhere"))]);
        let cfg = TableConfig::resolve_with(Some("a.txt".into()), Some("b.txt".into()), env).unwrap();
        assert_eq!(cfg, TableConfig::new("a.txt", "b.txt"));
    }

    #[test]
    fn test_env_file_then_table_dir() {
        let env = env_from(&[
            (ENV_LUNISOLAR, Path::new("/data/ls.txt")),
            (ENV_TABLE_DIR, Path::new("/tables")),
        ]);
        let cfg = TableConfig::resolve_with(None, None, env).unwrap();
        assert_eq!(cfg.lunisolar, PathBuf::from("/data/ls.txt"));
        assert_eq!(cfg.planetary, PathBuf::from("/tables").join(PLANETARY_FILE));
    }

    #[test]
    fn test_candidate_dirs_are_searched() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".local/share/sidereal");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(LUNISOLAR_FILE), FIXTURE_LUNISOLAR).unwrap();
        fs::write(dir.join(PLANETARY_FILE), FIXTURE_PLANETARY).unwrap();

        let env = env_from(&[("HOME", home.path())]);
        let cfg = TableConfig::resolve_with(None, None, env).unwrap();
        assert_eq!(cfg, TableConfig::in_dir(&dir));

        let tables = cfg.load().unwrap();
        assert_eq!(tables.lunisolar().len(), 77);
        assert_eq!(tables.planetary().len(), 3);
    }

    #[test]
    fn test_xdg_comes_before_home() {
        let env = env_from(&[("XDG_DATA_HOME", Path::new("/xdg")), ("HOME", Path::new("/home/u"))]);
        let dirs = TableConfig::candidate_dirs(env);
        assert_eq!(dirs[0], PathBuf::from("/xdg/sidereal"));
        assert_eq!(dirs[1], PathBuf::from("/home/u/.local/share/sidereal"));
        assert_eq!(dirs[2], PathBuf::from(SYSTEM_TABLE_DIR));
    }

    #[test]
    fn test_missing_tables_report_search_path() {
        let empty = tempfile::tempdir().unwrap();
        let env = env_from(&[("HOME", empty.path())]);
        let err = TableConfig::resolve_with(None, None, env).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Missing coefficient table: lunisolar"), "{}", msg);
        assert!(msg.contains(ENV_LUNISOLAR), "{}", msg);
    }

    #[test]
    fn test_load_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableConfig::in_dir(dir.path()).load().unwrap_err();
        assert!(err.is_recoverable());
    }
}
