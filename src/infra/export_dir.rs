use std::{
    env, fs,
    path::{Path, PathBuf},
};

use directories::UserDirs;

use super::ExportError;

/// Overrides the export directory for every session when set.
pub const EXPORT_DIR_ENV: &str = "PROFIT_ANALYTICS_EXPORT_DIR";

/// Env override, then the user's download folder, then the working directory.
pub fn default_export_dir() -> PathBuf {
    if let Some(dir) = env::var_os(EXPORT_DIR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn resolve_export_dir(override_dir: Option<&Path>) -> PathBuf {
    override_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_export_dir)
}

/// Creates `dir` if needed and rejects paths that exist as plain files.
pub fn ensure_export_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::ExportDirUnavailable(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        env::temp_dir().join(format!("profit-analytics-{name}-{}", std::process::id()))
    }

    #[test]
    fn override_wins_over_default() {
        let chosen = PathBuf::from("/srv/exports");
        assert_eq!(resolve_export_dir(Some(&chosen)), chosen);
    }

    #[test]
    fn ensure_creates_nested_directories() {
        let root = scratch_dir("nested");
        let dir = root.join("a").join("b");
        ensure_export_dir(&dir).unwrap();
        assert!(dir.is_dir());
        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn ensure_rejects_plain_files() {
        let file = scratch_dir("file");
        fs::write(&file, b"not a dir").unwrap();
        let err = ensure_export_dir(&file).unwrap_err();
        assert!(matches!(err, ExportError::ExportDirUnavailable(_)));
        fs::remove_file(file).unwrap();
    }
}
