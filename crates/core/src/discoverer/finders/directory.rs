use loadstone_api::MOD_ARCHIVE_EXTENSION;
use loadstone_plugin::{BoxError, ModFinder};
use std::fs;
use std::path::PathBuf;

/// Scans a single mods directory for packaged mods.
///
/// The scan is non-recursive and only yields `*.jar` files; stray files and
/// nested directories are ignored. Candidates are sorted by path so the
/// discovery order does not depend on readdir order.
pub struct DirectoryModFinder {
    directory: PathBuf,
}

impl DirectoryModFinder {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ModFinder for DirectoryModFinder {
    fn find(&self) -> Result<Vec<PathBuf>, BoxError> {
        if !self.directory.is_dir() {
            // A missing mods directory just means nothing is installed.
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(MOD_ARCHIVE_EXTENSION)
            {
                candidates.push(path);
            }
        }
        candidates.sort();
        Ok(candidates)
    }

    fn name(&self) -> &str {
        "Directory Finder"
    }
}
