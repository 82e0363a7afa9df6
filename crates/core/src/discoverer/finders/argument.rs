use loadstone_plugin::{BoxError, ModFinder};
use std::path::PathBuf;

/// Environment variable holding extra mod paths, separated by the platform
/// path separator.
pub const MODS_ENV_VAR: &str = "LOADSTONE_MODS";

/// Yields paths the embedder supplied explicitly, e.g. from a `--mods`
/// launch flag. Paths are passed through untouched, in the order given;
/// whether each one is valid is the extractor's call.
pub struct ArgumentModFinder {
    paths: Vec<PathBuf>,
}

impl ArgumentModFinder {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Build from the `LOADSTONE_MODS` environment variable. An unset
    /// variable yields no candidates.
    pub fn from_env() -> Self {
        let paths = std::env::var_os(MODS_ENV_VAR)
            .map(|raw| std::env::split_paths(&raw).collect())
            .unwrap_or_default();
        Self { paths }
    }
}

impl ModFinder for ArgumentModFinder {
    fn find(&self) -> Result<Vec<PathBuf>, BoxError> {
        Ok(self.paths.clone())
    }

    fn name(&self) -> &str {
        "Argument Finder"
    }
}
