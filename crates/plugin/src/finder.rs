use std::path::PathBuf;

/// Error type for finder operations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A pluggable source of candidate mod locations.
///
/// Finders are registered on the discoverer before a run starts and are never
/// added mid-run. Each candidate is a path to either a packaged mod archive
/// or an unpacked mod directory; the extractor decides how to treat it.
///
/// Returning zero candidates is not an error. Enumeration failures are fatal
/// to the whole discovery run, so a finder that cannot read its source must
/// return an error rather than an empty list.
pub trait ModFinder: Send + Sync {
    /// Enumerate candidate locations, in a stable order.
    ///
    /// Must be pure with respect to filesystem reads: no finder may mutate
    /// state another finder observes.
    fn find(&self) -> Result<Vec<PathBuf>, BoxError>;

    /// Finder name (for logging/debugging)
    fn name(&self) -> &str;
}
