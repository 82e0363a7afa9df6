use std::path::Path;

/// Registers mod archives on the running load namespace so their classes and
/// resources become resolvable by later stages (entrypoint invocation, mixin
/// application).
///
/// Kept as an injected seam so discovery can be exercised with a recording
/// stub instead of a live class loader bridge.
pub trait ClasspathAugmenter: Send + Sync {
    /// Called exactly once per archive candidate, after its descriptor entry
    /// has been read and before the descriptor is parsed. Whether the
    /// augmentation is visible synchronously is the implementor's contract.
    fn add_to_classpath(&self, path: &Path);
}
