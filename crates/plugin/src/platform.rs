//! Self-description accessors for the host game and its runtime.
//!
//! The discoverer consumes these to build the synthetic bootstrap records;
//! the embedding launcher implements them.

/// Reports the running game's version.
pub trait GameVersionProvider: Send + Sync {
    fn current_version(&self) -> String;
}

/// Reports the managed runtime's own name and specification version.
pub trait RuntimeInfo: Send + Sync {
    /// Runtime display name, e.g. the JVM name.
    fn name(&self) -> String;

    /// Raw specification version, e.g. `"1.8"` or `"17"`. Legacy prefix
    /// normalization happens in the discoverer, not here.
    fn spec_version(&self) -> String;
}
