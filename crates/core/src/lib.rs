pub mod discoverer;
pub mod error;
pub mod metadata;

pub use discoverer::{DiscoveryState, ModDiscoverer};
pub use error::{DescriptorError, DiscoveryError, Result};
