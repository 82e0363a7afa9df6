//! Collaborator seams for the discovery pipeline.
//!
//! This crate defines the trait boundaries the discoverer composes against:
//! - Finder strategies that produce candidate mod locations
//! - Classpath augmentation for discovered archives
//! - Self-description of the host game and its managed runtime
//!
//! Concrete implementations live with whoever owns the concern: the core
//! crate ships filesystem finders, the embedding launcher supplies the
//! classpath bridge and platform accessors.

pub mod classpath;
pub mod finder;
pub mod platform;

pub use classpath::ClasspathAugmenter;
pub use finder::{BoxError, ModFinder};
pub use platform::{GameVersionProvider, RuntimeInfo};
