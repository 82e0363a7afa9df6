//! Concrete finder strategies shipped with the loader.

mod argument;
mod directory;

pub use argument::{ArgumentModFinder, MODS_ENV_VAR};
pub use directory::DirectoryModFinder;
