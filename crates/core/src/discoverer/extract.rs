//! Descriptor extraction from candidate locations.
//!
//! A candidate is either a packaged mod archive or an unpacked mod
//! directory. Archives additionally get registered on the load namespace so
//! their classes are resolvable once entrypoints run.

use crate::error::DiscoveryError;
use loadstone_api::{DESCRIPTOR_FILE_NAME, MOD_ARCHIVE_EXTENSION};
use loadstone_plugin::ClasspathAugmenter;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Pull the raw descriptor text out of a candidate location.
///
/// Returns `Ok(None)` for candidates that are neither a regular file nor a
/// directory (a path that vanished between find and extract, a special
/// file); those are skipped without aborting the run.
pub fn extract_descriptor(
    path: &Path,
    augmenter: &dyn ClasspathAugmenter,
) -> Result<Option<String>, DiscoveryError> {
    if path.is_file() {
        read_archive_descriptor(path, augmenter).map(Some)
    } else if path.is_dir() {
        read_directory_descriptor(path).map(Some)
    } else {
        Ok(None)
    }
}

fn read_archive_descriptor(
    path: &Path,
    augmenter: &dyn ClasspathAugmenter,
) -> Result<String, DiscoveryError> {
    if path.extension().and_then(|e| e.to_str()) != Some(MOD_ARCHIVE_EXTENSION) {
        return Err(DiscoveryError::InvalidModFile(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut entry = match archive.by_name(DESCRIPTOR_FILE_NAME) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(DiscoveryError::MissingDescriptor(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    drop(entry);

    let raw = String::from_utf8(bytes)
        .map_err(|_| DiscoveryError::InvalidUtf8(path.to_path_buf()))?;

    // The archive must be on the load namespace before later stages resolve
    // classes out of it, so registration happens here, ahead of parsing. An
    // archive without a descriptor entry is never registered.
    augmenter.add_to_classpath(path);

    Ok(raw)
}

fn read_directory_descriptor(path: &Path) -> Result<String, DiscoveryError> {
    let descriptor = path.join(DESCRIPTOR_FILE_NAME);
    if !descriptor.is_file() {
        return Err(DiscoveryError::MissingDescriptor(path.to_path_buf()));
    }
    let bytes = fs::read(&descriptor)?;
    String::from_utf8(bytes).map_err(|_| DiscoveryError::InvalidUtf8(descriptor))
}
