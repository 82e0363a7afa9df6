use loadstone_api::CURRENT_SCHEMA_VERSION;
use loadstone_plugin::BoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal discovery failures. There is no warn-and-skip tier: any of these
/// aborts the whole run.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("invalid mod file: {0}")]
    InvalidModFile(PathBuf),
    #[error("no mod descriptor in {0}")]
    MissingDescriptor(PathBuf),
    #[error("mod descriptor in {0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error("mod finder error: {0}")]
    Finder(String),
    #[error("mod discovery already ran")]
    AlreadyDiscovered,
}

impl From<BoxError> for DiscoveryError {
    fn from(err: BoxError) -> Self {
        DiscoveryError::Finder(err.to_string())
    }
}

/// Descriptor parse failures, surfaced unmodified through discovery.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("malformed mod descriptor: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mod descriptor declares no schemaVersion")]
    MissingSchemaVersion,
    #[error("unsupported schema version {0}, expected {CURRENT_SCHEMA_VERSION}")]
    UnsupportedSchemaVersion(u64),
    #[error("mod descriptor declares no type")]
    EmptyTypes,
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
