pub mod metadata;

pub use metadata::{
    CURRENT_SCHEMA_VERSION, Contributor, DESCRIPTOR_FILE_NAME, Environment, License, LoaderData,
    MOD_ARCHIVE_EXTENSION, ModLinks, ModMetadata, ModType,
};
