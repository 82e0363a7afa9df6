//! Mod metadata model.
//!
//! The validated, structured form of a `loadstone.mod.json` descriptor.
//! Records are constructed once during a discovery run (from a parsed
//! descriptor or in-process for the bootstrap entries) and never mutated
//! afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema revision this loader understands. Descriptors declaring any other
/// value are rejected before their remaining fields are read.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Well-known descriptor name: the entry path inside a mod archive, and the
/// sibling file name inside an unpacked mod directory.
pub const DESCRIPTOR_FILE_NAME: &str = "loadstone.mod.json";

/// Expected extension for packaged mod candidates.
pub const MOD_ARCHIVE_EXTENSION: &str = "jar";

/// Metadata for a single mod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModMetadata {
    pub schema_version: u32,

    /// Globally unique identifier. Uniqueness across a run is checked by the
    /// later resolution stage, not here.
    pub id: String,
    pub name: String,
    pub version: String,

    /// Capability tags. A valid descriptor declares at least one.
    #[serde(default, rename = "type")]
    pub types: Vec<ModType>,

    pub license: License,

    /// Kept in the order the descriptor lists them.
    #[serde(default)]
    pub contributors: Vec<Contributor>,

    #[serde(default)]
    pub links: ModLinks,

    #[serde(default)]
    pub loader: LoaderData,

    /// Open bag of keys this loader does not recognize. Carried verbatim for
    /// other collaborators; never validated or interpreted here.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// What a mod provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModType {
    Library,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

/// A person or organization credited by the mod, with a free-form role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub role: String,
}

/// Informational links. Each one is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModLinks {
    pub homepage: Option<String>,
    pub issues: Option<String>,
    pub source: Option<String>,
    pub community: Option<String>,
}

/// The loader-facing portion of the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderData {
    #[serde(default)]
    pub environment: Environment,

    /// Access widener resource paths inside the mod package.
    #[serde(default)]
    pub access_wideners: Vec<String>,

    /// Mixin configuration resource paths inside the mod package.
    #[serde(default)]
    pub mixins: Vec<String>,

    /// Entrypoint name to implementation reference, in descriptor order.
    #[serde(default)]
    pub entrypoints: IndexMap<String, String>,

    /// Dependency constraints, opaque at this stage; the resolution stage
    /// interprets them.
    #[serde(default)]
    pub dependencies: Vec<serde_json::Value>,
}

/// Where a mod is applicable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Client,
    Server,
    #[default]
    Both,
}
