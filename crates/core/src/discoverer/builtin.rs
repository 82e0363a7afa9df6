//! Synthetic bootstrap records.
//!
//! Two records are built in-process at the start of every run, never read
//! from a file: one for the game itself and one for the Java runtime hosting
//! it. They exist so the resolution stage can express dependency constraints
//! against the game and the runtime the same way it does against real mods.

use loadstone_api::{
    CURRENT_SCHEMA_VERSION, Contributor, License, LoaderData, ModLinks, ModMetadata, ModType,
};
use loadstone_plugin::{GameVersionProvider, RuntimeInfo};

/// Fixed id of the synthetic game record.
pub const GAME_MOD_ID: &str = "minecraft";

/// Fixed id of the synthetic runtime record.
pub const RUNTIME_MOD_ID: &str = "java";

pub(crate) fn game_metadata(game: &dyn GameVersionProvider) -> ModMetadata {
    ModMetadata {
        schema_version: CURRENT_SCHEMA_VERSION,
        id: GAME_MOD_ID.to_string(),
        name: "Minecraft".to_string(),
        version: game.current_version(),
        types: vec![ModType::Library],
        license: License {
            name: "Unknown".to_string(),
            url: None,
        },
        contributors: vec![Contributor {
            name: "Mojang".to_string(),
            role: "Author".to_string(),
        }],
        links: ModLinks {
            homepage: Some("https://minecraft.net".to_string()),
            issues: None,
            source: None,
            community: Some("https://discord.gg/minecraft".to_string()),
        },
        loader: LoaderData::default(),
        additional: serde_json::Map::new(),
    }
}

pub(crate) fn runtime_metadata(runtime: &dyn RuntimeInfo) -> ModMetadata {
    let spec_version = runtime.spec_version();
    ModMetadata {
        schema_version: CURRENT_SCHEMA_VERSION,
        id: RUNTIME_MOD_ID.to_string(),
        name: runtime.name(),
        version: strip_legacy_prefix(&spec_version).to_string(),
        types: vec![ModType::Library],
        license: License {
            name: "Unknown".to_string(),
            url: None,
        },
        contributors: Vec::new(),
        links: ModLinks {
            homepage: Some("https://java.com".to_string()),
            issues: None,
            source: None,
            community: None,
        },
        loader: LoaderData::default(),
        additional: serde_json::Map::new(),
    }
}

/// Pre-9 Java reports specification versions as `1.x`; normalize those to
/// the bare major number.
fn strip_legacy_prefix(version: &str) -> &str {
    version.strip_prefix("1.").unwrap_or(version)
}
