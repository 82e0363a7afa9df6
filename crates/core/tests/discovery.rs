//! End-to-end discovery over real fixture packages.

use loadstone_api::{DESCRIPTOR_FILE_NAME, Environment, ModType};
use loadstone_core::discoverer::builtin::{GAME_MOD_ID, RUNTIME_MOD_ID};
use loadstone_core::discoverer::finders::{ArgumentModFinder, DirectoryModFinder};
use loadstone_core::{DiscoveryError, DiscoveryState, ModDiscoverer};
use loadstone_plugin::{ClasspathAugmenter, GameVersionProvider, RuntimeInfo};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingAugmenter {
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingAugmenter {
    fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl ClasspathAugmenter for RecordingAugmenter {
    fn add_to_classpath(&self, path: &Path) {
        self.calls.lock().unwrap().push(path.to_path_buf());
    }
}

struct FakeGame;

impl GameVersionProvider for FakeGame {
    fn current_version(&self) -> String {
        "1.20.4".to_string()
    }
}

struct FakeRuntime;

impl RuntimeInfo for FakeRuntime {
    fn name(&self) -> String {
        "OpenJDK 64-Bit Server VM".to_string()
    }

    fn spec_version(&self) -> String {
        "1.8".to_string()
    }
}

fn descriptor(id: &str, environment: &str) -> String {
    format!(
        r#"{{
            "schemaVersion": 1,
            "id": "{id}",
            "name": "{id}",
            "version": "1.0.0",
            "type": ["content"],
            "license": {{"name": "MIT", "url": null}},
            "loader": {{"environment": "{environment}", "entrypoints": {{"main": "com.example.{id}.Init"}}}}
        }}"#
    )
}

fn write_mod_jar(path: &Path, descriptor_text: Option<&str>) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    if let Some(text) = descriptor_text {
        zip.start_file(DESCRIPTOR_FILE_NAME, options).unwrap();
        zip.write_all(text.as_bytes()).unwrap();
    }
    zip.start_file("assets/icon.png", options).unwrap();
    zip.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();

    zip.finish().unwrap();
}

fn write_dir_mod(root: &Path, id: &str) -> PathBuf {
    let mod_dir = root.join(id);
    fs::create_dir(&mod_dir).unwrap();
    fs::write(mod_dir.join(DESCRIPTOR_FILE_NAME), descriptor(id, "both")).unwrap();
    mod_dir
}

#[test]
fn test_full_discovery_run() {
    let root = tempdir().unwrap();
    let mods_dir = root.path().join("mods");
    fs::create_dir(&mods_dir).unwrap();

    let alpha_jar = mods_dir.join("alpha.jar");
    let beta_jar = mods_dir.join("beta.jar");
    write_mod_jar(&alpha_jar, Some(&descriptor("alpha", "client")));
    write_mod_jar(&beta_jar, Some(&descriptor("beta", "both")));
    let dev_mod = write_dir_mod(root.path(), "devmod");

    let augmenter = Arc::new(RecordingAugmenter::default());
    let mut discoverer = ModDiscoverer::new(
        augmenter.clone(),
        Arc::new(FakeGame),
        Arc::new(FakeRuntime),
    )
    .add_finder(Box::new(DirectoryModFinder::new(&mods_dir)))
    .add_finder(Box::new(ArgumentModFinder::new(vec![dev_mod])));

    discoverer.discover().unwrap();
    assert_eq!(discoverer.state(), DiscoveryState::Completed);

    let ids: Vec<_> = discoverer.mods().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![GAME_MOD_ID, RUNTIME_MOD_ID, "alpha", "beta", "devmod"]
    );

    // Bootstrap records carry the platform accessors' answers, with the
    // legacy runtime prefix stripped.
    assert_eq!(discoverer.mods()[0].version, "1.20.4");
    assert_eq!(discoverer.mods()[1].version, "8");
    assert_eq!(discoverer.mods()[0].types, vec![ModType::Library]);

    // Parsed records kept their loader data.
    let alpha = &discoverer.mods()[2];
    assert_eq!(alpha.loader.environment, Environment::Client);
    assert_eq!(
        alpha.loader.entrypoints.get("main").unwrap(),
        "com.example.alpha.Init"
    );

    // Only archives touch the classpath, in candidate order.
    assert_eq!(augmenter.calls(), vec![alpha_jar, beta_jar]);
}

#[test]
fn test_archive_without_descriptor_aborts_run() {
    let root = tempdir().unwrap();
    let mods_dir = root.path().join("mods");
    fs::create_dir(&mods_dir).unwrap();

    let good_jar = mods_dir.join("alpha.jar");
    let bare_jar = mods_dir.join("zz-bare.jar");
    write_mod_jar(&good_jar, Some(&descriptor("alpha", "both")));
    write_mod_jar(&bare_jar, None);

    let augmenter = Arc::new(RecordingAugmenter::default());
    let mut discoverer = ModDiscoverer::new(
        augmenter.clone(),
        Arc::new(FakeGame),
        Arc::new(FakeRuntime),
    )
    .add_finder(Box::new(DirectoryModFinder::new(&mods_dir)));

    let err = discoverer.discover().unwrap_err();
    assert!(matches!(err, DiscoveryError::MissingDescriptor(p) if p == bare_jar));
    assert_eq!(discoverer.state(), DiscoveryState::Failed);

    // The failing archive was never registered; the one before it was, and
    // its record is still visible.
    assert_eq!(augmenter.calls(), vec![good_jar]);
    let ids: Vec<_> = discoverer.mods().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec![GAME_MOD_ID, RUNTIME_MOD_ID, "alpha"]);
}

#[test]
fn test_parser_round_trip_at_the_discovery_boundary() {
    let root = tempdir().unwrap();
    let mod_dir = write_dir_mod(root.path(), "roundtrip");

    let mut discoverer = ModDiscoverer::new(
        Arc::new(RecordingAugmenter::default()),
        Arc::new(FakeGame),
        Arc::new(FakeRuntime),
    )
    .add_finder(Box::new(ArgumentModFinder::new(vec![mod_dir])));
    discoverer.discover().unwrap();

    let original = &discoverer.mods()[2];
    let serialized = serde_json::to_string(original).unwrap();
    let reparsed = loadstone_core::metadata::parse(&serialized).unwrap();
    assert_eq!(*original, reparsed);
}
