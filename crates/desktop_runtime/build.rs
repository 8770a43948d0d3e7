use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    order: u32,
    app_id: String,
    display_name: String,
    icon_id: String,
    #[serde(default)]
    size_label: String,
    show_in_launcher: bool,
    show_on_desktop: bool,
}

fn app_manifest_paths(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", dir.display()));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let manifest_dir = crate_root.join("app_manifests");
    println!("cargo:rerun-if-changed={}", manifest_dir.display());

    let mut manifests = Vec::<AppManifest>::new();
    for path in app_manifest_paths(&manifest_dir) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            panic!(
                "manifest schema mismatch in {}: expected {MANIFEST_SCHEMA_VERSION} found {}",
                path.display(),
                manifest.schema_version
            );
        }
        if manifest.app_id.trim().is_empty() || manifest.display_name.trim().is_empty() {
            panic!("manifest {} needs a non-empty app_id and display_name", path.display());
        }
        if manifests.iter().any(|m| m.app_id == manifest.app_id) {
            panic!("duplicate app_id `{}` in {}", manifest.app_id, path.display());
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.app_id.cmp(&b.app_id)));
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
