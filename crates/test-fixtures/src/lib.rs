//! Test fixture loader for Condense golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Subdirectory holding the compression golden files.
pub const GOLDEN_COMPRESSION_DIR: &str = "golden/compression";

/// Request half of a compression golden file.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureInput {
    pub text: String,
    pub ratio: f64,
    #[serde(default)]
    pub intent: Option<String>,
}

/// Expected outcome of a compression golden file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureExpectation {
    pub compressed_text: String,
    pub original_tokens: usize,
    pub target_tokens: usize,
    pub final_tokens: usize,
    pub warnings: Vec<String>,
}

/// One golden compression scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct CompressionFixture {
    pub name: String,
    pub description: String,
    pub input: FixtureInput,
    pub expected: FixtureExpectation,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every compression golden scenario.
pub fn load_compression_fixtures() -> Vec<CompressionFixture> {
    list_fixtures(GOLDEN_COMPRESSION_DIR)
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_compression_files_exist() {
        let files = [
            "golden/compression/intent_prioritisation.json",
            "golden/compression/four_sentence_reduction.json",
            "golden/compression/zero_ratio_passthrough.json",
            "golden/compression/empty_input.json",
            "golden/compression/no_sentence_boundary.json",
            "golden/compression/reading_order_restored.json",
            "golden/compression/high_ratio_warnings.json",
            "golden/compression/out_of_range_ratio.json",
            "golden/compression/punctuation_only.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_files_parse_as_typed_fixtures() {
        let fixtures = load_compression_fixtures();
        assert_eq!(fixtures.len(), 9, "Expected 9 golden compression files");
        for fixture in &fixtures {
            let stem = fixture_path(&format!("{GOLDEN_COMPRESSION_DIR}/{}.json", fixture.name));
            assert!(stem.exists(), "fixture name '{}' must match its file", fixture.name);
            assert!(!fixture.description.is_empty());
        }
    }

    #[test]
    fn raw_value_loading_matches_typed() {
        let value = load_fixture_value("golden/compression/intent_prioritisation.json");
        assert_eq!(value["input"]["intent"], "Focus on roadmap milestones");
    }
}
