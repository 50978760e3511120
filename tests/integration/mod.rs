// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

/// Review used throughout the extraction tests
pub const CAFE_REVIEW: &str = "There is a cafe, there is a kid, the playground is broken";

/// Short reviews with one mention each
pub const SHORT_REVIEWS: &[(&str, &str)] = &[
    ("There is a kid", "kid"),
    ("There is a dog", "dog"),
    ("The play ground is broken", "playground"),
];

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary so debug logs show on failure
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Temporary directory for settings files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a settings file with given content
    pub fn create_settings_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write settings file");
        file_path
    }
}

/// Collapse whitespace runs the way context joining does
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
