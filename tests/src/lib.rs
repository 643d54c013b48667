//! Shared helpers for the workspace-level integration tests.

use std::path::PathBuf;

/// Absolute path of a file in the repository's `data/` directory.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join(name)
}
