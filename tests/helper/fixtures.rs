//! File fixtures for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use split_docgen::config::{
    TEMPLATE_FIPS_ROW_FILE, TEMPLATE_FOOTER_FILE, TEMPLATE_HEADER_FILE, TEMPLATE_ROW_FILE,
    TEMPLATE_STYLE_FILE,
};

/// Templates shipped with the repository
pub fn repo_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("release")
}

/// Write a minimal, line-oriented template set into a temporary directory
pub fn create_plain_templates(with_fips_row: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(TEMPLATE_STYLE_FILE), "p { margin: 0 }").unwrap();
    fs::write(
        dir.path().join(TEMPLATE_HEADER_FILE),
        "# {{ title }}\n{{ description }}\n<style>{{ style }}</style>",
    )
    .unwrap();
    fs::write(
        dir.path().join(TEMPLATE_ROW_FILE),
        "{{ version }} {{ old_file_linux }} {{ old_file_osx }} {{ old_file_windows }}",
    )
    .unwrap();
    if with_fips_row {
        fs::write(
            dir.path().join(TEMPLATE_FIPS_ROW_FILE),
            "{{ version }} {{ old_file_fips_linux }} {{ old_file_fips_windows }}",
        )
        .unwrap();
    }
    fs::write(dir.path().join(TEMPLATE_FOOTER_FILE), "-- end --").unwrap();
    dir
}

/// Write `content` to `name` inside `dir`, returning the full path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
