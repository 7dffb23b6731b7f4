use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod constants;

/// Scratch directory holding input fixtures and run outputs for one test.
///
/// Removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Encodes `text` with the encoding named by `label` and writes it to `file_name`.
    pub fn write_encoded(&self, file_name: &str, text: &str, label: &str) -> PathBuf {
        let encoding = Encoding::for_label(label.as_bytes())
            .unwrap_or_else(|| panic!("Unknown encoding label: {}", label));
        let (bytes, _, had_unmappable) = encoding.encode(text);
        assert!(
            !had_unmappable,
            "Fixture text is not representable in {}",
            label
        );

        self.write_bytes(file_name, &bytes)
    }

    pub fn write_bytes(&self, file_name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(file_name);
        fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Data lines (`character: X, count: N`) from captured console output.
pub fn report_data_lines(console_output: &str) -> Vec<String> {
    console_output
        .lines()
        .filter(|line| line.starts_with("character: "))
        .map(|line| line.to_string())
        .collect()
}

/// Console output captured from a `Vec<u8>` writer.
pub fn captured_output(buffer: &[u8]) -> String {
    String::from_utf8(buffer.to_vec()).expect("Console output is not UTF-8")
}
