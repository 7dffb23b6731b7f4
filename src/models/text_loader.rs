use crate::Error;
use encoding_rs::Encoding;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads a whole text file and decodes it with a fixed encoding.
pub struct TextLoader {
    encoding: &'static Encoding,
}

impl TextLoader {
    /// Resolves `label` (e.g. `"windows-949"`, `"euc-kr"`, `"utf-8"`) to an encoding.
    pub fn new(label: &str) -> Result<Self, Error> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnsupportedEncodingError(label.to_string()))?;

        Ok(TextLoader { encoding })
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Fails with `MissingInputError` unless `path` is an existing regular file.
    pub fn validate(path: &Path) -> Result<(), Error> {
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::MissingInputError(path.to_path_buf()))
        }
    }

    /// Validates `path`, then reads and decodes it in full.
    pub fn load(&self, path: &Path) -> Result<String, Error> {
        Self::validate(path)?;

        info!("Reading {}...", path.display());
        let bytes = read_all_bytes(path)?;
        debug!("Read {} bytes", bytes.len());

        self.decode(&bytes, path)
    }

    /// Strict decode: any malformed sequence fails the whole document.
    ///
    /// No BOM sniffing; the configured encoding always wins.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String, Error> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| Error::DecodeError {
                path: PathBuf::from(path),
                encoding: self.encoding.name().to_string(),
            })
    }
}

// The handle is dropped before this returns
fn read_all_bytes(path: &Path) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(bytes)
}
