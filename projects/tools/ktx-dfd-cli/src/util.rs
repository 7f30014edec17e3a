use crate::error::CliError;
use ktx_dfd::Dfd;
use ktx_dfd_ktx2::{likely_ktx2, parse_ktx2, read_dfd, Ktx2Info};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a descriptor was loaded from.
#[derive(Debug)]
pub enum DfdSource {
    Ktx2(Ktx2Info),
    /// The whole file is a descriptor, as written by `endswap --output`.
    Raw,
}

/// Parses a CLI argument naming an existing file.
pub fn existing_file_path(value: &str) -> Result<PathBuf, String> {
    let path = fs::canonicalize(value).map_err(|e| format!("Invalid path: {e}"))?;
    match path.is_file() {
        true => Ok(path),
        false => Err(format!("Not a file: {}", path.display())),
    }
}

/// Loads the descriptor of a KTX2 file, or treats the whole file as a bare descriptor
/// when it lacks the KTX2 identifier.
pub fn load_dfd(path: &Path) -> Result<(Dfd, DfdSource), CliError> {
    let data = fs::read(path)?;
    dfd_from_bytes(path, &data)
}

pub fn dfd_from_bytes(path: &Path, data: &[u8]) -> Result<(Dfd, DfdSource), CliError> {
    if likely_ktx2(data) {
        let info = parse_ktx2(data)?;
        let dfd = read_dfd(data, &info)?;
        debug!(path = %path.display(), "loaded descriptor from KTX2 file");
        return Ok((dfd, DfdSource::Ktx2(info)));
    }

    let dfd = Dfd::from_le_bytes(data).map_err(|source| CliError::UnrecognizedInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded raw descriptor");
    Ok((dfd, DfdSource::Raw))
}
