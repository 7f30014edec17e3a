//! Error types for reading and patching KTX2 files.

use ktx_dfd::DfdError;
use thiserror::Error;

/// Result type for KTX2 operations.
pub type Ktx2Result<T> = Result<T, Ktx2Error>;

/// Errors raised while reading or patching a KTX2 file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Ktx2Error {
    /// The data does not start with the KTX2 identifier or is shorter than the header.
    #[error("Not a KTX2 file: missing identifier or truncated header")]
    NotKtx2,

    /// The level index extends past the end of the file.
    #[error("Level index for {levels} levels needs {required} bytes, file has {actual} bytes")]
    LevelIndexTooShort {
        levels: u32,
        required: usize,
        actual: usize,
    },

    /// A region named in the header or level index extends past the end of the file.
    #[error("{region} at offset {offset} with length {length} exceeds the {file_len} byte file")]
    RegionOutOfBounds {
        region: Ktx2Region,
        offset: u64,
        length: u64,
        file_len: usize,
    },

    /// The header has a zero DFD offset or length.
    #[error("Data format descriptor has offset {offset} and length {length}; neither may be zero")]
    MissingDfd { offset: u64, length: u64 },

    /// The embedded data format descriptor is malformed.
    #[error(transparent)]
    Dfd(#[from] DfdError),
}

/// Named region of a KTX2 file, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ktx2Region {
    DataFormatDescriptor,
    KeyValueData,
    SupercompressionGlobalData,
    /// Image data of the given mip level.
    Level(u32),
}

impl core::fmt::Display for Ktx2Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DataFormatDescriptor => f.write_str("Data format descriptor"),
            Self::KeyValueData => f.write_str("Key/value data"),
            Self::SupercompressionGlobalData => f.write_str("Supercompression global data"),
            Self::Level(level) => write!(f, "Level {level}"),
        }
    }
}
