/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a KTX2 file.
pub mod likely_ktx2;

/// Read the header, level index and data format descriptor of a KTX2 file.
pub mod parse_ktx2;

/// Rewrite the descriptor of a supercompressed KTX2 file in place.
pub mod patch;

pub use likely_ktx2::*;
pub use parse_ktx2::*;
pub use patch::*;
