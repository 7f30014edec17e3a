use ktx_dfd::DfdError;
use ktx_dfd_ktx2::Ktx2Error;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dfd(#[from] DfdError),
    #[error(transparent)]
    Ktx2(#[from] Ktx2Error),
    /// The file is neither a KTX2 file nor a bare descriptor.
    #[error("{}: not a KTX2 file or raw data format descriptor ({source})", path.display())]
    UnrecognizedInput { path: PathBuf, source: DfdError },
}
