use crate::error::CliError;
use crate::util::existing_file_path;
use argh::FromArgs;
use ktx_dfd_ktx2::{patch_dfd, PatchOperation, PatchOutcome};
use std::{fs, path::PathBuf, str::FromStr};
use tracing::{info, warn};

#[derive(FromArgs, Debug)]
/// Rewrite the plane byte counts of a supercompressed KTX2 file's descriptor in place
#[argh(subcommand, name = "patch")]
pub struct PatchCmd {
    /// make-sized or make-unsized
    #[argh(positional)]
    pub operation: PatchMode,

    /// KTX2 file to patch
    #[argh(positional, from_str_fn(existing_file_path))]
    pub input: PathBuf,
}

/// Patch operations accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    MakeSized,
    MakeUnsized,
}

impl FromStr for PatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "make-sized" => Ok(Self::MakeSized),
            "make-unsized" => Ok(Self::MakeUnsized),
            _ => Err(format!(
                "Unknown operation: {s}. Valid options: make-sized, make-unsized"
            )),
        }
    }
}

impl From<PatchMode> for PatchOperation {
    fn from(mode: PatchMode) -> Self {
        match mode {
            PatchMode::MakeSized => PatchOperation::MakeSized,
            PatchMode::MakeUnsized => PatchOperation::MakeUnsized,
        }
    }
}

pub fn handle_patch_command(cmd: PatchCmd) -> Result<(), CliError> {
    let mut data = fs::read(&cmd.input)?;

    match patch_dfd(&mut data, cmd.operation.into())? {
        PatchOutcome::Patched { bytes_plane0 } => {
            fs::write(&cmd.input, &data)?;
            info!(
                path = %cmd.input.display(),
                bytes_plane0,
                "patched descriptor"
            );
        }
        PatchOutcome::NotSupercompressed => {
            warn!(
                path = %cmd.input.display(),
                "file is not supercompressed, descriptor must stay sized; nothing written"
            );
        }
    }
    Ok(())
}
