use crate::error::CliError;
use crate::util::{existing_file_path, load_dfd, DfdSource};
use argh::FromArgs;
use ktx_dfd::{end_swap, Dfd};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// Word size used for raw descriptors when `--word-size` is absent.
const DEFAULT_WORD_SIZE: usize = 4;

#[derive(FromArgs, Debug)]
/// Print the descriptor describing the same texels after each word is byte-swapped
#[argh(subcommand, name = "endswap")]
pub struct EndswapCmd {
    /// KTX2 file or raw descriptor to read
    #[argh(positional, from_str_fn(existing_file_path))]
    pub input: PathBuf,

    /// bytes per swapped word: 1, 2, 4 or 8 [default: KTX2 typeSize, else 4]
    #[argh(option, short = 'w')]
    pub word_size: Option<usize>,

    /// write the swapped descriptor to this file as little-endian words
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn handle_endswap_command(cmd: EndswapCmd) -> Result<(), CliError> {
    let (dfd, source) = load_dfd(&cmd.input)?;
    let word_size = resolve_word_size(cmd.word_size, &source);
    let swapped = end_swap(&dfd, word_size)?;

    println!("=== End-swapped with {word_size}-byte words ===");
    print!("{swapped}");

    if let Some(output) = &cmd.output {
        write_dfd(output, &swapped)?;
        info!(
            path = %output.display(),
            bytes = swapped.total_size(),
            "wrote end-swapped descriptor"
        );
    }
    Ok(())
}

/// An explicit word size wins; otherwise a KTX2 file's typeSize is used.
fn resolve_word_size(requested: Option<usize>, source: &DfdSource) -> usize {
    match (requested, source) {
        (Some(word_size), _) => word_size,
        (None, DfdSource::Ktx2(info)) => info.type_size as usize,
        (None, DfdSource::Raw) => DEFAULT_WORD_SIZE,
    }
}

fn write_dfd(path: &Path, dfd: &Dfd) -> Result<(), CliError> {
    fs::write(path, dfd.to_le_bytes())?;
    Ok(())
}
