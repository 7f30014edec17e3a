use super::{
    constants::*,
    likely_ktx2,
    parse_ktx2::{read_basic_block, BasicBlock, ByteRange},
};
use crate::error::{Ktx2Error, Ktx2Result};
use derive_enum_all_values::AllValues;
use endian_writer::{EndianReader, LittleEndianReader};
use tracing::debug;

/// Rewrite applied to the plane byte counts of a KTX2 file's descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PatchOperation {
    /// Recompute bytesPlane0 from the samples and clear bytesPlane1.
    MakeSized,
    /// Clear bytesPlane0 and bytesPlane1, as supercompressed files require.
    MakeUnsized,
}

/// What [`patch_dfd`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The descriptor was rewritten; bytesPlane0 now holds this value.
    Patched { bytes_plane0: u8 },
    /// The file is not supercompressed, so its descriptor must stay sized. Nothing was
    /// written.
    NotSupercompressed,
}

/// Rewrites the plane byte counts of a supercompressed KTX2 file's descriptor in place.
///
/// The file's length never changes: the descriptor is rewritten over itself with the
/// same number of samples. Only the basic descriptor block is patched; the DFD's total
/// size and any blocks after the basic block are kept byte for byte.
///
/// # Errors
///
/// - [`Ktx2Error::NotKtx2`] if the identifier is missing or the header is truncated.
/// - [`Ktx2Error::MissingDfd`] if the header has a zero DFD offset or length.
/// - [`Ktx2Error::RegionOutOfBounds`] if the descriptor extends past the end of `data`.
/// - [`Ktx2Error::Dfd`] if the basic block is malformed, does not fit in the DFD, or the
///   DFD's total size disagrees with the header's DFD length.
///
/// `data` is left untouched on every error.
pub fn patch_dfd(data: &mut [u8], operation: PatchOperation) -> Ktx2Result<PatchOutcome> {
    if !likely_ktx2(data) {
        return Err(Ktx2Error::NotKtx2);
    }

    // SAFETY: likely_ktx2 checked data.len() >= KTX2_HEADER_SIZE (80), so the scheme and
    // DFD index fields (bytes 44 to 56) are in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (scheme, dfd) = unsafe {
        (
            reader.read_u32_at(SUPERCOMPRESSION_SCHEME_OFFSET as isize),
            ByteRange {
                offset: reader.read_u32_at(DFD_BYTE_OFFSET_OFFSET as isize) as u64,
                length: reader.read_u32_at(DFD_BYTE_LENGTH_OFFSET as isize) as u64,
            },
        )
    };

    if scheme == SUPERCOMPRESSION_NONE {
        debug!("KTX2 file is not supercompressed, leaving descriptor unchanged");
        return Ok(PatchOutcome::NotSupercompressed);
    }

    let BasicBlock {
        dfd: mut descriptor,
        block,
    } = read_basic_block(data, dfd)?;
    let bytes_plane0 = match operation {
        PatchOperation::MakeSized => descriptor.reconstruct_bytes_planes(),
        PatchOperation::MakeUnsized => {
            descriptor.make_unsized();
            0
        }
    };

    // The parsed block carries its own total size word; the file keeps its original one.
    data[block].copy_from_slice(&descriptor.to_le_bytes()[DFD_TOTAL_SIZE_BYTES..]);
    debug!(?operation, scheme, bytes_plane0, "patched KTX2 descriptor");
    Ok(PatchOutcome::Patched { bytes_plane0 })
}
