use super::{constants::*, likely_ktx2};
use crate::error::{Ktx2Error, Ktx2Region, Ktx2Result};
use alloc::vec::Vec;
use core::ops::Range;
use derive_enum_all_values::AllValues;
use endian_writer::{EndianReader, LittleEndianReader};
use ktx_dfd::{Dfd, DfdError, MIN_DFD_BYTES};
use tracing::debug;

/// Supercompression schemes registered for KTX2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
#[repr(u32)]
pub enum SupercompressionScheme {
    None = SUPERCOMPRESSION_NONE,
    BasisLz = SUPERCOMPRESSION_BASIS_LZ,
    Zstd = SUPERCOMPRESSION_ZSTD,
    Zlib = SUPERCOMPRESSION_ZLIB,
}

impl SupercompressionScheme {
    /// Maps the header's scheme field to a known scheme.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|scheme| *scheme as u32 == raw)
    }
}

/// Offset and length of a region of the file, in bytes from the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteRange {
    pub offset: u64,
    pub length: u64,
}

impl ByteRange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// One entry of the level index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelIndexEntry {
    pub byte_offset: u64,
    pub byte_length: u64,
    /// Size of the level once supercompression is undone.
    pub uncompressed_byte_length: u64,
}

/// The header and level index of a KTX2 file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ktx2Info {
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    /// Raw scheme field; see [`Ktx2Info::supercompression`].
    pub supercompression_scheme: u32,
    pub dfd: ByteRange,
    pub kvd: ByteRange,
    pub sgd: ByteRange,
    /// One entry per mip level; a level count of 0 still has a single entry.
    pub levels: Vec<LevelIndexEntry>,
}

impl Ktx2Info {
    /// The supercompression scheme, or [`None`] for a vendor or unknown value.
    #[inline]
    pub fn supercompression(&self) -> Option<SupercompressionScheme> {
        SupercompressionScheme::from_raw(self.supercompression_scheme)
    }

    #[inline]
    pub fn is_supercompressed(&self) -> bool {
        self.supercompression_scheme != SUPERCOMPRESSION_NONE
    }
}

/// Parses the header and level index of a KTX2 file.
///
/// # Errors
///
/// - [`Ktx2Error::NotKtx2`] if the identifier is missing or the header is truncated.
/// - [`Ktx2Error::LevelIndexTooShort`] if the level index does not fit in `data`.
/// - [`Ktx2Error::RegionOutOfBounds`] if a non-empty region or level extends past the
///   end of `data`.
pub fn parse_ktx2(data: &[u8]) -> Ktx2Result<Ktx2Info> {
    if !likely_ktx2(data) {
        return Err(Ktx2Error::NotKtx2);
    }

    // SAFETY: likely_ktx2 checked data.len() >= KTX2_HEADER_SIZE (80), and every header
    // field read below ends at or before byte 80.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (vk_format, type_size, pixel_width, pixel_height, pixel_depth) = unsafe {
        (
            reader.read_u32_at(VK_FORMAT_OFFSET as isize),
            reader.read_u32_at(TYPE_SIZE_OFFSET as isize),
            reader.read_u32_at(PIXEL_WIDTH_OFFSET as isize),
            reader.read_u32_at(PIXEL_HEIGHT_OFFSET as isize),
            reader.read_u32_at(PIXEL_DEPTH_OFFSET as isize),
        )
    };
    let (layer_count, face_count, level_count, supercompression_scheme) = unsafe {
        (
            reader.read_u32_at(LAYER_COUNT_OFFSET as isize),
            reader.read_u32_at(FACE_COUNT_OFFSET as isize),
            reader.read_u32_at(LEVEL_COUNT_OFFSET as isize),
            reader.read_u32_at(SUPERCOMPRESSION_SCHEME_OFFSET as isize),
        )
    };
    let (dfd, kvd) = unsafe {
        (
            ByteRange {
                offset: reader.read_u32_at(DFD_BYTE_OFFSET_OFFSET as isize) as u64,
                length: reader.read_u32_at(DFD_BYTE_LENGTH_OFFSET as isize) as u64,
            },
            ByteRange {
                offset: reader.read_u32_at(KVD_BYTE_OFFSET_OFFSET as isize) as u64,
                length: reader.read_u32_at(KVD_BYTE_LENGTH_OFFSET as isize) as u64,
            },
        )
    };
    let sgd = unsafe {
        ByteRange {
            offset: join_u64(
                reader.read_u32_at(SGD_BYTE_OFFSET_OFFSET as isize),
                reader.read_u32_at((SGD_BYTE_OFFSET_OFFSET + 4) as isize),
            ),
            length: join_u64(
                reader.read_u32_at(SGD_BYTE_LENGTH_OFFSET as isize),
                reader.read_u32_at((SGD_BYTE_LENGTH_OFFSET + 4) as isize),
            ),
        }
    };

    let entries = level_count.max(1);
    let required = KTX2_HEADER_SIZE as u64 + entries as u64 * LEVEL_INDEX_ENTRY_SIZE as u64;
    if (data.len() as u64) < required {
        return Err(Ktx2Error::LevelIndexTooShort {
            levels: level_count,
            required: usize::try_from(required).unwrap_or(usize::MAX),
            actual: data.len(),
        });
    }

    let mut levels = Vec::with_capacity(entries as usize);
    for level in 0..entries as usize {
        let entry = KTX2_HEADER_SIZE + level * LEVEL_INDEX_ENTRY_SIZE;
        // SAFETY: We checked data.len() >= KTX2_HEADER_SIZE + entries * LEVEL_INDEX_ENTRY_SIZE,
        // so all 24 bytes of this entry are in bounds.
        let level_entry = unsafe {
            LevelIndexEntry {
                byte_offset: join_u64(
                    reader.read_u32_at(entry as isize),
                    reader.read_u32_at((entry + 4) as isize),
                ),
                byte_length: join_u64(
                    reader.read_u32_at((entry + 8) as isize),
                    reader.read_u32_at((entry + 12) as isize),
                ),
                uncompressed_byte_length: join_u64(
                    reader.read_u32_at((entry + 16) as isize),
                    reader.read_u32_at((entry + 20) as isize),
                ),
            }
        };
        let range = ByteRange {
            offset: level_entry.byte_offset,
            length: level_entry.byte_length,
        };
        check_region(range, data.len(), Ktx2Region::Level(level as u32))?;
        levels.push(level_entry);
    }

    check_region(dfd, data.len(), Ktx2Region::DataFormatDescriptor)?;
    check_region(kvd, data.len(), Ktx2Region::KeyValueData)?;
    check_region(sgd, data.len(), Ktx2Region::SupercompressionGlobalData)?;

    debug!(
        vk_format,
        pixel_width,
        pixel_height,
        level_count,
        supercompression_scheme,
        "parsed KTX2 header"
    );

    Ok(Ktx2Info {
        vk_format,
        type_size,
        pixel_width,
        pixel_height,
        pixel_depth,
        layer_count,
        face_count,
        level_count,
        supercompression_scheme,
        dfd,
        kvd,
        sgd,
        levels,
    })
}

/// Reads the data format descriptor of a file parsed with [`parse_ktx2`].
///
/// Only the basic descriptor block is returned; any blocks after it are skipped.
///
/// # Errors
///
/// [`Ktx2Error::MissingDfd`] if the header has a zero DFD offset or length, and
/// [`Ktx2Error::Dfd`] if the descriptor itself is malformed.
pub fn read_dfd(data: &[u8], info: &Ktx2Info) -> Ktx2Result<Dfd> {
    Ok(read_basic_block(data, info.dfd)?.dfd)
}

/// The first descriptor block of a file's DFD.
pub(crate) struct BasicBlock {
    /// The block on its own, behind a total size word covering just this block.
    pub(crate) dfd: Dfd,
    /// Bytes of the block within the file, excluding the DFD's total size word.
    pub(crate) block: Range<usize>,
}

/// Locates and parses the first descriptor block of the DFD at `dfd`.
///
/// The DFD's total size must match the header's DFD length, and the first block must fit
/// inside it. Later blocks are neither parsed nor validated.
pub(crate) fn read_basic_block(data: &[u8], dfd: ByteRange) -> Ktx2Result<BasicBlock> {
    let range = dfd_byte_range(dfd, data.len())?;
    if range.len() < MIN_DFD_BYTES {
        return Err(DfdError::InputTooShort {
            required: MIN_DFD_BYTES,
            actual: range.len(),
        }
        .into());
    }

    // SAFETY: dfd_byte_range checked that range lies within data, and range holds at least
    // MIN_DFD_BYTES (28) bytes, so both words read below are in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr().add(range.start)) };
    let (total_size, version_word) = unsafe {
        (
            reader.read_u32_at(0),
            reader.read_u32_at(DFD_BLOCK_SIZE_WORD_OFFSET as isize),
        )
    };
    if total_size as usize != range.len() {
        return Err(DfdError::TotalSizeMismatch {
            declared: total_size,
            actual: range.len(),
        }
        .into());
    }

    let block_size = version_word >> 16;
    let block_start = range.start + DFD_TOTAL_SIZE_BYTES;
    let block_end = block_start + block_size as usize;
    if block_end > range.end {
        return Err(DfdError::BlockSizeMismatch {
            declared: block_size,
            actual: range.end - block_start,
        }
        .into());
    }

    let mut bytes = Vec::with_capacity(DFD_TOTAL_SIZE_BYTES + block_size as usize);
    bytes.extend_from_slice(&(DFD_TOTAL_SIZE_BYTES as u32 + block_size).to_le_bytes());
    bytes.extend_from_slice(&data[block_start..block_end]);
    if block_end < range.end {
        debug!(
            skipped = range.end - block_end,
            "skipping descriptor blocks after the basic block"
        );
    }

    Ok(BasicBlock {
        dfd: Dfd::from_le_bytes(&bytes)?,
        block: block_start..block_end,
    })
}

/// Resolves the descriptor's location to an index range into a file of `file_len` bytes.
pub(crate) fn dfd_byte_range(dfd: ByteRange, file_len: usize) -> Ktx2Result<Range<usize>> {
    if dfd.offset == 0 || dfd.length == 0 {
        return Err(Ktx2Error::MissingDfd {
            offset: dfd.offset,
            length: dfd.length,
        });
    }
    check_region(dfd, file_len, Ktx2Region::DataFormatDescriptor)
}

/// Checks that `range` lies within a file of `file_len` bytes and converts it to an
/// index range. Empty regions always pass.
fn check_region(range: ByteRange, file_len: usize, region: Ktx2Region) -> Ktx2Result<Range<usize>> {
    if range.is_empty() {
        return Ok(0..0);
    }

    match range.offset.checked_add(range.length) {
        Some(end) if end <= file_len as u64 => Ok(range.offset as usize..end as usize),
        _ => Err(Ktx2Error::RegionOutOfBounds {
            region,
            offset: range.offset,
            length: range.length,
            file_len,
        }),
    }
}

#[inline(always)]
fn join_u64(low: u32, high: u32) -> u64 {
    (high as u64) << 32 | low as u64
}
