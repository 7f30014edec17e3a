//! KTX2 format constants and header layout
#![allow(dead_code)]

/// File identifier: `«KTX 20»\r\n\x1A\n`.
pub(crate) const KTX2_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Size of the fixed header, up to the start of the level index.
pub(crate) const KTX2_HEADER_SIZE: usize = 80;

/// Size of one level index entry: byte offset, byte length and uncompressed length.
pub(crate) const LEVEL_INDEX_ENTRY_SIZE: usize = 24;

pub(crate) const VK_FORMAT_OFFSET: usize = 12;
pub(crate) const TYPE_SIZE_OFFSET: usize = 16;
pub(crate) const PIXEL_WIDTH_OFFSET: usize = 20;
pub(crate) const PIXEL_HEIGHT_OFFSET: usize = 24;
pub(crate) const PIXEL_DEPTH_OFFSET: usize = 28;
pub(crate) const LAYER_COUNT_OFFSET: usize = 32;
pub(crate) const FACE_COUNT_OFFSET: usize = 36;
pub(crate) const LEVEL_COUNT_OFFSET: usize = 40;
pub(crate) const SUPERCOMPRESSION_SCHEME_OFFSET: usize = 44;

// Index section
pub(crate) const DFD_BYTE_OFFSET_OFFSET: usize = 48;
pub(crate) const DFD_BYTE_LENGTH_OFFSET: usize = 52;
pub(crate) const KVD_BYTE_OFFSET_OFFSET: usize = 56;
pub(crate) const KVD_BYTE_LENGTH_OFFSET: usize = 60;
pub(crate) const SGD_BYTE_OFFSET_OFFSET: usize = 64;
pub(crate) const SGD_BYTE_LENGTH_OFFSET: usize = 72;

// Data format descriptor
/// Size of the DFD's leading total size word.
pub(crate) const DFD_TOTAL_SIZE_BYTES: usize = 4;
/// Byte offset into the DFD of the basic block's version word; its upper 16 bits hold
/// the block size.
pub(crate) const DFD_BLOCK_SIZE_WORD_OFFSET: usize = 8;

// Supercompression schemes
pub(crate) const SUPERCOMPRESSION_NONE: u32 = 0;
pub(crate) const SUPERCOMPRESSION_BASIS_LZ: u32 = 1;
pub(crate) const SUPERCOMPRESSION_ZSTD: u32 = 2;
pub(crate) const SUPERCOMPRESSION_ZLIB: u32 = 3;
