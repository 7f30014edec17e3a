//! Common test imports and utilities for KTX2 extension tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::error::{Ktx2Error, Ktx2Region};
pub use crate::ktx2::constants::*;
pub use ktx_dfd::{create_unpacked, DfdError, Dfd, Endianness, FormatSuffix};

use endian_writer::{EndianWriter, LittleEndianWriter};

/// `VK_FORMAT_R8G8B8A8_UNORM`
pub const VK_FORMAT_R8G8B8A8_UNORM: u32 = 37;

/// 8-bit red, green, blue and alpha in consecutive bytes, sized to 4 bytes per texel.
pub fn rgba8_dfd() -> Dfd {
    create_unpacked(Endianness::Little, 4, 1, false, FormatSuffix::Unorm).unwrap()
}

/// Overwrites the little-endian `u32` at `offset`.
pub fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len());
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe { writer.write_u32_at(value, offset as isize) };
}

/// Overwrites the little-endian `u64` at `offset`.
pub fn write_u64(data: &mut [u8], offset: usize, value: u64) {
    write_u32(data, offset, value as u32);
    write_u32(data, offset + 4, (value >> 32) as u32);
}

/// Size of the block appended by [`with_extra_block`].
pub const EXTRA_BLOCK_BYTES: usize = 12;

/// Serializes `dfd` followed by a second, vendor-specific descriptor block carrying one
/// payload word, with the total size word covering both blocks.
pub fn with_extra_block(dfd: &Dfd) -> Vec<u8> {
    let mut bytes = dfd.to_le_bytes();
    // Vendor 0x1234, descriptor type 1.
    bytes.extend_from_slice(&(0x1234u32 | 1 << 17).to_le_bytes());
    // Version 0, block size in the upper half.
    bytes.extend_from_slice(&((EXTRA_BLOCK_BYTES as u32) << 16).to_le_bytes());
    bytes.extend_from_slice(&0xDEAD_BEEFu32.to_le_bytes());

    let total_size = bytes.len() as u32;
    bytes[..4].copy_from_slice(&total_size.to_le_bytes());
    bytes
}

/// Creates a 4x4 RGBA8 KTX2 file with `level_count` mip levels around `dfd`.
pub fn create_ktx2(dfd: &Dfd, supercompression_scheme: u32, level_count: u32) -> Vec<u8> {
    create_ktx2_with_dimensions(dfd, supercompression_scheme, 4, 4, level_count)
}

/// Creates an RGBA8 KTX2 file laid out as header, level index, descriptor and then the
/// levels from smallest to largest, each filled with a test pattern.
///
/// Level data is stored as 4 bytes per texel even when `supercompression_scheme` claims
/// otherwise; only the layout matters to the descriptor tools.
pub fn create_ktx2_with_dimensions(
    dfd: &Dfd,
    supercompression_scheme: u32,
    width: u32,
    height: u32,
    level_count: u32,
) -> Vec<u8> {
    create_ktx2_from_dfd_bytes(
        &dfd.to_le_bytes(),
        supercompression_scheme,
        width,
        height,
        level_count,
    )
}

/// Like [`create_ktx2_with_dimensions`], but embeds `dfd_bytes` verbatim as the DFD.
pub fn create_ktx2_from_dfd_bytes(
    dfd_bytes: &[u8],
    supercompression_scheme: u32,
    width: u32,
    height: u32,
    level_count: u32,
) -> Vec<u8> {
    let entries = level_count.max(1) as usize;
    let dfd_offset = KTX2_HEADER_SIZE + entries * LEVEL_INDEX_ENTRY_SIZE;

    let level_sizes = (0..entries)
        .map(|level| {
            let level_width = (width >> level).max(1) as usize;
            let level_height = (height >> level).max(1) as usize;
            level_width * level_height * 4
        })
        .collect::<Vec<_>>();

    let data_start = dfd_offset + dfd_bytes.len();
    let mut data = vec![0u8; data_start + level_sizes.iter().sum::<usize>()];
    data[..KTX2_IDENTIFIER.len()].copy_from_slice(&KTX2_IDENTIFIER);
    data[dfd_offset..data_start].copy_from_slice(dfd_bytes);

    write_u32(&mut data, VK_FORMAT_OFFSET, VK_FORMAT_R8G8B8A8_UNORM);
    write_u32(&mut data, TYPE_SIZE_OFFSET, 1);
    write_u32(&mut data, PIXEL_WIDTH_OFFSET, width);
    write_u32(&mut data, PIXEL_HEIGHT_OFFSET, height);
    write_u32(&mut data, FACE_COUNT_OFFSET, 1);
    write_u32(&mut data, LEVEL_COUNT_OFFSET, level_count);
    write_u32(&mut data, SUPERCOMPRESSION_SCHEME_OFFSET, supercompression_scheme);
    write_u32(&mut data, DFD_BYTE_OFFSET_OFFSET, dfd_offset as u32);
    write_u32(&mut data, DFD_BYTE_LENGTH_OFFSET, dfd_bytes.len() as u32);

    // Smallest level first.
    let mut offset = data_start;
    for level in (0..entries).rev() {
        let entry = KTX2_HEADER_SIZE + level * LEVEL_INDEX_ENTRY_SIZE;
        let size = level_sizes[level];
        write_u64(&mut data, entry, offset as u64);
        write_u64(&mut data, entry + 8, size as u64);
        write_u64(&mut data, entry + 16, size as u64);
        for (index, byte) in data[offset..offset + size].iter_mut().enumerate() {
            *byte = (index % 256) as u8;
        }
        offset += size;
    }

    data
}
