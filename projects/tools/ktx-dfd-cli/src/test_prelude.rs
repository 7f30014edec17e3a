//! Descriptor and KTX2 fixtures for command tests.
#![allow(dead_code)]

pub use ktx_dfd::{create_unpacked, Dfd, Endianness, FormatSuffix};
pub use rstest::rstest;

pub const KTX2_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

pub const SUPERCOMPRESSION_NONE: u32 = 0;
pub const SUPERCOMPRESSION_ZSTD: u32 = 2;

pub fn rgba8_dfd() -> Dfd {
    create_unpacked(Endianness::Little, 4, 1, false, FormatSuffix::Unorm).unwrap()
}

/// A 1x1 single-level KTX2 file holding `dfd` and one 4 byte texel.
pub fn minimal_ktx2(dfd: &Dfd, supercompression_scheme: u32) -> Vec<u8> {
    let dfd_bytes = dfd.to_le_bytes();
    let dfd_offset = 80 + 24;
    let level_offset = dfd_offset + dfd_bytes.len();

    let mut data = vec![0u8; level_offset + 4];
    let mut put = |offset: usize, value: u32| {
        data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    };
    put(20, 1); // pixelWidth
    put(24, 1); // pixelHeight
    put(36, 1); // faceCount
    put(40, 1); // levelCount
    put(44, supercompression_scheme);
    put(48, dfd_offset as u32);
    put(52, dfd_bytes.len() as u32);
    put(80, level_offset as u32);
    put(88, 4);
    put(96, 4);

    data[..12].copy_from_slice(&KTX2_IDENTIFIER);
    data[dfd_offset..level_offset].copy_from_slice(&dfd_bytes);
    data
}
