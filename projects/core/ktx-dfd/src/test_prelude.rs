//! Common test imports and utilities for descriptor tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Items used by nearly every descriptor test
pub use crate::constants::*;
pub use crate::descriptor::{DescriptorBuilder, Dfd};
pub use crate::error::DfdError;
pub use crate::sample::Sample;
pub use crate::words::Qualifiers;

/// Creates an unsigned, normalized sample covering `bits` bits at `offset`.
pub fn unsigned_sample(channel_id: u8, offset: u32, bits: u32) -> Sample {
    Sample {
        bit_offset: offset,
        bit_count: bits,
        channel_id,
        qualifiers: Qualifiers::default(),
        position: [0; 4],
        lower: 0,
        upper: if bits >= 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        },
    }
}

/// Creates a signed sample with explicit raw lower and upper values.
pub fn signed_sample(channel_id: u8, offset: u32, bits: u32, lower: u32, upper: u32) -> Sample {
    let mut qualifiers = Qualifiers::default();
    qualifiers.set_signed(true);
    Sample {
        bit_offset: offset,
        bit_count: bits,
        channel_id,
        qualifiers,
        position: [0; 4],
        lower,
        upper,
    }
}

/// Builds an RGBSDA descriptor with a single plane of `bytes_plane0` bytes.
pub fn rgbsda_dfd(bytes_plane0: u8, samples: &[Sample]) -> Dfd {
    let mut builder = DescriptorBuilder::new(samples.len()).unwrap();
    builder.set_bytes_plane(0, bytes_plane0);
    for (index, sample) in samples.iter().enumerate() {
        builder.set_sample(index, sample);
    }
    builder.build()
}

/// 8-bit red, green and blue in consecutive bytes.
pub fn rgb8_dfd(bytes_plane0: u8) -> Dfd {
    rgbsda_dfd(
        bytes_plane0,
        &[
            unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8),
            unsigned_sample(CHANNEL_RGBSDA_GREEN, 8, 8),
            unsigned_sample(CHANNEL_RGBSDA_BLUE, 16, 8),
        ],
    )
}

/// 8-bit red, green, blue and alpha in consecutive bytes.
pub fn rgba8_dfd() -> Dfd {
    rgbsda_dfd(
        4,
        &[
            unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8),
            unsigned_sample(CHANNEL_RGBSDA_GREEN, 8, 8),
            unsigned_sample(CHANNEL_RGBSDA_BLUE, 16, 8),
            unsigned_sample(CHANNEL_RGBSDA_ALPHA, 24, 8),
        ],
    )
}

/// Collects `(channel id, bit offset, bit count)` for every sample.
pub fn sample_layout(dfd: &Dfd) -> Vec<(u8, u32, u32)> {
    dfd.samples()
        .map(|sample| (sample.channel_id, sample.bit_offset, sample.bit_count))
        .collect()
}
