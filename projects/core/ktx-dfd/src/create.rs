//! Construction of descriptors for common uncompressed, compressed and depth/stencil
//! formats.
//!
//! Every descriptor produced here uses the RGBSDA model (or the scheme's own model for
//! compressed formats), BT.709 primaries, straight alpha and a single plane.

use crate::constants::*;
use crate::descriptor::{DescriptorBuilder, Dfd};
use crate::endswap::end_swap;
use crate::error::{DfdError, DfdResult};
use crate::format::{CompressionScheme, Endianness, FormatSuffix};
use crate::sample::Sample;
use crate::words::Qualifiers;
use alloc::vec::Vec;
use tracing::debug;

/// Most channels an unpacked format may have; the fourth is alpha.
const MAX_UNPACKED_CHANNELS: usize = 4;

/// Raw value range of a sample covering `bits` bits of a channel.
///
/// `top` is set when the sample holds the channel's most significant bits and `bottom`
/// when it holds the least significant ones; a channel in one sample is both.
fn sample_range(suffix: FormatSuffix, bits: u32, top: bool, bottom: bool) -> (u32, u32) {
    match suffix {
        FormatSuffix::Unorm | FormatSuffix::Srgb => (0, low_mask(bits)),
        FormatSuffix::Snorm => {
            let upper = match bits {
                33.. => 0x7FFF_FFFF,
                _ if top => low_mask(bits - 1),
                _ => low_mask(bits),
            };
            ((!upper).wrapping_add(bottom as u32), upper)
        }
        FormatSuffix::Uscaled | FormatSuffix::Uint => (0, bottom as u32),
        FormatSuffix::Sscaled | FormatSuffix::Sint => (u32::MAX, bottom as u32),
        FormatSuffix::Sfloat => (FLOAT_BITS_NEGATIVE_ONE, FLOAT_BITS_ONE),
        FormatSuffix::Ufloat => (FLOAT_BITS_ZERO, FLOAT_BITS_ONE),
    }
}

/// Value with the low `bits` bits set, saturating at 32 bits.
#[inline]
fn low_mask(bits: u32) -> u32 {
    match bits {
        32.. => u32::MAX,
        _ => (1u32 << bits) - 1,
    }
}

/// Channel id 3 stands for alpha when creating formats.
#[inline]
fn resolve_channel(channel: u8) -> u8 {
    match channel {
        3 => CHANNEL_RGBSDA_ALPHA,
        other => other,
    }
}

fn format_sample(
    channel: u8,
    bit_offset: u32,
    bit_count: u32,
    top: bool,
    bottom: bool,
    suffix: FormatSuffix,
) -> Sample {
    let channel_id = resolve_channel(channel);
    let (lower, upper) = sample_range(suffix, bit_count, top, bottom);
    Sample {
        bit_offset,
        bit_count,
        channel_id,
        qualifiers: suffix.qualifiers(channel_id),
        position: [0; 4],
        lower,
        upper,
    }
}

fn uncompressed_builder(
    samples: &[Sample],
    plane_bytes: usize,
    suffix: FormatSuffix,
) -> DfdResult<Dfd> {
    let plane_bytes =
        u8::try_from(plane_bytes).map_err(|_| DfdError::InvalidLayout("texel exceeds 255 bytes"))?;

    let mut builder = DescriptorBuilder::new(samples.len())?;
    builder
        .set_transfer(suffix.transfer())
        .set_bytes_plane(0, plane_bytes);
    for (index, sample) in samples.iter().enumerate() {
        builder.set_sample(index, sample);
    }
    Ok(builder.build())
}

/// Creates the descriptor of an unpacked format: `num_channels` channels of
/// `bytes_per_channel` bytes each, in R, G, B, A order.
///
/// Little-endian formats get one sample per channel. Big-endian formats get one 8-bit
/// sample per byte, most significant byte first in memory. `red_blue_swap` exchanges red
/// and blue, giving B, G, R, A order.
pub fn create_unpacked(
    endianness: Endianness,
    num_channels: usize,
    bytes_per_channel: usize,
    red_blue_swap: bool,
    suffix: FormatSuffix,
) -> DfdResult<Dfd> {
    if !(1..=MAX_UNPACKED_CHANNELS).contains(&num_channels) {
        return Err(DfdError::InvalidLayout("unpacked formats have 1 to 4 channels"));
    }
    if !(1..=(MAX_SAMPLE_BITS / 8) as usize).contains(&bytes_per_channel) {
        return Err(DfdError::InvalidLayout("channels must be 1 to 32 bytes wide"));
    }

    let channel_of = |index: usize| -> u8 {
        let channel = index as u8;
        match channel {
            0 | 2 if red_blue_swap => channel ^ 2,
            _ => channel,
        }
    };

    let mut samples = Vec::new();
    match endianness {
        Endianness::Little => {
            for index in 0..num_channels {
                samples.push(format_sample(
                    channel_of(index),
                    (8 * index * bytes_per_channel) as u32,
                    (8 * bytes_per_channel) as u32,
                    true,
                    true,
                    suffix,
                ));
            }
        }
        Endianness::Big => {
            for index in 0..num_channels {
                for byte in 0..bytes_per_channel {
                    let memory_byte = index * bytes_per_channel + bytes_per_channel - byte - 1;
                    samples.push(format_sample(
                        channel_of(index),
                        (8 * memory_byte) as u32,
                        8,
                        byte == bytes_per_channel - 1,
                        byte == 0,
                        suffix,
                    ));
                }
            }
        }
    }

    debug!(
        ?endianness,
        num_channels,
        bytes_per_channel,
        ?suffix,
        samples = samples.len(),
        "creating unpacked descriptor"
    );
    uncompressed_builder(&samples, num_channels * bytes_per_channel, suffix)
}

/// Creates the descriptor of a packed format whose channels fill one word.
///
/// `bits[i]` and `channels[i]` describe the `i`th channel counting up from bit 0 of the
/// little-endian word; channel ids are RGBSDA ids, with 3 accepted for alpha. Big-endian
/// formats are produced by byte-swapping the little-endian layout within the word.
///
/// # Errors
///
/// [`DfdError::InvalidLayout`] when the slices differ in length, a channel is empty or
/// wider than 32 bits, or the channels do not add up to whole bytes.
/// [`DfdError::InvalidWordSize`] for a big-endian word that is not 1, 2, 4 or 8 bytes.
/// A 3-byte word has no bit mask that swaps it in place, so 24-bit big-endian layouts
/// are rejected rather than written with bits past the end of the plane.
pub fn create_packed(
    endianness: Endianness,
    bits: &[u32],
    channels: &[u8],
    suffix: FormatSuffix,
) -> DfdResult<Dfd> {
    if bits.len() != channels.len() || bits.is_empty() {
        return Err(DfdError::InvalidLayout(
            "packed formats need one bit count per channel",
        ));
    }
    if bits.iter().any(|&count| !(1..=32).contains(&count)) {
        return Err(DfdError::InvalidLayout("packed channels must be 1 to 32 bits wide"));
    }

    let total_bits: u32 = bits.iter().sum();
    if total_bits % 8 != 0 {
        return Err(DfdError::InvalidLayout("packed channels must fill whole bytes"));
    }

    let mut samples = Vec::with_capacity(bits.len());
    let mut bit_offset = 0;
    for (&count, &channel) in bits.iter().zip(channels) {
        samples.push(format_sample(channel, bit_offset, count, true, true, suffix));
        bit_offset += count;
    }

    let word_bytes = (total_bits / 8) as usize;
    debug!(?endianness, total_bits, ?suffix, "creating packed descriptor");
    let little = uncompressed_builder(&samples, word_bytes, suffix)?;
    match endianness {
        Endianness::Big if word_bytes > 1 => end_swap(&little, word_bytes),
        _ => Ok(little),
    }
}

/// Creates the descriptor of the shared-exponent E5B9G9R9 format.
///
/// Each color channel is a 9-bit mantissa at bits 0, 9 and 18 followed by a sample for
/// the shared 5-bit exponent in bits 27 to 31.
pub fn create_e5b9g9r9() -> DfdResult<Dfd> {
    let mut exponent = Qualifiers::default();
    exponent.set_exponent(true);

    let mut samples = Vec::with_capacity(6);
    for (channel_id, bit_offset) in [
        (CHANNEL_RGBSDA_RED, 0),
        (CHANNEL_RGBSDA_GREEN, 9),
        (CHANNEL_RGBSDA_BLUE, 18),
    ] {
        samples.push(Sample {
            bit_offset,
            bit_count: 9,
            channel_id,
            upper: 256,
            ..Default::default()
        });
        samples.push(Sample {
            bit_offset: 27,
            bit_count: 5,
            channel_id,
            qualifiers: exponent,
            upper: 15,
            ..Default::default()
        });
    }

    uncompressed_builder(&samples, 4, FormatSuffix::Ufloat)
}

/// Creates the descriptor of a block-compressed format with `block_width` x
/// `block_height` x `block_depth` texel blocks.
pub fn create_compressed(
    scheme: CompressionScheme,
    block_width: u32,
    block_height: u32,
    block_depth: u32,
    suffix: FormatSuffix,
) -> DfdResult<Dfd> {
    let dimensions = [block_width, block_height, block_depth, 1];
    if dimensions.iter().any(|size| !(1..=256).contains(size)) {
        return Err(DfdError::InvalidLayout(
            "block dimensions must be 1 to 256 texels",
        ));
    }

    let layout = scheme.layout();
    let (lower, upper) = match suffix {
        FormatSuffix::Unorm | FormatSuffix::Srgb => (0, u32::MAX),
        FormatSuffix::Snorm => (0x8000_0000, 0x7FFF_FFFF),
        other => sample_range(other, layout.sample_bits, true, true),
    };
    let sample_for = |channel_id: u8, bit_offset: u32| Sample {
        bit_offset,
        bit_count: layout.sample_bits,
        channel_id,
        qualifiers: suffix.qualifiers(channel_id),
        position: [0; 4],
        lower,
        upper,
    };

    let mut builder = DescriptorBuilder::new(scheme.sample_count())?;
    builder
        .set_model(layout.model)
        .set_transfer(suffix.transfer())
        .set_texel_block_dimensions(dimensions)
        .set_bytes_plane(0, layout.block_bytes)
        .set_sample(0, &sample_for(layout.first_channel, 0));
    if let Some((channel_id, bit_offset)) = layout.second {
        builder.set_sample(1, &sample_for(channel_id, bit_offset));
    }

    debug!(?scheme, ?suffix, "creating compressed descriptor");
    Ok(builder.build())
}

/// Creates the descriptor of a little-endian depth/stencil format.
///
/// Depth occupies the low `depth_bits` bits (32-bit depth is a float), followed by
/// `stencil_bits` bits of unsigned stencil. Either may be zero.
pub fn create_depth_stencil(depth_bits: u32, stencil_bits: u32, size_bytes: u32) -> DfdResult<Dfd> {
    if depth_bits > 32 || stencil_bits > 32 {
        return Err(DfdError::InvalidLayout("depth and stencil are at most 32 bits"));
    }
    if depth_bits + stencil_bits > size_bytes * 8 {
        return Err(DfdError::InvalidLayout(
            "depth and stencil do not fit the texel",
        ));
    }

    let mut samples = Vec::with_capacity(2);
    match depth_bits {
        0 => {}
        32 => samples.push(format_sample(
            CHANNEL_RGBSDA_DEPTH,
            0,
            32,
            true,
            true,
            FormatSuffix::Sfloat,
        )),
        _ => samples.push(format_sample(
            CHANNEL_RGBSDA_DEPTH,
            0,
            depth_bits,
            true,
            true,
            FormatSuffix::Unorm,
        )),
    }
    if stencil_bits > 0 {
        samples.push(format_sample(
            CHANNEL_RGBSDA_STENCIL,
            depth_bits,
            stencil_bits,
            true,
            true,
            FormatSuffix::Uint,
        ));
    }

    uncompressed_builder(&samples, size_bytes as usize, FormatSuffix::Unorm)
}
