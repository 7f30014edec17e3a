//! Rewriting a descriptor so it describes the same texels stored with the opposite byte
//! order within each word.
//!
//! The transform runs in three steps:
//!
//! 1. [`extract_channels`] groups the samples into red, green, blue and alpha channels and
//!    records, for every channel bit, where it lives in the texel block.
//! 2. [`Channel::swap`] moves every bit to its byte-swapped location and splits the
//!    channel into runs of adjacent bits.
//! 3. The runs are written out one channel at a time, in order of the lowest bit each
//!    channel occupies.

mod channel;
mod emit;
mod swap;

pub use channel::{extract_channels, Channel, ChannelSlot};
pub use swap::{SampleRun, SwappedChannel};

use crate::descriptor::Dfd;
use crate::error::{DfdError, DfdResult};
use tracing::debug;

/// Returns the mask that maps a bit position to its location after reversing the bytes
/// of a `word_byte_size`-byte word.
///
/// # Errors
///
/// [`DfdError::InvalidWordSize`] unless `word_byte_size` is 1, 2, 4 or 8.
pub fn swap_mask(word_byte_size: usize) -> DfdResult<u32> {
    match word_byte_size {
        1 | 2 | 4 | 8 => Ok(((word_byte_size - 1) << 3) as u32),
        _ => Err(DfdError::InvalidWordSize(word_byte_size)),
    }
}

/// Produces the descriptor of `dfd`'s format with the bytes of every `word_byte_size`-byte
/// word reversed.
///
/// Only single-plane RGBSDA descriptors with red, green, blue and alpha samples are
/// supported. The header is carried over unchanged apart from the size fields; the input
/// is never modified.
///
/// # Errors
///
/// - [`DfdError::InvalidWordSize`] for a word size other than 1, 2, 4 or 8.
/// - [`DfdError::UnsupportedModel`], [`DfdError::MultiplePlanes`] and
///   [`DfdError::PlaneNotWordAligned`] for descriptors outside the supported shape.
/// - [`DfdError::UnsupportedChannel`], [`DfdError::SampleOutOfBounds`],
///   [`DfdError::NonContiguousChannel`] and [`DfdError::MixedQualifiers`] for samples
///   that cannot be regrouped.
/// - [`DfdError::TooManySamples`] when splitting channels into runs needs more samples
///   than a descriptor block can hold.
/// - [`DfdError::AllocationFailed`] when the output cannot be allocated.
///
/// # Example
///
/// ```
/// use ktx_dfd::{create_unpacked, end_swap, Endianness, FormatSuffix};
///
/// // 16-bit little-endian red, stored big-endian.
/// let little = create_unpacked(Endianness::Little, 1, 2, false, FormatSuffix::Unorm)?;
/// let big = end_swap(&little, 2)?;
/// assert_eq!(big.sample_count(), 2);
/// assert_eq!(big.sample(0).unwrap().bit_offset, 8);
/// # Ok::<(), ktx_dfd::DfdError>(())
/// ```
pub fn end_swap(dfd: &Dfd, word_byte_size: usize) -> DfdResult<Dfd> {
    let swap_mask = swap_mask(word_byte_size)?;
    debug!(
        word_byte_size,
        samples = dfd.sample_count(),
        "end-swapping descriptor"
    );

    let channels = extract_channels(dfd, word_byte_size)?;
    let swapped = channels.map(|channel| channel.swap(swap_mask));
    let output = emit::emit(dfd, &swapped)?;

    debug!(samples = output.sample_count(), "end-swap complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create::create_packed;
    use crate::format::{Endianness, FormatSuffix};
    use crate::test_prelude::*;

    fn packed_565() -> Dfd {
        rgbsda_dfd(
            2,
            &[
                unsigned_sample(CHANNEL_RGBSDA_BLUE, 0, 5),
                unsigned_sample(CHANNEL_RGBSDA_GREEN, 5, 6),
                unsigned_sample(CHANNEL_RGBSDA_RED, 11, 5),
            ],
        )
    }

    fn channel_bits(dfd: &Dfd, channel_id: u8) -> u32 {
        dfd.samples()
            .filter(|sample| sample.channel_id == channel_id)
            .map(|sample| sample.bit_count)
            .sum()
    }

    #[rstest]
    #[case(1, 0x00)]
    #[case(2, 0x08)]
    #[case(4, 0x18)]
    #[case(8, 0x38)]
    fn swap_mask_covers_byte_index_bits(#[case] word_byte_size: usize, #[case] expected: u32) {
        assert_eq!(swap_mask(word_byte_size).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(16)]
    fn rejects_invalid_word_sizes(#[case] word_byte_size: usize) {
        assert_eq!(
            swap_mask(word_byte_size).unwrap_err(),
            DfdError::InvalidWordSize(word_byte_size)
        );
        assert_eq!(
            end_swap(&rgba8_dfd(), word_byte_size).unwrap_err(),
            DfdError::InvalidWordSize(word_byte_size)
        );
    }

    #[test]
    fn rgb8_in_a_32_bit_word() {
        let out = end_swap(&rgb8_dfd(4), 4).unwrap();

        assert_eq!(
            sample_layout(&out),
            vec![
                (CHANNEL_RGBSDA_BLUE, 8, 8),
                (CHANNEL_RGBSDA_GREEN, 16, 8),
                (CHANNEL_RGBSDA_RED, 24, 8),
            ]
        );
        assert!(out.samples().all(|sample| sample.lower == 0 && sample.upper == 0xFF));
        assert_eq!(out.descriptor_block_size(), 24 + 3 * 16);
        assert_eq!(out.total_size(), 4 + 24 + 3 * 16);
    }

    #[rstest]
    #[case::rgb8(rgb8_dfd(4), 4)]
    #[case::rgba8(rgba8_dfd(), 4)]
    #[case::packed_565(packed_565(), 2)]
    #[case::byte_words(rgba8_dfd(), 1)]
    fn swapping_twice_restores_the_descriptor(#[case] dfd: Dfd, #[case] word_byte_size: usize) {
        let once = end_swap(&dfd, word_byte_size).unwrap();
        let twice = end_swap(&once, word_byte_size).unwrap();
        assert_eq!(twice, dfd);
    }

    fn signed_packed(bits: &[u32], channels: &[u8], suffix: FormatSuffix) -> Dfd {
        create_packed(Endianness::Little, bits, channels, suffix).unwrap()
    }

    #[rstest]
    #[case::snorm_565(
        signed_packed(
            &[5, 6, 5],
            &[CHANNEL_RGBSDA_BLUE, CHANNEL_RGBSDA_GREEN, CHANNEL_RGBSDA_RED],
            FormatSuffix::Snorm,
        ),
        2
    )]
    #[case::sint_2_10_10_10(
        signed_packed(
            &[10, 10, 10, 2],
            &[
                CHANNEL_RGBSDA_RED,
                CHANNEL_RGBSDA_GREEN,
                CHANNEL_RGBSDA_BLUE,
                CHANNEL_RGBSDA_ALPHA,
            ],
            FormatSuffix::Sint,
        ),
        4
    )]
    #[case::signed_red_16(
        rgbsda_dfd(2, &[signed_sample(CHANNEL_RGBSDA_RED, 0, 16, 0xFFFF_8000, 0x7FFF)]),
        2
    )]
    fn swapping_signed_channels_twice_restores_the_descriptor(
        #[case] dfd: Dfd,
        #[case] word_byte_size: usize,
    ) {
        let once = end_swap(&dfd, word_byte_size).unwrap();
        // Some channel straddles a byte boundary and is split into several runs.
        assert!(once.sample_count() > dfd.sample_count());
        assert!(once.samples().all(|sample| sample.qualifiers.signed()));

        let twice = end_swap(&once, word_byte_size).unwrap();
        assert_eq!(twice, dfd);
    }

    #[test]
    fn run_splitting_past_block_capacity_fails() {
        // Every 2-bit sample straddles the byte boundary, so each one becomes two runs.
        let samples = vec![unsigned_sample(CHANNEL_RGBSDA_RED, 7, 2); 2048];
        let dfd = rgbsda_dfd(2, &samples);

        assert_eq!(end_swap(&dfd, 2), Err(DfdError::TooManySamples(4096)));
    }

    #[rstest]
    #[case::rgba8(rgba8_dfd(), 4)]
    #[case::packed_565(packed_565(), 2)]
    #[case::wide_red(rgbsda_dfd(16, &[unsigned_sample(CHANNEL_RGBSDA_RED, 0, 128)]), 8)]
    fn preserves_bits_per_channel(#[case] dfd: Dfd, #[case] word_byte_size: usize) {
        let out = end_swap(&dfd, word_byte_size).unwrap();
        for channel_id in [
            CHANNEL_RGBSDA_RED,
            CHANNEL_RGBSDA_GREEN,
            CHANNEL_RGBSDA_BLUE,
            CHANNEL_RGBSDA_ALPHA,
        ] {
            assert_eq!(channel_bits(&out, channel_id), channel_bits(&dfd, channel_id));
        }
        assert!(out.samples().all(|sample| (1..=32).contains(&sample.bit_count)));
        assert_eq!(
            out.descriptor_block_size() as usize,
            24 + 16 * out.sample_count()
        );
        assert!(Dfd::from_words(out.words().to_vec()).is_ok());
    }

    #[test]
    fn wide_channel_with_byte_words_splits_at_32_bits() {
        let dfd = rgbsda_dfd(8, &[unsigned_sample(CHANNEL_RGBSDA_RED, 0, 64)]);
        let out = end_swap(&dfd, 1).unwrap();
        assert_eq!(
            sample_layout(&out),
            vec![(CHANNEL_RGBSDA_RED, 0, 32), (CHANNEL_RGBSDA_RED, 32, 32)]
        );
    }

    #[test]
    fn signed_channel_is_sign_extended() {
        let dfd = rgbsda_dfd(4, &[signed_sample(CHANNEL_RGBSDA_RED, 0, 8, 0, 0xFF)]);
        let out = end_swap(&dfd, 4).unwrap();

        let sample = out.sample(0).unwrap();
        assert_eq!(sample.bit_offset, 24);
        assert_eq!(sample.lower, 0);
        assert_eq!(sample.upper, u32::MAX);
        assert!(sample.qualifiers.signed());
    }

    #[test]
    fn absent_alpha_produces_no_alpha_samples() {
        let out = end_swap(&rgb8_dfd(4), 4).unwrap();
        assert!(out
            .samples()
            .all(|sample| sample.channel_id != CHANNEL_RGBSDA_ALPHA));
    }

    #[test]
    fn input_is_left_untouched() {
        let dfd = packed_565();
        let before = dfd.clone();
        let _ = end_swap(&dfd, 2).unwrap();
        assert_eq!(dfd, before);
    }

    #[test]
    fn depth_samples_are_unsupported() {
        let dfd = rgbsda_dfd(4, &[unsigned_sample(CHANNEL_RGBSDA_DEPTH, 0, 32)]);
        assert_eq!(
            end_swap(&dfd, 4).unwrap_err(),
            DfdError::UnsupportedChannel {
                sample: 0,
                channel_id: CHANNEL_RGBSDA_DEPTH
            }
        );
    }

    #[test]
    fn empty_descriptor_stays_empty() {
        let dfd = rgbsda_dfd(4, &[]);
        let out = end_swap(&dfd, 4).unwrap();
        assert_eq!(out.sample_count(), 0);
        assert_eq!(out.descriptor_block_size(), 24);
    }
}
