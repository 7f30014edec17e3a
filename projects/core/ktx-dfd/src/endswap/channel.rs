//! Grouping of samples into logical channels.

use crate::bits::WordBits;
use crate::constants::*;
use crate::descriptor::Dfd;
use crate::error::{DfdError, DfdResult};
use crate::sample::Sample;
use crate::words::Qualifiers;
use alloc::vec::Vec;
use derive_enum_all_values::AllValues;
use tracing::trace;

/// The channels understood by the end-swap transform.
///
/// Declaration order doubles as the tie-break order when two channels claim the same bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum ChannelSlot {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl ChannelSlot {
    /// Maps an RGBSDA channel id to its slot.
    pub fn from_channel_id(channel_id: u8) -> Option<Self> {
        match channel_id {
            CHANNEL_RGBSDA_RED => Some(Self::Red),
            CHANNEL_RGBSDA_GREEN => Some(Self::Green),
            CHANNEL_RGBSDA_BLUE => Some(Self::Blue),
            CHANNEL_RGBSDA_ALPHA => Some(Self::Alpha),
            _ => None,
        }
    }

    /// The RGBSDA channel id of this slot.
    pub fn channel_id(self) -> u8 {
        match self {
            Self::Red => CHANNEL_RGBSDA_RED,
            Self::Green => CHANNEL_RGBSDA_GREEN,
            Self::Blue => CHANNEL_RGBSDA_BLUE,
            Self::Alpha => CHANNEL_RGBSDA_ALPHA,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit representing this slot in an ownership mask.
    #[inline(always)]
    pub fn owner_bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The bits of one logical channel, gathered from its samples in declaration order.
///
/// Channel bit `i` came from absolute source bit `positions()[i]`; the lower and upper
/// bitmaps hold bit `i` of the channel's raw minimum and maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    slot: ChannelSlot,
    positions: Vec<u32>,
    lower: WordBits<Vec<u32>>,
    upper: WordBits<Vec<u32>>,
    qualifiers: Qualifiers,
    sample_position: [u8; 4],
}

impl Channel {
    fn new(slot: ChannelSlot) -> Self {
        Self {
            slot,
            positions: Vec::new(),
            lower: WordBits::zeroed(0),
            upper: WordBits::zeroed(0),
            qualifiers: Qualifiers::default(),
            sample_position: [0; 4],
        }
    }

    #[inline]
    pub fn slot(&self) -> ChannelSlot {
        self.slot
    }

    #[inline]
    pub fn bit_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Absolute source bit of every channel bit, least significant first.
    #[inline]
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// Qualifiers shared by every sample of the channel.
    #[inline]
    pub fn qualifiers(&self) -> Qualifiers {
        self.qualifiers
    }

    /// Sample position of the channel's first sample.
    #[inline]
    pub fn sample_position(&self) -> [u8; 4] {
        self.sample_position
    }

    #[inline]
    pub fn lower_bit(&self, index: usize) -> bool {
        self.lower.get(index)
    }

    #[inline]
    pub fn upper_bit(&self, index: usize) -> bool {
        self.upper.get(index)
    }

    /// Sign of the raw minimum; always `false` for unsigned channels.
    #[inline]
    pub fn lower_sign(&self) -> bool {
        self.sign_of(&self.lower)
    }

    /// Sign of the raw maximum; always `false` for unsigned channels.
    #[inline]
    pub fn upper_sign(&self) -> bool {
        self.sign_of(&self.upper)
    }

    fn sign_of(&self, bitmap: &WordBits<Vec<u32>>) -> bool {
        match self.positions.len() {
            0 => false,
            len => self.qualifiers.signed() && bitmap.get(len - 1),
        }
    }

    fn push_sample(&mut self, sample: &Sample) {
        if self.is_empty() {
            self.qualifiers = sample.qualifiers;
            self.sample_position = sample.position;
        }

        let base = self.positions.len();
        let bits = sample.bit_count as usize;
        self.positions.reserve(bits);
        self.lower.ensure_len(base + bits);
        self.upper.ensure_len(base + bits);

        for bit in 0..sample.bit_count {
            let index = base + bit as usize;
            self.positions.push(sample.bit_offset + bit);

            // Samples wider than 32 bits repeat the top bit of their 32-bit values.
            let source = bit.min(31);
            self.lower.set(index, (sample.lower >> source) & 1 != 0);
            self.upper.set(index, (sample.upper >> source) & 1 != 0);
        }
    }
}

/// Splits the samples of `dfd` into red, green, blue and alpha channels, indexed by
/// [`ChannelSlot::index`].
///
/// `word_byte_size` must already be validated; the plane has to hold a whole number of
/// such words so that swapped positions stay inside it. Channels without samples are
/// returned empty.
pub fn extract_channels(dfd: &Dfd, word_byte_size: usize) -> DfdResult<[Channel; 4]> {
    let model = dfd.model();
    if model != MODEL_RGBSDA {
        return Err(DfdError::UnsupportedModel(model));
    }
    if !dfd.is_single_plane() {
        return Err(DfdError::MultiplePlanes);
    }

    let plane_bytes = dfd.bytes_plane(0) as u32;
    if plane_bytes as usize % word_byte_size != 0 {
        return Err(DfdError::PlaneNotWordAligned {
            plane_bytes,
            word_bytes: word_byte_size,
        });
    }
    let plane_bits = plane_bytes * 8;

    let mut channels = [
        Channel::new(ChannelSlot::Red),
        Channel::new(ChannelSlot::Green),
        Channel::new(ChannelSlot::Blue),
        Channel::new(ChannelSlot::Alpha),
    ];
    let mut previous: Option<ChannelSlot> = None;

    for (index, sample) in dfd.samples().enumerate() {
        let slot = ChannelSlot::from_channel_id(sample.channel_id).ok_or(
            DfdError::UnsupportedChannel {
                sample: index,
                channel_id: sample.channel_id,
            },
        )?;

        if sample.end_bit() > plane_bits {
            return Err(DfdError::SampleOutOfBounds {
                sample: index,
                end_bit: sample.end_bit(),
                plane_bits,
            });
        }

        let channel = &mut channels[slot.index()];
        if !channel.is_empty() {
            if previous != Some(slot) {
                return Err(DfdError::NonContiguousChannel {
                    sample: index,
                    channel_id: sample.channel_id,
                });
            }
            if channel.qualifiers != sample.qualifiers {
                return Err(DfdError::MixedQualifiers {
                    sample: index,
                    channel_id: sample.channel_id,
                });
            }
        }

        channel.push_sample(&sample);
        previous = Some(slot);
    }

    for channel in &channels {
        trace!(
            slot = ?channel.slot,
            bits = channel.bit_count(),
            signed = channel.qualifiers.signed(),
            "extracted channel"
        );
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn channel_slots_round_trip_channel_ids() {
        for &slot in ChannelSlot::all_values() {
            assert_eq!(ChannelSlot::from_channel_id(slot.channel_id()), Some(slot));
        }
        assert_eq!(ChannelSlot::from_channel_id(CHANNEL_RGBSDA_DEPTH), None);
        assert_eq!(ChannelSlot::from_channel_id(CHANNEL_RGBSDA_STENCIL), None);
        assert_eq!(ChannelSlot::Alpha.owner_bit(), 8);
    }

    #[test]
    fn gathers_positions_and_bitmaps_per_channel() {
        let dfd = rgbsda_dfd(
            2,
            &[
                unsigned_sample(CHANNEL_RGBSDA_BLUE, 0, 5),
                unsigned_sample(CHANNEL_RGBSDA_GREEN, 5, 6),
                unsigned_sample(CHANNEL_RGBSDA_RED, 11, 5),
            ],
        );
        let [red, green, blue, alpha] = extract_channels(&dfd, 2).unwrap();

        assert_eq!(red.positions(), &[11, 12, 13, 14, 15]);
        assert_eq!(green.positions(), &[5, 6, 7, 8, 9, 10]);
        assert_eq!(blue.positions(), &[0, 1, 2, 3, 4]);
        assert!(alpha.is_empty());
        assert!((0..6).all(|bit| green.upper_bit(bit) && !green.lower_bit(bit)));
        assert!(!green.upper_sign());
    }

    #[test]
    fn concatenates_consecutive_samples_of_one_channel() {
        // Big-endian 16-bit red: high byte first in memory.
        let dfd = rgbsda_dfd(
            2,
            &[
                Sample {
                    upper: 0xFF,
                    ..unsigned_sample(CHANNEL_RGBSDA_RED, 8, 8)
                },
                Sample {
                    upper: 0x0F,
                    ..unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8)
                },
            ],
        );
        let [red, ..] = extract_channels(&dfd, 2).unwrap();

        assert_eq!(red.bit_count(), 16);
        assert_eq!(&red.positions()[..9], &[8, 9, 10, 11, 12, 13, 14, 15, 0]);
        assert!((0..12).all(|bit| red.upper_bit(bit)));
        assert!((12..16).all(|bit| !red.upper_bit(bit)));
    }

    #[test]
    fn wide_samples_repeat_bit_31() {
        let dfd = rgbsda_dfd(8, &[unsigned_sample(CHANNEL_RGBSDA_RED, 0, 64)]);
        let [red, ..] = extract_channels(&dfd, 8).unwrap();
        assert_eq!(red.bit_count(), 64);
        assert!((0..64).all(|bit| red.upper_bit(bit)));
    }

    #[rstest]
    #[case(0xFFFF_FF80, 0x7F, true, false)]
    #[case(0, 0xFF, false, true)]
    fn sign_is_top_channel_bit(
        #[case] lower: u32,
        #[case] upper: u32,
        #[case] lower_sign: bool,
        #[case] upper_sign: bool,
    ) {
        let dfd = rgbsda_dfd(4, &[signed_sample(CHANNEL_RGBSDA_RED, 0, 8, lower, upper)]);
        let [red, ..] = extract_channels(&dfd, 4).unwrap();
        assert_eq!(red.lower_sign(), lower_sign);
        assert_eq!(red.upper_sign(), upper_sign);
    }

    #[test]
    fn unsigned_channels_have_no_sign() {
        let dfd = rgbsda_dfd(4, &[unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8)]);
        let [red, ..] = extract_channels(&dfd, 4).unwrap();
        assert!(red.upper_bit(7));
        assert!(!red.upper_sign());
    }

    #[test]
    fn rejects_non_rgbsda_models() {
        let mut builder = DescriptorBuilder::new(1).unwrap();
        builder
            .set_model(MODEL_BC1A)
            .set_bytes_plane(0, 8)
            .set_sample(0, &unsigned_sample(CHANNEL_BC1A_COLOR, 0, 64));
        let dfd = builder.build();
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::UnsupportedModel(MODEL_BC1A)
        );
    }

    #[test]
    fn rejects_multiple_planes() {
        let mut dfd = rgb8_dfd(4);
        dfd.set_bytes_plane(1, 4);
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::MultiplePlanes
        );
    }

    #[test]
    fn rejects_plane_not_made_of_whole_words() {
        let dfd = rgb8_dfd(3);
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::PlaneNotWordAligned {
                plane_bytes: 3,
                word_bytes: 4
            }
        );
    }

    #[test]
    fn rejects_depth_channel() {
        let dfd = rgbsda_dfd(4, &[unsigned_sample(CHANNEL_RGBSDA_DEPTH, 0, 24)]);
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::UnsupportedChannel {
                sample: 0,
                channel_id: CHANNEL_RGBSDA_DEPTH
            }
        );
    }

    #[test]
    fn rejects_samples_past_the_plane() {
        let dfd = rgbsda_dfd(2, &[unsigned_sample(CHANNEL_RGBSDA_RED, 12, 8)]);
        assert_eq!(
            extract_channels(&dfd, 2).unwrap_err(),
            DfdError::SampleOutOfBounds {
                sample: 0,
                end_bit: 20,
                plane_bits: 16
            }
        );
    }

    #[test]
    fn rejects_interleaved_channel_samples() {
        let dfd = rgbsda_dfd(
            4,
            &[
                unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8),
                unsigned_sample(CHANNEL_RGBSDA_GREEN, 8, 8),
                unsigned_sample(CHANNEL_RGBSDA_RED, 16, 8),
            ],
        );
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::NonContiguousChannel {
                sample: 2,
                channel_id: CHANNEL_RGBSDA_RED
            }
        );
    }

    #[test]
    fn rejects_mixed_qualifiers_within_a_channel() {
        let dfd = rgbsda_dfd(
            4,
            &[
                unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8),
                signed_sample(CHANNEL_RGBSDA_RED, 8, 8, 0xFFFF_FF80, 0x7F),
            ],
        );
        assert_eq!(
            extract_channels(&dfd, 4).unwrap_err(),
            DfdError::MixedQualifiers {
                sample: 1,
                channel_id: CHANNEL_RGBSDA_RED
            }
        );
    }
}
