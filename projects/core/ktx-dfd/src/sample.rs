use crate::constants::*;
use crate::words::{Qualifiers, SampleLayoutWord, SamplePositionWord};

/// One sample of a basic descriptor block: a contiguous run of bits belonging to one channel.
///
/// `lower` and `upper` hold the raw values that map to the channel's minimum and maximum.
/// Only the low `bit_count` bits are meaningful for samples narrower than 32 bits; signed
/// samples sign extend into the remaining bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sample {
    /// First bit of the sample within the texel block.
    pub bit_offset: u32,
    /// Number of bits covered by the sample, 1 to 256.
    pub bit_count: u32,
    pub channel_id: u8,
    pub qualifiers: Qualifiers,
    /// Sample coordinates within the texel block, one per dimension.
    pub position: [u8; 4],
    pub lower: u32,
    pub upper: u32,
}

impl Sample {
    /// Decodes a sample from its four descriptor words.
    pub fn from_words(words: &[u32; SAMPLE_WORDS]) -> Self {
        let layout = SampleLayoutWord::from_raw(words[0]);
        let position = SamplePositionWord::from_raw(words[1]);
        Self {
            bit_offset: layout.bit_offset(),
            bit_count: layout.bit_length_minus_one() + 1,
            channel_id: layout.channel_id(),
            qualifiers: layout.qualifiers(),
            position: [0, 1, 2, 3].map(|i| position.position(i)),
            lower: words[2],
            upper: words[3],
        }
    }

    /// Encodes the sample into its four descriptor words.
    pub fn to_words(&self) -> [u32; SAMPLE_WORDS] {
        debug_assert!((1..=MAX_SAMPLE_BITS).contains(&self.bit_count));

        let mut layout = SampleLayoutWord::default();
        layout.set_bit_offset(self.bit_offset);
        layout.set_bit_length_minus_one(self.bit_count - 1);
        layout.set_channel_id(self.channel_id);
        layout.set_qualifiers(self.qualifiers);

        let mut position = SamplePositionWord::default();
        for (index, value) in self.position.iter().enumerate() {
            position.set_position(index, *value);
        }

        [layout.raw(), position.raw(), self.lower, self.upper]
    }

    /// One past the last bit covered by the sample.
    #[inline]
    pub fn end_bit(&self) -> u32 {
        self.bit_offset + self.bit_count
    }

    /// The 8-bit channel type: channel id in the low nibble, qualifiers in the high nibble.
    #[inline]
    pub fn channel_type(&self) -> u8 {
        self.channel_id | (self.qualifiers.raw() << 4)
    }
}
