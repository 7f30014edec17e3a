//! Bit layouts of the individual 32-bit words making up a basic descriptor block.
//!
//! Each type wraps one word; field positions are relative to that word's least
//! significant bit.

use bitfield::bitfield;

macro_rules! raw_word {
    ($name:ident, $raw:ty) => {
        impl $name {
            /// Wraps a raw word read from a descriptor.
            #[inline(always)]
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// The raw word, as stored in a descriptor.
            #[inline(always)]
            pub const fn raw(self) -> $raw {
                self.0
            }
        }
    };
}

bitfield! {
    /// Word 0 of the basic descriptor block.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VendorWord(u32);
    impl Debug;
    u32;

    pub vendor_id, set_vendor_id: 16, 0;
    pub descriptor_type, set_descriptor_type: 31, 17;
}
raw_word!(VendorWord, u32);

bitfield! {
    /// Word 1 of the basic descriptor block.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VersionWord(u32);
    impl Debug;
    u32;

    pub version_number, set_version_number: 15, 0;
    /// Size of the basic descriptor block in bytes, header included.
    pub descriptor_block_size, set_descriptor_block_size: 31, 16;
}
raw_word!(VersionWord, u32);

bitfield! {
    /// Word 2 of the basic descriptor block.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModelWord(u32);
    impl Debug;
    u8;

    pub model, set_model: 7, 0;
    pub primaries, set_primaries: 15, 8;
    pub transfer, set_transfer: 23, 16;
    pub flags, set_flags: 31, 24;
}
raw_word!(ModelWord, u32);

bitfield! {
    /// Word 3 of the basic descriptor block.
    ///
    /// Each dimension is stored as its size minus one.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TexelBlockWord(u32);
    impl Debug;
    u8;

    pub dimension_minus_one, set_dimension_minus_one: 7, 0, 4;
}
raw_word!(TexelBlockWord, u32);

bitfield! {
    /// Words 4 and 5 of the basic descriptor block, four planes each.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BytesPlaneWord(u32);
    impl Debug;
    u8;

    pub bytes_plane, set_bytes_plane: 7, 0, 4;
}
raw_word!(BytesPlaneWord, u32);

bitfield! {
    /// Word 0 of a sample.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SampleLayoutWord(u32);
    impl Debug;
    u32;

    pub bit_offset, set_bit_offset: 15, 0;
    /// Number of bits in the sample, minus one.
    pub bit_length_minus_one, set_bit_length_minus_one: 23, 16;
    pub u8, channel_id, set_channel_id: 27, 24;
    pub u8, qualifier_bits, set_qualifier_bits: 31, 28;
}
raw_word!(SampleLayoutWord, u32);

impl SampleLayoutWord {
    /// Qualifier flags of the sample.
    #[inline]
    pub fn qualifiers(&self) -> Qualifiers {
        Qualifiers(self.qualifier_bits())
    }

    #[inline]
    pub fn set_qualifiers(&mut self, qualifiers: Qualifiers) {
        self.set_qualifier_bits(qualifiers.0);
    }

    /// The 8-bit channel type: channel id in the low nibble, qualifiers in the high nibble.
    #[inline]
    pub fn channel_type(&self) -> u8 {
        (self.raw() >> 24) as u8
    }
}

bitfield! {
    /// Word 1 of a sample.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SamplePositionWord(u32);
    impl Debug;
    u8;

    pub position, set_position: 7, 0, 4;
}
raw_word!(SamplePositionWord, u32);

bitfield! {
    /// Qualifier flags of a sample, from the top nibble of its channel type.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers(u8);
    impl Debug;
    u8;

    /// Data is linearly encoded even if the descriptor's transfer function is not.
    pub linear, set_linear: 0;
    /// Sample holds an exponent rather than a mantissa.
    pub exponent, set_exponent: 1;
    pub signed, set_signed: 2;
    pub float, set_float: 3;
}
raw_word!(Qualifiers, u8);
