//! Error types for descriptor parsing, construction and the end-swap transform.

use thiserror::Error;

/// Result type for descriptor operations.
pub type DfdResult<T> = Result<T, DfdError>;

/// Errors raised while reading, building or transforming a data format descriptor.
///
/// No operation returning this error hands back a partially built descriptor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DfdError {
    /// The buffer is shorter than the smallest possible descriptor.
    #[error("Input buffer too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort { required: usize, actual: usize },

    /// The byte buffer cannot be split into whole 32-bit words.
    #[error("Descriptor length of {len} bytes is not a multiple of 4")]
    UnalignedLength { len: usize },

    /// The leading total size word disagrees with the buffer length.
    #[error("Descriptor total size field is {declared} bytes but the buffer holds {actual} bytes")]
    TotalSizeMismatch { declared: u32, actual: usize },

    /// The descriptor block size field disagrees with the buffer length.
    #[error("Descriptor block size field is {declared} bytes but the block holds {actual} bytes")]
    BlockSizeMismatch { declared: u32, actual: usize },

    /// The descriptor block does not hold a header plus a whole number of samples.
    #[error("Descriptor block size of {0} bytes does not hold a whole number of samples")]
    InvalidBlockSize(u32),

    /// The descriptor's color model is not RGBSDA.
    #[error("Unsupported color model {0}, only RGBSDA descriptors can be end-swapped")]
    UnsupportedModel(u8),

    /// A sample belongs to a channel other than red, green, blue or alpha.
    #[error("Sample {sample} uses channel {channel_id}, only red, green, blue and alpha are supported")]
    UnsupportedChannel { sample: usize, channel_id: u8 },

    /// A channel's samples are interleaved with samples of another channel.
    #[error("Sample {sample} continues channel {channel_id} after samples of another channel")]
    NonContiguousChannel { sample: usize, channel_id: u8 },

    /// Samples of one channel disagree on their qualifier flags.
    #[error("Sample {sample} has qualifiers differing from earlier samples of channel {channel_id}")]
    MixedQualifiers { sample: usize, channel_id: u8 },

    /// A sample extends past the end of the plane.
    #[error("Sample {sample} ends at bit {end_bit}, past the {plane_bits}-bit plane")]
    SampleOutOfBounds {
        sample: usize,
        end_bit: u32,
        plane_bits: u32,
    },

    /// More than one plane is in use.
    #[error("Descriptors with more than one plane are not supported")]
    MultiplePlanes,

    /// The swap word size is not a power of two between 1 and 8.
    #[error("Invalid word size of {0} bytes, expected 1, 2, 4 or 8")]
    InvalidWordSize(usize),

    /// The plane cannot be divided into whole words.
    #[error("Plane of {plane_bytes} bytes is not a multiple of the {word_bytes}-byte word size")]
    PlaneNotWordAligned { plane_bytes: u32, word_bytes: usize },

    /// Reserving memory for the output descriptor failed.
    #[error("Failed to allocate the output descriptor")]
    AllocationFailed,

    /// The descriptor block would overflow its 16-bit size field.
    #[error("{0} samples exceed the maximum descriptor block size")]
    TooManySamples(usize),

    /// Format creation parameters do not describe a representable layout.
    #[error("Invalid format layout: {0}")]
    InvalidLayout(&'static str),
}

/// Reasons a descriptor cannot be reduced to simple per-channel offsets and sizes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InterpretError {
    /// A channel's bits are in neither little- nor big-endian order.
    #[error("Channel bits are neither little-endian nor big-endian")]
    NontrivialEndianness,

    /// A sample is placed somewhere other than the origin of the texel block.
    #[error("Samples at positions other than the texel block origin are not supported")]
    MultipleSampleLocations,

    /// More than one plane is in use.
    #[error("Descriptors with more than one plane are not supported")]
    MultiplePlanes,

    /// The model is not RGBSDA or a sample is not red, green, blue or alpha.
    #[error("Only red, green, blue and alpha channels of the RGBSDA model are supported")]
    UnsupportedChannelTypes,

    /// Samples disagree on being float or signed.
    #[error("Channels mix float and integer or signed and unsigned data")]
    MixedChannels,
}
