//! Format parameters used when creating descriptors: byte order, numeric suffix and
//! block compression scheme.

use crate::constants::*;
use crate::words::Qualifiers;
use derive_enum_all_values::AllValues;

/// Byte order of multi-byte values in memory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, AllValues)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// Numeric interpretation of a format's channels, named after the Vulkan format suffixes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum FormatSuffix {
    /// Unsigned integer mapped to `[0, 1]`.
    Unorm,
    /// Signed integer mapped to `[-1, 1]`.
    Snorm,
    /// Unsigned integer converted to float without normalization.
    Uscaled,
    /// Signed integer converted to float without normalization.
    Sscaled,
    Uint,
    Sint,
    Sfloat,
    Ufloat,
    /// Unsigned normalized color with the sRGB transfer function; alpha stays linear.
    Srgb,
}

impl FormatSuffix {
    #[inline]
    pub fn is_signed(self) -> bool {
        matches!(self, Self::Snorm | Self::Sscaled | Self::Sint | Self::Sfloat)
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Sfloat | Self::Ufloat)
    }

    /// Transfer function recorded in the descriptor header.
    #[inline]
    pub fn transfer(self) -> u8 {
        match self {
            Self::Srgb => TRANSFER_SRGB,
            _ => TRANSFER_LINEAR,
        }
    }

    /// Qualifier flags of a sample of `channel_id` in a format with this suffix.
    ///
    /// The alpha channel of an sRGB format is flagged as linear.
    pub fn qualifiers(self, channel_id: u8) -> Qualifiers {
        let mut qualifiers = Qualifiers::default();
        qualifiers.set_signed(self.is_signed());
        qualifiers.set_float(self.is_float());
        qualifiers.set_linear(self == Self::Srgb && channel_id == CHANNEL_RGBSDA_ALPHA);
        qualifiers
    }
}

/// Block compression schemes with a fixed descriptor layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum CompressionScheme {
    /// BC1 (DXT1) without alpha.
    Bc1Rgb,
    /// BC1 (DXT1) with punch-through alpha.
    Bc1Rgba,
    /// BC2 (DXT2, DXT3).
    Bc2,
    /// BC3 (DXT4, DXT5).
    Bc3,
    Bc4,
    Bc5,
    Bc6h,
    Bc7,
    /// ETC2 without alpha.
    Etc2R8G8B8,
    /// ETC2 with punch-through alpha.
    Etc2R8G8B8A1,
    /// ETC2 with separately encoded alpha.
    Etc2R8G8B8A8,
    /// Single-channel EAC.
    EacR11,
    /// Dual-channel EAC.
    EacR11G11,
    Astc,
    Etc1s,
    Pvrtc,
    Pvrtc2,
}

/// Fixed sample layout of a [`CompressionScheme`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CompressedLayout {
    pub model: u8,
    /// Channel of the sample starting at bit 0.
    pub first_channel: u8,
    /// Channel and bit offset of the second sample, for two-sample schemes.
    pub second: Option<(u8, u32)>,
    /// Bits covered by each sample.
    pub sample_bits: u32,
    /// Bytes per compressed block.
    pub block_bytes: u8,
}

impl CompressionScheme {
    pub fn layout(self) -> CompressedLayout {
        let (model, first_channel, second, sample_bits, block_bytes) = match self {
            Self::Bc1Rgb => (MODEL_BC1A, CHANNEL_BC1A_COLOR, None, 64, 8),
            Self::Bc1Rgba => (MODEL_BC1A, CHANNEL_BC1A_ALPHAPRESENT, None, 64, 8),
            Self::Bc2 => (MODEL_BC2, CHANNEL_BC2_ALPHA, Some((CHANNEL_BC2_COLOR, 64)), 64, 16),
            Self::Bc3 => (MODEL_BC3, CHANNEL_BC3_ALPHA, Some((CHANNEL_BC3_COLOR, 64)), 64, 16),
            Self::Bc4 => (MODEL_BC4, CHANNEL_BC4_DATA, None, 64, 8),
            Self::Bc5 => (MODEL_BC5, CHANNEL_BC5_RED, Some((CHANNEL_BC5_GREEN, 64)), 64, 16),
            Self::Bc6h => (MODEL_BC6H, CHANNEL_BC6H_COLOR, None, 128, 16),
            Self::Bc7 => (MODEL_BC7, CHANNEL_BC7_COLOR, None, 128, 16),
            Self::Etc2R8G8B8 => (MODEL_ETC2, CHANNEL_ETC2_COLOR, None, 64, 8),
            // Both samples cover the same 64 bits.
            Self::Etc2R8G8B8A1 => (
                MODEL_ETC2,
                CHANNEL_ETC2_COLOR,
                Some((CHANNEL_ETC2_ALPHA, 0)),
                64,
                8,
            ),
            Self::Etc2R8G8B8A8 => (
                MODEL_ETC2,
                CHANNEL_ETC2_ALPHA,
                Some((CHANNEL_ETC2_COLOR, 64)),
                64,
                16,
            ),
            Self::EacR11 => (MODEL_ETC2, CHANNEL_ETC2_RED, None, 64, 8),
            Self::EacR11G11 => (
                MODEL_ETC2,
                CHANNEL_ETC2_RED,
                Some((CHANNEL_ETC2_GREEN, 64)),
                64,
                16,
            ),
            Self::Astc => (MODEL_ASTC, CHANNEL_ASTC_DATA, None, 128, 16),
            Self::Etc1s => (MODEL_ETC1S, CHANNEL_ETC1S_RGB, None, 64, 8),
            Self::Pvrtc => (MODEL_PVRTC, CHANNEL_PVRTC_COLOR, None, 64, 8),
            Self::Pvrtc2 => (MODEL_PVRTC2, CHANNEL_PVRTC2_COLOR, None, 64, 8),
        };
        CompressedLayout {
            model,
            first_channel,
            second,
            sample_bits,
            block_bytes,
        }
    }

    #[inline]
    pub fn sample_count(self) -> usize {
        match self.layout().second {
            Some(_) => 2,
            None => 1,
        }
    }
}
