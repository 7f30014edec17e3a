//! Khronos Data Format constants for the basic descriptor block.
#![allow(dead_code)]

// Header identification
pub const VENDOR_ID_KHRONOS: u32 = 0;
pub const DESCRIPTOR_TYPE_BASIC_FORMAT: u32 = 0;

pub const VERSION_NUMBER_1_1: u32 = 0;
pub const VERSION_NUMBER_1_2: u32 = 1;
pub const VERSION_NUMBER_1_3: u32 = 2;
pub const VERSION_NUMBER_LATEST: u32 = VERSION_NUMBER_1_3;

// Layout, in 32-bit words.
/// Words preceding the first sample of the basic descriptor block.
pub const BASIC_BLOCK_HEADER_WORDS: usize = 6;
/// Words taken by each sample.
pub const SAMPLE_WORDS: usize = 4;
/// Bytes preceding the first sample of the basic descriptor block.
pub const BASIC_BLOCK_HEADER_BYTES: usize = BASIC_BLOCK_HEADER_WORDS * 4;
/// Bytes taken by each sample.
pub const SAMPLE_BYTES: usize = SAMPLE_WORDS * 4;
/// Largest sample count whose block size still fits the 16-bit size field.
pub const MAX_SAMPLES: usize = (u16::MAX as usize - BASIC_BLOCK_HEADER_BYTES) / SAMPLE_BYTES;
/// Number of bytesPlane fields in the header.
pub const PLANE_COUNT: usize = 8;
/// Widest run of bits a single sample can describe.
pub const MAX_SAMPLE_BITS: u32 = 256;

// Color models
pub const MODEL_UNSPECIFIED: u8 = 0;
pub const MODEL_RGBSDA: u8 = 1;
pub const MODEL_YUVSDA: u8 = 2;
pub const MODEL_YIQSDA: u8 = 3;
pub const MODEL_LABSDA: u8 = 4;
pub const MODEL_CMYKA: u8 = 5;
pub const MODEL_XYZW: u8 = 6;
pub const MODEL_HSVA_ANG: u8 = 7;
pub const MODEL_HSLA_ANG: u8 = 8;
pub const MODEL_HSVA_HEX: u8 = 9;
pub const MODEL_HSLA_HEX: u8 = 10;
pub const MODEL_YCGCOA: u8 = 11;
pub const MODEL_YCCBCCRC: u8 = 12;
pub const MODEL_ICTCP: u8 = 13;
pub const MODEL_CIEXYZ: u8 = 14;
pub const MODEL_CIEXYY: u8 = 15;
pub const MODEL_BC1A: u8 = 128;
pub const MODEL_BC2: u8 = 129;
pub const MODEL_BC3: u8 = 130;
pub const MODEL_BC4: u8 = 131;
pub const MODEL_BC5: u8 = 132;
pub const MODEL_BC6H: u8 = 133;
pub const MODEL_BC7: u8 = 134;
pub const MODEL_ETC1: u8 = 160;
pub const MODEL_ETC2: u8 = 161;
pub const MODEL_ASTC: u8 = 162;
pub const MODEL_ETC1S: u8 = 163;
pub const MODEL_PVRTC: u8 = 164;
pub const MODEL_PVRTC2: u8 = 165;
pub const MODEL_UASTC: u8 = 166;

// RGBSDA channels
pub const CHANNEL_RGBSDA_RED: u8 = 0;
pub const CHANNEL_RGBSDA_GREEN: u8 = 1;
pub const CHANNEL_RGBSDA_BLUE: u8 = 2;
pub const CHANNEL_RGBSDA_STENCIL: u8 = 13;
pub const CHANNEL_RGBSDA_DEPTH: u8 = 14;
pub const CHANNEL_RGBSDA_ALPHA: u8 = 15;

// Compressed model channels
pub const CHANNEL_BC1A_COLOR: u8 = 0;
pub const CHANNEL_BC1A_ALPHAPRESENT: u8 = 1;
pub const CHANNEL_BC2_COLOR: u8 = 0;
pub const CHANNEL_BC2_ALPHA: u8 = 15;
pub const CHANNEL_BC3_COLOR: u8 = 0;
pub const CHANNEL_BC3_ALPHA: u8 = 15;
pub const CHANNEL_BC4_DATA: u8 = 0;
pub const CHANNEL_BC5_RED: u8 = 0;
pub const CHANNEL_BC5_GREEN: u8 = 1;
pub const CHANNEL_BC6H_COLOR: u8 = 0;
pub const CHANNEL_BC7_COLOR: u8 = 0;
pub const CHANNEL_ETC2_RED: u8 = 0;
pub const CHANNEL_ETC2_GREEN: u8 = 1;
pub const CHANNEL_ETC2_COLOR: u8 = 2;
pub const CHANNEL_ETC2_ALPHA: u8 = 15;
pub const CHANNEL_ASTC_DATA: u8 = 0;
pub const CHANNEL_ETC1S_RGB: u8 = 0;
pub const CHANNEL_ETC1S_RRR: u8 = 3;
pub const CHANNEL_ETC1S_GGG: u8 = 4;
pub const CHANNEL_ETC1S_AAA: u8 = 15;
pub const CHANNEL_PVRTC_COLOR: u8 = 0;
pub const CHANNEL_PVRTC2_COLOR: u8 = 0;

// Color primaries
pub const PRIMARIES_UNSPECIFIED: u8 = 0;
pub const PRIMARIES_BT709: u8 = 1;
pub const PRIMARIES_SRGB: u8 = PRIMARIES_BT709;
pub const PRIMARIES_BT601_EBU: u8 = 2;
pub const PRIMARIES_BT601_SMPTE: u8 = 3;
pub const PRIMARIES_BT2020: u8 = 4;
pub const PRIMARIES_CIEXYZ: u8 = 5;
pub const PRIMARIES_ACES: u8 = 6;
pub const PRIMARIES_ACESCC: u8 = 7;
pub const PRIMARIES_NTSC1953: u8 = 8;
pub const PRIMARIES_PAL525: u8 = 9;
pub const PRIMARIES_DISPLAYP3: u8 = 10;
pub const PRIMARIES_ADOBERGB: u8 = 11;

// Transfer functions
pub const TRANSFER_UNSPECIFIED: u8 = 0;
pub const TRANSFER_LINEAR: u8 = 1;
pub const TRANSFER_SRGB: u8 = 2;
pub const TRANSFER_ITU: u8 = 3;
pub const TRANSFER_NTSC: u8 = 4;
pub const TRANSFER_SLOG: u8 = 5;
pub const TRANSFER_SLOG2: u8 = 6;
pub const TRANSFER_BT1886: u8 = 7;
pub const TRANSFER_HLG_OETF: u8 = 8;
pub const TRANSFER_HLG_EOTF: u8 = 9;
pub const TRANSFER_PQ_EOTF: u8 = 10;
pub const TRANSFER_PQ_OETF: u8 = 11;
pub const TRANSFER_DCIP3: u8 = 12;
pub const TRANSFER_PAL_OETF: u8 = 13;
pub const TRANSFER_PAL625_EOTF: u8 = 14;
pub const TRANSFER_ST240: u8 = 15;
pub const TRANSFER_ACESCC: u8 = 16;
pub const TRANSFER_ACESCCT: u8 = 17;
pub const TRANSFER_ADOBERGB: u8 = 18;

// Flags
pub const FLAG_ALPHA_STRAIGHT: u8 = 0;
pub const FLAG_ALPHA_PREMULTIPLIED: u8 = 1;

// Sample qualifiers, as stored in the top nibble of the channel type byte.
pub const QUALIFIER_LINEAR: u8 = 1 << 0;
pub const QUALIFIER_EXPONENT: u8 = 1 << 1;
pub const QUALIFIER_SIGNED: u8 = 1 << 2;
pub const QUALIFIER_FLOAT: u8 = 1 << 3;

// IEEE 754 single precision bit patterns used for float sample ranges.
pub const FLOAT_BITS_ONE: u32 = 0x3F80_0000;
pub const FLOAT_BITS_NEGATIVE_ONE: u32 = 0xBF80_0000;
pub const FLOAT_BITS_ZERO: u32 = 0;
