//! Owned data format descriptors and their builder.

use crate::constants::*;
use crate::error::{DfdError, DfdResult};
use crate::sample::Sample;
use crate::words::*;
use alloc::vec::Vec;

// Word indices within a descriptor, counting the total size prefix.
const TOTAL_SIZE: usize = 0;
const VENDOR: usize = 1;
const VERSION: usize = 2;
const MODEL: usize = 3;
const TEXEL_BLOCK: usize = 4;
const BYTES_PLANE_LOW: usize = 5;
const BYTES_PLANE_HIGH: usize = 6;
const SAMPLE_START: usize = 7;

/// Smallest valid descriptor: the size prefix and a header without samples.
pub const MIN_DFD_BYTES: usize = SAMPLE_START * 4;

/// A data format descriptor: a total size word followed by one basic descriptor block.
///
/// The words are host-order values; use [`Dfd::from_le_bytes`] and [`Dfd::to_le_bytes`]
/// when moving to or from a file. A constructed [`Dfd`] always satisfies
/// `total size == 4 + descriptor block size == buffer length` and holds a whole number
/// of samples.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dfd {
    words: Vec<u32>,
}

impl Dfd {
    /// Wraps descriptor words after validating the size fields.
    pub fn from_words(words: Vec<u32>) -> DfdResult<Self> {
        validate_words(&words)?;
        Ok(Self { words })
    }

    /// Parses a descriptor stored as little-endian words, as in a KTX2 file.
    pub fn from_le_bytes(bytes: &[u8]) -> DfdResult<Self> {
        if bytes.len() % 4 != 0 {
            return Err(DfdError::UnalignedLength { len: bytes.len() });
        }
        if bytes.len() < MIN_DFD_BYTES {
            return Err(DfdError::InputTooShort {
                required: MIN_DFD_BYTES,
                actual: bytes.len(),
            });
        }

        let words = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self::from_words(words)
    }

    /// The descriptor as host-order words, size prefix included.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[inline]
    pub fn into_words(self) -> Vec<u32> {
        self.words
    }

    /// Serializes the descriptor as little-endian words.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    /// Total size in bytes, as recorded in the first word.
    #[inline]
    pub fn total_size(&self) -> u32 {
        self.words[TOTAL_SIZE]
    }

    #[inline]
    pub fn vendor_id(&self) -> u32 {
        VendorWord::from_raw(self.words[VENDOR]).vendor_id()
    }

    #[inline]
    pub fn descriptor_type(&self) -> u32 {
        VendorWord::from_raw(self.words[VENDOR]).descriptor_type()
    }

    #[inline]
    pub fn version_number(&self) -> u32 {
        VersionWord::from_raw(self.words[VERSION]).version_number()
    }

    /// Size of the basic descriptor block in bytes.
    #[inline]
    pub fn descriptor_block_size(&self) -> u32 {
        VersionWord::from_raw(self.words[VERSION]).descriptor_block_size()
    }

    #[inline]
    pub fn model(&self) -> u8 {
        ModelWord::from_raw(self.words[MODEL]).model()
    }

    #[inline]
    pub fn primaries(&self) -> u8 {
        ModelWord::from_raw(self.words[MODEL]).primaries()
    }

    #[inline]
    pub fn transfer(&self) -> u8 {
        ModelWord::from_raw(self.words[MODEL]).transfer()
    }

    #[inline]
    pub fn flags(&self) -> u8 {
        ModelWord::from_raw(self.words[MODEL]).flags()
    }

    /// Size of the texel block in the given dimension (0 to 3), in texels.
    #[inline]
    pub fn texel_block_dimension(&self, dimension: usize) -> u32 {
        TexelBlockWord::from_raw(self.words[TEXEL_BLOCK]).dimension_minus_one(dimension) as u32 + 1
    }

    /// Bytes per texel block in the given plane (0 to 7).
    #[inline]
    pub fn bytes_plane(&self, plane: usize) -> u8 {
        BytesPlaneWord::from_raw(self.words[plane_word(plane)]).bytes_plane(plane % 4)
    }

    /// Overwrites the byte count of the given plane (0 to 7).
    pub fn set_bytes_plane(&mut self, plane: usize, value: u8) {
        let index = plane_word(plane);
        let mut word = BytesPlaneWord::from_raw(self.words[index]);
        word.set_bytes_plane(plane % 4, value);
        self.words[index] = word.raw();
    }

    /// `true` if no plane other than plane 0 holds data.
    pub fn is_single_plane(&self) -> bool {
        (1..PLANE_COUNT).all(|plane| self.bytes_plane(plane) == 0)
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        (self.words.len() - SAMPLE_START) / SAMPLE_WORDS
    }

    /// Returns the sample at `index`, if present.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        let start = SAMPLE_START + index * SAMPLE_WORDS;
        let words = self.words.get(start..start + SAMPLE_WORDS)?;
        Some(Sample::from_words(&[words[0], words[1], words[2], words[3]]))
    }

    /// Iterates the samples in declaration order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        self.words[SAMPLE_START..]
            .chunks_exact(SAMPLE_WORDS)
            .map(|words| Sample::from_words(&[words[0], words[1], words[2], words[3]]))
    }
}

#[inline(always)]
fn plane_word(plane: usize) -> usize {
    debug_assert!(plane < PLANE_COUNT);
    if plane < 4 {
        BYTES_PLANE_LOW
    } else {
        BYTES_PLANE_HIGH
    }
}

fn validate_words(words: &[u32]) -> DfdResult<()> {
    let actual = words.len() * 4;
    if words.len() < SAMPLE_START {
        return Err(DfdError::InputTooShort {
            required: MIN_DFD_BYTES,
            actual,
        });
    }

    let declared = words[TOTAL_SIZE];
    if declared as usize != actual {
        return Err(DfdError::TotalSizeMismatch { declared, actual });
    }

    let block_size = VersionWord::from_raw(words[VERSION]).descriptor_block_size();
    if block_size as usize != actual - 4 {
        return Err(DfdError::BlockSizeMismatch {
            declared: block_size,
            actual: actual - 4,
        });
    }

    if (block_size as usize - BASIC_BLOCK_HEADER_BYTES) % SAMPLE_BYTES != 0 {
        return Err(DfdError::InvalidBlockSize(block_size));
    }

    Ok(())
}

/// Builds a [`Dfd`] holding a fixed number of samples.
///
/// The size fields are derived from the sample count, so the built descriptor always
/// satisfies the [`Dfd`] size invariants. Samples not explicitly written stay zeroed.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    words: Vec<u32>,
}

impl DescriptorBuilder {
    /// Starts a descriptor with the standard Khronos basic header.
    ///
    /// The header describes the latest descriptor version, the RGBSDA model, BT.709
    /// primaries, a linear transfer function, straight alpha and a 1x1x1x1 texel block.
    /// All planes start empty.
    pub fn new(sample_count: usize) -> DfdResult<Self> {
        let mut builder = Self::allocate(sample_count)?;

        let mut vendor = VendorWord::default();
        vendor.set_vendor_id(VENDOR_ID_KHRONOS);
        vendor.set_descriptor_type(DESCRIPTOR_TYPE_BASIC_FORMAT);
        builder.words[VENDOR] = vendor.raw();

        builder.update_version(|word| word.set_version_number(VERSION_NUMBER_LATEST));
        builder
            .set_model(MODEL_RGBSDA)
            .set_primaries(PRIMARIES_BT709)
            .set_transfer(TRANSFER_LINEAR)
            .set_flags(FLAG_ALPHA_STRAIGHT);
        Ok(builder)
    }

    /// Starts a descriptor whose header is copied from `source`.
    ///
    /// Every header field is kept except the size fields, which are recomputed, and
    /// planes 1 to 7, which are cleared.
    pub fn with_header_of(source: &Dfd, sample_count: usize) -> DfdResult<Self> {
        let mut builder = Self::allocate(sample_count)?;
        builder.words[VENDOR] = source.words[VENDOR];
        builder.update_version(|word| word.set_version_number(source.version_number()));
        builder.words[MODEL] = source.words[MODEL];
        builder.words[TEXEL_BLOCK] = source.words[TEXEL_BLOCK];
        builder.set_bytes_plane(0, source.bytes_plane(0));
        Ok(builder)
    }

    fn allocate(sample_count: usize) -> DfdResult<Self> {
        if sample_count > MAX_SAMPLES {
            return Err(DfdError::TooManySamples(sample_count));
        }

        let len = SAMPLE_START + sample_count * SAMPLE_WORDS;
        let mut words = Vec::new();
        words
            .try_reserve_exact(len)
            .map_err(|_| DfdError::AllocationFailed)?;
        words.resize(len, 0);

        // Bounded by MAX_SAMPLES, so both sizes fit their fields.
        words[TOTAL_SIZE] = (len * 4) as u32;
        let mut builder = Self { words };
        builder.update_version(|word| word.set_descriptor_block_size(((len - 1) * 4) as u32));
        Ok(builder)
    }

    fn update_version(&mut self, update: impl FnOnce(&mut VersionWord)) {
        let mut word = VersionWord::from_raw(self.words[VERSION]);
        update(&mut word);
        self.words[VERSION] = word.raw();
    }

    fn update_model(&mut self, update: impl FnOnce(&mut ModelWord)) -> &mut Self {
        let mut word = ModelWord::from_raw(self.words[MODEL]);
        update(&mut word);
        self.words[MODEL] = word.raw();
        self
    }

    pub fn set_model(&mut self, model: u8) -> &mut Self {
        self.update_model(|word| word.set_model(model))
    }

    pub fn set_primaries(&mut self, primaries: u8) -> &mut Self {
        self.update_model(|word| word.set_primaries(primaries))
    }

    pub fn set_transfer(&mut self, transfer: u8) -> &mut Self {
        self.update_model(|word| word.set_transfer(transfer))
    }

    pub fn set_flags(&mut self, flags: u8) -> &mut Self {
        self.update_model(|word| word.set_flags(flags))
    }

    /// Sets the texel block size in texels; each dimension must be 1 to 256.
    pub fn set_texel_block_dimensions(&mut self, dimensions: [u32; 4]) -> &mut Self {
        let mut word = TexelBlockWord::default();
        for (index, size) in dimensions.iter().enumerate() {
            debug_assert!((1..=256).contains(size));
            word.set_dimension_minus_one(index, (size - 1) as u8);
        }
        self.words[TEXEL_BLOCK] = word.raw();
        self
    }

    pub fn set_bytes_plane(&mut self, plane: usize, value: u8) -> &mut Self {
        let index = plane_word(plane);
        let mut word = BytesPlaneWord::from_raw(self.words[index]);
        word.set_bytes_plane(plane % 4, value);
        self.words[index] = word.raw();
        self
    }

    /// Writes the sample at `index`, which must be below the builder's sample count.
    pub fn set_sample(&mut self, index: usize, sample: &Sample) -> &mut Self {
        debug_assert!(index < self.sample_count());
        let start = SAMPLE_START + index * SAMPLE_WORDS;
        self.words[start..start + SAMPLE_WORDS].copy_from_slice(&sample.to_words());
        self
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        (self.words.len() - SAMPLE_START) / SAMPLE_WORDS
    }

    /// Finishes the descriptor.
    pub fn build(self) -> Dfd {
        Dfd { words: self.words }
    }
}
