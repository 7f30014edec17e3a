//! Reduces simple RGBA descriptors to per-channel offsets and sizes, the form graphics
//! APIs describe formats in.

use crate::constants::*;
use crate::descriptor::Dfd;
use crate::endswap::ChannelSlot;
use crate::error::InterpretError;
use crate::format::Endianness;
use crate::sample::Sample;

/// Location of one channel.
///
/// Packed formats measure in bits within the word; unpacked formats measure in bytes
/// within the texel. A zero `size` means the channel is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelLayout {
    pub offset: u32,
    pub size: u32,
}

/// Result of [`interpret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpretedFormat {
    pub endianness: Endianness,
    /// Some channel does not start on a byte boundary.
    pub packed: bool,
    pub srgb: bool,
    pub normalized: bool,
    pub signed: bool,
    pub float: bool,
    /// Red, green, blue and alpha, indexed by [`ChannelSlot::index`].
    pub channels: [ChannelLayout; 4],
    /// Word size in bytes: the whole texel for packed formats, one channel otherwise.
    pub word_bytes: u32,
}

impl InterpretedFormat {
    #[inline]
    pub fn channel(&self, slot: ChannelSlot) -> ChannelLayout {
        self.channels[slot.index()]
    }
}

/// Numeric flags decided by the first sample showing them.
#[derive(Default)]
struct NumericFlags {
    float: Option<bool>,
    signed: Option<bool>,
    normalized: Option<bool>,
}

impl NumericFlags {
    fn update(&mut self, sample: &Sample) -> Result<(), InterpretError> {
        let qualifiers = sample.qualifiers;
        Self::decide(&mut self.float, qualifiers.float())?;
        Self::decide(&mut self.signed, qualifiers.signed())?;

        // Single-bit samples cannot tell normalized from integer data.
        if self.normalized.is_none() && sample.bit_count > 1 {
            let normalized = match self.float == Some(true) {
                true => f32::from_bits(sample.upper) != 1.0,
                false => sample.upper != 1,
            };
            self.normalized = Some(normalized);
        }
        Ok(())
    }

    /// A flag is settled by the first sample that has it; later samples must agree.
    fn decide(decided: &mut Option<bool>, value: bool) -> Result<(), InterpretError> {
        match *decided {
            None if value => *decided = Some(true),
            Some(true) if !value => return Err(InterpretError::MixedChannels),
            _ => {}
        }
        Ok(())
    }
}

/// Interprets a single-plane RGBSDA descriptor whose channels are each stored
/// contiguously in little- or big-endian order.
///
/// # Errors
///
/// Checks run in this order: [`InterpretError::MultiplePlanes`],
/// [`InterpretError::UnsupportedChannelTypes`] for other models,
/// [`InterpretError::MultipleSampleLocations`], [`InterpretError::MixedChannels`], then
/// [`InterpretError::UnsupportedChannelTypes`] for other channels and
/// [`InterpretError::NontrivialEndianness`] while walking the samples.
pub fn interpret(dfd: &Dfd) -> Result<InterpretedFormat, InterpretError> {
    if !dfd.is_single_plane() {
        return Err(InterpretError::MultiplePlanes);
    }
    if dfd.model() != MODEL_RGBSDA {
        return Err(InterpretError::UnsupportedChannelTypes);
    }
    if dfd.samples().any(|sample| sample.position != [0; 4]) {
        return Err(InterpretError::MultipleSampleLocations);
    }

    let mut flags = NumericFlags::default();
    for sample in dfd.samples() {
        flags.update(&sample)?;
    }
    let packed = dfd.samples().any(|sample| sample.bit_offset & 7 != 0);

    let (big_endian, channels, word_bytes) = match packed {
        true => packed_layout(dfd)?,
        false => unpacked_layout(dfd)?,
    };

    Ok(InterpretedFormat {
        endianness: match big_endian {
            true => Endianness::Big,
            false => Endianness::Little,
        },
        packed,
        srgb: dfd.transfer() == TRANSFER_SRGB,
        normalized: flags.normalized.unwrap_or(false),
        signed: flags.signed.unwrap_or(false),
        float: flags.float.unwrap_or(false),
        channels,
        word_bytes,
    })
}

fn slot_of(sample: &Sample) -> Result<ChannelSlot, InterpretError> {
    ChannelSlot::from_channel_id(sample.channel_id).ok_or(InterpretError::UnsupportedChannelTypes)
}

/// Offsets and sizes in bits. A channel may only continue in the previous byte, which
/// makes the format big-endian.
fn packed_layout(dfd: &Dfd) -> Result<(bool, [ChannelLayout; 4], u32), InterpretError> {
    let word_bytes = dfd.bytes_plane(0) as u32;
    let mut channels = [ChannelLayout::default(); 4];
    let mut big_endian = false;
    let mut previous: Option<Sample> = None;

    for sample in dfd.samples() {
        let slot = slot_of(&sample)?;
        let channel = &mut channels[slot.index()];

        match previous {
            Some(last) if last.channel_id == sample.channel_id => {
                let continues_big_endian = (sample.bit_offset >> 3)
                    .checked_add(1)
                    .is_some_and(|next| next == last.bit_offset >> 3)
                    && last.end_bit() & 7 == 0
                    && sample.bit_offset & 7 == 0;
                if !continues_big_endian {
                    return Err(InterpretError::NontrivialEndianness);
                }
                big_endian = true;
                channel.size += sample.bit_count;
            }
            _ => {
                if channel.size != 0 {
                    return Err(InterpretError::NontrivialEndianness);
                }
                *channel = ChannelLayout {
                    offset: sample.bit_offset,
                    size: sample.bit_count,
                };
            }
        }
        previous = Some(sample);
    }

    // Offsets so far are those of each channel's first sample, i.e. little-endian.
    if big_endian {
        let mask = word_bytes.saturating_sub(1) << 3;
        for channel in channels.iter_mut().filter(|channel| channel.size != 0) {
            channel.offset ^= mask;
        }
    }
    Ok((big_endian, channels, word_bytes))
}

/// Offsets and sizes in bytes. A channel may continue in the previous byte
/// (big-endian) or right after its last sample (little-endian), consistently.
fn unpacked_layout(dfd: &Dfd) -> Result<(bool, [ChannelLayout; 4], u32), InterpretError> {
    let mut channels = [ChannelLayout::default(); 4];
    let mut endianness: Option<Endianness> = None;
    let mut word_bytes = 0;
    let mut previous: Option<(u8, u32, u32)> = None;

    for sample in dfd.samples() {
        let slot = slot_of(&sample)?;
        let byte_offset = sample.bit_offset >> 3;
        let byte_length = sample.bit_count >> 3;
        let channel = &mut channels[slot.index()];

        match previous {
            Some((channel_id, last_offset, last_length)) if channel_id == sample.channel_id => {
                if byte_offset + 1 == last_offset {
                    if endianness == Some(Endianness::Little) {
                        return Err(InterpretError::NontrivialEndianness);
                    }
                    endianness = Some(Endianness::Big);
                    channel.offset = byte_offset;
                } else if byte_offset == last_offset + last_length {
                    if endianness == Some(Endianness::Big) {
                        return Err(InterpretError::NontrivialEndianness);
                    }
                    endianness = Some(Endianness::Little);
                } else {
                    return Err(InterpretError::NontrivialEndianness);
                }
                channel.size += byte_length;
            }
            _ => {
                if channel.size != 0 {
                    return Err(InterpretError::NontrivialEndianness);
                }
                *channel = ChannelLayout {
                    offset: byte_offset,
                    size: byte_length,
                };
            }
        }
        // Every channel is assumed to be as wide as the latest one.
        word_bytes = channel.size;
        previous = Some((sample.channel_id, byte_offset, byte_length));
    }

    Ok((
        endianness == Some(Endianness::Big),
        channels,
        word_bytes,
    ))
}
