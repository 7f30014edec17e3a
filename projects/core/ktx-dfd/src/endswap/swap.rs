//! Mapping channel bits through the swap mask and regrouping them into runs.

use super::channel::{Channel, ChannelSlot};
use crate::sample::Sample;
use crate::words::Qualifiers;
use alloc::vec;
use alloc::vec::Vec;

/// Longest run a single output sample may describe.
const MAX_RUN_BITS: usize = 32;

/// A contiguous run of output bits belonging to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRun {
    pub bit_offset: u32,
    /// 1 to 32 bits.
    pub bit_count: u32,
    pub lower: u32,
    pub upper: u32,
}

/// A channel after its bit positions have been remapped for the new byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwappedChannel {
    slot: ChannelSlot,
    qualifiers: Qualifiers,
    sample_position: [u8; 4],
    positions: Vec<u32>,
    runs: Vec<SampleRun>,
}

impl SwappedChannel {
    #[inline]
    pub fn slot(&self) -> ChannelSlot {
        self.slot
    }

    /// Output bit of every channel bit, least significant first.
    #[inline]
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    #[inline]
    pub fn runs(&self) -> &[SampleRun] {
        &self.runs
    }

    /// The output samples of this channel, one per run, least significant run first.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.runs.iter().map(|run| Sample {
            bit_offset: run.bit_offset,
            bit_count: run.bit_count,
            channel_id: self.slot.channel_id(),
            qualifiers: self.qualifiers,
            position: self.sample_position,
            lower: run.lower,
            upper: run.upper,
        })
    }
}

impl Channel {
    /// XORs every bit position with `swap_mask` and splits the result into runs.
    ///
    /// A run ends at the channel's last bit, when the next position is not adjacent, or
    /// once it reaches 32 bits.
    pub fn swap(&self, swap_mask: u32) -> SwappedChannel {
        let positions: Vec<u32> = self.positions().iter().map(|&bit| bit ^ swap_mask).collect();

        let mut runs = Vec::new();
        let mut start = 0;
        for index in 0..positions.len() {
            let end = index + 1;
            let is_last = end == positions.len();
            let is_full = end - start == MAX_RUN_BITS;
            let is_broken = !is_last && positions[end] != positions[index] + 1;
            if is_last || is_full || is_broken {
                runs.push(self.run(&positions, start, end));
                start = end;
            }
        }

        SwappedChannel {
            slot: self.slot(),
            qualifiers: self.qualifiers(),
            sample_position: self.sample_position(),
            positions,
            runs,
        }
    }

    fn run(&self, positions: &[u32], start: usize, end: usize) -> SampleRun {
        let bit_count = (end - start) as u32;
        let mut lower = 0u32;
        let mut upper = 0u32;
        for (bit, index) in (start..end).enumerate() {
            lower |= (self.lower_bit(index) as u32) << bit;
            upper |= (self.upper_bit(index) as u32) << bit;
        }

        // Signed runs carry the channel's sign in every bit above their width.
        if (bit_count as usize) < MAX_RUN_BITS {
            let extension = u32::MAX << bit_count;
            if self.lower_sign() {
                lower |= extension;
            }
            if self.upper_sign() {
                upper |= extension;
            }
        }

        SampleRun {
            bit_offset: positions[start],
            bit_count,
            lower,
            upper,
        }
    }
}

/// Ownership mask of every output bit; entry `i` has [`ChannelSlot::owner_bit`] set for
/// each channel that writes output bit `i`.
pub(crate) fn owner_map(channels: &[SwappedChannel; 4]) -> Vec<u8> {
    let len = channels
        .iter()
        .flat_map(|channel| channel.positions.iter())
        .max()
        .map_or(0, |&bit| bit as usize + 1);

    let mut owners = vec![0u8; len];
    for channel in channels {
        let owner = channel.slot.owner_bit();
        for &bit in &channel.positions {
            owners[bit as usize] |= owner;
        }
    }
    owners
}
