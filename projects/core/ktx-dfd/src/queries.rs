//! Small questions answered directly from a descriptor's samples.

use crate::constants::*;
use crate::descriptor::Dfd;

/// Number of components and bytes per component of an unpacked format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentInfo {
    pub count: u32,
    pub byte_length: u32,
}

/// Counts the components of a format: runs of consecutive samples sharing a channel id.
pub fn num_components(dfd: &Dfd) -> u32 {
    let mut current: Option<u8> = None;
    let mut count = 0;
    for sample in dfd.samples() {
        if current != Some(sample.channel_id) {
            count += 1;
            current = Some(sample.channel_id);
        }
    }
    count
}

/// Component count and size of an unpacked format, where every component is assumed to
/// be as wide as the last one.
pub fn component_info_unpacked(dfd: &Dfd) -> ComponentInfo {
    let mut current: Option<u8> = None;
    let mut info = ComponentInfo::default();
    for sample in dfd.samples() {
        let byte_length = sample.bit_count >> 3;
        if current == Some(sample.channel_id) {
            info.byte_length += byte_length;
        } else {
            current = Some(sample.channel_id);
            info.count += 1;
            info.byte_length = byte_length;
        }
    }
    info
}

/// Bytes per texel block implied by the samples: enough whole bytes to hold the highest
/// sample bit.
///
/// Combined depth/stencil layouts are padded to the next power of two, matching the
/// formats graphics APIs define.
pub fn reconstruct_bytes_plane0(dfd: &Dfd) -> u32 {
    let mut has_depth = false;
    let mut has_stencil = false;
    let mut end_bit = 0;
    for sample in dfd.samples() {
        has_depth |= sample.channel_id == CHANNEL_RGBSDA_DEPTH;
        has_stencil |= sample.channel_id == CHANNEL_RGBSDA_STENCIL;
        end_bit = end_bit.max(sample.end_bit());
    }

    let bytes = end_bit.div_ceil(8);
    match dfd.model() == MODEL_RGBSDA && has_depth && has_stencil {
        true => bytes.next_power_of_two(),
        false => bytes,
    }
}

impl Dfd {
    /// Fills in bytesPlane0 from the samples and clears bytesPlane1, turning an unsized
    /// descriptor back into a sized one.
    ///
    /// Returns the reconstructed byte count, which saturates at 255.
    pub fn reconstruct_bytes_planes(&mut self) -> u8 {
        let bytes = u8::try_from(reconstruct_bytes_plane0(self)).unwrap_or(u8::MAX);
        self.set_bytes_plane(0, bytes);
        self.set_bytes_plane(1, 0);
        bytes
    }

    /// Clears bytesPlane0 and bytesPlane1, as required for supercompressed data.
    pub fn make_unsized(&mut self) {
        self.set_bytes_plane(0, 0);
        self.set_bytes_plane(1, 0);
    }
}
