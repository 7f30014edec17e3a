//! Human-readable descriptor dump.

use crate::descriptor::Dfd;
use core::fmt;

/// Single-character names of channel ids 0 to 15, as RGBSDA names them.
const CHANNEL_NAMES: &[u8; 16] = b"RGB3456789abcdeA";

impl fmt::Display for Dfd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFD total bytes: {}", self.total_size())?;
        writeln!(
            f,
            "BDB descriptor type 0x{:04x} vendor id = 0x{:05x}",
            self.descriptor_type(),
            self.vendor_id()
        )?;
        writeln!(
            f,
            "Descriptor block size {} ({} samples) versionNumber = 0x{:04x}",
            self.descriptor_block_size(),
            self.sample_count(),
            self.version_number()
        )?;
        writeln!(
            f,
            "Flags 0x{:02x} Xfer {:02} Primaries {:02} Model {:03}",
            self.flags(),
            self.transfer(),
            self.primaries(),
            self.model()
        )?;
        writeln!(
            f,
            "Dimensions: {},{},{},{}",
            self.texel_block_dimension(0),
            self.texel_block_dimension(1),
            self.texel_block_dimension(2),
            self.texel_block_dimension(3)
        )?;

        write!(f, "Plane bytes: ")?;
        for plane in 0..8 {
            let separator = if plane == 7 { "\n" } else { "," };
            write!(f, "{}{separator}", self.bytes_plane(plane))?;
        }

        for (index, sample) in self.samples().enumerate() {
            writeln!(f, "    Sample {index}")?;
            writeln!(
                f,
                "Qualifiers {:x} Channel 0x{:x} ({}) Length {} bits Offset {}",
                sample.qualifiers.raw(),
                sample.channel_id,
                CHANNEL_NAMES[(sample.channel_id & 0xF) as usize] as char,
                sample.bit_count,
                sample.bit_offset
            )?;
            let [x, y, z, w] = sample.position;
            writeln!(f, "Position: {x},{y},{z},{w}")?;
            writeln!(f, "Lower 0x{:08x}", sample.lower)?;
            writeln!(f, "Upper 0x{:08x}", sample.upper)?;
        }
        Ok(())
    }
}
