//! Assembly of the output descriptor from swapped channels.

use super::channel::ChannelSlot;
use super::swap::{owner_map, SwappedChannel};
use crate::descriptor::{DescriptorBuilder, Dfd};
use crate::error::DfdResult;

/// Builds the output descriptor: the header of `source` followed by the runs of every
/// channel.
///
/// Channels are emitted whole, ordered by the lowest output bit they own. Channels
/// tying on a bit follow red, green, blue, alpha order.
pub(crate) fn emit(source: &Dfd, channels: &[SwappedChannel; 4]) -> DfdResult<Dfd> {
    let sample_count = channels.iter().map(|channel| channel.runs().len()).sum();
    let mut builder = DescriptorBuilder::with_header_of(source, sample_count)?;

    let mut emitted = [false; 4];
    let mut next = 0;
    for owner in owner_map(channels) {
        for &slot in ChannelSlot::all_values() {
            if owner & slot.owner_bit() == 0 || emitted[slot.index()] {
                continue;
            }
            for sample in channels[slot.index()].samples() {
                builder.set_sample(next, &sample);
                next += 1;
            }
            emitted[slot.index()] = true;
        }
    }

    debug_assert_eq!(next, sample_count);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endswap::channel::extract_channels;
    use crate::test_prelude::*;

    #[test]
    fn orders_channels_by_lowest_owned_bit() {
        let dfd = rgb8_dfd(4);
        let channels = extract_channels(&dfd, 4).unwrap().map(|channel| channel.swap(0x18));
        let out = emit(&dfd, &channels).unwrap();

        assert_eq!(
            sample_layout(&out),
            vec![
                (CHANNEL_RGBSDA_BLUE, 8, 8),
                (CHANNEL_RGBSDA_GREEN, 16, 8),
                (CHANNEL_RGBSDA_RED, 24, 8),
            ]
        );
    }

    #[test]
    fn keeps_all_runs_of_a_channel_together() {
        let dfd = rgbsda_dfd(
            2,
            &[
                unsigned_sample(CHANNEL_RGBSDA_BLUE, 0, 5),
                unsigned_sample(CHANNEL_RGBSDA_GREEN, 5, 6),
                unsigned_sample(CHANNEL_RGBSDA_RED, 11, 5),
            ],
        );
        let channels = extract_channels(&dfd, 2).unwrap().map(|channel| channel.swap(0x8));
        let out = emit(&dfd, &channels).unwrap();

        assert_eq!(
            sample_layout(&out),
            vec![
                (CHANNEL_RGBSDA_GREEN, 13, 3),
                (CHANNEL_RGBSDA_GREEN, 0, 3),
                (CHANNEL_RGBSDA_RED, 3, 5),
                (CHANNEL_RGBSDA_BLUE, 8, 5),
            ]
        );
    }

    #[test]
    fn ties_follow_channel_order() {
        // Alpha and red both claim bit 0.
        let dfd = rgbsda_dfd(
            1,
            &[
                unsigned_sample(CHANNEL_RGBSDA_ALPHA, 0, 8),
                unsigned_sample(CHANNEL_RGBSDA_RED, 0, 8),
            ],
        );
        let channels = extract_channels(&dfd, 1).unwrap().map(|channel| channel.swap(0));
        let out = emit(&dfd, &channels).unwrap();

        assert_eq!(
            sample_layout(&out),
            vec![(CHANNEL_RGBSDA_RED, 0, 8), (CHANNEL_RGBSDA_ALPHA, 0, 8)]
        );
    }

    #[test]
    fn copies_header_from_source() {
        let mut builder = DescriptorBuilder::new(3).unwrap();
        builder
            .set_transfer(TRANSFER_SRGB)
            .set_flags(FLAG_ALPHA_PREMULTIPLIED)
            .set_texel_block_dimensions([4, 4, 1, 1])
            .set_bytes_plane(0, 4);
        for (index, sample) in rgb8_dfd(4).samples().enumerate() {
            builder.set_sample(index, &sample);
        }
        let dfd = builder.build();

        let channels = extract_channels(&dfd, 4).unwrap().map(|channel| channel.swap(0x18));
        let out = emit(&dfd, &channels).unwrap();

        assert_eq!(out.transfer(), TRANSFER_SRGB);
        assert_eq!(out.flags(), FLAG_ALPHA_PREMULTIPLIED);
        assert_eq!(out.texel_block_dimension(0), 4);
        assert_eq!(out.bytes_plane(0), 4);
        assert_eq!(out.version_number(), dfd.version_number());
    }
}
