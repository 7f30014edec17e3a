#![no_main]

// Builds RGBSDA descriptors from arbitrary samples and checks that every successful
// end-swap moves each channel's bits to exactly the byte-swapped positions, and that a
// second swap restores each bit's lower and upper values.

use ktx_dfd::{
    constants::*, end_swap, swap_mask, DescriptorBuilder, Dfd, Qualifiers, Sample,
};
use libfuzzer_sys::{arbitrary, fuzz_target};

const CHANNELS: [u8; 4] = [
    CHANNEL_RGBSDA_RED,
    CHANNEL_RGBSDA_GREEN,
    CHANNEL_RGBSDA_BLUE,
    CHANNEL_RGBSDA_ALPHA,
];
const WORD_SIZES: [usize; 4] = [1, 2, 4, 8];

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzSample {
    pub channel: u8,
    pub bit_offset: u8,
    pub bit_count: u8,
    pub signed: bool,
    pub lower: u32,
    pub upper: u32,
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzInput {
    pub word_size: u8,
    pub plane_bytes: u8,
    pub samples: Vec<FuzzSample>,
}

fn build_dfd(input: &FuzzInput) -> Option<Dfd> {
    let mut builder = DescriptorBuilder::new(input.samples.len()).ok()?;
    builder.set_bytes_plane(0, input.plane_bytes);
    for (index, fuzz_sample) in input.samples.iter().enumerate() {
        let mut qualifiers = Qualifiers::default();
        qualifiers.set_signed(fuzz_sample.signed);
        let sample = Sample {
            bit_offset: fuzz_sample.bit_offset as u32,
            bit_count: (fuzz_sample.bit_count % 32) as u32 + 1,
            channel_id: CHANNELS[(fuzz_sample.channel % 4) as usize],
            qualifiers,
            position: [0; 4],
            lower: fuzz_sample.lower,
            upper: fuzz_sample.upper,
        };
        builder.set_sample(index, &sample);
    }
    Some(builder.build())
}

/// Sorted bit positions covered by the samples of `channel_id`, each XORed with `mask`.
fn channel_positions(dfd: &Dfd, channel_id: u8, mask: u32) -> Vec<u32> {
    let mut positions = dfd
        .samples()
        .filter(|sample| sample.channel_id == channel_id)
        .flat_map(|sample| sample.bit_offset..sample.end_bit())
        .map(|position| position ^ mask)
        .collect::<Vec<_>>();
    positions.sort_unstable();
    positions
}

/// Sorted `(position, lower bit, upper bit)` of every bit owned by `channel_id`.
fn channel_values(dfd: &Dfd, channel_id: u8) -> Vec<(u32, bool, bool)> {
    let mut values = dfd
        .samples()
        .filter(|sample| sample.channel_id == channel_id)
        .flat_map(|sample| {
            (0..sample.bit_count).map(move |bit| {
                let source = bit.min(31);
                (
                    sample.bit_offset + bit,
                    (sample.lower >> source) & 1 != 0,
                    (sample.upper >> source) & 1 != 0,
                )
            })
        })
        .collect::<Vec<_>>();
    values.sort_unstable();
    values
}

fuzz_target!(|input: FuzzInput| {
    if input.samples.len() > 16 {
        return;
    }
    let Some(dfd) = build_dfd(&input) else {
        return;
    };

    let word_size = WORD_SIZES[(input.word_size % 4) as usize];
    let Ok(swapped) = end_swap(&dfd, word_size) else {
        return;
    };

    let mask = swap_mask(word_size).unwrap();
    for channel_id in CHANNELS {
        assert_eq!(
            channel_positions(&swapped, channel_id, 0),
            channel_positions(&dfd, channel_id, mask),
            "channel {channel_id} with {word_size}-byte words"
        );
    }

    let plane_bits = input.plane_bytes as u32 * 8;
    for sample in swapped.samples() {
        assert!((1..=32).contains(&sample.bit_count));
        assert!(sample.end_bit() <= plane_bits);
    }
    assert!(Dfd::from_words(swapped.words().to_vec()).is_ok());
    assert_eq!(swapped.bytes_plane(0), dfd.bytes_plane(0));

    let Ok(restored) = end_swap(&swapped, word_size) else {
        return;
    };
    for channel_id in CHANNELS {
        assert_eq!(
            channel_values(&restored, channel_id),
            channel_values(&dfd, channel_id),
            "channel {channel_id} after two swaps of {word_size}-byte words"
        );
    }
});
