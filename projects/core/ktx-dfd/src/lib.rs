#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bits;
pub mod constants;
pub mod create;
pub mod descriptor;
pub mod endswap;
pub mod error;
pub mod format;
pub mod interpret;
pub mod queries;
pub mod sample;
pub mod words;

mod print;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use create::{
    create_compressed, create_depth_stencil, create_e5b9g9r9, create_packed, create_unpacked,
};
pub use descriptor::{DescriptorBuilder, Dfd, MIN_DFD_BYTES};
pub use endswap::{end_swap, swap_mask, ChannelSlot};
pub use error::{DfdError, DfdResult, InterpretError};
pub use format::{CompressionScheme, Endianness, FormatSuffix};
pub use interpret::{interpret, ChannelLayout, InterpretedFormat};
pub use queries::{component_info_unpacked, num_components, reconstruct_bytes_plane0, ComponentInfo};
pub use sample::Sample;
pub use words::Qualifiers;
