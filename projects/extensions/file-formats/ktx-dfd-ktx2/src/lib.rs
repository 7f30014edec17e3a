#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod ktx2;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use error::{Ktx2Error, Ktx2Region, Ktx2Result};
pub use ktx2::*;
