pub mod endswap;
pub mod info;
pub mod patch;
