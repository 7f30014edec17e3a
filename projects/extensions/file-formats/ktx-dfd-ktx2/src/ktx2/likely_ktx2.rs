use super::constants::*;

/// Determines if the given data likely represents a KTX2 texture.
/// This is done by checking the 12 byte identifier at offset 0 and the minimum header size.
/// For full header validation, use [`parse_ktx2`].
///
/// [`parse_ktx2`]: crate::ktx2::parse_ktx2::parse_ktx2
#[inline(always)]
pub fn likely_ktx2(data: &[u8]) -> bool {
    data.len() >= KTX2_HEADER_SIZE && data[..KTX2_IDENTIFIER.len()] == KTX2_IDENTIFIER
}
