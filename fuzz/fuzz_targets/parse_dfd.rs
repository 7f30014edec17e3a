#![no_main]

// Parses arbitrary bytes as a descriptor and runs every read-only operation on the result.

use ktx_dfd::{
    component_info_unpacked, interpret, num_components, reconstruct_bytes_plane0, Dfd,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(dfd) = Dfd::from_le_bytes(data) else {
        return;
    };

    // Serializing a parsed descriptor gives back the input.
    assert_eq!(dfd.to_le_bytes(), data);
    assert_eq!(dfd.total_size() as usize, data.len());

    let _ = dfd.to_string();
    let _ = interpret(&dfd);
    let _ = num_components(&dfd);
    let _ = component_info_unpacked(&dfd);
    let _ = reconstruct_bytes_plane0(&dfd);

    let mut unsized_dfd = dfd.clone();
    unsized_dfd.make_unsized();
    assert_eq!(unsized_dfd.bytes_plane(0), 0);
    assert_eq!(unsized_dfd.sample_count(), dfd.sample_count());
});
