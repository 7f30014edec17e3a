#![no_main]

// Parses and patches arbitrary bytes as a KTX2 file. Patching never resizes the file and
// leaves it untouched when it fails.

use ktx_dfd_ktx2::{parse_ktx2, patch_dfd, read_dfd, PatchOperation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = parse_ktx2(data) {
        assert_eq!(info.levels.len(), info.level_count.max(1) as usize);
        let _ = read_dfd(data, &info);
    }

    for operation in [PatchOperation::MakeSized, PatchOperation::MakeUnsized] {
        let mut patched = data.to_vec();
        if patch_dfd(&mut patched, operation).is_err() {
            assert_eq!(patched, data);
        }
        assert_eq!(patched.len(), data.len());
    }
});
