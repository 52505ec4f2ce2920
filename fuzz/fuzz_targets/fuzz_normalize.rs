#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(draft) = serde_json::from_slice::<charforge_core::Draft>(data) {
        let _ = charforge_core::normalize(&draft);
    }
});
