#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe must never panic
    let _ = zentga::TgaHeader::from_bytes(data);

    // Full decode must never panic; cap the allocation so a random
    // 18-byte header can't demand gigabytes
    let limits = zentga::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let _ = zentga::decode_with_limits(data, &limits, enough::Unstoppable);
});
