#![no_main]
use configdiff::ConfigFormat;
use libfuzzer_sys::fuzz_target;

/// Fuzz every decoder plus the unknown-extension fallback chain.
fuzz_target!(|data: &[u8]| {
    for format in ConfigFormat::ALL {
        let _ = configdiff::decode(data, format);
    }
    let _ = configdiff::decode_with_candidates(data, &[]);
});
