#![no_main]

use std::hint::black_box;

use libfuzzer_sys::fuzz_target;
use unsigned_vint::UnsignedVIntBuf;

fuzz_target!(|data: &[u8]| {
    // attempts to decode all the data as u64: errors are ok, panics are not
    let mut src = data;
    for v in src.iter_unsigned_vint::<u64>() {
        let _ = black_box(v);
    }
});
