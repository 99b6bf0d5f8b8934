#![no_main]

use libfuzzer_sys::fuzz_target;
use unsigned_vint::UnsignedVIntBuf;

fuzz_target!(|data: &[u8]| {
    // attempts to decode all the data as u64: errors are ok, panics are not
    let mut src = data;
    while !src.is_empty() {
        if src.get_unsigned_vint::<u64>().is_err() {
            break;
        }
    }
});
