#![no_main]

use libfuzzer_sys::fuzz_target;
use unsigned_vint::{read_unsigned_vint, write_unsigned_vint};

fuzz_target!(|data: &[u8]| {
    let mut dst = vec![];
    for chunk in data.chunks_exact(8) {
        let n = u64::from_le_bytes(chunk.try_into().unwrap());
        write_unsigned_vint(n, &mut dst).unwrap();
    }

    let mut src = &dst[..];
    for chunk in data.chunks_exact(8) {
        let n = u64::from_le_bytes(chunk.try_into().unwrap());
        assert_eq!(read_unsigned_vint::<u64>(&mut src).unwrap(), n);
    }
});
