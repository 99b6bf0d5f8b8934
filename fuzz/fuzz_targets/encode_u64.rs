#![no_main]

use libfuzzer_sys::fuzz_target;
use unsigned_vint::{UnsignedVIntBuf, UnsignedVIntBufMut};

fuzz_target!(|data: &[u8]| {
    let mut dst = vec![];
    for chunk in data.chunks_exact(8) {
        let n = u64::from_le_bytes(chunk.try_into().unwrap());
        dst.put_unsigned_vint(n);
    }

    let mut src = &dst[..];
    for chunk in data.chunks_exact(8) {
        let n = u64::from_le_bytes(chunk.try_into().unwrap());
        assert_eq!(src.get_unsigned_vint::<u64>().unwrap(), n);
    }
});
