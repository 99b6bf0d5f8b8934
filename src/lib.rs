//! Variable-length coding for unsigned integers with a unary length prefix.
//!
//! Each encoded value occupies 1 to 9 bytes. The first byte opens with a run
//! of 1 bits whose length equals the number of payload bytes that follow,
//! terminated by a 0 bit; the bits after the terminator and all following
//! bytes hold the value in big endian order. A value below 128 is a single
//! byte, and each additional byte buys seven more bits of magnitude, up to a
//! nine byte form (first byte `0xff`) that carries a full 64-bit value in its
//! trailing eight bytes. Because the length is announced up front, a decoder
//! knows how many bytes to consume after reading a single byte.
//!
//! The [`UnsignedVInt`] trait is implemented for `u64` and `u32`. The 32-bit
//! implementation is a projection of the 64-bit coder: values are
//! zero-extended before encoding and the low 32 bits of the decoded magnitude
//! are returned, so `i32` bit patterns survive a trip through the unsigned
//! entry points. Signed values are not coded directly; callers carrying
//! signed data map it to a magnitude (e.g. with a zigzag transform) first.
//!
//! [`UnsignedVInt`] codes values directly to/from byte slices; extension
//! traits cover `bytes::{Buf, BufMut}`, and free functions cover
//! `std::io::{Read, Write}`.
//!
//! ```
//! use bytes::Buf;
//! use unsigned_vint::{UnsignedVInt, UnsignedVIntBuf, UnsignedVIntBufMut};
//!
//! // value_buf is the maximum size needed to encode a value.
//! let mut value_buf = [0u8; unsigned_vint::MAX_LEN];
//! assert_eq!(10_201u64.encode_unsigned_vint(&mut value_buf), 2);
//! assert_eq!((10_201u64, 2), u64::decode_unsigned_vint(&value_buf).unwrap());
//!
//! let mut buf_mut = vec![];
//! for v in (0..4000u64).step_by(7) {
//!     buf_mut.put_unsigned_vint(v);
//! }
//!
//! let mut buf = buf_mut.as_slice();
//! while let Ok(v) = buf.get_unsigned_vint::<u64>() {
//!     assert_eq!(v % 7, 0);
//! }
//! assert!(!buf.has_remaining());
//! ```
mod buf;
mod error;
mod io;
mod vint;
mod wire;

pub use crate::buf::{UnsignedVIntBuf, UnsignedVIntBufMut, UnsignedVIntIter};
pub use crate::error::DecodeError;
pub use crate::io::{read_unsigned_vint, read_unsigned_vint_buf, write_unsigned_vint};
pub use crate::vint::{EncodedVInt, UnsignedVInt};

/// Maximum number of bytes a single encoded value will occupy.
pub const MAX_LEN: usize = 9;

/// Maximum number of bytes an encoded 32-bit value will occupy.
pub const MAX_LEN_32: usize = 5;

/// Largest first byte that is a complete value by itself.
pub(crate) const MAX_1BYTE_TAG: u8 = 0x7f;
