//! Helpers for coding values over `std::io` streams.
use std::io::{BufRead, Error, ErrorKind, Read, Result, Write};

use crate::{DecodeError, UnsignedVInt, MAX_1BYTE_TAG, MAX_LEN};

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        let kind = match value {
            DecodeError::Truncated => ErrorKind::UnexpectedEof,
        };
        Error::new(kind, value)
    }
}

/// Encodes `v` and writes it to `w`. Returns the number of bytes written.
#[inline]
pub fn write_unsigned_vint<V: UnsignedVInt>(v: V, w: &mut impl Write) -> Result<usize> {
    let enc = v.to_unsigned_vint_bytes();
    w.write_all(enc.as_slice())?;
    Ok(enc.len())
}

/// Reads and decodes one value from `r`.
/// Prefer [`read_unsigned_vint_buf`] wherever possible as it can decode
/// straight out of the reader's buffer.
#[inline]
pub fn read_unsigned_vint<V: UnsignedVInt>(r: &mut impl Read) -> Result<V> {
    let mut buf = [0u8; MAX_LEN];
    r.read_exact(&mut buf[..1])?;
    let tag = buf[0];
    if tag <= MAX_1BYTE_TAG {
        return Ok(V::from_vint_raw(tag.into()));
    }
    let extra = tag.leading_ones() as usize;
    r.read_exact(&mut buf[1..=extra])?;
    V::decode_unsigned_vint(buf.as_slice())
        .map(|(v, _)| v)
        .map_err(Error::from)
}

/// Reads and decodes one value from `r`.
#[inline]
pub fn read_unsigned_vint_buf<V: UnsignedVInt>(r: &mut impl BufRead) -> Result<V> {
    let buf = r.fill_buf()?;
    if buf.len() >= MAX_LEN {
        let (v, len) = V::decode_unsigned_vint(buf).map_err(Error::from)?;
        r.consume(len);
        Ok(v)
    } else {
        read_unsigned_vint(r)
    }
}
