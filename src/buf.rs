//! Extension traits that write/read [`UnsignedVInt`] values on
//! `bytes::{BufMut, Buf}`.

use bytes::{Buf, BufMut};

use crate::{wire, DecodeError, UnsignedVInt, MAX_1BYTE_TAG};

/// Extension for `bytes::BufMut` to write any [`UnsignedVInt`] type.
pub trait UnsignedVIntBufMut {
    /// Writes an encoded value to the buffer, advancing it by the encoded
    /// length.
    ///
    /// # Panics
    ///
    /// If the buffer does not have room for the encoded value.
    fn put_unsigned_vint<V: UnsignedVInt>(&mut self, v: V);
}

impl<Inner: BufMut> UnsignedVIntBufMut for Inner {
    #[inline]
    fn put_unsigned_vint<V: UnsignedVInt>(&mut self, v: V) {
        let raw = v.to_vint_raw();
        if raw <= u64::from(MAX_1BYTE_TAG) {
            self.put_u8(raw as u8);
        } else if raw < (1 << 56) {
            let len = wire::encoded_len(raw);
            self.put_uint(raw | wire::prefix_bits_low(len), len);
        } else {
            self.put_u8(u8::MAX);
            self.put_u64(raw);
        }
    }
}

/// Extension for `bytes::Buf` to read any [`UnsignedVInt`] type.
pub trait UnsignedVIntBuf {
    /// Reads one encoded value from the buffer. After a successful read the
    /// buffer has advanced by the number of bytes consumed; after a
    /// [`DecodeError::Truncated`] the remainder of the buffer has been
    /// drained.
    ///
    /// # Examples
    ///
    /// ```
    /// use unsigned_vint::{UnsignedVIntBuf, UnsignedVIntBufMut};
    ///
    /// let to_encode = [1u64, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///     buf.put_unsigned_vint(*v);
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///     assert_eq!(buf.get_unsigned_vint::<u64>().unwrap(), *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the buffer is empty or holds
    /// fewer bytes than the first byte's prefix declares.
    fn get_unsigned_vint<V: UnsignedVInt>(&mut self) -> Result<V, DecodeError>;

    /// Returns an iterator over the encoded values remaining in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use unsigned_vint::{UnsignedVIntBuf, UnsignedVIntBufMut};
    ///
    /// let to_encode = [7u32, 300, 70_000];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///     buf.put_unsigned_vint(*v);
    /// }
    ///
    /// let mut decoded = vec![];
    /// let mut src = buf.as_slice();
    /// for v in src.iter_unsigned_vint::<u32>() {
    ///     decoded.push(v.unwrap());
    /// }
    /// assert_eq!(to_encode, decoded.as_slice());
    /// ```
    fn iter_unsigned_vint<V: UnsignedVInt>(&mut self) -> UnsignedVIntIter<'_, Self, V>
    where
        Self: Sized,
    {
        UnsignedVIntIter::new(self)
    }
}

impl<Inner: Buf> UnsignedVIntBuf for Inner {
    #[inline]
    fn get_unsigned_vint<V: UnsignedVInt>(&mut self) -> Result<V, DecodeError> {
        if !self.has_remaining() {
            return Err(DecodeError::Truncated);
        }
        let tag = self.get_u8();
        if tag <= MAX_1BYTE_TAG {
            return Ok(V::from_vint_raw(tag.into()));
        }
        let extra = tag.leading_ones() as usize;
        if extra > self.remaining() {
            self.advance(self.remaining());
            return Err(DecodeError::Truncated);
        }
        let raw = if extra < 8 {
            ((u64::from(tag) << (extra * 8)) | self.get_uint(extra)) & wire::max_magnitude(extra + 1)
        } else {
            self.get_u64()
        };
        Ok(V::from_vint_raw(raw))
    }
}

/// An iterator over the encoded values in a `Buf`, created by
/// [`UnsignedVIntBuf::iter_unsigned_vint`].
pub struct UnsignedVIntIter<'a, B, V> {
    buf: &'a mut B,
    _width: std::marker::PhantomData<V>,
}

impl<'a, B, V> UnsignedVIntIter<'a, B, V> {
    fn new(buf: &'a mut B) -> Self {
        UnsignedVIntIter {
            buf,
            _width: std::marker::PhantomData,
        }
    }
}

impl<B, V> Iterator for UnsignedVIntIter<'_, B, V>
where
    B: Buf,
    V: UnsignedVInt,
{
    type Item = Result<V, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.has_remaining() {
            Some(self.buf.get_unsigned_vint())
        } else {
            None
        }
    }
}
