use crate::{wire, DecodeError, MAX_LEN};

/// A single encoded value, produced by
/// [`UnsignedVInt::to_unsigned_vint_bytes`].
pub struct EncodedVInt {
    buf: [u8; MAX_LEN],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedVInt {
    fn new(raw: u64) -> Self {
        let mut enc = EncodedVInt {
            buf: [0u8; MAX_LEN],
            len: 0,
        };
        enc.len = wire::encode(raw, &mut enc.buf) as u8;
        enc
    }

    /// The encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the number of bytes used to encode the value.
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }
}

/// Integer widths that can be coded as an unsigned vint.
///
/// `u64` is the core width. `u32` is a projection of it: encoding
/// zero-extends the value and decoding keeps the low 32 bits of the
/// recovered magnitude. The reinterpretation means a negative `i32` cast to
/// `u32` comes back with the identical bit pattern, which is how signed
/// 32-bit protocol fields are carried through these entry points.
pub trait UnsignedVInt: Sized + Copy {
    /// Widens `self` to the raw magnitude that is actually coded.
    #[doc(hidden)]
    fn to_vint_raw(self) -> u64;

    /// Projects a decoded raw magnitude back into this width.
    #[doc(hidden)]
    fn from_vint_raw(raw: u64) -> Self;

    /// Returns the number of bytes required to encode `self`.
    /// Always in `[1, MAX_LEN]`; never more than `MAX_LEN_32` for `u32`.
    #[inline]
    fn unsigned_vint_len(self) -> usize {
        wire::encoded_len(self.to_vint_raw())
    }

    /// Encodes `self` at the start of `buf` and returns the number of bytes
    /// written.
    ///
    /// # Panics
    ///
    /// If `buf.len() < self.unsigned_vint_len()`.
    #[inline]
    fn encode_unsigned_vint(self, buf: &mut [u8]) -> usize {
        wire::encode(self.to_vint_raw(), buf)
    }

    /// Decodes a value from the start of `buf`, returning it together with
    /// the number of bytes consumed.
    #[inline]
    fn decode_unsigned_vint(buf: &[u8]) -> Result<(Self, usize), DecodeError> {
        let (raw, len) = wire::decode(buf)?;
        Ok((Self::from_vint_raw(raw), len))
    }

    /// Encodes `self` to an owned buffer and returns it.
    /// Use [`EncodedVInt::as_slice`] to access the encoded bytes.
    #[inline]
    fn to_unsigned_vint_bytes(self) -> EncodedVInt {
        EncodedVInt::new(self.to_vint_raw())
    }
}

impl UnsignedVInt for u64 {
    #[inline(always)]
    fn to_vint_raw(self) -> u64 {
        self
    }
    #[inline(always)]
    fn from_vint_raw(raw: u64) -> Self {
        raw
    }
}

impl UnsignedVInt for u32 {
    #[inline(always)]
    fn to_vint_raw(self) -> u64 {
        u64::from(self)
    }
    #[inline(always)]
    fn from_vint_raw(raw: u64) -> Self {
        raw as u32
    }
}
