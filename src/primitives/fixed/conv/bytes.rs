//! Width-exact byte encodings.
//!
//! These are the accessors an external memory layer uses to store and load
//! values. A value of width `W` always occupies exactly `W::BITS / 8` bytes;
//! buffers of any other length are rejected.

use crate::error::{Error, Result};
use crate::primitives::fixed::FixedInt;
use crate::width::{Width, WidthClass};

/// Checks that a buffer holds exactly one value of `class`.
pub(crate) fn check_len(class: WidthClass, actual: usize) -> Result<()> {
    if actual != class.bytes() {
        return Err(Error::ByteLength {
            class,
            expected: class.bytes(),
            actual,
        });
    }

    Ok(())
}

/// Reads a little-endian bit pattern of `class` from `bytes`.
pub(crate) fn read_le(class: WidthClass, bytes: &[u8]) -> Result<u128> {
    check_len(class, bytes.len())?;

    let mut buf = [0u8; 16];
    buf[..bytes.len()].copy_from_slice(bytes);

    Ok(u128::from_le_bytes(buf))
}

/// Reads a big-endian bit pattern of `class` from `bytes`.
pub(crate) fn read_be(class: WidthClass, bytes: &[u8]) -> Result<u128> {
    check_len(class, bytes.len())?;

    let mut buf = [0u8; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);

    Ok(u128::from_be_bytes(buf))
}

impl<W: Width> FixedInt<W> {
    /// Reads a value from exactly [`Self::BYTES`] little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        read_le(W::CLASS, bytes).map(Self::from_raw_bits)
    }

    /// Reads a value from exactly [`Self::BYTES`] big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        read_be(W::CLASS, bytes).map(Self::from_raw_bits)
    }

    /// Writes the value into `out` as little-endian bytes.
    ///
    /// `out` must be exactly [`Self::BYTES`] long.
    pub fn write_le_bytes(self, out: &mut [u8]) -> Result<()> {
        check_len(W::CLASS, out.len())?;

        out.copy_from_slice(&self.raw.to_le_bytes()[..Self::BYTES]);

        Ok(())
    }

    /// Writes the value into `out` as big-endian bytes.
    ///
    /// `out` must be exactly [`Self::BYTES`] long.
    pub fn write_be_bytes(self, out: &mut [u8]) -> Result<()> {
        check_len(W::CLASS, out.len())?;

        out.copy_from_slice(&self.raw.to_be_bytes()[16 - Self::BYTES..]);

        Ok(())
    }
}
