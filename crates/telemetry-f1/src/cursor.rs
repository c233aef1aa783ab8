//! Bounds-checked little-endian cursors over packet bytes.
//!
//! [`ByteReader`] walks an immutable datagram; [`ByteWriter`] fills a
//! zero-initialised buffer of fixed length. Neither grows, wraps or touches
//! bytes outside its buffer: any access past the end fails with
//! [`CodecError::OutOfBounds`] and leaves the position unchanged.

use crate::error::{CodecError, CodecResult};

/// Scale applied to normalised direction vectors on the wire.
pub const NORMALIZED_VECTOR_SCALE: f32 = 32767.0;

/// Convert a normalised 16-bit direction component to a float.
///
/// `32767` maps to `1.0`; `-32768` maps slightly past `-1.0`.
#[inline]
pub fn normalized_vector_to_f32(value: i16) -> f32 {
    f32::from(value) / NORMALIZED_VECTOR_SCALE
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Cursor-style byte reader for little-endian binary data.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn bytes(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        let out_of_bounds = CodecError::OutOfBounds {
            offset: self.pos,
            needed: n,
            len: self.data.len(),
        };
        let end = self.pos.checked_add(n).ok_or(out_of_bounds.clone())?;
        let slice = self.data.get(self.pos..end).ok_or(out_of_bounds)?;
        self.pos = end;
        Ok(slice)
    }

    pub fn skip(&mut self, n: usize) -> CodecResult<()> {
        self.bytes(n).map(|_| ())
    }

    pub fn u8_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.bytes(N)?);
        Ok(arr)
    }

    #[inline]
    pub fn u8(&mut self) -> CodecResult<u8> {
        self.u8_array::<1>().map(u8::from_le_bytes)
    }

    #[inline]
    pub fn i8(&mut self) -> CodecResult<i8> {
        self.u8_array::<1>().map(i8::from_le_bytes)
    }

    #[inline]
    pub fn u16_le(&mut self) -> CodecResult<u16> {
        self.u8_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn i16_le(&mut self) -> CodecResult<i16> {
        self.u8_array().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn u32_le(&mut self) -> CodecResult<u32> {
        self.u8_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn u64_le(&mut self) -> CodecResult<u64> {
        self.u8_array().map(u64::from_le_bytes)
    }

    /// Read an IEEE-754 float. The bit pattern is preserved, NaN included.
    #[inline]
    pub fn f32_le(&mut self) -> CodecResult<f32> {
        self.u8_array().map(f32::from_le_bytes)
    }

    pub fn u16_le_array<const N: usize>(&mut self) -> CodecResult<[u16; N]> {
        let mut arr = [0u16; N];
        for item in arr.iter_mut() {
            *item = self.u16_le()?;
        }
        Ok(arr)
    }

    pub fn i16_le_array<const N: usize>(&mut self) -> CodecResult<[i16; N]> {
        let mut arr = [0i16; N];
        for item in arr.iter_mut() {
            *item = self.i16_le()?;
        }
        Ok(arr)
    }

    pub fn f32_le_array<const N: usize>(&mut self) -> CodecResult<[f32; N]> {
        let mut arr = [0.0f32; N];
        for item in arr.iter_mut() {
            *item = self.f32_le()?;
        }
        Ok(arr)
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

/// Fixed-length little-endian writer.
///
/// The buffer is allocated zero-filled up front, so skipped regions and
/// padding read back as zero.
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buffer: Vec<u8>,
    pos: usize,
}

impl ByteWriter {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0u8; len],
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.pos)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    fn slot(&mut self, n: usize) -> CodecResult<&mut [u8]> {
        let out_of_bounds = CodecError::OutOfBounds {
            offset: self.pos,
            needed: n,
            len: self.buffer.len(),
        };
        let start = self.pos;
        let end = start.checked_add(n).ok_or(out_of_bounds.clone())?;
        let slot = self.buffer.get_mut(start..end).ok_or(out_of_bounds)?;
        self.pos = end;
        Ok(slot)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> CodecResult<()> {
        self.slot(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Write `n` zero bytes.
    pub fn write_zeros(&mut self, n: usize) -> CodecResult<()> {
        self.slot(n)?.fill(0);
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_i8(&mut self, value: i8) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_u16_le(&mut self, value: u16) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_i16_le(&mut self, value: i16) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_u32_le(&mut self, value: u32) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_u64_le(&mut self, value: u64) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_f32_le(&mut self, value: f32) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u16_le_array(&mut self, values: &[u16]) -> CodecResult<()> {
        values.iter().try_for_each(|v| self.write_u16_le(*v))
    }

    pub fn write_i16_le_array(&mut self, values: &[i16]) -> CodecResult<()> {
        values.iter().try_for_each(|v| self.write_i16_le(*v))
    }

    pub fn write_f32_le_array(&mut self, values: &[f32]) -> CodecResult<()> {
        values.iter().try_for_each(|v| self.write_f32_le(*v))
    }
}
