//! Fixed-length, null-padded UTF-8 string fields.

use tracing::debug;

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::CodecResult;

/// Bytes reserved for a driver or player name.
pub const NAME_LENGTH: usize = 48;

/// Largest char boundary of `value` that is `<= max`.
fn floor_char_boundary(value: &str, max: usize) -> usize {
    let mut end = value.len().min(max);
    while !value.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    end
}

/// Read a string field occupying exactly `length` bytes.
///
/// The value ends at the first zero byte, or spans the whole field when no
/// zero byte is present. Invalid UTF-8 is replaced with U+FFFD, and the
/// result is cut back to whole characters within `length` bytes, so a decoded
/// value always encodes into its field unchanged. The reader always advances
/// by `length`.
pub fn read_fixed_string(reader: &mut ByteReader<'_>, length: usize) -> CodecResult<String> {
    let field = reader.bytes(length)?;
    let content = field.split(|b| *b == 0).next().unwrap_or_default();
    let mut value = String::from_utf8_lossy(content).into_owned();
    if value.len() > length {
        debug!(
            len = value.len(),
            capacity = length,
            "replacement characters overflow string field"
        );
        value.truncate(floor_char_boundary(&value, length));
    }
    Ok(value)
}

/// Write `value` into a field of exactly `length` bytes, zero-padded.
///
/// Values longer than the field are truncated at the last character boundary
/// that fits; truncation is lossy, not an error. Returns the number of
/// content bytes written.
pub fn write_fixed_string(
    writer: &mut ByteWriter,
    value: &str,
    length: usize,
) -> CodecResult<usize> {
    let end = floor_char_boundary(value, length);
    if end < value.len() {
        debug!(len = value.len(), capacity = length, "truncating string field");
    }
    let content = value.as_bytes().get(..end).unwrap_or_default();
    writer.write_bytes(content)?;
    writer.write_zeros(length.saturating_sub(end))?;
    Ok(end)
}
