//! Declarative packet layouts and record replay.
//!
//! A record type lists its wire fields as [`FieldDescriptor`]s, in order, and
//! its byte size is derived from that list. The `decode`/`encode` bodies walk
//! the same order against a cursor, so a record's `SIZE` is exactly what its
//! replay consumes; the unit tests of every record check this.
//!
//! Every multi-byte field is little-endian.

use crate::cursor::{ByteReader, ByteWriter};
use crate::enums::WireEnum;
use crate::error::{CodecError, CodecResult};

/// Primitive kind of a wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    U64,
    F32,
    /// One-byte code resolved through the named enum table.
    Enum(&'static str),
    /// UTF-8, null-padded to the given byte length.
    FixedString(usize),
}

impl FieldKind {
    /// Byte width of one element.
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::I8 | FieldKind::Enum(_) => 1,
            FieldKind::U16 | FieldKind::I16 => 2,
            FieldKind::U32 | FieldKind::F32 => 4,
            FieldKind::U64 => 8,
            FieldKind::FixedString(len) => len,
        }
    }
}

/// One named field of a record; `count > 1` for fixed arrays such as per-tyre values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub count: usize,
}

impl FieldDescriptor {
    pub const fn scalar(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            count: 1,
        }
    }

    pub const fn array(name: &'static str, kind: FieldKind, count: usize) -> Self {
        Self { name, kind, count }
    }

    pub const fn enumerated<E: WireEnum>(name: &'static str) -> Self {
        Self::scalar(name, FieldKind::Enum(E::NAME))
    }

    pub const fn enum_array<E: WireEnum>(name: &'static str, count: usize) -> Self {
        Self::array(name, FieldKind::Enum(E::NAME), count)
    }

    pub const fn size(&self) -> usize {
        self.kind.width() * self.count
    }
}

/// Total byte width of an ordered field list.
pub const fn layout_size(fields: &[FieldDescriptor]) -> usize {
    let mut total = 0;
    let mut rest = fields;
    while let [field, tail @ ..] = rest {
        total += field.size();
        rest = tail;
    }
    total
}

/// Byte offset of the named field within an ordered field list.
pub fn field_offset(fields: &[FieldDescriptor], name: &str) -> Option<usize> {
    let mut offset = 0;
    for field in fields {
        if field.name == name {
            return Some(offset);
        }
        offset += field.size();
    }
    None
}

/// A fixed-size record that can be replayed from a reader.
pub trait WireRecord: Sized {
    /// Wire fields in order.
    const FIELDS: &'static [FieldDescriptor];

    /// Bytes consumed by one record.
    const SIZE: usize = layout_size(Self::FIELDS);

    fn decode(reader: &mut ByteReader<'_>) -> CodecResult<Self>;
}

/// A record that can also be written back.
pub trait EncodeRecord: WireRecord {
    fn encode(&self, writer: &mut ByteWriter) -> CodecResult<()>;
}

/// How many times a repeated record occurs in a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatArity {
    /// A constant number of records, e.g. one per grid slot.
    Fixed(usize),
    /// A `u8` count read from the body just before `capacity` reserved slots.
    /// Only the first `count` slots hold records.
    Counted {
        count_field: &'static str,
        capacity: usize,
    },
}

impl RepeatArity {
    /// Record slots reserved on the wire.
    pub const fn slots(self) -> usize {
        match self {
            RepeatArity::Fixed(n) => n,
            RepeatArity::Counted { capacity, .. } => capacity,
        }
    }

    /// Bytes taken by the count prefix.
    pub const fn prefix_size(self) -> usize {
        match self {
            RepeatArity::Fixed(_) => 0,
            RepeatArity::Counted { .. } => 1,
        }
    }
}

/// Body layout of one packet type: a repeated record block then trailing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLayout {
    pub repeat: RepeatArity,
    pub record: &'static [FieldDescriptor],
    pub trailing: &'static [FieldDescriptor],
}

impl BodyLayout {
    /// Body bytes expected after the header.
    pub const fn size(&self) -> usize {
        self.repeat.prefix_size()
            + self.repeat.slots() * layout_size(self.record)
            + layout_size(self.trailing)
    }
}

/// Replay a repeated record block.
///
/// For a counted block the unused slots are skipped, whatever they hold.
pub fn read_block<T: WireRecord>(
    reader: &mut ByteReader<'_>,
    arity: RepeatArity,
) -> CodecResult<Vec<T>> {
    match arity {
        RepeatArity::Fixed(n) => (0..n).map(|_| T::decode(reader)).collect(),
        RepeatArity::Counted {
            count_field,
            capacity,
        } => {
            let count = usize::from(reader.u8()?);
            if count > capacity {
                return Err(CodecError::InvalidCount {
                    field: count_field,
                    count,
                    capacity,
                });
            }
            let records = (0..count)
                .map(|_| T::decode(reader))
                .collect::<CodecResult<Vec<T>>>()?;
            reader.skip(capacity.saturating_sub(count).saturating_mul(T::SIZE))?;
            Ok(records)
        }
    }
}

/// Write a repeated record block; unused counted slots are zero-filled.
pub fn write_block<T: EncodeRecord>(
    writer: &mut ByteWriter,
    arity: RepeatArity,
    records: &[T],
) -> CodecResult<()> {
    let count = records.len();
    match arity {
        RepeatArity::Fixed(n) => {
            if count != n {
                return Err(CodecError::InvalidCount {
                    field: "records",
                    count,
                    capacity: n,
                });
            }
        }
        RepeatArity::Counted {
            count_field,
            capacity,
        } => {
            let prefix = u8::try_from(count)
                .ok()
                .filter(|c| usize::from(*c) <= capacity)
                .ok_or(CodecError::InvalidCount {
                    field: count_field,
                    count,
                    capacity,
                })?;
            writer.write_u8(prefix)?;
        }
    }
    records.iter().try_for_each(|r| r.encode(writer))?;
    writer.write_zeros(arity.slots().saturating_sub(count).saturating_mul(T::SIZE))
}
