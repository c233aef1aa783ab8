//! Enum resolution tables.
//!
//! Each domain enum maps a closed set of raw wire codes to named variants and
//! carries exactly one sentinel for codes it does not know. Resolution is
//! total: [`WireEnum::from_raw`] never fails, so a value added by a newer game
//! build decodes as the sentinel instead of dropping the datagram. The tables
//! are `match` expressions generated at compile time and hold no state.

use std::fmt;

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{CodecError, CodecResult};

/// Raw integer type backing a one-byte enum field.
pub trait RawCode: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self>;
    fn write(self, writer: &mut ByteWriter) -> CodecResult<()>;
}

impl RawCode for u8 {
    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        reader.u8()
    }

    fn write(self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_u8(self)
    }
}

/// Flag-style enums use a signed byte so that `-1` can mark "invalid".
impl RawCode for i8 {
    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        reader.i8()
    }

    fn write(self, writer: &mut ByteWriter) -> CodecResult<()> {
        writer.write_i8(self)
    }
}

/// Bidirectional mapping between a raw wire code and a named variant.
pub trait WireEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Raw: RawCode;

    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Every variant that has a wire code, sentinel excluded.
    const KNOWN: &'static [Self];

    /// The invalid/unknown sentinel.
    const UNKNOWN: Self;

    /// Resolve a raw code. Unmapped codes resolve to [`Self::UNKNOWN`].
    fn from_raw(raw: Self::Raw) -> Self;

    /// Wire code for this variant.
    ///
    /// `None` for a sentinel without a documented code; encoding such a value
    /// is a caller error.
    fn to_raw(self) -> Option<Self::Raw>;

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Declare a [`WireEnum`] from its code table.
///
/// The sentinel is listed after `unknown:`; give it `= code` when the wire
/// format documents one, otherwise it has no encoding.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
        unknown: $(#[$umeta:meta])* $unknown:ident $(= $unknown_raw:literal)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            $(#[$umeta])*
            #[default]
            $unknown,
        }

        impl $crate::enums::WireEnum for $name {
            type Raw = $raw;

            const NAME: &'static str = stringify!($name);
            const KNOWN: &'static [Self] = &[$(Self::$variant),+];
            const UNKNOWN: Self = Self::$unknown;

            fn from_raw(raw: $raw) -> Self {
                match raw {
                    $( $value => Self::$variant, )+
                    _ => Self::$unknown,
                }
            }

            fn to_raw(self) -> Option<$raw> {
                match self {
                    $( Self::$variant => Some($value), )+
                    Self::$unknown => {
                        let code: Option<$raw> = None $(.or(Some($unknown_raw)))?;
                        code
                    }
                }
            }
        }
    };
}

mod car;
mod roster;

pub use car::{
    ActualTyreCompound, DrsAllowed, ErsDeployMode, FuelMix, MfdPanel, SurfaceType,
    TractionControl, VisualTyreCompound, ZoneFlag,
};
pub use roster::{Driver, Nationality, ReadyStatus, Team, TelemetrySetting};

impl ByteReader<'_> {
    /// Read a one-byte enum field.
    pub fn wire_enum<E: WireEnum>(&mut self) -> CodecResult<E> {
        E::Raw::read(self).map(E::from_raw)
    }

    pub fn wire_enum_array<E: WireEnum, const N: usize>(&mut self) -> CodecResult<[E; N]> {
        let mut arr = [E::UNKNOWN; N];
        for item in arr.iter_mut() {
            *item = self.wire_enum()?;
        }
        Ok(arr)
    }
}

impl ByteWriter {
    /// Write a one-byte enum field. `field` names the field in the error.
    pub fn write_enum<E: WireEnum>(&mut self, value: E, field: &'static str) -> CodecResult<()> {
        let raw = value.to_raw().ok_or(CodecError::UnmappedEnum {
            enum_name: E::NAME,
            field,
        })?;
        raw.write(self)
    }

    pub fn write_enum_array<E: WireEnum>(
        &mut self,
        values: &[E],
        field: &'static str,
    ) -> CodecResult<()> {
        values.iter().try_for_each(|v| self.write_enum(*v, field))
    }
}
