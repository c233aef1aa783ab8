//! Error types for the F1 packet codec.

use std::fmt;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// The datagram was dropped; the stream is healthy
    Warning = 1,
    /// The call failed because of how it was made
    Error = 2,
    /// The sender speaks a layout this codec does not match
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Errors produced while decoding or encoding F1 UDP packets.
///
/// Every decode failure is scoped to the datagram being processed; the codec
/// holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A cursor read or write ran past the end of its buffer.
    #[error("out of bounds: {needed}-byte access at offset {offset} of a {len}-byte buffer")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// Fewer bytes than a packet header.
    #[error("truncated header: need {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    /// The body is shorter than the schema for its packet type.
    #[error("truncated {packet} body: need {expected} bytes, got {actual}")]
    TruncatedBody {
        packet: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The header decoded but no schema is registered for its packet id.
    #[error("unknown packet type id {0}")]
    UnknownPacketType(u8),

    /// The body length disagrees with the schema for this packet format.
    #[error(
        "{packet} body size mismatch for packet format {format}: schema expects {expected} bytes, got {actual}"
    )]
    SchemaSizeMismatch {
        packet: &'static str,
        format: u16,
        expected: usize,
        actual: usize,
    },

    /// Operation not available for this packet type (e.g. encoding a decode-only packet).
    #[error("{operation} is not supported for {packet} packets")]
    UnsupportedOperation {
        packet: &'static str,
        operation: &'static str,
    },

    /// Packet format the decoder is not configured to accept.
    #[error("unsupported packet format {0}")]
    UnsupportedFormat(u16),

    /// A repeat count does not fit the slots reserved for it.
    #[error("{field} count {count} does not fit capacity {capacity}")]
    InvalidCount {
        field: &'static str,
        count: usize,
        capacity: usize,
    },

    /// An enum sentinel with no wire code was asked to be encoded.
    #[error("{enum_name} value in {field} has no wire encoding")]
    UnmappedEnum {
        enum_name: &'static str,
        field: &'static str,
    },

    /// The header packet id disagrees with the payload being encoded.
    #[error("header packet id {actual} does not match payload packet id {expected}")]
    PacketIdMismatch { expected: u8, actual: u8 },
}

impl CodecError {
    /// Severity used when reporting this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CodecError::OutOfBounds { .. }
            | CodecError::TruncatedHeader { .. }
            | CodecError::TruncatedBody { .. }
            | CodecError::UnknownPacketType(_) => ErrorSeverity::Warning,
            CodecError::SchemaSizeMismatch { .. } | CodecError::UnsupportedFormat(_) => {
                ErrorSeverity::Critical
            }
            CodecError::UnsupportedOperation { .. }
            | CodecError::InvalidCount { .. }
            | CodecError::UnmappedEnum { .. }
            | CodecError::PacketIdMismatch { .. } => ErrorSeverity::Error,
        }
    }

    /// Whether the caller can drop the current datagram and carry on.
    ///
    /// Misuse of the encode API is not recoverable by retrying with the next
    /// datagram. A body count above capacity is bad input, not misuse.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CodecError::UnsupportedOperation { .. }
                | CodecError::UnmappedEnum { .. }
                | CodecError::PacketIdMismatch { .. }
        )
    }

    /// Whether this error indicates the sender uses a different format version.
    pub fn is_format_drift(&self) -> bool {
        matches!(
            self,
            CodecError::SchemaSizeMismatch { .. } | CodecError::UnsupportedFormat(_)
        )
    }
}
