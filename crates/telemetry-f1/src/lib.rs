//! F1 2020 UDP telemetry packet codec.
//!
//! Decodes the Codemasters F1 2020 binary UDP feed (packet format `2020`)
//! into typed packets, and re-encodes the packet types that support it.
//! Transport is up to the caller: hand [`decode_packet`] one datagram at a
//! time.
//!
//! # Protocol
//!
//! Every packet starts with a 24-byte little-endian [`PacketHeader`] whose
//! `packet_id` selects the body schema. Registered packet types:
//!
//! | Packet ID | Name          | Encode |
//! |-----------|---------------|--------|
//! | 0         | Motion        | no     |
//! | 4         | Participants  | yes    |
//! | 6         | Car Telemetry | no     |
//! | 7         | Car Status    | no     |
//! | 9         | Lobby Info    | yes    |
//!
//! Any other id fails with [`CodecError::UnknownPacketType`]. A body whose
//! length differs from the schema fails with [`CodecError::TruncatedBody`]
//! or [`CodecError::SchemaSizeMismatch`]; nothing is silently skipped.
//!
//! Enum fields never fail to decode: codes the tables do not know resolve to
//! each enum's sentinel variant (see [`enums::WireEnum`]).
//!
//! # Usage
//!
//! ```rust
//! use racing_wheel_telemetry_f1::builders::build_participants_packet;
//! use racing_wheel_telemetry_f1::{Packet, decode_packet, encode_packet};
//!
//! # fn main() -> Result<(), racing_wheel_telemetry_f1::CodecError> {
//! let datagram = build_participants_packet(&["HAMILTON", "BOTTAS"]);
//! let packet = decode_packet(&datagram)?;
//! if let Packet::Participants(participants) = &packet {
//!     assert_eq!(participants.num_active_cars(), 2);
//! }
//! assert_eq!(encode_packet(&packet)?, datagram);
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]

pub mod builders;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod header;
pub mod packets;
pub mod schema;
pub mod strings;

pub use config::DecoderConfig;
pub use cursor::{ByteReader, ByteWriter, normalized_vector_to_f32};
pub use dispatch::{PacketDecoder, decode_packet, encode_packet};
pub use enums::WireEnum;
pub use error::{CodecError, CodecResult, ErrorSeverity};
pub use header::{
    HEADER_SIZE, PACKET_FORMAT_2020, PacketHeader, decode_header, encode_header, peek_header,
};
pub use packets::{MAX_CARS, Packet, PacketKind};
pub use strings::{NAME_LENGTH, read_fixed_string, write_fixed_string};
