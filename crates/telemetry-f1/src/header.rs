//! Packet header shared by every F1 2020 packet.

use serde::Serialize;

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{CodecError, CodecResult};
use crate::schema::{EncodeRecord, FieldDescriptor, FieldKind, WireRecord};

/// `m_packetFormat` value sent by F1 2020.
pub const PACKET_FORMAT_2020: u16 = 2020;

/// Header size in bytes.
pub const HEADER_SIZE: usize = <PacketHeader as WireRecord>::SIZE;

/// `secondary_player_car_index` value when there is no second local player.
pub const NO_SECONDARY_PLAYER: u8 = 255;

/// Decoded packet header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PacketHeader {
    /// Packet format, e.g. 2020.
    pub packet_format: u16,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    /// Version of this packet type; all start at 1.
    pub packet_version: u8,
    /// Packet type id; selects the body schema.
    pub packet_id: u8,
    /// Unique identifier for the session.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Frame the data was retrieved on.
    pub frame_identifier: u32,
    /// Index of the player's car in the per-car arrays.
    pub player_car_index: u8,
    /// Second local player in split-screen, 255 otherwise.
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Secondary player's car index, when split-screen is active.
    pub fn secondary_player(&self) -> Option<u8> {
        (self.secondary_player_car_index != NO_SECONDARY_PLAYER)
            .then_some(self.secondary_player_car_index)
    }
}

impl WireRecord for PacketHeader {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::scalar("packetFormat", FieldKind::U16),
        FieldDescriptor::scalar("gameMajorVersion", FieldKind::U8),
        FieldDescriptor::scalar("gameMinorVersion", FieldKind::U8),
        FieldDescriptor::scalar("packetVersion", FieldKind::U8),
        FieldDescriptor::scalar("packetId", FieldKind::U8),
        FieldDescriptor::scalar("sessionUID", FieldKind::U64),
        FieldDescriptor::scalar("sessionTime", FieldKind::F32),
        FieldDescriptor::scalar("frameIdentifier", FieldKind::U32),
        FieldDescriptor::scalar("playerCarIndex", FieldKind::U8),
        FieldDescriptor::scalar("secondaryPlayerCarIndex", FieldKind::U8),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            packet_format: r.u16_le()?,         // 0-1
            game_major_version: r.u8()?,        // 2
            game_minor_version: r.u8()?,        // 3
            packet_version: r.u8()?,            // 4
            packet_id: r.u8()?,                 // 5
            session_uid: r.u64_le()?,           // 6-13
            session_time: r.f32_le()?,          // 14-17
            frame_identifier: r.u32_le()?,      // 18-21
            player_car_index: r.u8()?,          // 22
            secondary_player_car_index: r.u8()?, // 23
        })
    }
}

impl EncodeRecord for PacketHeader {
    fn encode(&self, w: &mut ByteWriter) -> CodecResult<()> {
        w.write_u16_le(self.packet_format)?;
        w.write_u8(self.game_major_version)?;
        w.write_u8(self.game_minor_version)?;
        w.write_u8(self.packet_version)?;
        w.write_u8(self.packet_id)?;
        w.write_u64_le(self.session_uid)?;
        w.write_f32_le(self.session_time)?;
        w.write_u32_le(self.frame_identifier)?;
        w.write_u8(self.player_car_index)?;
        w.write_u8(self.secondary_player_car_index)
    }
}

/// Decode the header at the reader's position, consuming exactly [`HEADER_SIZE`] bytes.
pub fn decode_header(reader: &mut ByteReader<'_>) -> CodecResult<PacketHeader> {
    if reader.remaining() < HEADER_SIZE {
        return Err(CodecError::TruncatedHeader {
            expected: HEADER_SIZE,
            actual: reader.remaining(),
        });
    }
    PacketHeader::decode(reader)
}

/// Encode `header`; the exact inverse of [`decode_header`].
pub fn encode_header(writer: &mut ByteWriter, header: &PacketHeader) -> CodecResult<()> {
    header.encode(writer)
}

/// Decode only the header of a datagram, e.g. to route it before a full decode.
pub fn peek_header(datagram: &[u8]) -> CodecResult<PacketHeader> {
    decode_header(&mut ByteReader::new(datagram))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::layout_check::{patterned, reader_at};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn sample() -> PacketHeader {
        PacketHeader {
            packet_format: PACKET_FORMAT_2020,
            game_major_version: 1,
            game_minor_version: 18,
            packet_version: 1,
            packet_id: 4,
            session_uid: 0x1234_5678_9ABC_DEF0,
            session_time: 12.5,
            frame_identifier: 1000,
            player_car_index: 3,
            secondary_player_car_index: NO_SECONDARY_PLAYER,
        }
    }

    #[test]
    fn test_header_size_is_24_bytes() {
        assert_eq!(HEADER_SIZE, 24);
    }

    #[test]
    fn test_header_field_offsets() -> TestResult {
        let mut w = ByteWriter::new(HEADER_SIZE);
        encode_header(&mut w, &sample())?;
        let bytes = w.into_inner();
        assert_eq!(bytes.get(0..2), Some(&2020u16.to_le_bytes()[..]));
        assert_eq!(bytes.get(5), Some(&4));
        assert_eq!(
            bytes.get(6..14),
            Some(&0x1234_5678_9ABC_DEF0u64.to_le_bytes()[..])
        );
        assert_eq!(bytes.get(18..22), Some(&1000u32.to_le_bytes()[..]));
        assert_eq!(bytes.get(22..24), Some(&[3, 255][..]));
        Ok(())
    }

    #[test]
    fn test_header_round_trip_is_byte_identical() -> TestResult {
        let mut w = ByteWriter::new(HEADER_SIZE);
        encode_header(&mut w, &sample())?;
        let original = w.into_inner();

        let mut r = ByteReader::new(&original);
        let decoded = decode_header(&mut r)?;
        assert_eq!(r.position(), HEADER_SIZE);
        assert_eq!(decoded, sample());

        let mut w = ByteWriter::new(HEADER_SIZE);
        encode_header(&mut w, &decoded)?;
        assert_eq!(w.into_inner(), original);
        Ok(())
    }

    #[test]
    fn test_truncated_header() {
        let bytes = [0u8; HEADER_SIZE - 1];
        assert_eq!(
            peek_header(&bytes),
            Err(CodecError::TruncatedHeader {
                expected: HEADER_SIZE,
                actual: HEADER_SIZE - 1
            })
        );
        assert_eq!(
            peek_header(&[]),
            Err(CodecError::TruncatedHeader {
                expected: HEADER_SIZE,
                actual: 0
            })
        );
    }

    #[test]
    fn test_secondary_player() {
        let mut header = sample();
        assert_eq!(header.secondary_player(), None);
        header.secondary_player_car_index = 1;
        assert_eq!(header.secondary_player(), Some(1));
    }

    #[test]
    fn test_decode_order_matches_descriptors() -> TestResult {
        let bytes = patterned(HEADER_SIZE);
        let h = PacketHeader::decode(&mut ByteReader::new(&bytes))?;
        let at = |name: &str| reader_at(&bytes, 0, PacketHeader::FIELDS, name);

        assert_eq!(h.packet_format, at("packetFormat")?.u16_le()?);
        assert_eq!(h.game_major_version, at("gameMajorVersion")?.u8()?);
        assert_eq!(h.game_minor_version, at("gameMinorVersion")?.u8()?);
        assert_eq!(h.packet_version, at("packetVersion")?.u8()?);
        assert_eq!(h.packet_id, at("packetId")?.u8()?);
        assert_eq!(h.session_uid, at("sessionUID")?.u64_le()?);
        assert_eq!(h.session_time.to_bits(), at("sessionTime")?.f32_le()?.to_bits());
        assert_eq!(h.frame_identifier, at("frameIdentifier")?.u32_le()?);
        assert_eq!(h.player_car_index, at("playerCarIndex")?.u8()?);
        assert_eq!(
            h.secondary_player_car_index,
            at("secondaryPlayerCarIndex")?.u8()?
        );
        Ok(())
    }
}
