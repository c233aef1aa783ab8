//! Packet dispatch: header, schema lookup, body replay.
//!
//! Decoding is a pure function of the datagram. [`PacketDecoder`] only holds
//! its immutable [`DecoderConfig`], so one instance can be shared across
//! threads and called concurrently.

use tracing::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{CodecError, CodecResult};
use crate::header::{HEADER_SIZE, decode_header, encode_header};
use crate::packets::{
    Packet, PacketBody, PacketCarStatusData, PacketCarTelemetryData, PacketKind,
    PacketLobbyInfoData, PacketMotionData, PacketParticipantsData,
};

#[derive(Debug, Clone, Default)]
pub struct PacketDecoder {
    config: DecoderConfig,
}

impl PacketDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one datagram into a typed packet.
    pub fn decode(&self, datagram: &[u8]) -> CodecResult<Packet> {
        let mut reader = ByteReader::new(datagram);
        let header = decode_header(&mut reader)?;

        if !self.config.accepts_format(header.packet_format) {
            warn!(
                format = header.packet_format,
                accepted = ?self.config.packet_formats,
                "packet format not accepted"
            );
            return Err(CodecError::UnsupportedFormat(header.packet_format));
        }

        let Some(kind) = PacketKind::from_id(header.packet_id) else {
            debug!(packet_id = header.packet_id, "no schema for packet id");
            return Err(CodecError::UnknownPacketType(header.packet_id));
        };

        let expected = kind.body_size();
        let actual = reader.remaining();
        if actual < expected {
            return Err(CodecError::TruncatedBody {
                packet: kind.name(),
                expected,
                actual,
            });
        }

        let packet = match kind {
            PacketKind::Motion => PacketMotionData::decode_body(header, &mut reader)?.into(),
            PacketKind::Participants => {
                PacketParticipantsData::decode_body(header, &mut reader)?.into()
            }
            PacketKind::CarTelemetry => {
                PacketCarTelemetryData::decode_body(header, &mut reader)?.into()
            }
            PacketKind::CarStatus => PacketCarStatusData::decode_body(header, &mut reader)?.into(),
            PacketKind::LobbyInfo => PacketLobbyInfoData::decode_body(header, &mut reader)?.into(),
        };

        if reader.remaining() != 0 {
            warn!(
                packet = kind.name(),
                format = header.packet_format,
                expected,
                actual,
                "packet body size does not match schema"
            );
            return Err(CodecError::SchemaSizeMismatch {
                packet: kind.name(),
                format: header.packet_format,
                expected,
                actual,
            });
        }

        trace!(
            packet = kind.name(),
            frame = header.frame_identifier,
            "decoded packet"
        );
        Ok(packet)
    }

    /// Encode a packet back to its wire form.
    ///
    /// Decode-only packet types fail with [`CodecError::UnsupportedOperation`].
    pub fn encode(&self, packet: &Packet) -> CodecResult<Vec<u8>> {
        match packet {
            Packet::Motion(p) => encode_body(p),
            Packet::Participants(p) => encode_body(p),
            Packet::CarTelemetry(p) => encode_body(p),
            Packet::CarStatus(p) => encode_body(p),
            Packet::LobbyInfo(p) => encode_body(p),
        }
    }
}

fn encode_body<P: PacketBody>(packet: &P) -> CodecResult<Vec<u8>> {
    if !P::ENCODE {
        return Err(CodecError::UnsupportedOperation {
            packet: P::KIND.name(),
            operation: "encode",
        });
    }
    let header = packet.header();
    if header.packet_id != P::KIND.id() {
        return Err(CodecError::PacketIdMismatch {
            expected: P::KIND.id(),
            actual: header.packet_id,
        });
    }

    let mut writer = ByteWriter::new(P::KIND.packet_size());
    encode_header(&mut writer, header)?;
    packet.encode_body(&mut writer)?;

    if writer.remaining() != 0 {
        return Err(CodecError::SchemaSizeMismatch {
            packet: P::KIND.name(),
            format: header.packet_format,
            expected: P::KIND.body_size(),
            actual: writer.position().saturating_sub(HEADER_SIZE),
        });
    }
    Ok(writer.into_inner())
}

/// Decode with the default configuration.
pub fn decode_packet(datagram: &[u8]) -> CodecResult<Packet> {
    PacketDecoder::default().decode(datagram)
}

/// Encode with the default configuration.
pub fn encode_packet(packet: &Packet) -> CodecResult<Vec<u8>> {
    PacketDecoder::default().encode(packet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{
        build_car_status_packet, build_header_bytes, build_lobby_info_packet,
        build_participants_packet,
    };
    use crate::header::PACKET_FORMAT_2020;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PacketDecoder>();
        assert_send_sync::<Packet>();
    }

    #[test]
    fn test_unknown_packet_id() {
        let bytes = build_header_bytes(PACKET_FORMAT_2020, 255, 0);
        assert_eq!(
            decode_packet(&bytes),
            Err(CodecError::UnknownPacketType(255))
        );
    }

    #[test]
    fn test_rejected_format_before_dispatch() {
        let bytes = build_header_bytes(2019, 255, 0);
        assert_eq!(decode_packet(&bytes), Err(CodecError::UnsupportedFormat(2019)));
    }

    #[test]
    fn test_configured_format_is_accepted() -> TestResult {
        let mut bytes = build_car_status_packet(0, 30.0);
        if let Some(format) = bytes.get_mut(0..2) {
            format.copy_from_slice(&2021u16.to_le_bytes());
        }
        let decoder = PacketDecoder::new(DecoderConfig {
            packet_formats: vec![2020, 2021],
        });
        let packet = decoder.decode(&bytes)?;
        assert_eq!(packet.header().packet_format, 2021);
        Ok(())
    }

    #[test]
    fn test_trailing_bytes_are_a_size_mismatch() {
        let mut bytes = build_car_status_packet(0, 30.0);
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(
            decode_packet(&bytes),
            Err(CodecError::SchemaSizeMismatch {
                packet: "CarStatus",
                format: 2020,
                expected: 1320,
                actual: 1322,
            })
        );
    }

    #[test]
    fn test_short_body_is_truncated() {
        let bytes = build_car_status_packet(0, 30.0);
        let short = bytes.get(..bytes.len() - 1).unwrap_or_default();
        assert_eq!(
            decode_packet(short),
            Err(CodecError::TruncatedBody {
                packet: "CarStatus",
                expected: 1320,
                actual: 1319,
            })
        );
    }

    #[test]
    fn test_encode_reproduces_participants_bytes() -> TestResult {
        let bytes = build_participants_packet(&["VERSTAPPEN", "NORRIS"]);
        let packet = decode_packet(&bytes)?;
        assert_eq!(encode_packet(&packet)?, bytes);
        Ok(())
    }

    #[test]
    fn test_encode_reproduces_lobby_bytes() -> TestResult {
        let bytes = build_lobby_info_packet(&["Player"]);
        let packet = decode_packet(&bytes)?;
        assert_eq!(encode_packet(&packet)?, bytes);
        Ok(())
    }

    #[test]
    fn test_encode_decode_only_packet_fails() -> TestResult {
        let packet = decode_packet(&build_car_status_packet(0, 30.0))?;
        assert_eq!(
            encode_packet(&packet),
            Err(CodecError::UnsupportedOperation {
                packet: "CarStatus",
                operation: "encode"
            })
        );
        Ok(())
    }

    #[test]
    fn test_encode_rejects_mismatched_header_id() -> TestResult {
        let Packet::LobbyInfo(mut lobby) = decode_packet(&build_lobby_info_packet(&["A"]))? else {
            return Err("expected lobby info".into());
        };
        lobby.header.packet_id = 4;
        assert_eq!(
            encode_packet(&Packet::LobbyInfo(lobby)),
            Err(CodecError::PacketIdMismatch {
                expected: 9,
                actual: 4
            })
        );
        Ok(())
    }
}
