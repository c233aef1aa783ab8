//! Packet types with a registered schema.
//!
//! | Id | Packet        | Size  | Encode |
//! |----|---------------|-------|--------|
//! | 0  | Motion        | 1464  | no     |
//! | 4  | Participants  | 1213  | yes    |
//! | 6  | Car Telemetry | 1307  | no     |
//! | 7  | Car Status    | 1344  | no     |
//! | 9  | Lobby Info    | 1169  | yes    |
//!
//! Session (1), Lap Data (2), Event (3), Car Setups (5) and Final
//! Classification (8) have no schema and are rejected as unknown.

use serde::Serialize;

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{CodecError, CodecResult};
use crate::header::{HEADER_SIZE, PacketHeader};
use crate::schema::BodyLayout;

pub mod car_status;
pub mod car_telemetry;
pub mod lobby_info;
pub mod motion;
pub mod participants;

pub use car_status::{CarStatusData, PacketCarStatusData};
pub use car_telemetry::{CarTelemetryData, PacketCarTelemetryData};
pub use lobby_info::{LobbyInfoData, PacketLobbyInfoData};
pub use motion::{CarMotionData, PacketMotionData, PlayerMotionData};
pub use participants::{PacketParticipantsData, ParticipantData};

/// Number of car slots in every per-car array.
pub const MAX_CARS: usize = 22;

// ── Packet IDs ───────────────────────────────────────────────────────────────

pub const PACKET_ID_MOTION: u8 = 0;
pub const PACKET_ID_PARTICIPANTS: u8 = 4;
pub const PACKET_ID_CAR_TELEMETRY: u8 = 6;
pub const PACKET_ID_CAR_STATUS: u8 = 7;
pub const PACKET_ID_LOBBY_INFO: u8 = 9;

/// A packet type id with a registered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PacketKind {
    Motion,
    Participants,
    CarTelemetry,
    CarStatus,
    LobbyInfo,
}

impl PacketKind {
    /// Every registered packet type.
    pub const ALL: [PacketKind; 5] = [
        PacketKind::Motion,
        PacketKind::Participants,
        PacketKind::CarTelemetry,
        PacketKind::CarStatus,
        PacketKind::LobbyInfo,
    ];

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            PACKET_ID_MOTION => Some(PacketKind::Motion),
            PACKET_ID_PARTICIPANTS => Some(PacketKind::Participants),
            PACKET_ID_CAR_TELEMETRY => Some(PacketKind::CarTelemetry),
            PACKET_ID_CAR_STATUS => Some(PacketKind::CarStatus),
            PACKET_ID_LOBBY_INFO => Some(PacketKind::LobbyInfo),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        match self {
            PacketKind::Motion => PACKET_ID_MOTION,
            PacketKind::Participants => PACKET_ID_PARTICIPANTS,
            PacketKind::CarTelemetry => PACKET_ID_CAR_TELEMETRY,
            PacketKind::CarStatus => PACKET_ID_CAR_STATUS,
            PacketKind::LobbyInfo => PACKET_ID_LOBBY_INFO,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PacketKind::Motion => "Motion",
            PacketKind::Participants => "Participants",
            PacketKind::CarTelemetry => "CarTelemetry",
            PacketKind::CarStatus => "CarStatus",
            PacketKind::LobbyInfo => "LobbyInfo",
        }
    }

    pub const fn layout(self) -> BodyLayout {
        match self {
            PacketKind::Motion => PacketMotionData::LAYOUT,
            PacketKind::Participants => PacketParticipantsData::LAYOUT,
            PacketKind::CarTelemetry => PacketCarTelemetryData::LAYOUT,
            PacketKind::CarStatus => PacketCarStatusData::LAYOUT,
            PacketKind::LobbyInfo => PacketLobbyInfoData::LAYOUT,
        }
    }

    /// Bytes expected after the header.
    pub const fn body_size(self) -> usize {
        self.layout().size()
    }

    /// Total datagram size, header included.
    pub const fn packet_size(self) -> usize {
        HEADER_SIZE + self.body_size()
    }

    pub const fn supports_encode(self) -> bool {
        match self {
            PacketKind::Motion => PacketMotionData::ENCODE,
            PacketKind::Participants => PacketParticipantsData::ENCODE,
            PacketKind::CarTelemetry => PacketCarTelemetryData::ENCODE,
            PacketKind::CarStatus => PacketCarStatusData::ENCODE,
            PacketKind::LobbyInfo => PacketLobbyInfoData::ENCODE,
        }
    }
}

/// Body codec for one packet type.
pub trait PacketBody: Sized {
    const KIND: PacketKind;
    const LAYOUT: BodyLayout;
    /// Whether the packet can be re-encoded.
    const ENCODE: bool = false;

    fn header(&self) -> &PacketHeader;

    /// Replay the body schema from a reader positioned just after the header.
    fn decode_body(header: PacketHeader, reader: &mut ByteReader<'_>) -> CodecResult<Self>;

    /// Write the body after an already-written header.
    fn encode_body(&self, _writer: &mut ByteWriter) -> CodecResult<()> {
        Err(CodecError::UnsupportedOperation {
            packet: Self::KIND.name(),
            operation: "encode",
        })
    }
}

/// A decoded packet, one variant per registered packet type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Packet {
    Motion(PacketMotionData),
    Participants(PacketParticipantsData),
    CarTelemetry(PacketCarTelemetryData),
    CarStatus(PacketCarStatusData),
    LobbyInfo(PacketLobbyInfoData),
}

impl Packet {
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Motion(p) => p.header(),
            Packet::Participants(p) => p.header(),
            Packet::CarTelemetry(p) => p.header(),
            Packet::CarStatus(p) => p.header(),
            Packet::LobbyInfo(p) => p.header(),
        }
    }

    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Motion(_) => PacketKind::Motion,
            Packet::Participants(_) => PacketKind::Participants,
            Packet::CarTelemetry(_) => PacketKind::CarTelemetry,
            Packet::CarStatus(_) => PacketKind::CarStatus,
            Packet::LobbyInfo(_) => PacketKind::LobbyInfo,
        }
    }
}

impl From<PacketMotionData> for Packet {
    fn from(p: PacketMotionData) -> Self {
        Packet::Motion(p)
    }
}

impl From<PacketParticipantsData> for Packet {
    fn from(p: PacketParticipantsData) -> Self {
        Packet::Participants(p)
    }
}

impl From<PacketCarTelemetryData> for Packet {
    fn from(p: PacketCarTelemetryData) -> Self {
        Packet::CarTelemetry(p)
    }
}

impl From<PacketCarStatusData> for Packet {
    fn from(p: PacketCarStatusData) -> Self {
        Packet::CarStatus(p)
    }
}

impl From<PacketLobbyInfoData> for Packet {
    fn from(p: PacketLobbyInfoData) -> Self {
        Packet::LobbyInfo(p)
    }
}

/// Record at the player's car index, if that slot was decoded.
fn player_record<'a, T>(records: &'a [T], header: &PacketHeader) -> Option<&'a T> {
    records.get(usize::from(header.player_car_index))
}
