//! Lobby Info packet (id 9).
//!
//! Players in a multiplayer lobby with their team, nationality and ready
//! state. Sent twice a second while in the lobby.

use serde::Serialize;

use super::{MAX_CARS, PacketBody, PacketKind};
use crate::cursor::{ByteReader, ByteWriter};
use crate::enums::{Nationality, ReadyStatus, Team};
use crate::error::CodecResult;
use crate::header::PacketHeader;
use crate::schema::{
    BodyLayout, EncodeRecord, FieldDescriptor, FieldKind, RepeatArity, WireRecord, read_block,
    write_block,
};
use crate::strings::{NAME_LENGTH, read_fixed_string, write_fixed_string};

const ARITY: RepeatArity = RepeatArity::Counted {
    count_field: "numPlayers",
    capacity: MAX_CARS,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LobbyInfoData {
    /// 1 = AI, 0 = human.
    pub ai_controlled: u8,
    /// [`Team::MyTeam`] (255) while no team is selected.
    pub team_id: Team,
    pub nationality: Nationality,
    pub name: String,
    pub ready_status: ReadyStatus,
}

impl WireRecord for LobbyInfoData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::scalar("aiControlled", FieldKind::U8),
        FieldDescriptor::enumerated::<Team>("teamId"),
        FieldDescriptor::enumerated::<Nationality>("nationality"),
        FieldDescriptor::scalar("name", FieldKind::FixedString(NAME_LENGTH)),
        FieldDescriptor::enumerated::<ReadyStatus>("readyStatus"),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            ai_controlled: r.u8()?,
            team_id: r.wire_enum()?,
            nationality: r.wire_enum()?,
            name: read_fixed_string(r, NAME_LENGTH)?,
            ready_status: r.wire_enum()?,
        })
    }
}

impl EncodeRecord for LobbyInfoData {
    fn encode(&self, w: &mut ByteWriter) -> CodecResult<()> {
        w.write_u8(self.ai_controlled)?;
        w.write_enum(self.team_id, "teamId")?;
        w.write_enum(self.nationality, "nationality")?;
        write_fixed_string(w, &self.name, NAME_LENGTH)?;
        w.write_enum(self.ready_status, "readyStatus")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketLobbyInfoData {
    pub header: PacketHeader,
    /// Players in the lobby; `numPlayers` on the wire is this length.
    pub lobby_players: Vec<LobbyInfoData>,
}

impl PacketLobbyInfoData {
    pub fn num_players(&self) -> usize {
        self.lobby_players.len()
    }

    /// Whether every human player is ready or spectating.
    pub fn all_humans_ready(&self) -> bool {
        self.lobby_players
            .iter()
            .filter(|p| p.ai_controlled == 0)
            .all(|p| matches!(p.ready_status, ReadyStatus::Ready | ReadyStatus::Spectating))
    }
}

impl PacketBody for PacketLobbyInfoData {
    const KIND: PacketKind = PacketKind::LobbyInfo;
    const LAYOUT: BodyLayout = BodyLayout {
        repeat: ARITY,
        record: LobbyInfoData::FIELDS,
        trailing: &[],
    };
    const ENCODE: bool = true;

    fn header(&self) -> &PacketHeader {
        &self.header
    }

    fn decode_body(header: PacketHeader, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            header,
            lobby_players: read_block(reader, ARITY)?,
        })
    }

    fn encode_body(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        write_block(writer, ARITY, &self.lobby_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::layout_check::{patterned, reader_at};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn player(name: &str, ready_status: ReadyStatus) -> LobbyInfoData {
        LobbyInfoData {
            ai_controlled: 0,
            team_id: Team::McLaren,
            nationality: Nationality::Finnish,
            name: name.to_string(),
            ready_status,
        }
    }

    #[test]
    fn test_lobby_entry_is_52_bytes() {
        assert_eq!(LobbyInfoData::SIZE, 52);
    }

    #[test]
    fn test_lobby_entry_wire_order() -> TestResult {
        let mut w = ByteWriter::new(LobbyInfoData::SIZE);
        player("Kimi", ReadyStatus::Spectating).encode(&mut w)?;
        let bytes = w.into_inner();
        assert_eq!(bytes.get(..7), Some(&[0, 8, 27, b'K', b'i', b'm', b'i'][..]));
        assert_eq!(bytes.last(), Some(&2));

        let mut r = ByteReader::new(&bytes);
        assert_eq!(
            LobbyInfoData::decode(&mut r)?,
            player("Kimi", ReadyStatus::Spectating)
        );
        Ok(())
    }

    #[test]
    fn test_all_humans_ready_ignores_ai() {
        let mut ai = player("AI", ReadyStatus::NotReady);
        ai.ai_controlled = 1;
        let mut packet = PacketLobbyInfoData {
            header: PacketHeader::default(),
            lobby_players: vec![player("A", ReadyStatus::Ready), ai],
        };
        assert!(packet.all_humans_ready());
        packet
            .lobby_players
            .push(player("B", ReadyStatus::NotReady));
        assert!(!packet.all_humans_ready());
        assert_eq!(packet.num_players(), 3);
    }

    #[test]
    fn test_decode_order_matches_descriptors() -> TestResult {
        let bytes = patterned(LobbyInfoData::SIZE);
        let p = LobbyInfoData::decode(&mut ByteReader::new(&bytes))?;
        let at = |name: &str| reader_at(&bytes, 0, LobbyInfoData::FIELDS, name);

        assert_eq!(p.ai_controlled, at("aiControlled")?.u8()?);
        assert_eq!(p.team_id, at("teamId")?.wire_enum::<Team>()?);
        assert_eq!(p.nationality, at("nationality")?.wire_enum::<Nationality>()?);
        assert_eq!(p.name, read_fixed_string(&mut at("name")?, NAME_LENGTH)?);
        assert_eq!(p.ready_status, at("readyStatus")?.wire_enum::<ReadyStatus>()?);
        Ok(())
    }
}
