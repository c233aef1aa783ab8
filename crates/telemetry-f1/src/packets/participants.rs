//! Participants packet (id 4).
//!
//! Lists the drivers in the session. Sent every 5 seconds and re-encodable,
//! so tools can replay or synthesise it.
//!
//! Body layout:
//! ```text
//! numActiveCars  u8
//! participants   [ParticipantData; 22]   only the first numActiveCars are valid
//! ```

use serde::Serialize;

use super::{MAX_CARS, PacketBody, PacketKind, player_record};
use crate::cursor::{ByteReader, ByteWriter};
use crate::enums::{Driver, Nationality, Team, TelemetrySetting};
use crate::error::CodecResult;
use crate::header::PacketHeader;
use crate::schema::{
    BodyLayout, EncodeRecord, FieldDescriptor, FieldKind, RepeatArity, WireRecord, read_block,
    write_block,
};
use crate::strings::{NAME_LENGTH, read_fixed_string, write_fixed_string};

const ARITY: RepeatArity = RepeatArity::Counted {
    count_field: "numActiveCars",
    capacity: MAX_CARS,
};

/// One driver in the session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParticipantData {
    /// 1 = AI, 0 = human.
    pub ai_controlled: u8,
    pub driver_id: Driver,
    pub team_id: Team,
    pub race_number: u8,
    pub nationality: Nationality,
    pub name: String,
    pub your_telemetry: TelemetrySetting,
}

impl ParticipantData {
    pub fn is_ai_controlled(&self) -> bool {
        self.ai_controlled == 1
    }
}

impl WireRecord for ParticipantData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::scalar("aiControlled", FieldKind::U8),
        FieldDescriptor::enumerated::<Driver>("driverId"),
        FieldDescriptor::enumerated::<Team>("teamId"),
        FieldDescriptor::scalar("raceNumber", FieldKind::U8),
        FieldDescriptor::enumerated::<Nationality>("nationality"),
        FieldDescriptor::scalar("name", FieldKind::FixedString(NAME_LENGTH)),
        FieldDescriptor::enumerated::<TelemetrySetting>("yourTelemetry"),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            ai_controlled: r.u8()?,
            driver_id: r.wire_enum()?,
            team_id: r.wire_enum()?,
            race_number: r.u8()?,
            nationality: r.wire_enum()?,
            name: read_fixed_string(r, NAME_LENGTH)?,
            your_telemetry: r.wire_enum()?,
        })
    }
}

impl EncodeRecord for ParticipantData {
    fn encode(&self, w: &mut ByteWriter) -> CodecResult<()> {
        w.write_u8(self.ai_controlled)?;
        w.write_enum(self.driver_id, "driverId")?;
        w.write_enum(self.team_id, "teamId")?;
        w.write_u8(self.race_number)?;
        w.write_enum(self.nationality, "nationality")?;
        write_fixed_string(w, &self.name, NAME_LENGTH)?;
        w.write_enum(self.your_telemetry, "yourTelemetry")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketParticipantsData {
    pub header: PacketHeader,
    /// Active participants; `numActiveCars` on the wire is this length.
    pub participants: Vec<ParticipantData>,
}

impl PacketParticipantsData {
    pub fn num_active_cars(&self) -> usize {
        self.participants.len()
    }

    pub fn player(&self) -> Option<&ParticipantData> {
        player_record(&self.participants, &self.header)
    }
}

impl PacketBody for PacketParticipantsData {
    const KIND: PacketKind = PacketKind::Participants;
    const LAYOUT: BodyLayout = BodyLayout {
        repeat: ARITY,
        record: ParticipantData::FIELDS,
        trailing: &[],
    };
    const ENCODE: bool = true;

    fn header(&self) -> &PacketHeader {
        &self.header
    }

    fn decode_body(header: PacketHeader, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            header,
            participants: read_block(reader, ARITY)?,
        })
    }

    fn encode_body(&self, writer: &mut ByteWriter) -> CodecResult<()> {
        write_block(writer, ARITY, &self.participants)
    }
}
