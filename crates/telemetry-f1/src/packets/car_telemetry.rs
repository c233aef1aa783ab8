//! Car Telemetry packet (id 6). Decode-only.
//!
//! Body layout:
//! ```text
//! carTelemetryData               [CarTelemetryData; 22]   58 bytes each
//! buttonStatus                   u32
//! mfdPanelIndex                  u8
//! mfdPanelIndexSecondaryPlayer   u8
//! suggestedGear                  i8
//! ```

use serde::Serialize;

use super::{MAX_CARS, PacketBody, PacketKind, player_record};
use crate::cursor::ByteReader;
use crate::enums::{MfdPanel, SurfaceType};
use crate::error::CodecResult;
use crate::header::PacketHeader;
use crate::schema::{BodyLayout, FieldDescriptor, FieldKind, RepeatArity, WireRecord, read_block};

const ARITY: RepeatArity = RepeatArity::Fixed(MAX_CARS);

const TRAILER: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("buttonStatus", FieldKind::U32),
    FieldDescriptor::enumerated::<MfdPanel>("mfdPanelIndex"),
    FieldDescriptor::enumerated::<MfdPanel>("mfdPanelIndexSecondaryPlayer"),
    FieldDescriptor::scalar("suggestedGear", FieldKind::I8),
];

/// Per-car telemetry entry (58 bytes).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CarTelemetryData {
    /// Speed in km/h.
    pub speed_kmh: u16,
    /// Throttle 0.0–1.0.
    pub throttle: f32,
    /// Steering −1.0 (full left) to 1.0 (full right).
    pub steer: f32,
    /// Brake 0.0–1.0.
    pub brake: f32,
    /// Clutch 0–100.
    pub clutch: u8,
    /// Gear: −1 = R, 0 = N, 1–8.
    pub gear: i8,
    pub engine_rpm: u16,
    /// 0 = off, 1 = on.
    pub drs: u8,
    /// Rev lights indicator (percentage).
    pub rev_lights_percent: u8,
    /// Brake temperatures (°C), RL RR FL FR.
    pub brakes_temperature: [u16; 4],
    /// Tyre surface temperatures (°C), RL RR FL FR.
    pub tyres_surface_temperature: [u8; 4],
    /// Tyre inner temperatures (°C), RL RR FL FR.
    pub tyres_inner_temperature: [u8; 4],
    /// Engine temperature (°C).
    pub engine_temperature: u16,
    /// Tyre pressures (PSI), RL RR FL FR.
    pub tyres_pressure: [f32; 4],
    pub surface_type: [SurfaceType; 4],
}

impl WireRecord for CarTelemetryData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::scalar("speed", FieldKind::U16),
        FieldDescriptor::scalar("throttle", FieldKind::F32),
        FieldDescriptor::scalar("steer", FieldKind::F32),
        FieldDescriptor::scalar("brake", FieldKind::F32),
        FieldDescriptor::scalar("clutch", FieldKind::U8),
        FieldDescriptor::scalar("gear", FieldKind::I8),
        FieldDescriptor::scalar("engineRPM", FieldKind::U16),
        FieldDescriptor::scalar("drs", FieldKind::U8),
        FieldDescriptor::scalar("revLightsPercent", FieldKind::U8),
        FieldDescriptor::array("brakesTemperature", FieldKind::U16, 4),
        FieldDescriptor::array("tyresSurfaceTemperature", FieldKind::U8, 4),
        FieldDescriptor::array("tyresInnerTemperature", FieldKind::U8, 4),
        FieldDescriptor::scalar("engineTemperature", FieldKind::U16),
        FieldDescriptor::array("tyresPressure", FieldKind::F32, 4),
        FieldDescriptor::enum_array::<SurfaceType>("surfaceType", 4),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            speed_kmh: r.u16_le()?,                    // 0-1
            throttle: r.f32_le()?,                     // 2-5
            steer: r.f32_le()?,                        // 6-9
            brake: r.f32_le()?,                        // 10-13
            clutch: r.u8()?,                           // 14
            gear: r.i8()?,                             // 15
            engine_rpm: r.u16_le()?,                   // 16-17
            drs: r.u8()?,                              // 18
            rev_lights_percent: r.u8()?,               // 19
            brakes_temperature: r.u16_le_array()?,     // 20-27
            tyres_surface_temperature: r.u8_array()?,  // 28-31
            tyres_inner_temperature: r.u8_array()?,    // 32-35
            engine_temperature: r.u16_le()?,           // 36-37
            tyres_pressure: r.f32_le_array()?,         // 38-53
            surface_type: r.wire_enum_array()?,        // 54-57
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketCarTelemetryData {
    pub header: PacketHeader,
    /// One entry per grid slot.
    pub car_telemetry_data: Vec<CarTelemetryData>,
    /// Bit flags of the buttons currently pressed.
    pub button_status: u32,
    pub mfd_panel_index: MfdPanel,
    pub mfd_panel_index_secondary_player: MfdPanel,
    /// Suggested gear, 0 when there is no suggestion.
    pub suggested_gear: i8,
}

impl PacketCarTelemetryData {
    pub fn player(&self) -> Option<&CarTelemetryData> {
        player_record(&self.car_telemetry_data, &self.header)
    }

    pub fn suggested_gear(&self) -> Option<i8> {
        (self.suggested_gear != 0).then_some(self.suggested_gear)
    }

    /// Whether every bit of `mask` is set in the button status.
    pub fn buttons_pressed(&self, mask: u32) -> bool {
        self.button_status & mask == mask
    }
}

impl PacketBody for PacketCarTelemetryData {
    const KIND: PacketKind = PacketKind::CarTelemetry;
    const LAYOUT: BodyLayout = BodyLayout {
        repeat: ARITY,
        record: CarTelemetryData::FIELDS,
        trailing: TRAILER,
    };

    fn header(&self) -> &PacketHeader {
        &self.header
    }

    fn decode_body(header: PacketHeader, r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            header,
            car_telemetry_data: read_block(r, ARITY)?,
            button_status: r.u32_le()?,
            mfd_panel_index: r.wire_enum()?,
            mfd_panel_index_secondary_player: r.wire_enum()?,
            suggested_gear: r.i8()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::build_car_telemetry_entry;
    use crate::schema::layout_size;

    use crate::schema::layout_check::{patterned, reader_at};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_car_telemetry_entry_is_58_bytes() {
        assert_eq!(CarTelemetryData::SIZE, 58);
        assert_eq!(layout_size(TRAILER), 7);
    }

    #[test]
    fn test_car_telemetry_entry_decode() -> TestResult {
        let bytes = build_car_telemetry_entry(287, 7);
        assert_eq!(bytes.len(), CarTelemetryData::SIZE);
        let mut r = ByteReader::new(&bytes);
        let telem = CarTelemetryData::decode(&mut r)?;
        assert_eq!(r.remaining(), 0);

        assert_eq!(telem.speed_kmh, 287);
        assert!((telem.throttle - 0.9).abs() < f32::EPSILON);
        assert!((telem.steer + 0.1).abs() < f32::EPSILON);
        assert_eq!(telem.gear, 7);
        assert_eq!(telem.engine_rpm, 11500);
        assert_eq!(telem.brakes_temperature, [400, 410, 520, 530]);
        assert_eq!(telem.tyres_inner_temperature, [100, 101, 98, 99]);
        assert_eq!(telem.engine_temperature, 105);
        let [_, _, front_left_pressure, _] = telem.tyres_pressure;
        assert!((front_left_pressure - 22.5).abs() < f32::EPSILON);
        assert_eq!(
            telem.surface_type,
            [
                SurfaceType::Tarmac,
                SurfaceType::Tarmac,
                SurfaceType::RumbleStrip,
                SurfaceType::Grass,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_suggested_gear_and_buttons() {
        let mut packet = PacketCarTelemetryData {
            header: PacketHeader::default(),
            car_telemetry_data: Vec::new(),
            button_status: 0b0101,
            mfd_panel_index: MfdPanel::Closed,
            mfd_panel_index_secondary_player: MfdPanel::Closed,
            suggested_gear: 0,
        };
        assert_eq!(packet.suggested_gear(), None);
        packet.suggested_gear = -1;
        assert_eq!(packet.suggested_gear(), Some(-1));
        assert!(packet.buttons_pressed(0b0100));
        assert!(!packet.buttons_pressed(0b0110));
        assert!(packet.player().is_none());
    }

    #[test]
    fn test_decode_order_matches_descriptors() -> TestResult {
        let bytes = patterned(CarTelemetryData::SIZE);
        let t = CarTelemetryData::decode(&mut ByteReader::new(&bytes))?;
        let at = |name: &str| reader_at(&bytes, 0, CarTelemetryData::FIELDS, name);

        assert_eq!(t.speed_kmh, at("speed")?.u16_le()?);
        assert_eq!(t.throttle.to_bits(), at("throttle")?.f32_le()?.to_bits());
        assert_eq!(t.steer.to_bits(), at("steer")?.f32_le()?.to_bits());
        assert_eq!(t.brake.to_bits(), at("brake")?.f32_le()?.to_bits());
        assert_eq!(t.clutch, at("clutch")?.u8()?);
        assert_eq!(t.gear, at("gear")?.i8()?);
        assert_eq!(t.engine_rpm, at("engineRPM")?.u16_le()?);
        assert_eq!(t.drs, at("drs")?.u8()?);
        assert_eq!(t.rev_lights_percent, at("revLightsPercent")?.u8()?);
        assert_eq!(t.brakes_temperature, at("brakesTemperature")?.u16_le_array::<4>()?);
        assert_eq!(
            t.tyres_surface_temperature,
            at("tyresSurfaceTemperature")?.u8_array::<4>()?
        );
        assert_eq!(t.tyres_inner_temperature, at("tyresInnerTemperature")?.u8_array::<4>()?);
        assert_eq!(t.engine_temperature, at("engineTemperature")?.u16_le()?);
        assert_eq!(
            t.tyres_pressure.map(f32::to_bits),
            at("tyresPressure")?.f32_le_array::<4>()?.map(f32::to_bits)
        );
        assert_eq!(
            t.surface_type,
            at("surfaceType")?.wire_enum_array::<SurfaceType, 4>()?
        );
        Ok(())
    }

    #[test]
    fn test_trailer_order_matches_descriptors() -> TestResult {
        let bytes = patterned(PacketKind::CarTelemetry.body_size());
        let packet =
            PacketCarTelemetryData::decode_body(PacketHeader::default(), &mut ByteReader::new(&bytes))?;
        let base = MAX_CARS * CarTelemetryData::SIZE;
        let at = |name: &str| reader_at(&bytes, base, TRAILER, name);

        assert_eq!(packet.button_status, at("buttonStatus")?.u32_le()?);
        assert_eq!(packet.mfd_panel_index, at("mfdPanelIndex")?.wire_enum::<MfdPanel>()?);
        assert_eq!(
            packet.mfd_panel_index_secondary_player,
            at("mfdPanelIndexSecondaryPlayer")?.wire_enum::<MfdPanel>()?
        );
        assert_eq!(packet.suggested_gear, at("suggestedGear")?.i8()?);
        Ok(())
    }
}
