//! Raw datagram builders for tests, benchmarks and fuzz seeds.
//!
//! Bytes are laid out by hand rather than through the codec, so decode tests
//! exercise the codec against an independent rendering of the wire format.

use crate::enums::{WireEnum, ZoneFlag};
use crate::header::PACKET_FORMAT_2020;
use crate::packets::{
    MAX_CARS, PACKET_ID_CAR_STATUS, PACKET_ID_CAR_TELEMETRY, PACKET_ID_LOBBY_INFO,
    PACKET_ID_MOTION, PACKET_ID_PARTICIPANTS,
};
use crate::strings::NAME_LENGTH;

/// Session UID written by [`build_header_bytes`].
pub const SAMPLE_SESSION_UID: u64 = 0x1234_5678_9ABC_DEF0;
/// Frame identifier written by [`build_header_bytes`].
pub const SAMPLE_FRAME: u32 = 1000;

fn push_f32s(buf: &mut Vec<u8>, values: &[f32]) {
    for v in values {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

fn push_name(buf: &mut Vec<u8>, name: &str) {
    let mut field = name.as_bytes().to_vec();
    field.resize(NAME_LENGTH, 0);
    buf.extend_from_slice(&field);
}

fn count_byte(len: usize) -> u8 {
    u8::try_from(len).unwrap_or(u8::MAX)
}

/// Build a 24-byte F1 2020 header.
pub fn build_header_bytes(packet_format: u16, packet_id: u8, player_index: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(24);
    buf.extend_from_slice(&packet_format.to_le_bytes()); // 0-1
    buf.push(1); // gameMajorVersion  (2)
    buf.push(18); // gameMinorVersion  (3)
    buf.push(1); // packetVersion  (4)
    buf.push(packet_id); // 5
    buf.extend_from_slice(&SAMPLE_SESSION_UID.to_le_bytes()); // sessionUID  (6-13)
    buf.extend_from_slice(&12.5f32.to_le_bytes()); // sessionTime  (14-17)
    buf.extend_from_slice(&SAMPLE_FRAME.to_le_bytes()); // frameIdentifier  (18-21)
    buf.push(player_index); // 22
    buf.push(255); // secondaryPlayerCarIndex  (23)
    buf
}

// ── Motion ───────────────────────────────────────────────────────────────────

/// One 60-byte motion entry positioned at `(x, 0.5, -x)`.
pub fn build_car_motion_entry(x: f32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(60);
    push_f32s(&mut buf, &[x, 0.5, -x]); // worldPosition  (0-11)
    push_f32s(&mut buf, &[10.0, 0.0, 20.0]); // worldVelocity  (12-23)
    for v in [32767i16, 0, -32768, 0, 0, 32767] {
        buf.extend_from_slice(&v.to_le_bytes()); // forward / right dir  (24-35)
    }
    push_f32s(&mut buf, &[1.5, -0.5, 1.0]); // gForce lat/lon/vert  (36-47)
    push_f32s(&mut buf, &[0.25, 0.0, 0.01]); // yaw, pitch, roll  (48-59)
    buf
}

/// Full Motion packet; car `i` sits at `x = i`.
pub fn build_motion_packet(player_index: u8) -> Vec<u8> {
    let mut buf = build_header_bytes(PACKET_FORMAT_2020, PACKET_ID_MOTION, player_index);
    for car in 0..MAX_CARS {
        let x = f32::from(count_byte(car));
        buf.extend_from_slice(&build_car_motion_entry(x));
    }
    push_f32s(&mut buf, &[0.01, 0.02, 0.03, 0.04]); // suspensionPosition
    push_f32s(&mut buf, &[0.0; 4]); // suspensionVelocity
    push_f32s(&mut buf, &[0.0; 4]); // suspensionAcceleration
    push_f32s(&mut buf, &[80.0, 80.5, 79.5, 80.0]); // wheelSpeed
    push_f32s(&mut buf, &[0.01, 0.01, 0.02, 0.02]); // wheelSlip
    push_f32s(&mut buf, &[0.0, 0.0, 80.0]); // localVelocity
    push_f32s(&mut buf, &[0.0; 3]); // angularVelocity
    push_f32s(&mut buf, &[0.0; 3]); // angularAcceleration
    push_f32s(&mut buf, &[0.05]); // frontWheelsAngle
    buf
}

// ── Car Telemetry ────────────────────────────────────────────────────────────

/// One 58-byte car telemetry entry.
pub fn build_car_telemetry_entry(speed_kmh: u16, gear: i8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(58);
    buf.extend_from_slice(&speed_kmh.to_le_bytes()); // 0-1
    push_f32s(&mut buf, &[0.9, -0.1, 0.0]); // throttle, steer, brake  (2-13)
    buf.push(0); // clutch  (14)
    buf.extend_from_slice(&gear.to_le_bytes()); // 15
    buf.extend_from_slice(&11500u16.to_le_bytes()); // engineRPM  (16-17)
    buf.push(1); // drs  (18)
    buf.push(80); // revLightsPercent  (19)
    for t in [400u16, 410, 520, 530] {
        buf.extend_from_slice(&t.to_le_bytes()); // brakesTemperature  (20-27)
    }
    buf.extend_from_slice(&[90, 91, 88, 89]); // tyresSurfaceTemperature  (28-31)
    buf.extend_from_slice(&[100, 101, 98, 99]); // tyresInnerTemperature  (32-35)
    buf.extend_from_slice(&105u16.to_le_bytes()); // engineTemperature  (36-37)
    push_f32s(&mut buf, &[23.0, 23.0, 22.5, 22.5]); // tyresPressure  (38-53)
    buf.extend_from_slice(&[0, 0, 1, 7]); // surfaceType  (54-57)
    buf
}

/// Full Car Telemetry packet; the player's car has the given speed and gear.
pub fn build_car_telemetry_packet(player_index: u8, speed_kmh: u16, gear: i8) -> Vec<u8> {
    let mut buf = build_header_bytes(PACKET_FORMAT_2020, PACKET_ID_CAR_TELEMETRY, player_index);
    for car in 0..MAX_CARS {
        if car == usize::from(player_index) {
            buf.extend_from_slice(&build_car_telemetry_entry(speed_kmh, gear));
        } else {
            buf.extend_from_slice(&build_car_telemetry_entry(0, 0));
        }
    }
    buf.extend_from_slice(&0x0000_0004u32.to_le_bytes()); // buttonStatus
    buf.push(255); // mfdPanelIndex
    buf.push(255); // mfdPanelIndexSecondaryPlayer
    buf.push(0); // suggestedGear
    buf
}

// ── Car Status ───────────────────────────────────────────────────────────────

/// One 60-byte car status entry.
pub fn build_car_status_entry(fuel_in_tank: f32, flag: ZoneFlag) -> Vec<u8> {
    let mut buf = Vec::with_capacity(60);
    buf.push(2); // tractionControl  (0)
    buf.push(1); // antiLockBrakes  (1)
    buf.push(1); // fuelMix  (2)
    buf.push(56); // frontBrakeBias  (3)
    buf.push(0); // pitLimiterStatus  (4)
    push_f32s(&mut buf, &[fuel_in_tank, 110.0, 20.0]); // fuel  (5-16)
    buf.extend_from_slice(&13000u16.to_le_bytes()); // maxRPM  (17-18)
    buf.extend_from_slice(&4000u16.to_le_bytes()); // idleRPM  (19-20)
    buf.push(8); // maxGears  (21)
    buf.push(1); // drsAllowed  (22)
    buf.extend_from_slice(&0u16.to_le_bytes()); // drsActivationDistance  (23-24)
    buf.extend_from_slice(&[10, 11, 12, 13]); // tyresWear  (25-28)
    buf.push(18); // actualTyreCompound  (29)
    buf.push(17); // visualTyreCompound  (30)
    buf.push(3); // tyresAgeLaps  (31)
    buf.extend_from_slice(&[0, 0, 0, 0]); // tyresDamage  (32-35)
    buf.extend_from_slice(&[0, 0, 0]); // wing damage  (36-38)
    buf.push(0); // drsFault  (39)
    buf.push(0); // engineDamage  (40)
    buf.push(0); // gearBoxDamage  (41)
    let flag_code = flag.to_raw().unwrap_or(-1);
    buf.extend_from_slice(&flag_code.to_le_bytes()); // vehicleFiaFlags  (42)
    push_f32s(&mut buf, &[2_000_000.0]); // ersStoreEnergy  (43-46)
    buf.push(2); // ersDeployMode  (47)
    push_f32s(&mut buf, &[100_000.0, 50_000.0, 500_000.0]); // harvested / deployed  (48-59)
    buf
}

/// Full Car Status packet; the player's car carries `fuel_in_tank` and a green flag.
pub fn build_car_status_packet(player_index: u8, fuel_in_tank: f32) -> Vec<u8> {
    let mut buf = build_header_bytes(PACKET_FORMAT_2020, PACKET_ID_CAR_STATUS, player_index);
    for car in 0..MAX_CARS {
        if car == usize::from(player_index) {
            buf.extend_from_slice(&build_car_status_entry(fuel_in_tank, ZoneFlag::Green));
        } else {
            buf.extend_from_slice(&build_car_status_entry(0.0, ZoneFlag::None));
        }
    }
    buf
}

// ── Participants / Lobby ─────────────────────────────────────────────────────

/// Participants packet with one human-controlled entry per name.
///
/// Entry `i` has race number `i + 1`, team id `i % 10`, and nationality British.
pub fn build_participants_packet(names: &[&str]) -> Vec<u8> {
    let mut buf = build_header_bytes(PACKET_FORMAT_2020, PACKET_ID_PARTICIPANTS, 0);
    buf.push(count_byte(names.len())); // numActiveCars
    for (i, name) in names.iter().enumerate() {
        let slot = count_byte(i);
        buf.push(0); // aiControlled
        buf.push(255); // driverId (network human)
        buf.push(slot % 10); // teamId
        buf.push(slot.saturating_add(1)); // raceNumber
        buf.push(10); // nationality
        push_name(&mut buf, name);
        buf.push(1); // yourTelemetry
    }
    let unused = MAX_CARS.saturating_sub(names.len());
    buf.extend(std::iter::repeat_n(0u8, unused * 54));
    buf
}

/// Lobby Info packet with one ready, human player per name.
pub fn build_lobby_info_packet(names: &[&str]) -> Vec<u8> {
    let mut buf = build_header_bytes(PACKET_FORMAT_2020, PACKET_ID_LOBBY_INFO, 0);
    buf.push(count_byte(names.len())); // numPlayers
    for name in names {
        buf.push(0); // aiControlled
        buf.push(255); // teamId (none selected)
        buf.push(27); // nationality
        push_name(&mut buf, name);
        buf.push(1); // readyStatus
    }
    let unused = MAX_CARS.saturating_sub(names.len());
    buf.extend(std::iter::repeat_n(0u8, unused * 52));
    buf
}
