//! Motion packet (id 0). Decode-only.
//!
//! World-space motion for all cars plus suspension and wheel data for the
//! player's car only. Direction vectors are normalised `i16` on the wire;
//! they are kept raw here and scaled by the accessors.

use serde::Serialize;

use super::{MAX_CARS, PacketBody, PacketKind, player_record};
use crate::cursor::{ByteReader, normalized_vector_to_f32};
use crate::error::CodecResult;
use crate::header::PacketHeader;
use crate::schema::{BodyLayout, FieldDescriptor, FieldKind, RepeatArity, WireRecord, read_block};

const ARITY: RepeatArity = RepeatArity::Fixed(MAX_CARS);

/// Per-car motion entry (60 bytes).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CarMotionData {
    /// World position x, y, z (m).
    pub world_position: [f32; 3],
    /// World velocity x, y, z (m/s).
    pub world_velocity: [f32; 3],
    /// Forward direction, normalised.
    pub world_forward_dir: [i16; 3],
    /// Right direction, normalised.
    pub world_right_dir: [i16; 3],
    pub g_force_lateral: f32,
    pub g_force_longitudinal: f32,
    pub g_force_vertical: f32,
    /// Yaw angle (rad).
    pub yaw: f32,
    /// Pitch angle (rad).
    pub pitch: f32,
    /// Roll angle (rad).
    pub roll: f32,
}

impl CarMotionData {
    pub fn forward_dir(&self) -> [f32; 3] {
        self.world_forward_dir.map(normalized_vector_to_f32)
    }

    pub fn right_dir(&self) -> [f32; 3] {
        self.world_right_dir.map(normalized_vector_to_f32)
    }
}

impl WireRecord for CarMotionData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::array("worldPosition", FieldKind::F32, 3),
        FieldDescriptor::array("worldVelocity", FieldKind::F32, 3),
        FieldDescriptor::array("worldForwardDir", FieldKind::I16, 3),
        FieldDescriptor::array("worldRightDir", FieldKind::I16, 3),
        FieldDescriptor::scalar("gForceLateral", FieldKind::F32),
        FieldDescriptor::scalar("gForceLongitudinal", FieldKind::F32),
        FieldDescriptor::scalar("gForceVertical", FieldKind::F32),
        FieldDescriptor::scalar("yaw", FieldKind::F32),
        FieldDescriptor::scalar("pitch", FieldKind::F32),
        FieldDescriptor::scalar("roll", FieldKind::F32),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            world_position: r.f32_le_array()?,
            world_velocity: r.f32_le_array()?,
            world_forward_dir: r.i16_le_array()?,
            world_right_dir: r.i16_le_array()?,
            g_force_lateral: r.f32_le()?,
            g_force_longitudinal: r.f32_le()?,
            g_force_vertical: r.f32_le()?,
            yaw: r.f32_le()?,
            pitch: r.f32_le()?,
            roll: r.f32_le()?,
        })
    }
}

/// Player-car-only motion data that trails the per-car block (120 bytes).
///
/// Wheel arrays are ordered RL, RR, FL, FR.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerMotionData {
    pub suspension_position: [f32; 4],
    pub suspension_velocity: [f32; 4],
    pub suspension_acceleration: [f32; 4],
    /// Speed of each wheel.
    pub wheel_speed: [f32; 4],
    /// Slip ratio of each wheel.
    pub wheel_slip: [f32; 4],
    /// Velocity in local space x, y, z.
    pub local_velocity: [f32; 3],
    pub angular_velocity: [f32; 3],
    pub angular_acceleration: [f32; 3],
    /// Current front wheels angle (rad).
    pub front_wheels_angle: f32,
}

impl WireRecord for PlayerMotionData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::array("suspensionPosition", FieldKind::F32, 4),
        FieldDescriptor::array("suspensionVelocity", FieldKind::F32, 4),
        FieldDescriptor::array("suspensionAcceleration", FieldKind::F32, 4),
        FieldDescriptor::array("wheelSpeed", FieldKind::F32, 4),
        FieldDescriptor::array("wheelSlip", FieldKind::F32, 4),
        FieldDescriptor::array("localVelocity", FieldKind::F32, 3),
        FieldDescriptor::array("angularVelocity", FieldKind::F32, 3),
        FieldDescriptor::array("angularAcceleration", FieldKind::F32, 3),
        FieldDescriptor::scalar("frontWheelsAngle", FieldKind::F32),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            suspension_position: r.f32_le_array()?,
            suspension_velocity: r.f32_le_array()?,
            suspension_acceleration: r.f32_le_array()?,
            wheel_speed: r.f32_le_array()?,
            wheel_slip: r.f32_le_array()?,
            local_velocity: r.f32_le_array()?,
            angular_velocity: r.f32_le_array()?,
            angular_acceleration: r.f32_le_array()?,
            front_wheels_angle: r.f32_le()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketMotionData {
    pub header: PacketHeader,
    /// One entry per grid slot.
    pub car_motion_data: Vec<CarMotionData>,
    pub player_motion: PlayerMotionData,
}

impl PacketMotionData {
    pub fn player(&self) -> Option<&CarMotionData> {
        player_record(&self.car_motion_data, &self.header)
    }
}

impl PacketBody for PacketMotionData {
    const KIND: PacketKind = PacketKind::Motion;
    const LAYOUT: BodyLayout = BodyLayout {
        repeat: ARITY,
        record: CarMotionData::FIELDS,
        trailing: PlayerMotionData::FIELDS,
    };

    fn header(&self) -> &PacketHeader {
        &self.header
    }

    fn decode_body(header: PacketHeader, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            header,
            car_motion_data: read_block(reader, ARITY)?,
            player_motion: PlayerMotionData::decode(reader)?,
        })
    }
}
