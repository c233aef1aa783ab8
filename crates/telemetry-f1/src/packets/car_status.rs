//! Car Status packet (id 7). Decode-only.
//!
//! Setup, fuel, tyre, damage and ERS state for all 22 cars.

use serde::Serialize;

use super::{MAX_CARS, PacketBody, PacketKind, player_record};
use crate::cursor::ByteReader;
use crate::enums::{
    ActualTyreCompound, DrsAllowed, ErsDeployMode, FuelMix, TractionControl, VisualTyreCompound,
    ZoneFlag,
};
use crate::error::CodecResult;
use crate::header::PacketHeader;
use crate::schema::{BodyLayout, FieldDescriptor, FieldKind, RepeatArity, WireRecord, read_block};

const ARITY: RepeatArity = RepeatArity::Fixed(MAX_CARS);

/// Per-car status entry (60 bytes).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CarStatusData {
    pub traction_control: TractionControl,
    /// 0 = off, 1 = on.
    pub anti_lock_brakes: u8,
    pub fuel_mix: FuelMix,
    /// Front brake bias in percent.
    pub front_brake_bias: u8,
    /// 0 = off, 1 = on.
    pub pit_limiter_status: u8,
    /// Current fuel mass (kg).
    pub fuel_in_tank: f32,
    /// Fuel capacity (kg).
    pub fuel_capacity: f32,
    /// Fuel remaining in terms of laps, as shown on the MFD.
    pub fuel_remaining_laps: f32,
    pub max_rpm: u16,
    pub idle_rpm: u16,
    pub max_gears: u8,
    pub drs_allowed: DrsAllowed,
    /// Distance (m) until DRS may be used; 0 when not available.
    pub drs_activation_distance: u16,
    /// Tyre wear percentage, RL RR FL FR.
    pub tyres_wear: [u8; 4],
    pub actual_tyre_compound: ActualTyreCompound,
    pub visual_tyre_compound: VisualTyreCompound,
    /// Age of the current set in laps.
    pub tyres_age_laps: u8,
    /// Tyre damage percentage, RL RR FL FR.
    pub tyres_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    /// 0 = OK, 1 = fault.
    pub drs_fault: u8,
    pub engine_damage: u8,
    pub gear_box_damage: u8,
    pub vehicle_fia_flags: ZoneFlag,
    /// ERS energy store (J).
    pub ers_store_energy: f32,
    pub ers_deploy_mode: ErsDeployMode,
    /// ERS harvested this lap by the MGU-K (J).
    pub ers_harvested_this_lap_mguk: f32,
    /// ERS harvested this lap by the MGU-H (J).
    pub ers_harvested_this_lap_mguh: f32,
    /// ERS deployed this lap (J).
    pub ers_deployed_this_lap: f32,
}

impl WireRecord for CarStatusData {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::enumerated::<TractionControl>("tractionControl"),
        FieldDescriptor::scalar("antiLockBrakes", FieldKind::U8),
        FieldDescriptor::enumerated::<FuelMix>("fuelMix"),
        FieldDescriptor::scalar("frontBrakeBias", FieldKind::U8),
        FieldDescriptor::scalar("pitLimiterStatus", FieldKind::U8),
        FieldDescriptor::scalar("fuelInTank", FieldKind::F32),
        FieldDescriptor::scalar("fuelCapacity", FieldKind::F32),
        FieldDescriptor::scalar("fuelRemainingLaps", FieldKind::F32),
        FieldDescriptor::scalar("maxRPM", FieldKind::U16),
        FieldDescriptor::scalar("idleRPM", FieldKind::U16),
        FieldDescriptor::scalar("maxGears", FieldKind::U8),
        FieldDescriptor::enumerated::<DrsAllowed>("drsAllowed"),
        FieldDescriptor::scalar("drsActivationDistance", FieldKind::U16),
        FieldDescriptor::array("tyresWear", FieldKind::U8, 4),
        FieldDescriptor::enumerated::<ActualTyreCompound>("actualTyreCompound"),
        FieldDescriptor::enumerated::<VisualTyreCompound>("visualTyreCompound"),
        FieldDescriptor::scalar("tyresAgeLaps", FieldKind::U8),
        FieldDescriptor::array("tyresDamage", FieldKind::U8, 4),
        FieldDescriptor::scalar("frontLeftWingDamage", FieldKind::U8),
        FieldDescriptor::scalar("frontRightWingDamage", FieldKind::U8),
        FieldDescriptor::scalar("rearWingDamage", FieldKind::U8),
        FieldDescriptor::scalar("drsFault", FieldKind::U8),
        FieldDescriptor::scalar("engineDamage", FieldKind::U8),
        FieldDescriptor::scalar("gearBoxDamage", FieldKind::U8),
        FieldDescriptor::enumerated::<ZoneFlag>("vehicleFiaFlags"),
        FieldDescriptor::scalar("ersStoreEnergy", FieldKind::F32),
        FieldDescriptor::enumerated::<ErsDeployMode>("ersDeployMode"),
        FieldDescriptor::scalar("ersHarvestedThisLapMGUK", FieldKind::F32),
        FieldDescriptor::scalar("ersHarvestedThisLapMGUH", FieldKind::F32),
        FieldDescriptor::scalar("ersDeployedThisLap", FieldKind::F32),
    ];

    fn decode(r: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            traction_control: r.wire_enum()?,     // 0
            anti_lock_brakes: r.u8()?,            // 1
            fuel_mix: r.wire_enum()?,             // 2
            front_brake_bias: r.u8()?,            // 3
            pit_limiter_status: r.u8()?,          // 4
            fuel_in_tank: r.f32_le()?,            // 5-8
            fuel_capacity: r.f32_le()?,           // 9-12
            fuel_remaining_laps: r.f32_le()?,     // 13-16
            max_rpm: r.u16_le()?,                 // 17-18
            idle_rpm: r.u16_le()?,                // 19-20
            max_gears: r.u8()?,                   // 21
            drs_allowed: r.wire_enum()?,          // 22
            drs_activation_distance: r.u16_le()?, // 23-24
            tyres_wear: r.u8_array()?,            // 25-28
            actual_tyre_compound: r.wire_enum()?, // 29
            visual_tyre_compound: r.wire_enum()?, // 30
            tyres_age_laps: r.u8()?,              // 31
            tyres_damage: r.u8_array()?,          // 32-35
            front_left_wing_damage: r.u8()?,      // 36
            front_right_wing_damage: r.u8()?,     // 37
            rear_wing_damage: r.u8()?,            // 38
            drs_fault: r.u8()?,                   // 39
            engine_damage: r.u8()?,               // 40
            gear_box_damage: r.u8()?,             // 41
            vehicle_fia_flags: r.wire_enum()?,    // 42
            ers_store_energy: r.f32_le()?,        // 43-46
            ers_deploy_mode: r.wire_enum()?,      // 47
            ers_harvested_this_lap_mguk: r.f32_le()?, // 48-51
            ers_harvested_this_lap_mguh: r.f32_le()?, // 52-55
            ers_deployed_this_lap: r.f32_le()?,   // 56-59
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketCarStatusData {
    pub header: PacketHeader,
    /// One entry per grid slot.
    pub car_status_data: Vec<CarStatusData>,
}

impl PacketCarStatusData {
    pub fn player(&self) -> Option<&CarStatusData> {
        player_record(&self.car_status_data, &self.header)
    }
}

impl PacketBody for PacketCarStatusData {
    const KIND: PacketKind = PacketKind::CarStatus;
    const LAYOUT: BodyLayout = BodyLayout {
        repeat: ARITY,
        record: CarStatusData::FIELDS,
        trailing: &[],
    };

    fn header(&self) -> &PacketHeader {
        &self.header
    }

    fn decode_body(header: PacketHeader, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            header,
            car_status_data: read_block(reader, ARITY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::build_car_status_entry;

    use crate::schema::layout_check::{patterned, reader_at};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_car_status_entry_is_60_bytes() {
        assert_eq!(CarStatusData::SIZE, 60);
    }

    #[test]
    fn test_car_status_entry_decode() -> TestResult {
        let bytes = build_car_status_entry(12.5, ZoneFlag::Yellow);
        assert_eq!(bytes.len(), CarStatusData::SIZE);
        let mut r = ByteReader::new(&bytes);
        let status = CarStatusData::decode(&mut r)?;
        assert_eq!(r.remaining(), 0);

        assert_eq!(status.traction_control, TractionControl::High);
        assert_eq!(status.anti_lock_brakes, 1);
        assert_eq!(status.fuel_mix, FuelMix::Standard);
        assert_eq!(status.front_brake_bias, 56);
        assert!((status.fuel_in_tank - 12.5).abs() < f32::EPSILON);
        assert_eq!(status.max_rpm, 13000);
        assert_eq!(status.drs_allowed, DrsAllowed::Allowed);
        assert_eq!(status.tyres_wear, [10, 11, 12, 13]);
        assert_eq!(status.actual_tyre_compound, ActualTyreCompound::C3);
        assert_eq!(status.visual_tyre_compound, VisualTyreCompound::Medium);
        assert_eq!(status.vehicle_fia_flags, ZoneFlag::Yellow);
        assert_eq!(status.ers_deploy_mode, ErsDeployMode::Overtake);
        assert!((status.ers_deployed_this_lap - 500_000.0).abs() < 1.0);
        Ok(())
    }

    #[test]
    fn test_car_status_invalid_flag_is_sentinel() -> TestResult {
        let bytes = build_car_status_entry(0.0, ZoneFlag::InvalidUnknown);
        let status = CarStatusData::decode(&mut ByteReader::new(&bytes))?;
        assert_eq!(status.vehicle_fia_flags, ZoneFlag::InvalidUnknown);
        Ok(())
    }

    #[test]
    fn test_car_status_cannot_be_encoded() {
        let packet = PacketCarStatusData {
            header: PacketHeader::default(),
            car_status_data: Vec::new(),
        };
        let mut w = crate::cursor::ByteWriter::new(16);
        assert_eq!(
            packet.encode_body(&mut w),
            Err(crate::error::CodecError::UnsupportedOperation {
                packet: "CarStatus",
                operation: "encode"
            })
        );
        assert_eq!(w.position(), 0);
    }

    #[test]
    fn test_decode_order_matches_descriptors() -> TestResult {
        let bytes = patterned(CarStatusData::SIZE);
        let s = CarStatusData::decode(&mut ByteReader::new(&bytes))?;
        let at = |name: &str| reader_at(&bytes, 0, CarStatusData::FIELDS, name);

        assert_eq!(s.traction_control, at("tractionControl")?.wire_enum::<TractionControl>()?);
        assert_eq!(s.anti_lock_brakes, at("antiLockBrakes")?.u8()?);
        assert_eq!(s.fuel_mix, at("fuelMix")?.wire_enum::<FuelMix>()?);
        assert_eq!(s.front_brake_bias, at("frontBrakeBias")?.u8()?);
        assert_eq!(s.pit_limiter_status, at("pitLimiterStatus")?.u8()?);
        assert_eq!(s.fuel_in_tank.to_bits(), at("fuelInTank")?.f32_le()?.to_bits());
        assert_eq!(s.fuel_capacity.to_bits(), at("fuelCapacity")?.f32_le()?.to_bits());
        assert_eq!(
            s.fuel_remaining_laps.to_bits(),
            at("fuelRemainingLaps")?.f32_le()?.to_bits()
        );
        assert_eq!(s.max_rpm, at("maxRPM")?.u16_le()?);
        assert_eq!(s.idle_rpm, at("idleRPM")?.u16_le()?);
        assert_eq!(s.max_gears, at("maxGears")?.u8()?);
        assert_eq!(s.drs_allowed, at("drsAllowed")?.wire_enum::<DrsAllowed>()?);
        assert_eq!(s.drs_activation_distance, at("drsActivationDistance")?.u16_le()?);
        assert_eq!(s.tyres_wear, at("tyresWear")?.u8_array::<4>()?);
        assert_eq!(
            s.actual_tyre_compound,
            at("actualTyreCompound")?.wire_enum::<ActualTyreCompound>()?
        );
        assert_eq!(
            s.visual_tyre_compound,
            at("visualTyreCompound")?.wire_enum::<VisualTyreCompound>()?
        );
        assert_eq!(s.tyres_age_laps, at("tyresAgeLaps")?.u8()?);
        assert_eq!(s.tyres_damage, at("tyresDamage")?.u8_array::<4>()?);
        assert_eq!(s.front_left_wing_damage, at("frontLeftWingDamage")?.u8()?);
        assert_eq!(s.front_right_wing_damage, at("frontRightWingDamage")?.u8()?);
        assert_eq!(s.rear_wing_damage, at("rearWingDamage")?.u8()?);
        assert_eq!(s.drs_fault, at("drsFault")?.u8()?);
        assert_eq!(s.engine_damage, at("engineDamage")?.u8()?);
        assert_eq!(s.gear_box_damage, at("gearBoxDamage")?.u8()?);
        assert_eq!(s.vehicle_fia_flags, at("vehicleFiaFlags")?.wire_enum::<ZoneFlag>()?);
        assert_eq!(s.ers_store_energy.to_bits(), at("ersStoreEnergy")?.f32_le()?.to_bits());
        assert_eq!(s.ers_deploy_mode, at("ersDeployMode")?.wire_enum::<ErsDeployMode>()?);
        assert_eq!(
            s.ers_harvested_this_lap_mguk.to_bits(),
            at("ersHarvestedThisLapMGUK")?.f32_le()?.to_bits()
        );
        assert_eq!(
            s.ers_harvested_this_lap_mguh.to_bits(),
            at("ersHarvestedThisLapMGUH")?.f32_le()?.to_bits()
        );
        assert_eq!(
            s.ers_deployed_this_lap.to_bits(),
            at("ersDeployedThisLap")?.f32_le()?.to_bits()
        );
        Ok(())
    }
}
