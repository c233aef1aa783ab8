//! Car setup, status and surface tables.

wire_enum! {
    /// Traction control level.
    pub enum TractionControl: u8 {
        Off = 0,
        Medium = 1,
        High = 2,
    }
    unknown: Unknown
}

wire_enum! {
    /// Fuel mix setting.
    pub enum FuelMix: u8 {
        Lean = 0,
        Standard = 1,
        Rich = 2,
        Max = 3,
    }
    unknown: Unknown
}

wire_enum! {
    pub enum DrsAllowed: u8 {
        NotAllowed = 0,
        Allowed = 1,
    }
    unknown: Unknown
}

wire_enum! {
    /// Compound actually fitted, distinguishing the F1 C1–C5 range.
    pub enum ActualTyreCompound: u8 {
        Inter = 7,
        Wet = 8,
        ClassicDry = 9,
        ClassicWet = 10,
        F2SuperSoft = 11,
        F2Soft = 12,
        F2Medium = 13,
        F2Hard = 14,
        F2Wet = 15,
        C5 = 16,
        C4 = 17,
        C3 = 18,
        C2 = 19,
        C1 = 20,
    }
    unknown: Unknown
}

wire_enum! {
    /// Compound as shown on the tyre sidewall.
    ///
    /// F1 and F1 Classic share the soft/medium/hard codes; F2 '19 has its own.
    pub enum VisualTyreCompound: u8 {
        Inter = 7,
        Wet = 8,
        F2Wet = 15,
        Soft = 16,
        Medium = 17,
        Hard = 18,
        F2SuperSoft = 19,
        F2Soft = 20,
        F2Medium = 21,
        F2Hard = 22,
    }
    unknown: Unknown
}

wire_enum! {
    /// Marshal zone / FIA flag shown to a car. Signed on the wire.
    pub enum ZoneFlag: i8 {
        None = 0,
        Green = 1,
        Blue = 2,
        Yellow = 3,
        Red = 4,
    }
    unknown: InvalidUnknown = -1
}

wire_enum! {
    pub enum ErsDeployMode: u8 {
        None = 0,
        Medium = 1,
        Overtake = 2,
        Hotlap = 3,
    }
    unknown: Unknown
}

wire_enum! {
    /// Surface under a wheel.
    pub enum SurfaceType: u8 {
        Tarmac = 0,
        RumbleStrip = 1,
        Concrete = 2,
        Rock = 3,
        Gravel = 4,
        Mud = 5,
        Sand = 6,
        Grass = 7,
        Water = 8,
        Cobblestone = 9,
        Metal = 10,
        Ridged = 11,
    }
    unknown: Unknown
}

wire_enum! {
    /// Multi-function display panel currently open.
    pub enum MfdPanel: u8 {
        CarSetup = 0,
        Pits = 1,
        Damage = 2,
        Engine = 3,
        Temperatures = 4,
        Closed = 255,
    }
    unknown: Unknown
}
