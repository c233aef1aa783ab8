//! Fuzzes F1 2020 packet dispatch and body decoding.
//!
//! Run with:
//!   cargo fuzz run fuzz_decode_packet

#![no_main]

use libfuzzer_sys::fuzz_target;
use racing_wheel_telemetry_f1::{decode_packet, encode_packet};

fuzz_target!(|data: &[u8]| {
    // Errors are acceptable, panics are not.
    let Ok(packet) = decode_packet(data) else {
        return;
    };
    // Anything that decodes and encodes must reproduce a full-size datagram.
    if let Ok(bytes) = encode_packet(&packet) {
        assert_eq!(bytes.len(), packet.kind().packet_size());
    }
});
