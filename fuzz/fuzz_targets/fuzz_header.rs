//! Fuzzes the F1 2020 packet header codec.
//!
//! Run with:
//!   cargo fuzz run fuzz_header

#![no_main]

use libfuzzer_sys::fuzz_target;
use racing_wheel_telemetry_f1::{ByteWriter, HEADER_SIZE, encode_header, peek_header};

fuzz_target!(|data: &[u8]| {
    let Ok(header) = peek_header(data) else {
        return;
    };
    let mut writer = ByteWriter::new(HEADER_SIZE);
    if encode_header(&mut writer, &header).is_ok() {
        assert_eq!(Some(writer.as_slice()), data.get(..HEADER_SIZE));
    }
});
