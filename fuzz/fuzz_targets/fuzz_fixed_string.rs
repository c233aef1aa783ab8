//! Fuzzes fixed-width string encoding and decoding.
//!
//! Run with:
//!   cargo fuzz run fuzz_fixed_string

#![no_main]

use libfuzzer_sys::fuzz_target;
use racing_wheel_telemetry_f1::{
    ByteReader, ByteWriter, NAME_LENGTH, read_fixed_string, write_fixed_string,
};

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let _ = read_fixed_string(&mut reader, NAME_LENGTH);

    // Arbitrary text must always fit the field without splitting a character.
    let text = String::from_utf8_lossy(data);
    let mut writer = ByteWriter::new(NAME_LENGTH);
    if let Ok(written) = write_fixed_string(&mut writer, &text, NAME_LENGTH) {
        assert!(written <= NAME_LENGTH);
        let bytes = writer.into_inner();
        assert!(std::str::from_utf8(bytes.get(..written).unwrap_or_default()).is_ok());
    }
});
