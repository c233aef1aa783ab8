//! Decoder configuration.

use serde::{Deserialize, Serialize};

use crate::header::PACKET_FORMAT_2020;

/// Environment variable listing accepted packet formats, comma separated.
pub const ENV_PACKET_FORMATS: &str = "OPENRACING_F1_PACKET_FORMATS";

/// Decode policy for [`PacketDecoder`](crate::dispatch::PacketDecoder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Packet formats the schemas are replayed for. Others are rejected with
    /// [`CodecError::UnsupportedFormat`](crate::error::CodecError::UnsupportedFormat).
    pub packet_formats: Vec<u16>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            packet_formats: vec![PACKET_FORMAT_2020],
        }
    }
}

impl DecoderConfig {
    pub fn accepts_format(&self, packet_format: u16) -> bool {
        self.packet_formats.contains(&packet_format)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Defaults, overridden by [`ENV_PACKET_FORMATS`] when it holds a valid list.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ENV_PACKET_FORMATS).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        value
            .and_then(parse_formats)
            .map(|packet_formats| Self { packet_formats })
            .unwrap_or_default()
    }
}

fn parse_formats(value: &str) -> Option<Vec<u16>> {
    let formats = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u16>().ok())
        .collect::<Option<Vec<u16>>>()?;
    (!formats.is_empty()).then_some(formats)
}
