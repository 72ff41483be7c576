use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::integrations::error::IntegrationError;

/// Event framing understood by the engine.
///
/// The string form of each variant is what `--format` accepts and what is
/// written to the configuration database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Format {
    /// One event per line
    #[serde(rename = "single-line")]
    #[value(name = "single-line")]
    SingleLine,

    /// A fixed number of lines per event, see `IntegrationConfig::lines`
    #[serde(rename = "multi-line")]
    #[value(name = "multi-line")]
    MultiLine,

    #[serde(rename = "json")]
    #[value(name = "json")]
    Json,

    #[serde(rename = "syslog")]
    #[value(name = "syslog")]
    Syslog,

    #[serde(rename = "eventchannel")]
    #[value(name = "eventchannel")]
    EventChannel,

    #[serde(rename = "macos")]
    #[value(name = "macos")]
    MacOs,

    #[serde(rename = "remote-syslog")]
    #[value(name = "remote-syslog")]
    RemoteSyslog,

    #[serde(rename = "audit")]
    #[value(name = "audit")]
    Audit,

    #[serde(rename = "command")]
    #[value(name = "command")]
    Command,

    #[serde(rename = "full_command")]
    #[value(name = "full_command")]
    FullCommand,
}

impl Format {
    const ALL: [Format; 10] = [
        Format::SingleLine,
        Format::MultiLine,
        Format::Json,
        Format::Syslog,
        Format::EventChannel,
        Format::MacOs,
        Format::RemoteSyslog,
        Format::Audit,
        Format::Command,
        Format::FullCommand,
    ];

    /// Every known format, in declaration order.
    pub fn all() -> &'static [Format] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::SingleLine => "single-line",
            Format::MultiLine => "multi-line",
            Format::Json => "json",
            Format::Syslog => "syslog",
            Format::EventChannel => "eventchannel",
            Format::MacOs => "macos",
            Format::RemoteSyslog => "remote-syslog",
            Format::Audit => "audit",
            Format::Command => "command",
            Format::FullCommand => "full_command",
        }
    }

    /// Whether events in this format span a fixed number of lines.
    pub fn is_multi_line(&self) -> bool {
        matches!(self, Format::MultiLine)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = IntegrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                IntegrationError::InvalidArgument(format!("'{s}' is not a valid format"))
            })
    }
}
