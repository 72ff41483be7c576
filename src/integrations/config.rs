use serde::{Deserialize, Serialize};

use crate::integrations::{args::IntegrationArgs, format::Format};

/// A named test configuration, as stored in the configuration database.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Unique key within the configuration database
    pub name: String,

    /// Framing of the events
    pub format: Format,

    /// Module the data is coming from, empty when unset
    #[serde(default)]
    pub queue: String,

    /// Source of the data, empty when unset
    #[serde(default)]
    pub location: String,

    /// Fixed number of lines per event, only for multi-line format
    #[serde(default)]
    pub lines: Option<u32>,
}

impl IntegrationConfig {
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        IntegrationConfig {
            name: name.into(),
            format,
            queue: String::new(),
            location: String::new(),
            lines: None,
        }
    }

    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = queue.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the line count. Ignored unless the format is multi-line.
    pub fn lines(mut self, lines: u32) -> Self {
        if self.format.is_multi_line() {
            self.lines = Some(lines);
        }
        self
    }
}

impl From<IntegrationArgs> for IntegrationConfig {
    /// Builds a record from arguments that already passed
    /// [`ArgsValidator::validate`](crate::integrations::validator::ArgsValidator::validate).
    fn from(args: IntegrationArgs) -> Self {
        let mut config = IntegrationConfig::new(args.integration_name, args.format)
            .queue(args.queue.unwrap_or_default())
            .location(args.location.unwrap_or_default());

        if let Some(lines) = args.lines {
            if config.format.is_multi_line() {
                config = config.lines(lines);
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    lines,
                    format = %config.format,
                    "--lines only applies to multi-line format, ignoring it"
                );
            }
        }

        config
    }
}
