use clap::{Args, builder::NonEmptyStringValueParser};

use crate::integrations::{format::Format, validator::ArgsValidator};

/// Arguments of the `add` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct IntegrationArgs {
    /// Integration to test name
    #[arg(short = 'i', long = "integration-name", value_parser = NonEmptyStringValueParser::new())]
    pub integration_name: String,

    /// Format in which events should be handled by engine-test
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Format,

    /// Name of the module this data is coming from (e.g. logcollector)
    #[arg(short = 'q', long = "queue")]
    pub queue: Option<String>,

    /// Name of the collector, source of data (e.g. file, windows-eventlog, journald, macos-uls)
    #[arg(short = 'o', long = "location")]
    pub location: Option<String>,

    /// Fixed number of lines for each event. Only for multi-line format
    #[arg(
        short = 'l',
        long = "lines",
        value_parser = ArgsValidator::parse_positive,
        allow_negative_numbers = true
    )]
    pub lines: Option<u32>,
}

impl IntegrationArgs {
    pub fn new(integration_name: impl Into<String>, format: Format) -> Self {
        IntegrationArgs {
            integration_name: integration_name.into(),
            format,
            queue: None,
            location: None,
            lines: None,
        }
    }

    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn lines(mut self, lines: u32) -> Self {
        self.lines = Some(lines);
        self
    }
}
