use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::integrations::args::IntegrationArgs;

pub mod add;

pub const DEFAULT_CONFIG_FILE: &str = "engine-test.conf";

#[derive(Parser, Debug)]
#[command(name = "engine-test", version, about = "Engine integration test tool")]
pub struct Cli {
    /// Path to the configuration database
    #[arg(
        short = 'c',
        long = "config-file",
        global = true,
        default_value = DEFAULT_CONFIG_FILE,
        env = "ENGINE_TEST_CONFIG"
    )]
    pub config_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add integration
    Add(IntegrationArgs),
}
