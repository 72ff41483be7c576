//! # engine-test
//!
//! Manage the integration test configurations used by the engine test suite.
//! Each integration describes how a class of input events is framed and
//! where it comes from, and lives in a JSON configuration database.
//!
//! ## Features
//!
//! - **Argument Validation**: Cross-field checks before anything is written
//! - **Atomic Saves**: The configuration database is replaced in one rename
//! - **CLI**: `engine-test add` built on `clap`
//!
//! ## Quick Start
//!
//! ```rust
//! use engine_test::integrations::{
//!     args::IntegrationArgs, config::IntegrationConfig, format::Format,
//!     validator::ArgsValidator,
//! };
//! use engine_test::store::database::ConfigDatabase;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dir = tempfile::tempdir()?;
//!
//!     let args = IntegrationArgs::new("apache-access", Format::MultiLine)
//!         .queue("logcollector")
//!         .location("file")
//!         .lines(3);
//!
//!     // Validate the arguments
//!     ArgsValidator::validate(&args)?;
//!
//!     // Save the integration
//!     let mut db = ConfigDatabase::open(dir.path().join("engine-test.conf"), true)?;
//!     db.insert(IntegrationConfig::from(args))?;
//!
//!     assert_eq!(db.get("apache-access").and_then(|i| i.lines), Some(3));
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! - `--lines` must be a positive integer, and is required for multi-line format
//! - `--queue` and `--location` must both be set or both be omitted
//!
//! ## Optional Features
//!
//! - `tracing`: Enable structured logging integration (on by default)

pub mod cli;
pub mod helper;
pub mod integrations;
pub mod store;
