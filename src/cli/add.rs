use std::path::Path;

use crate::integrations::{
    args::IntegrationArgs, config::IntegrationConfig, error::IntegrationError,
    validator::ArgsValidator,
};
use crate::store::database::ConfigDatabase;

/// Validates `args` and saves the resulting integration into the
/// configuration database at `config_file`, creating the database if needed.
///
/// # Errors
///
/// Returns the first validation failure, or a
/// [`IntegrationError::Store`] if the database cannot be opened or the
/// integration cannot be saved. The database is unchanged on error.
///
/// # Examples
/// ```rust
/// use engine_test::cli::add;
/// use engine_test::integrations::{args::IntegrationArgs, format::Format};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("engine-test.conf");
///
/// add::run(IntegrationArgs::new("apache", Format::SingleLine), &path).unwrap();
/// assert!(add::run(IntegrationArgs::new("apache", Format::SingleLine), &path).is_err());
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(name = %args.integration_name, format = %args.format))
)]
pub fn run(args: IntegrationArgs, config_file: &Path) -> Result<(), IntegrationError> {
    if let Err(e) = ArgsValidator::validate(&args) {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %e, "Rejected arguments");
        return Err(e);
    }

    let integration = IntegrationConfig::from(args);

    let mut db = ConfigDatabase::open(config_file, true)?;
    db.insert(integration)?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %config_file.display(), "Integration added");
    Ok(())
}
