use crate::integrations::{args::IntegrationArgs, error::IntegrationError, format::Format};

/// Argument validation for the `add` subcommand
pub struct ArgsValidator;

impl ArgsValidator {
    /// Parses a strictly positive integer.
    ///
    /// Used as the value parser of `-l/--lines`.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw argument string.
    ///
    /// # Returns
    ///
    /// - `Ok(n)` with `n >= 1` if the value is a positive integer.
    /// - `Err(IntegrationError::InvalidArgument)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`IntegrationError::InvalidArgument`] if:
    /// - The value is not an integer
    /// - The value is zero or negative
    ///
    /// # Examples
    /// ```rust
    /// use engine_test::integrations::validator::ArgsValidator;
    ///
    /// assert_eq!(ArgsValidator::parse_positive("5").unwrap(), 5);
    /// assert!(ArgsValidator::parse_positive("0").is_err());
    /// assert!(ArgsValidator::parse_positive("-3").is_err());
    /// assert!(ArgsValidator::parse_positive("abc").is_err());
    /// ```
    pub fn parse_positive(value: &str) -> Result<u32, IntegrationError> {
        let parsed: i64 = value.parse().map_err(|_| {
            IntegrationError::InvalidArgument(format!("{value} is not a valid integer"))
        })?;
        if parsed <= 0 {
            return Err(IntegrationError::InvalidArgument(format!(
                "{value} is an invalid positive int value"
            )));
        }
        u32::try_from(parsed).map_err(|_| {
            IntegrationError::InvalidArgument(format!("{value} exceeds the maximum number of lines"))
        })
    }

    /// Validates that a multi-line format comes with a line count.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::MissingArgument`] if `format` is
    /// [`Format::MultiLine`] and `lines` is `None`.
    ///
    /// # Examples
    /// ```rust
    /// use engine_test::integrations::{format::Format, validator::ArgsValidator};
    ///
    /// assert!(ArgsValidator::validate_lines(Format::MultiLine, Some(4)).is_ok());
    /// assert!(ArgsValidator::validate_lines(Format::MultiLine, None).is_err());
    /// assert!(ArgsValidator::validate_lines(Format::SingleLine, None).is_ok());
    /// ```
    pub fn validate_lines(format: Format, lines: Option<u32>) -> Result<(), IntegrationError> {
        if format.is_multi_line() && lines.is_none() {
            return Err(IntegrationError::MissingArgument(
                "Argument -l/--lines is required for multi-line format".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates that queue and location are both set or both omitted.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::InconsistentArguments`] if exactly one of
    /// them is present.
    ///
    /// # Examples
    /// ```rust
    /// use engine_test::integrations::validator::ArgsValidator;
    ///
    /// assert!(ArgsValidator::validate_queue_location(None, None).is_ok());
    /// assert!(ArgsValidator::validate_queue_location(Some("logcollector"), Some("file")).is_ok());
    /// assert!(ArgsValidator::validate_queue_location(Some("logcollector"), None).is_err());
    /// ```
    pub fn validate_queue_location(
        queue: Option<&str>,
        location: Option<&str>,
    ) -> Result<(), IntegrationError> {
        if queue.is_some() ^ location.is_some() {
            return Err(IntegrationError::InconsistentArguments(
                "Arguments -q/--queue and -o/--location must both be set or both be omitted."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Runs every cross-field check on parsed arguments.
    ///
    /// The line count rule is checked first; only the first failure is
    /// reported.
    ///
    /// # Errors
    ///
    /// See [`ArgsValidator::validate_lines`] and
    /// [`ArgsValidator::validate_queue_location`].
    pub fn validate(args: &IntegrationArgs) -> Result<(), IntegrationError> {
        Self::validate_lines(args.format, args.lines)?;
        Self::validate_queue_location(args.queue.as_deref(), args.location.as_deref())?;
        Ok(())
    }
}
