//! Startup and wiring failures.

/// A configuration problem found before any provider call is made.
///
/// Raised when layered configuration cannot be read or parsed, when a value
/// is out of range (zero capacity, zero refill window, temperature outside
/// `0.0..=1.0`), when the API key variable is missing, or when the HTTP
/// client cannot be built from the configured timeouts. `line` and `file`
/// point at the check that rejected the value.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, naming the offending key where there is one
    pub message: String,
    /// Line of the rejecting check
    pub line: u32,
    /// Source file of the rejecting check
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use ideaforge_error::ConfigError;
    ///
    /// let err = ConfigError::new("rate_limit.permits_per_minute must be positive");
    /// assert!(err.to_string().starts_with("Configuration Error: rate_limit"));
    /// assert!(err.file.ends_with(".rs"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
