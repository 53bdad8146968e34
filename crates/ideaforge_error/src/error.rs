//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError};

/// The foundation error enum for the ideaforge workspace.
///
/// # Examples
///
/// ```
/// use ideaforge_error::{ConfigError, IdeaforgeError};
///
/// let err: IdeaforgeError = ConfigError::new("missing model").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum IdeaforgeErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gateway call error
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Ideaforge error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Ideaforge Error: {}", _0)]
pub struct IdeaforgeError(Box<IdeaforgeErrorKind>);

impl IdeaforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: IdeaforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IdeaforgeErrorKind {
        &self.0
    }

    /// The gateway classification, when this error came from a gateway call.
    pub fn gateway_kind(&self) -> Option<&crate::GatewayErrorKind> {
        match self.kind() {
            IdeaforgeErrorKind::Gateway(err) => Some(err.kind()),
            IdeaforgeErrorKind::Config(_) => None,
        }
    }
}

// Generic From implementation for any type that converts to IdeaforgeErrorKind
impl<T> From<T> for IdeaforgeError
where
    T: Into<IdeaforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ideaforge operations.
pub type IdeaforgeResult<T> = std::result::Result<T, IdeaforgeError>;
