//! Error types for outflux discovery.
//!
//! Every failure is classified into a small closed set of kinds so callers can
//! decide whether to abort a discovery pass or skip a single measurement.

use std::fmt;
use thiserror::Error;

/// Main error type for discovery operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Invalid construction parameters (missing params, empty server address, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client call failed before a response was obtained.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response was obtained but it carries an embedded error message.
    #[error("{0}")]
    Content(String),

    /// Caller-supplied query text does not satisfy a precondition.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The response shape violates an expected cardinality.
    #[error("Shape error: {0}")]
    Shape(String),

    /// A response value cannot be represented as the expected scalar type.
    #[error("Type error: {0}")]
    Type(String),
}

/// The closed set of error kinds, for branching without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Config,
    Transport,
    Content,
    Validation,
    Shape,
    Type,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Config => "config",
            Self::Transport => "transport",
            Self::Content => "content",
            Self::Validation => "validation",
            Self::Shape => "shape",
            Self::Type => "type",
        };
        f.write_str(name)
    }
}

impl DiscoveryError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a content error with the given message.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Creates a validation error with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a shape error with the given message.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Creates a type error with the given message.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Content(_) => ErrorKind::Content,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Shape(_) => ErrorKind::Shape,
            Self::Type(_) => ErrorKind::Type,
        }
    }

    /// Returns the underlying message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::Transport(msg)
            | Self::Content(msg)
            | Self::Validation(msg)
            | Self::Shape(msg)
            | Self::Type(msg) => msg,
        }
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Transport(_) => "Transport Error",
            Self::Content(_) => "Query Error",
            Self::Validation(_) => "Validation Error",
            Self::Shape(_) => "Shape Error",
            Self::Type(_) => "Type Error",
        }
    }
}

/// Result type alias using DiscoveryError.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
