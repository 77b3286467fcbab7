//! Unified error types for clubfit.
//!
//! Data-quality gaps in a bag (missing lofts, too few shafts to compare) are
//! never errors; the grading engine degrades to neutral scores instead. The
//! errors here cover what the surrounding layer must reject: unreadable
//! input documents, caller contract violations on scenarios, and bad
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for clubfit operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClubFitError {
    /// Errors while reading or normalizing a bag document
    #[error("Failed to parse bag: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Caller contract violations on a scenario request
    #[error("Scenario rejected: {context}")]
    Scenario {
        context: String,
        #[source]
        source: ScenarioErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Unexpected document shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid scenario change at index {index}: {message}")]
    InvalidChange { index: usize, message: String },
}

/// Caller contract violations detected before a scenario runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioErrorKind {
    #[error("maximum {max} changes per scenario (got {count})")]
    TooManyChanges { count: usize, max: usize },

    #[error("club '{0}' is not in the bag")]
    UnknownClub(String),

    #[error("club '{0}' is targeted by more than one change")]
    DuplicateTarget(String),

    #[error("the bag has no clubs")]
    EmptyBag,

    #[error("the scenario has no changes")]
    EmptyScenario,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Text formatting failed: {0}")]
    FormatError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for clubfit operations
pub type Result<T> = std::result::Result<T, ClubFitError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ClubFitError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a scenario contract error with context
    pub fn scenario(context: impl Into<String>, source: ScenarioErrorKind) -> Self {
        Self::Scenario {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// The contract violation behind a scenario rejection, if this is one.
    #[must_use]
    pub const fn scenario_kind(&self) -> Option<&ScenarioErrorKind> {
        match self {
            Self::Scenario { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ClubFitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClubFitError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for ClubFitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<crate::reports::ReportError> for ClubFitError {
    fn from(err: crate::reports::ReportError) -> Self {
        use crate::reports::ReportError;
        match err {
            ReportError::IoError(e) => e.into(),
            ReportError::SerializationError(message) => Self::report(
                "rendering report",
                ReportErrorKind::JsonSerializationError(message),
            ),
            ReportError::FormatError(e) => Self::report(
                "rendering report",
                ReportErrorKind::FormatError(e.to_string()),
            ),
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, so a failure deep in a bag file
/// reads as `"loading bag.json: clubs[3]: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ClubFitError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ClubFitError, new_ctx: &str) -> ClubFitError {
    match err {
        ClubFitError::Parse {
            context: existing,
            source,
        } => ClubFitError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ClubFitError::Scenario {
            context: existing,
            source,
        } => ClubFitError::Scenario {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ClubFitError::Report {
            context: existing,
            source,
        } => ClubFitError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ClubFitError::Io {
            path,
            message,
            source,
        } => ClubFitError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
