//! Error handling for svgraster
//!
//! Provides error types for every layer of the conversion:
//! - Scene errors (malformed geometry on a single element, recoverable)
//! - Color errors (unparseable color strings)
//! - Document errors (unreadable or invalid source, fatal)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Color parsing error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a known color notation
    #[error("Invalid color: {value}")]
    Invalid {
        /// The rejected input.
        value: String,
    },
}

/// Scene construction error type
///
/// Raised while turning a single element into a shape. The builder logs these
/// and skips the element; they never abort a conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A required attribute is absent
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The element tag.
        element: String,
        /// The attribute name.
        attribute: String,
    },

    /// An attribute could not be read as an integer
    #[error("<{element}> attribute '{attribute}' is not a number: {value:?}")]
    InvalidNumber {
        /// The element tag.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The raw attribute value.
        value: String,
    },

    /// A size attribute is negative or zero where it must be positive
    #[error("<{element}> attribute '{attribute}' must be {expected}, got {value}")]
    OutOfRange {
        /// The element tag.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The parsed value.
        value: i32,
        /// The accepted range, e.g. "positive".
        expected: String,
    },

    /// A points list is malformed
    #[error("<{element}> has a malformed points list: {reason}")]
    InvalidPoints {
        /// The element tag.
        element: String,
        /// What is wrong with the list.
        reason: String,
    },

    /// Too few points for the shape
    #[error("<{element}> needs at least {required} points, got {actual}")]
    TooFewPoints {
        /// The element tag.
        element: String,
        /// Minimum point count.
        required: usize,
        /// Points supplied.
        actual: usize,
    },

    /// A fill or stroke color is invalid
    #[error("<{element}> attribute '{attribute}': {source}")]
    InvalidColor {
        /// The element tag.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The underlying color error.
        #[source]
        source: ColorError,
    },

    /// A `use` element names an id that has not been registered yet
    #[error("<use> references unknown id '{id}'")]
    UnresolvedReference {
        /// The referenced id, without the leading '#'.
        id: String,
    },
}

/// Document error type
///
/// Represents failures that make the whole source unusable.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The source is not well-formed XML
    #[error("Malformed document: {reason}")]
    Malformed {
        /// The parser message.
        reason: String,
    },

    /// The root element is not `<svg>`
    #[error("Expected <svg> root element, found <{found}>")]
    UnexpectedRoot {
        /// The root tag that was found.
        found: String,
    },

    /// The root element lacks usable canvas dimensions
    #[error("Root element has invalid '{attribute}': {reason}")]
    InvalidDimensions {
        /// The attribute name (`width` or `height`).
        attribute: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The source could not be read
    #[error("Unable to load {path}: {source}")]
    Unreadable {
        /// The path that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Main error type for svgraster
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene construction error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error aborts a conversion
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Scene(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
