//! Error types for OBJ/MTL decoding
//!
//! Every fatal condition carries the 1-based line number of the record that
//! triggered it. Recoverable oddities (short records, unsupported keywords)
//! are not errors; they are reported through the `log` facade instead.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: Record decoding errors
//! - **E3xxx**: Document validation errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading a stream
//! - `E2001`: Malformed numeric field
//! - `E2002`: Invalid face index
//! - `E2003`: Degenerate face (fewer than 3 corners)
//! - `E2004`: Material directive with no current material
//! - `E3001`: Decoded document failed validation

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which pool a face index addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Position index (first slot of a face corner)
    Vertex,
    /// Texture coordinate index (second slot)
    Uv,
    /// Normal index (third slot)
    Normal,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexKind::Vertex => "vertex",
            IndexKind::Uv => "UV",
            IndexKind::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while decoding OBJ and MTL streams
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading a stream
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - The underlying reader failed mid-stream
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// A numeric field could not be parsed
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Non-numeric characters in a `v`, `vn`, `vt` or colour record
    /// - Too few fields on the line (the missing field is reported as `<missing>`)
    /// - A face index that is not an integer
    #[error("[E2001] Malformed number '{value}' in '{record}' record at line {line}")]
    MalformedNumber {
        /// Line number of the record
        line: usize,
        /// Record keyword (`v`, `Ka`, `f`, ...)
        record: String,
        /// The offending text
        value: String,
    },

    /// A face index is zero or reaches outside the pool
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - `0` used as an index (OBJ indices are 1-based)
    /// - A negative index larger than the number of elements declared so far
    #[error("[E2002] Invalid {kind} index {index} at line {line}")]
    InvalidIndex {
        /// Line number of the face record
        line: usize,
        /// Which pool the index addresses
        kind: IndexKind,
        /// Index as written in the file
        index: i64,
    },

    /// A face has fewer than three corners
    ///
    /// **Error Code**: E2003
    #[error("[E2003] Face at line {line} has {corners} corners, at least 3 are required")]
    DegenerateFace {
        /// Line number of the face record
        line: usize,
        /// Number of corners found
        corners: usize,
    },

    /// A material directive appeared before any `newmtl`
    ///
    /// **Error Code**: E2004
    ///
    /// **Suggestions**:
    /// - Add a `newmtl` line before the directive
    /// - Use `OrphanPolicy::Skip` to ignore such directives
    #[error("[E2004] '{directive}' at line {line} has no current material")]
    NoCurrentMaterial {
        /// Line number of the directive
        line: usize,
        /// Directive keyword
        directive: String,
    },

    /// The decoded document violates a structural invariant
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Face indices beyond the end of their pool
    /// - Faces referencing materials missing from the table
    #[error("[E3001] Invalid document: {0}")]
    InvalidDocument(String),
}

impl Error {
    /// Create a MalformedNumber error
    ///
    /// # Arguments
    /// * `line` - Line number of the record
    /// * `record` - The record keyword
    /// * `value` - The text that failed to parse, `None` when the field is missing
    pub fn malformed_number(line: usize, record: &str, value: Option<&str>) -> Self {
        Error::MalformedNumber {
            line,
            record: record.to_string(),
            value: value.unwrap_or("<missing>").to_string(),
        }
    }

    /// Line number attached to the error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedNumber { line, .. }
            | Error::InvalidIndex { line, .. }
            | Error::DegenerateFace { line, .. }
            | Error::NoCurrentMaterial { line, .. } => Some(*line),
            Error::Io(_) | Error::InvalidDocument(_) => None,
        }
    }
}
