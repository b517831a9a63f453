//! Station directory error types.

use std::path::PathBuf;

use crate::domain::InvalidCrs;

/// Which end of the journey a code was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Origin,
    Destination,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Origin => f.write_str("origin"),
            Role::Destination => f.write_str("destination"),
        }
    }
}

/// Errors from loading the reference table or validating station codes.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The reference table could not be opened
    #[error("failed to read station table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference table is not valid CSV
    #[error("malformed station table: {0}")]
    Csv(#[from] csv::Error),

    /// The reference table lacks a required column
    #[error("station table has no {0:?} column")]
    MissingColumn(&'static str),

    /// A code supplied by the user is not a well-formed CRS code
    #[error("invalid {role} station code: {source}")]
    InvalidCode {
        role: Role,
        #[source]
        source: InvalidCrs,
    },

    /// A well-formed code that is not in the directory
    #[error("unknown {role} station code {code}")]
    UnknownStation { role: Role, code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::MissingColumn("CRS Code");
        assert_eq!(err.to_string(), r#"station table has no "CRS Code" column"#);

        let err = StationError::UnknownStation {
            role: Role::Destination,
            code: "QQQ".into(),
        };
        assert_eq!(err.to_string(), "unknown destination station code QQQ");
    }
}
