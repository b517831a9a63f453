//! Station code types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code {input:?}: {reason}")]
pub struct InvalidCrs {
    input: String,
    reason: &'static str,
}

impl InvalidCrs {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Crs` value is valid by construction; whether the code names
/// a real station is a question for the
/// [`StationDirectory`](crate::stations::StationDirectory).
///
/// # Examples
///
/// ```
/// use train_board::domain::Crs;
///
/// let rdg = Crs::parse("RDG").unwrap();
/// assert_eq!(rdg.as_str(), "RDG");
///
/// // Lowercase is rejected
/// assert!(Crs::parse("rdg").is_err());
///
/// // Wrong length is rejected
/// assert!(Crs::parse("RD").is_err());
/// assert!(Crs::parse("RDGX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if s.chars().count() != 3 {
            return Err(InvalidCrs::new(s, "must be exactly 3 characters"));
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidCrs::new(s, "must be uppercase ASCII letters A-Z"));
        }

        Ok(Crs([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Whether a raw station code from an API response names this station.
    pub fn matches(&self, code: Option<&str>) -> bool {
        code == Some(self.as_str())
    }
}

impl FromStr for Crs {
    type Err = InvalidCrs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Crs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let crs = Crs::parse(&s).unwrap();
            prop_assert_eq!(crs.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(Crs::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Crs::parse(&s).is_err());
        }
    }
}
