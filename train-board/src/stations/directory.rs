//! Station code → name directory.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{Crs, DepartureQuery};

use super::error::{Role, StationError};

/// The reference table shipped with the crate.
const BUNDLED_TABLE: &str = include_str!("../../data/station_codes.csv");

const NAME_COLUMN: &str = "Station Name";
const CODE_COLUMN: &str = "CRS Code";

/// Immutable CRS → station name lookup, built once from a reference table.
///
/// The table is CSV with at least a `Station Name` and a `CRS Code`
/// column. Rows without a name are skipped, as are rows whose code is not
/// a well-formed CRS code.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: BTreeMap<Crs, String>,
}

impl StationDirectory {
    /// Load the directory from the table bundled with the crate.
    pub fn bundled() -> Result<Self, StationError> {
        Self::load(BUNDLED_TABLE.as_bytes())
    }

    /// Load the directory from a CSV file on disk.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }

    /// Load the directory from any CSV source.
    pub fn load(reader: impl Read) -> Result<Self, StationError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(StationError::MissingColumn(name))
        };
        let name_idx = column(NAME_COLUMN)?;
        let code_idx = column(CODE_COLUMN)?;

        let mut names = BTreeMap::new();
        for record in rdr.records() {
            let record = record?;
            let name = record.get(name_idx).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let code = record.get(code_idx).unwrap_or_default();
            match Crs::parse(code) {
                Ok(crs) => {
                    names.insert(crs, name.to_string());
                }
                Err(e) => warn!(station = name, "skipping station table row: {e}"),
            }
        }

        debug!(stations = names.len(), "loaded station directory");
        Ok(Self { names })
    }

    /// Validate an origin/destination pair of user-supplied codes.
    ///
    /// Both codes must be well-formed CRS codes present in the directory.
    pub fn validate(&self, origin: &str, destination: &str) -> Result<DepartureQuery, StationError> {
        debug!(origin, destination, "validating station codes");

        let origin_crs = self.lookup(origin, Role::Origin)?;
        let destination_crs = self.lookup(destination, Role::Destination)?;

        Ok(DepartureQuery::new(
            origin_crs.0,
            origin_crs.1,
            destination_crs.0,
            destination_crs.1,
        ))
    }

    fn lookup(&self, code: &str, role: Role) -> Result<(Crs, &str), StationError> {
        let crs = Crs::parse(code).map_err(|source| StationError::InvalidCode { role, source })?;
        let name = self
            .name(&crs)
            .ok_or_else(|| StationError::UnknownStation {
                role,
                code: code.to_string(),
            })?;
        Ok((crs, name))
    }

    /// Look up a station name by CRS code.
    pub fn name(&self, crs: &Crs) -> Option<&str> {
        self.names.get(crs).map(String::as_str)
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All stations, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (Crs, &str)> {
        self.names.iter().map(|(crs, name)| (*crs, name.as_str()))
    }

    /// The directory as a JSON object of code → name, ordered by code.
    pub fn to_json(&self) -> String {
        // A map of strings always serializes.
        serde_json::to_string_pretty(&self.names).unwrap_or_default()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every code in the bundled table validates to its own name
        #[test]
        fn known_codes_validate(i in 0usize..3000, j in 0usize..3000) {
            let dir = StationDirectory::bundled().unwrap();
            let entries: Vec<_> = dir.iter().collect();
            let (a, a_name) = entries[i % entries.len()];
            let (b, b_name) = entries[j % entries.len()];

            let query = dir.validate(a.as_str(), b.as_str()).unwrap();
            prop_assert_eq!(query.origin_name(), a_name);
            prop_assert_eq!(query.destination_name(), b_name);
        }

        /// Codes of any other length never validate
        #[test]
        fn wrong_length_never_validates(s in "[A-Z]{0,2}|[A-Z]{4,8}") {
            let dir = StationDirectory::bundled().unwrap();
            prop_assert!(dir.validate(&s, "PAD").is_err());
            prop_assert!(dir.validate("PAD", &s).is_err());
        }
    }
}
