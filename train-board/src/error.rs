//! Crate-level error type.

use crate::credentials::CredentialError;
use crate::itinerary::LookupError;
use crate::stations::StationError;
use crate::transport_api::TransportError;

/// Any failure that ends a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Stations(#[from] StationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
