use async_trait::async_trait;
use std::env;
use std::sync::Arc;

use crate::entities::Coordinates;
use crate::error::{authorization_error, invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Authorized,
    NotDetermined,
    Denied,
    Restricted,
}

/// Narrow capability provider for the device's location: authorization
/// state, the prompt, and the current coordinates.
#[async_trait]
pub trait LocationAuthority {
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Asks the user for access and reports the resulting status.
    async fn request_authorization(&self) -> AuthorizationStatus;

    async fn current_location(&self) -> Result<Coordinates, Error>;
}

pub type DynLocationAuthority = Arc<dyn LocationAuthority + Send + Sync>;

// demo fallback: Cupertino city center
const DEFAULT_LOCATION: Coordinates = Coordinates {
    latitude: 37.3230,
    longitude: -122.0322,
};

/// Demo authority with a fixed status and position, optionally taken from
/// the `CURRENT_LOCATION` environment variable (`"lat,lng"`).
#[derive(Clone, Copy, Debug)]
pub struct FixedLocationAuthority {
    status: AuthorizationStatus,
    coordinates: Coordinates,
}

impl FixedLocationAuthority {
    pub fn new(status: AuthorizationStatus, coordinates: Coordinates) -> Self {
        Self {
            status,
            coordinates,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        match env::var("CURRENT_LOCATION") {
            Ok(raw) => Ok(Self::new(
                AuthorizationStatus::Authorized,
                parse_coordinates(&raw)?,
            )),
            Err(env::VarError::NotPresent) => {
                Ok(Self::new(AuthorizationStatus::Authorized, DEFAULT_LOCATION))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl LocationAuthority for FixedLocationAuthority {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.status
    }

    async fn request_authorization(&self) -> AuthorizationStatus {
        self.status
    }

    async fn current_location(&self) -> Result<Coordinates, Error> {
        match self.status {
            AuthorizationStatus::Authorized => Ok(self.coordinates),
            _ => Err(authorization_error()),
        }
    }
}

fn parse_coordinates(raw: &str) -> Result<Coordinates, Error> {
    let (latitude, longitude) = raw.split_once(',').ok_or_else(invalid_input_error)?;

    Ok(Coordinates {
        latitude: latitude
            .trim()
            .parse()
            .map_err(|_| invalid_input_error())?,
        longitude: longitude
            .trim()
            .parse()
            .map_err(|_| invalid_input_error())?,
    })
}
