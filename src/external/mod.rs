pub mod google_maps;

use async_trait::async_trait;
use geo_types::Rect;
use std::sync::Arc;

use crate::entities::{Coordinates, Placemark, PointOfInterest, Route, TransportMode};
use crate::error::Error;

#[async_trait]
pub trait GeocodingService {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error>;
}

#[async_trait]
pub trait DirectionsService {
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TransportMode,
    ) -> Result<Vec<Route>, Error>;
}

#[async_trait]
pub trait LocalSearchService {
    async fn search(&self, query: &str, region: Rect<f64>)
        -> Result<Vec<PointOfInterest>, Error>;
}

pub trait MapServices: GeocodingService + DirectionsService + LocalSearchService {}

pub type DynMapServices = Arc<dyn MapServices + Send + Sync>;
