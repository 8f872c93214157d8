use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Placemark, PointOfInterest, Route, TransportMode};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Geocodes the restaurant address and marks the result on the map.
    async fn resolve_address(&self) -> Result<Placemark, Error>;

    /// Computes directions from the current location to the resolved
    /// placemark and draws the route.
    async fn request_route(&self, mode: TransportMode) -> Result<Route, Error>;

    /// Instruction texts of the current route, in order; empty until a
    /// route has been drawn.
    async fn route_steps(&self) -> Vec<String>;
}

#[async_trait]
pub trait SearchAPI {
    /// Natural-language search for points of interest within the current
    /// visible map region.
    async fn find_nearby(&self, category: &str) -> Result<Vec<PointOfInterest>, Error>;
}

pub trait API: RouteAPI + SearchAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
