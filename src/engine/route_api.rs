use super::Engine;

use async_trait::async_trait;

use crate::api::RouteAPI;
use crate::entities::{Annotation, Placemark, Route, TransportMode};
use crate::error::{geocode_error, invalid_state_error, route_error, Error};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self) -> Result<Placemark, Error> {
        let (address, title, subtitle, image) = {
            let itinerary = self.itinerary.lock().await;
            let restaurant = &itinerary.restaurant;

            (
                restaurant.address.clone(),
                restaurant.name.clone(),
                restaurant.category.clone(),
                restaurant.image.clone(),
            )
        };

        let placemarks = self.services.geocode(&address).await.map_err(|err| {
            tracing::error!(code = err.code, "geocoding failed: {}", err.message);
            err
        })?;

        // only the first placemark is observed, later results are discarded
        let placemark = match placemarks.into_iter().next() {
            Some(placemark) => placemark,
            None => {
                tracing::error!(%address, "geocoding returned no placemark");
                return Err(geocode_error());
            }
        };

        let annotation = Annotation::new(placemark.coordinates, title, subtitle, image);
        let annotation_id = annotation.id;

        let mut itinerary = self.itinerary.lock().await;
        itinerary.resolve(placemark.clone());
        self.display.show_annotation(annotation);
        self.display.select_annotation(annotation_id);
        tracing::debug!(status = %itinerary.status.name(), "address resolved");

        Ok(placemark)
    }

    #[tracing::instrument(skip(self))]
    async fn request_route(&self, mode: TransportMode) -> Result<Route, Error> {
        let destination = {
            let itinerary = self.itinerary.lock().await;

            match itinerary.placemark() {
                Some(placemark) => placemark.coordinates,
                None => {
                    tracing::warn!("route requested before the address resolved");
                    return Err(invalid_state_error());
                }
            }
        };

        let origin = self.location.current_location().await.map_err(|err| {
            tracing::error!(code = err.code, "current location unavailable: {}", err.message);
            err
        })?;

        let routes = self
            .services
            .directions(origin, destination, mode)
            .await
            .map_err(|err| {
                tracing::error!(code = err.code, "direction request failed: {}", err.message);
                err
            })?;

        // only the first route is drawn, alternates are discarded
        let route = match routes.into_iter().next() {
            Some(route) => route,
            None => {
                tracing::error!(?mode, "direction request returned no route");
                return Err(route_error());
            }
        };

        // the swap happens under one lock hold: whichever request completes
        // last is the one stored and drawn, never an interleaving of two
        let mut itinerary = self.itinerary.lock().await;
        let previous = itinerary.route().map(|previous| previous.id);

        itinerary.assign_route(route.clone())?;

        if let Some(overlay_id) = previous {
            self.display.remove_overlay(overlay_id);
        }
        self.display.add_overlay(route.id, route.path.clone());
        self.display.fit_region(route.bounds);
        tracing::debug!(status = %itinerary.status.name(), "route drawn");

        Ok(route)
    }

    async fn route_steps(&self) -> Vec<String> {
        let itinerary = self.itinerary.lock().await;

        itinerary
            .route()
            .map(|route| route.instructions())
            .unwrap_or_default()
    }
}
