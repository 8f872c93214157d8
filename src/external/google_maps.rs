use geo_types::{Coord, LineString, Rect};
use serde::{Deserialize, Serialize};
use std::env;

use async_trait::async_trait;

use crate::entities::{Coordinates, Placemark, PointOfInterest, Route, RouteStep, TransportMode};
use crate::error::{invalid_input_error, upstream_error, Error};
use crate::external::{DirectionsService, GeocodingService, LocalSearchService, MapServices};

// meters per degree of latitude, used to size the text search radius
const DEGREE_METERS: f64 = 111_320.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(location: LatLng) -> Self {
        Coordinates {
            latitude: location.lat,
            longitude: location.lng,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(location: LatLng) -> Self {
        Coord {
            x: location.lng,
            y: location.lat,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Bounds {
    northeast: LatLng,
    southwest: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    text: String,
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsStep {
    html_instructions: String,
    start_location: LatLng,
    end_location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
    duration: TextValue,
    steps: Vec<DirectionsStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    bounds: Bounds,
    legs: Vec<DirectionsLeg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SearchResult {
    name: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

/// Google Maps Web API client covering the three remote capabilities the
/// engine consumes: geocoding, directions and text search.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoogleMaps;

impl GoogleMaps {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GeocodingService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/geocode/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = reqwest::Client::new()
            .get(url)
            .query(&[("key", key)])
            .query(&[("address", address.to_string())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<GeocodeResult>> = res.json().await?;

        if !envelope_ok(&data.status) {
            return Err(upstream_error());
        }

        let results = data.results.unwrap_or_default();

        Ok(results.into_iter().map(placemark_from_result).collect())
    }
}

#[async_trait]
impl DirectionsService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TransportMode,
    ) -> Result<Vec<Route>, Error> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/directions/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = reqwest::Client::new()
            .get(url)
            .query(&[("key", key)])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", mode.mode_param().to_string())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<DirectionsRoute>> = res.json().await?;

        if !envelope_ok(&data.status) {
            return Err(upstream_error());
        }

        let routes = data.routes.unwrap_or_default();

        Ok(routes
            .into_iter()
            .map(|route| route_from_directions(route, mode))
            .collect())
    }
}

#[async_trait]
impl LocalSearchService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        region: Rect<f64>,
    ) -> Result<Vec<PointOfInterest>, Error> {
        let center = region.center();
        let location = format!("{},{}", center.y, center.x);
        let radius = search_radius_meters(&region);

        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/place/textsearch/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = reqwest::Client::new()
            .get(url)
            .query(&[("key", key)])
            .query(&[("query", query.to_string())])
            .query(&[("location", location)])
            .query(&[("radius", radius)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<SearchResult>> = res.json().await?;

        if !envelope_ok(&data.status) {
            return Err(upstream_error());
        }

        let results = data.results.unwrap_or_default();

        Ok(results.into_iter().map(poi_from_result).collect())
    }
}

impl MapServices for GoogleMaps {}

// geocoding, directions and places share the envelope status discipline
fn envelope_ok(status: &str) -> bool {
    status == "OK" || status == "ZERO_RESULTS"
}

fn placemark_from_result(result: GeocodeResult) -> Placemark {
    Placemark::new(result.geometry.location.into(), result.formatted_address)
}

// the text search response carries no phone number
fn poi_from_result(result: SearchResult) -> PointOfInterest {
    PointOfInterest {
        name: result.name,
        phone: None,
        coordinates: result.geometry.location.into(),
    }
}

fn route_from_directions(route: DirectionsRoute, mode: TransportMode) -> Route {
    let mut steps = Vec::new();
    let mut path: Vec<Coord<f64>> = Vec::new();
    let mut distance_meters = 0.0;
    let mut duration_seconds = 0.0;

    for leg in route.legs {
        distance_meters += leg.distance.value;
        duration_seconds += leg.duration.value;

        for step in leg.steps {
            let start: Coord<f64> = step.start_location.into();
            let end: Coord<f64> = step.end_location.into();

            if path.last() != Some(&start) {
                path.push(start);
            }
            path.push(end);

            steps.push(RouteStep {
                instructions: strip_tags(&step.html_instructions),
                path: LineString::from(vec![start, end]),
            });
        }
    }

    let bounds = Rect::new(
        Coord::<f64>::from(route.bounds.southwest),
        Coord::<f64>::from(route.bounds.northeast),
    );

    Route::new(
        mode,
        steps,
        LineString::from(path),
        bounds,
        distance_meters,
        duration_seconds,
    )
}

// directions instructions arrive as HTML fragments
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text
}

fn search_radius_meters(region: &Rect<f64>) -> f64 {
    let center = region.center();
    let half_height = region.height() / 2.0 * DEGREE_METERS;
    let half_width = region.width() / 2.0 * DEGREE_METERS * center.y.to_radians().cos();

    half_height.max(half_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ok_envelope_statuses_are_upstream_failures() {
        assert!(envelope_ok("OK"));
        assert!(envelope_ok("ZERO_RESULTS"));
        assert!(!envelope_ok("REQUEST_DENIED"));
        assert!(!envelope_ok("OVER_QUERY_LIMIT"));
    }

    #[test]
    fn strips_markup_from_instructions() {
        assert_eq!(
            strip_tags("Turn <b>right</b> onto <b>N De Anza Blvd</b>"),
            "Turn right onto N De Anza Blvd"
        );
        assert_eq!(strip_tags("Head north"), "Head north");
    }

    #[test]
    fn geocode_results_become_placemarks() {
        let data: Response<Vec<GeocodeResult>> = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "1 Infinite Loop, Cupertino, CA 95014, USA",
                    "geometry": { "location": { "lat": 37.33182, "lng": -122.03118 } }
                },
                {
                    "formatted_address": "Infinite Loop, Cupertino, CA 95014, USA",
                    "geometry": { "location": { "lat": 37.33240, "lng": -122.03040 } }
                }
            ]
        }))
        .unwrap();

        let placemarks: Vec<Placemark> = data
            .results
            .unwrap()
            .into_iter()
            .map(placemark_from_result)
            .collect();

        assert_eq!(placemarks.len(), 2);
        assert_eq!(placemarks[0].coordinates.latitude, 37.33182);
        assert_eq!(placemarks[0].coordinates.longitude, -122.03118);
        assert_eq!(
            placemarks[0].formatted_address,
            "1 Infinite Loop, Cupertino, CA 95014, USA"
        );
    }

    #[test]
    fn zero_results_envelope_is_empty_not_an_error() {
        let data: Response<Vec<SearchResult>> = serde_json::from_value(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        }))
        .unwrap();

        assert_eq!(data.status, "ZERO_RESULTS");
        assert!(data.results.unwrap_or_default().is_empty());
    }

    #[test]
    fn directions_route_conversion() {
        let data: Response<Vec<DirectionsRoute>> = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "routes": [
                {
                    "bounds": {
                        "northeast": { "lat": 37.3350, "lng": -122.0301 },
                        "southwest": { "lat": 37.3230, "lng": -122.0322 }
                    },
                    "legs": [
                        {
                            "distance": { "text": "1.2 km", "value": 1200.0 },
                            "duration": { "text": "4 mins", "value": 240.0 },
                            "steps": [
                                {
                                    "html_instructions": "Head <b>north</b>",
                                    "start_location": { "lat": 37.3230, "lng": -122.0322 },
                                    "end_location": { "lat": 37.3300, "lng": -122.0322 }
                                },
                                {
                                    "html_instructions": "Turn <b>right</b>",
                                    "start_location": { "lat": 37.3300, "lng": -122.0322 },
                                    "end_location": { "lat": 37.3350, "lng": -122.0301 }
                                }
                            ]
                        }
                    ]
                }
            ]
        }))
        .unwrap();

        let routes: Vec<Route> = data
            .routes
            .unwrap()
            .into_iter()
            .map(|route| route_from_directions(route, TransportMode::Automobile))
            .collect();

        assert_eq!(routes.len(), 1);
        let route = &routes[0];

        assert_eq!(
            route.instructions(),
            vec!["Head north", "Turn right"]
        );
        // shared step endpoints are not duplicated in the overall path
        assert_eq!(route.path.0.len(), 3);
        assert_eq!(route.distance_meters, 1200.0);
        assert_eq!(route.duration_seconds, 240.0);
        assert_eq!(route.bounds.min(), Coord { x: -122.0322, y: 37.3230 });
        assert_eq!(route.bounds.max(), Coord { x: -122.0301, y: 37.3350 });
    }

    #[test]
    fn search_radius_covers_the_region() {
        let region = Rect::new(
            Coord { x: -122.05, y: 37.30 },
            Coord { x: -122.01, y: 37.34 },
        );

        let radius = search_radius_meters(&region);

        // half the 0.04 degree height, in meters
        assert!((radius - 0.02 * DEGREE_METERS).abs() < 1.0);
    }
}
