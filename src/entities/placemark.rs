use geo_types::Coord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Coord {
            x: coordinates.longitude,
            y: coordinates.latitude,
        }
    }
}

/// A geocoder's resolution of a street address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub coordinates: Coordinates,
    pub formatted_address: String,
}

impl Placemark {
    pub fn new(coordinates: Coordinates, formatted_address: String) -> Self {
        Self {
            coordinates,
            formatted_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_into_query_form() {
        let coordinates = Coordinates {
            latitude: 37.33182,
            longitude: -122.03118,
        };

        let query: String = coordinates.into();

        assert_eq!(query, "37.33182,-122.03118");
    }
}
