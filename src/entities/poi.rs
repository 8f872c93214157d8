use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub phone: Option<String>,
    pub coordinates: Coordinates,
}
