use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A marker shown on the map display, with the callout icon taken from the
/// restaurant's image reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub id: Uuid,
    pub coordinates: Coordinates,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl Annotation {
    pub fn new(coordinates: Coordinates, title: String, subtitle: String, image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            coordinates,
            title,
            subtitle,
            image,
        }
    }
}
