mod annotation;
mod itinerary;
mod placemark;
mod poi;
mod restaurant;
mod route;

pub use annotation::Annotation;
pub use itinerary::{Itinerary, Status};
pub use placemark::{Coordinates, Placemark};
pub use poi::PointOfInterest;
pub use restaurant::Restaurant;
pub use route::{Route, RouteStep, TransportMode};
