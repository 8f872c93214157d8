use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Placemark, Restaurant, Route};
use crate::error::{invalid_state_error, Error};

/// One screen's worth of route state for a single restaurant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub restaurant: Restaurant,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Unresolved,
    Resolved { placemark: Placemark },
    Routed { placemark: Placemark, route: Route },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Unresolved => "unresolved".into(),
            Self::Resolved { placemark: _ } => "resolved".into(),
            Self::Routed {
                placemark: _,
                route: _,
            } => "routed".into(),
        }
    }
}

impl Itinerary {
    pub fn new(restaurant: Restaurant) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant,
            status: Status::Unresolved,
        }
    }

    pub fn placemark(&self) -> Option<&Placemark> {
        match &self.status {
            Status::Unresolved => None,
            Status::Resolved { placemark } | Status::Routed { placemark, .. } => Some(placemark),
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match &self.status {
            Status::Routed { route, .. } => Some(route),
            _ => None,
        }
    }

    /// A fresh geocode replaces any earlier resolution; a stale route does
    /// not survive a new placemark.
    #[tracing::instrument]
    pub fn resolve(&mut self, placemark: Placemark) {
        self.status = Status::Resolved { placemark };
    }

    #[tracing::instrument]
    pub fn assign_route(&mut self, route: Route) -> Result<(), Error> {
        let placemark = match &self.status {
            Status::Resolved { placemark } | Status::Routed { placemark, .. } => placemark.clone(),
            Status::Unresolved => return Err(invalid_state_error()),
        };

        self.status = Status::Routed { placemark, route };
        Ok(())
    }
}
