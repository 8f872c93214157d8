use chrono::{DateTime, Utc};
use geo_types::{LineString, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Automobile,
    Walking,
}

impl TransportMode {
    pub fn mode_param(&self) -> &'static str {
        match self {
            Self::Automobile => "driving",
            Self::Walking => "walking",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instructions: String,
    pub path: LineString<f64>,
}

/// A computed path between the current location and the resolved placemark,
/// with its ordered turn-by-turn steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub mode: TransportMode,
    pub steps: Vec<RouteStep>,
    pub path: LineString<f64>,
    pub bounds: Rect<f64>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub computed_at: DateTime<Utc>,
}

impl Route {
    pub fn new(
        mode: TransportMode,
        steps: Vec<RouteStep>,
        path: LineString<f64>,
        bounds: Rect<f64>,
        distance_meters: f64,
        duration_seconds: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            steps,
            path,
            bounds,
            distance_meters,
            duration_seconds,
            computed_at: Utc::now(),
        }
    }

    pub fn instructions(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.instructions.clone()).collect()
    }
}
