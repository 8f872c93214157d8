use async_channel::{Receiver, Sender};
use geo_types::{Coord, LineString, Rect};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::entities::Annotation;

// visible span around the marker when the display has no explicit region yet
const DEFAULT_SPAN_DEGREES: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapEvent {
    CalloutTapped { annotation_id: Uuid },
}

#[derive(Clone, Copy, Debug)]
pub struct MapOptions {
    pub shows_compass: bool,
    pub shows_scale: bool,
    pub shows_traffic: bool,
}

/// The map surface the engine draws on. One method per display capability;
/// user interaction comes back as [`MapEvent`]s on a channel owned by the
/// implementation.
pub trait MapDisplay {
    fn configure(&self, options: MapOptions);
    fn show_annotation(&self, annotation: Annotation);
    fn select_annotation(&self, annotation_id: Uuid);
    fn add_overlay(&self, overlay_id: Uuid, path: LineString<f64>);
    fn remove_overlay(&self, overlay_id: Uuid);
    fn fit_region(&self, region: Rect<f64>);
    fn show_user_location(&self, visible: bool);
    fn visible_region(&self) -> Rect<f64>;
}

pub type DynMapDisplay = Arc<dyn MapDisplay + Send + Sync>;

#[derive(Debug, Default)]
struct DisplayState {
    annotations: Vec<Annotation>,
    selected: Option<Uuid>,
    overlays: Vec<Uuid>,
    region: Option<Rect<f64>>,
}

/// Console rendition of the map surface for the demo binary: every call is
/// logged, and enough state is tracked to answer `visible_region` and to
/// simulate callout taps.
pub struct ConsoleDisplay {
    events: Sender<MapEvent>,
    state: Mutex<DisplayState>,
}

impl ConsoleDisplay {
    pub fn new() -> (Self, Receiver<MapEvent>) {
        let (events, receiver) = async_channel::unbounded();

        (
            Self {
                events,
                state: Mutex::new(DisplayState::default()),
            },
            receiver,
        )
    }

    /// Simulates the user tapping the selected annotation's callout
    /// accessory. Does nothing when no annotation is selected.
    pub fn tap_callout(&self) {
        let selected = self.state.lock().unwrap().selected;

        if let Some(annotation_id) = selected {
            let _ = self.events.try_send(MapEvent::CalloutTapped { annotation_id });
        }
    }
}

impl MapDisplay for ConsoleDisplay {
    fn configure(&self, options: MapOptions) {
        tracing::info!(
            compass = options.shows_compass,
            scale = options.shows_scale,
            traffic = options.shows_traffic,
            "map: configured"
        );
    }

    fn show_annotation(&self, annotation: Annotation) {
        tracing::info!(
            title = %annotation.title,
            subtitle = %annotation.subtitle,
            icon = %annotation.image,
            latitude = annotation.coordinates.latitude,
            longitude = annotation.coordinates.longitude,
            "map: annotation shown"
        );

        self.state.lock().unwrap().annotations.push(annotation);
    }

    fn select_annotation(&self, annotation_id: Uuid) {
        tracing::info!(%annotation_id, "map: annotation selected");

        self.state.lock().unwrap().selected = Some(annotation_id);
    }

    fn add_overlay(&self, overlay_id: Uuid, path: LineString<f64>) {
        tracing::info!(%overlay_id, points = path.0.len(), "map: overlay added");

        self.state.lock().unwrap().overlays.push(overlay_id);
    }

    fn remove_overlay(&self, overlay_id: Uuid) {
        tracing::info!(%overlay_id, "map: overlay removed");

        self.state
            .lock()
            .unwrap()
            .overlays
            .retain(|id| *id != overlay_id);
    }

    fn fit_region(&self, region: Rect<f64>) {
        tracing::info!(
            min_x = region.min().x,
            min_y = region.min().y,
            max_x = region.max().x,
            max_y = region.max().y,
            "map: region fitted"
        );

        self.state.lock().unwrap().region = Some(region);
    }

    fn show_user_location(&self, visible: bool) {
        tracing::info!(visible, "map: user location visibility changed");
    }

    fn visible_region(&self) -> Rect<f64> {
        let state = self.state.lock().unwrap();

        if let Some(region) = state.region {
            return region;
        }

        // before any route is drawn, the view sits on the last annotation
        let center = state
            .annotations
            .last()
            .map(|annotation| Coord::<f64>::from(annotation.coordinates))
            .unwrap_or(Coord { x: 0.0, y: 0.0 });

        Rect::new(
            Coord {
                x: center.x - DEFAULT_SPAN_DEGREES,
                y: center.y - DEFAULT_SPAN_DEGREES,
            },
            Coord {
                x: center.x + DEFAULT_SPAN_DEGREES,
                y: center.y + DEFAULT_SPAN_DEGREES,
            },
        )
    }
}
