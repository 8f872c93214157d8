use std::sync::Arc;

use andiamo::api::{DynAPI, RouteAPI, SearchAPI};
use andiamo::display::{ConsoleDisplay, MapEvent};
use andiamo::engine::Engine;
use andiamo::entities::{Restaurant, TransportMode};
use andiamo::external::google_maps::GoogleMaps;
use andiamo::location::FixedLocationAuthority;
use andiamo::presenter::StepListPresenter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let restaurant = Restaurant::new(
        "Caffe Macs".into(),
        "Cafe".into(),
        "1 Infinite Loop, Cupertino, CA".into(),
        "408-996-1010".into(),
        "caffemacs".into(),
        false,
    );

    let (display, events) = ConsoleDisplay::new();
    let display = Arc::new(display);
    let location = Arc::new(FixedLocationAuthority::from_env().unwrap());

    let engine = Engine::new(
        restaurant,
        Arc::new(GoogleMaps::new()),
        display.clone(),
        location,
    );

    engine.open().await;

    let api = Arc::new(engine) as DynAPI;

    // the callout accessory tap asks for directions, as the pin callout would
    display.tap_callout();

    if let Ok(MapEvent::CalloutTapped { .. }) = events.try_recv() {
        match api.request_route(TransportMode::default()).await {
            Ok(route) => {
                let presenter = StepListPresenter::new(&route);
                for (index, row) in presenter.rows().iter().enumerate() {
                    tracing::info!("step {}: {}", index + 1, row);
                }
                presenter.done();
            }
            Err(err) => tracing::error!(code = err.code, "{}", err.message),
        }

        // switching the transport segment re-requests with the new mode
        if let Ok(route) = api.request_route(TransportMode::Walking).await {
            tracing::info!(
                steps = route.steps.len(),
                meters = route.distance_meters,
                "walking route drawn"
            );
        }
    }

    for item in api.find_nearby("cafe").await.unwrap_or_default() {
        tracing::info!(name = %item.name, "nearby");
    }
}
