mod route_api;
mod search_api;

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::api::{RouteAPI, API};
use crate::display::{DynMapDisplay, MapOptions};
use crate::entities::{Itinerary, Restaurant};
use crate::external::DynMapServices;
use crate::location::{AuthorizationStatus, DynLocationAuthority};

/// Coordinates one restaurant screen: geocode the address, mark it, compute
/// routes to it, and search around it. All mapping work goes through the
/// injected collaborators.
pub struct Engine {
    services: DynMapServices,
    display: DynMapDisplay,
    location: DynLocationAuthority,
    itinerary: Mutex<Itinerary>,
    authorization_reminded: AtomicBool,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        restaurant: Restaurant,
        services: DynMapServices,
        display: DynMapDisplay,
        location: DynLocationAuthority,
    ) -> Self {
        Self {
            services,
            display,
            location,
            itinerary: Mutex::new(Itinerary::new(restaurant)),
            authorization_reminded: AtomicBool::new(false),
        }
    }

    /// Screen-entry sequence: configure the display, geocode the address,
    /// then run the location authorization flow.
    #[tracing::instrument(skip(self))]
    pub async fn open(&self) {
        self.display.configure(MapOptions {
            shows_compass: true,
            shows_scale: true,
            shows_traffic: true,
        });

        // failures are logged where they occur; the screen stays up
        let _ = self.resolve_address().await;

        self.access_location_authorization().await;
    }

    async fn access_location_authorization(&self) {
        let status = self.location.authorization_status();

        match status {
            AuthorizationStatus::Authorized => self.display.show_user_location(true),
            AuthorizationStatus::NotDetermined | AuthorizationStatus::Denied => {
                if status == AuthorizationStatus::Denied {
                    self.remind_authorization();
                }

                if self.location.request_authorization().await == AuthorizationStatus::Authorized {
                    self.display.show_user_location(true);
                }
            }
            AuthorizationStatus::Restricted => {}
        }
    }

    // the settings reminder is shown once per screen, further denials stay silent
    fn remind_authorization(&self) {
        if !self.authorization_reminded.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                "location access denied; allow it in the system settings to get directions from your position"
            );
        }
    }
}

impl API for Engine {}
