// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

//! Event dispatcher for one globe view.
//!
//! Every derived value is recomputed from its inputs on an explicit event:
//! a new route rebuilds the primitives and reframes the camera, a width change
//! only reframes the camera, a height-only change only resizes the surface.

use crate::camera::{self, CameraTarget};
use crate::client::{RouteService, ServiceError};
use crate::models::{find_airport, Airport, Country, RouteRequest, RouteResult};
use crate::palette::ColorSource;
use crate::selection::{AirportOption, Endpoint, Selection};
use crate::transform::{self, Primitives};
use crate::viewport::ViewportTracker;
use log::{debug, info, warn};

/// The rendering surface. Whatever draws the globe implements this.
pub trait GlobeView {
    fn set_primitives(&mut self, primitives: &Primitives);
    fn set_size(&mut self, width: u32, height: u32);
    /// Animated move to `target`.
    fn point_of_view(&mut self, target: CameraTarget);
}

#[derive(Debug, Clone)]
pub enum Event {
    AirportsLoaded(Vec<Airport>),
    CountriesLoaded(Vec<Country>),
    /// Pick or clear an endpoint by IATA code.
    Select(Endpoint, Option<String>),
    /// Country codes to keep the route out of.
    ExcludeCountries(Vec<String>),
    Resized { width: u32, height: u32 },
    RouteReceived(RouteResult),
}

/// What a dispatch changed on the view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Update {
    pub primitives_changed: bool,
    pub camera: Option<CameraTarget>,
}

pub struct GlobeSession {
    airports: Vec<Airport>,
    countries: Vec<Country>,
    selection: Selection,
    viewport: ViewportTracker,
    route: Option<RouteResult>,
    primitives: Primitives,
    camera: CameraTarget,
    colors: Box<dyn ColorSource>,
    forward_exclusions: bool,
}

impl GlobeSession {
    /// Creates the session with the container's initial size and puts the
    /// camera at the resting view.
    pub fn mount<V: GlobeView>(
        width: u32,
        height: u32,
        colors: Box<dyn ColorSource>,
        view: &mut V,
    ) -> Self {
        let primitives = Primitives::default();
        let camera = camera::plan(&primitives, width);
        view.set_size(width, height);
        view.point_of_view(camera);
        Self {
            airports: Vec::new(),
            countries: Vec::new(),
            selection: Selection::new(),
            viewport: ViewportTracker::mount(width, height),
            route: None,
            primitives,
            camera,
            colors,
            forward_exclusions: false,
        }
    }

    pub fn with_forward_exclusions(mut self, forward: bool) -> Self {
        self.forward_exclusions = forward;
        self
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn route(&self) -> Option<&RouteResult> {
        self.route.as_ref()
    }

    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    pub fn camera(&self) -> CameraTarget {
        self.camera
    }

    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }

    pub fn options(&self, endpoint: Endpoint) -> Vec<AirportOption> {
        self.selection.options(endpoint, &self.airports)
    }

    /// The request the "generate route" action would send, if both
    /// endpoints are chosen.
    pub fn request(&self) -> Option<RouteRequest> {
        self.selection.request(self.forward_exclusions)
    }

    pub fn dispatch<V: GlobeView>(&mut self, event: Event, view: &mut V) -> Update {
        match event {
            Event::AirportsLoaded(airports) => {
                debug!("Airport list replaced ({} entries)", airports.len());
                self.airports = airports;
                Update::default()
            }
            Event::CountriesLoaded(countries) => {
                debug!("Country list replaced ({} entries)", countries.len());
                self.countries = countries;
                Update::default()
            }
            Event::Select(endpoint, code) => self.select(endpoint, code, view),
            Event::ExcludeCountries(codes) => {
                let excluded = self
                    .countries
                    .iter()
                    .filter(|c| codes.contains(&c.code))
                    .cloned()
                    .collect();
                self.selection.set_excluded_countries(excluded);
                Update::default()
            }
            Event::Resized { width, height } => {
                let change = self.viewport.resize(width, height);
                if change.any() {
                    view.set_size(width, height);
                }
                if change.width {
                    Update {
                        primitives_changed: false,
                        camera: Some(self.reframe(view)),
                    }
                } else {
                    Update::default()
                }
            }
            Event::RouteReceived(result) => {
                // Responses are applied in arrival order; the latest one wins.
                self.route = Some(result);
                self.rebuild(view)
            }
        }
    }

    fn select<V: GlobeView>(
        &mut self,
        endpoint: Endpoint,
        code: Option<String>,
        view: &mut V,
    ) -> Update {
        let airport = match code {
            Some(code) => match find_airport(&self.airports, &code) {
                Some(a) => Some(a.clone()),
                None => {
                    warn!("Ignoring selection of unknown airport {}", code);
                    return Update::default();
                }
            },
            None => None,
        };

        if !self.selection.set(endpoint, airport) {
            return Update::default();
        }

        let stale = self
            .route
            .as_ref()
            .is_some_and(|r| !self.selection.matches(&r.route));
        if stale {
            self.route = None;
            return self.rebuild(view);
        }
        Update::default()
    }

    fn rebuild<V: GlobeView>(&mut self, view: &mut V) -> Update {
        self.primitives = transform::transform(
            self.route.as_ref(),
            &self.selection,
            &self.airports,
            self.colors.as_mut(),
        );
        view.set_primitives(&self.primitives);
        Update {
            primitives_changed: true,
            camera: Some(self.reframe(view)),
        }
    }

    fn reframe<V: GlobeView>(&mut self, view: &mut V) -> CameraTarget {
        self.camera = camera::plan(&self.primitives, self.viewport.width());
        view.point_of_view(self.camera);
        self.camera
    }

    /// Loads airports and countries from the backend. A failed list leaves the
    /// previous one in place.
    pub fn load_reference_data<S: RouteService + ?Sized, V: GlobeView>(
        &mut self,
        service: &S,
        view: &mut V,
    ) -> Result<(), ServiceError> {
        let airports = service.airports()?;
        self.dispatch(Event::AirportsLoaded(airports), view);
        let countries = service.countries()?;
        self.dispatch(Event::CountriesLoaded(countries), view);
        Ok(())
    }

    /// Requests a route for the current selection and applies the response.
    /// Returns `Ok(None)` when the selection is incomplete. On failure the
    /// current route stays on screen.
    pub fn fetch_route<S: RouteService + ?Sized, V: GlobeView>(
        &mut self,
        service: &S,
        view: &mut V,
    ) -> Result<Option<Update>, ServiceError> {
        let Some(request) = self.request() else {
            return Ok(None);
        };
        let result = service.route(&request)?;
        info!(
            "Route {} -> {}: {:.0} km over {} points",
            result.route.departure,
            result.route.destination,
            result.distances.km(),
            result.path.as_ref().map_or(0, |p| p.len())
        );
        Ok(Some(self.dispatch(Event::RouteReceived(result), view)))
    }
}
