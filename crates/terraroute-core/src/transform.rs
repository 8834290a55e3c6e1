// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

//! Turns a routing-service response into the arcs, path and labels drawn on
//! the globe.

use crate::models::{find_airport, Airport, GeoPoint, RouteResult};
use crate::palette::{ColorSource, PaletteCycle, PALETTE};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

pub const LABEL_COLOR: &str = "white";
pub const LABEL_DOT_RADIUS: f64 = 0.5;

/// Midpoint label latitude is kept inside this band so the text does not
/// land on the stretched polar areas.
pub const MIDPOINT_LAT_MIN: f64 = -64.0;
pub const MIDPOINT_LAT_MAX: f64 = 55.0;
/// Short routes get their distance label nudged north off the line.
pub const SHORT_ROUTE_KM: f64 = 1000.0;
pub const SHORT_ROUTE_LAT_SHIFT: f64 = 3.0;

pub const MEDIUM_ROUTE_KM: f64 = 3000.0;
pub const LONG_ROUTE_KM: f64 = 5000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub label: String,
    pub color: String,
    #[serde(rename = "alt")]
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathProperties {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPath {
    /// `[lat, lng]` pairs in route order.
    pub coords: Vec<[f64; 2]>,
    pub properties: PathProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLabel {
    pub lat: f64,
    pub lng: f64,
    pub text: String,
    pub size: f64,
    pub radius: f64,
    pub dot: bool,
    pub color: String,
    pub alt: f64,
}

/// What the camera needs to frame a drawn route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteFocus {
    pub midpoint: GeoPoint,
    pub km: f64,
}

/// Everything drawn for one route. Either all fields are empty or all were
/// built from the same `RouteResult`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Primitives {
    pub arcs: Vec<GeoArc>,
    pub paths: Vec<GeoPath>,
    pub labels: Vec<GeoLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<RouteFocus>,
}

impl Primitives {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Endpoint and midpoint label size for a route length.
pub fn label_size(km: f64) -> f64 {
    if km > LONG_ROUTE_KM {
        3.0
    } else if km > MEDIUM_ROUTE_KM {
        2.0
    } else {
        0.75
    }
}

pub fn midpoint_label_altitude(km: f64) -> f64 {
    if km > LONG_ROUTE_KM {
        0.2
    } else if km > MEDIUM_ROUTE_KM {
        0.03
    } else {
        0.0
    }
}

pub fn midpoint_label_lat(raw_lat: f64, km: f64) -> f64 {
    if km < SHORT_ROUTE_KM {
        (raw_lat + SHORT_ROUTE_LAT_SHIFT).min(90.0)
    } else {
        raw_lat.clamp(MIDPOINT_LAT_MIN, MIDPOINT_LAT_MAX)
    }
}

pub fn distance_text(route: &RouteResult) -> String {
    let km = route.distances.km();
    let base = format!("{:.0} km / {:.0} nm", km.round(), route.distances.nm().round());
    if km > MEDIUM_ROUTE_KM {
        format!(
            "{} \n from {} to {}",
            base, route.route.departure, route.route.destination
        )
    } else {
        base
    }
}

/// Hover text shared by the arcs and the path.
pub fn route_label(route: &RouteResult, airports: &[Airport]) -> String {
    let dep = find_airport(airports, &route.route.departure);
    let dst = find_airport(airports, &route.route.destination);
    match (dep, dst) {
        (Some(dep), Some(dst)) => format!(
            "from ({}) {}, {} to ({}) {}, {}",
            dep.iata, dep.city, dep.country, dst.iata, dst.city, dst.country
        ),
        _ => format!("{} --> {}", route.route.departure, route.route.destination),
    }
}

/// Builds the primitives for `route`. Anything that cannot be drawn (no
/// route, fewer than two points, an endpoint not selected, a route for other
/// airports than the ones selected) gives the empty set.
pub fn transform(
    route: Option<&RouteResult>,
    selection: &Selection,
    airports: &[Airport],
    colors: &mut dyn ColorSource,
) -> Primitives {
    let Some(route) = route else {
        return Primitives::default();
    };
    let Some(points) = route.drawable_path() else {
        log::debug!(
            "Route {} -> {} has no drawable path",
            route.route.departure,
            route.route.destination
        );
        return Primitives::default();
    };
    if !selection.matches(&route.route) {
        log::debug!(
            "Route {} -> {} does not match the current selection",
            route.route.departure,
            route.route.destination
        );
        return Primitives::default();
    }

    let label = route_label(route, airports);
    let km = route.distances.km();

    let cycle = PaletteCycle::starting_at(colors.pick(PALETTE.len()));
    let arcs: Vec<GeoArc> = points
        .windows(2)
        .zip(cycle)
        .map(|(pair, color)| GeoArc {
            start_lat: pair[0].lat,
            start_lng: pair[0].lng,
            end_lat: pair[1].lat,
            end_lng: pair[1].lng,
            label: label.clone(),
            color: color.to_string(),
            altitude: 0.0,
        })
        .collect();

    let path = GeoPath {
        coords: points.iter().map(|p| [p.lat, p.lng]).collect(),
        properties: PathProperties {
            label,
            color: PALETTE[colors.pick(PALETTE.len())].to_string(),
        },
    };

    let size = label_size(km);
    let endpoint = |point: &GeoPoint, code: &str| GeoLabel {
        lat: point.lat,
        lng: point.lng,
        text: code.to_string(),
        size,
        radius: LABEL_DOT_RADIUS,
        dot: true,
        color: LABEL_COLOR.to_string(),
        alt: 0.0,
    };
    let first = &points[0];
    let last = &points[points.len() - 1];

    let labels = vec![
        endpoint(first, &route.route.departure),
        endpoint(last, &route.route.destination),
        GeoLabel {
            lat: midpoint_label_lat(route.midpoint.lat, km),
            lng: route.midpoint.lng,
            text: distance_text(route),
            size,
            radius: LABEL_DOT_RADIUS,
            dot: false,
            color: LABEL_COLOR.to_string(),
            alt: midpoint_label_altitude(km),
        },
    ];

    log::debug!(
        "Built {} arcs and {} labels for {} -> {} ({:.0} km)",
        arcs.len(),
        labels.len(),
        route.route.departure,
        route.route.destination,
        km
    );

    Primitives {
        arcs,
        paths: vec![path],
        labels,
        focus: Some(RouteFocus {
            midpoint: route.midpoint,
            km,
        }),
    }
}
