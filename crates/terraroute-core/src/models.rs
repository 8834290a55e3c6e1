// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub continent: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Looks an airport up by IATA code. Linear, the list is loaded once and
/// only consulted when a new route arrives.
pub fn find_airport<'a>(airports: &'a [Airport], iata: &str) -> Option<&'a Airport> {
    airports.iter().find(|a| a.iata == iata)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent: String,
    /// Closed point loops outlining the country, when the backend ships them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<Vec<GeoPoint>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub departure: String,
    pub destination: String,
    #[serde(default)]
    pub borders: Vec<String>,
}

/// Distances keyed by unit (`km`, `nm`, `miles`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distances(pub HashMap<String, f64>);

impl Distances {
    pub fn new(km: f64, nm: f64) -> Self {
        let mut units = HashMap::new();
        units.insert("km".to_string(), km);
        units.insert("nm".to_string(), nm);
        Self(units)
    }

    pub fn get(&self, unit: &str) -> Option<f64> {
        self.0.get(unit).copied()
    }

    pub fn km(&self) -> f64 {
        self.get("km").unwrap_or(0.0)
    }

    pub fn nm(&self) -> f64 {
        self.get("nm").unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub route: RouteRequest,
    #[serde(default)]
    pub distances: Distances,
    #[serde(default)]
    pub path: Option<Vec<GeoPoint>>,
    pub midpoint: GeoPoint,
}

impl RouteResult {
    /// The path, if it has enough points to draw anything.
    pub fn drawable_path(&self) -> Option<&[GeoPoint]> {
        match self.path.as_deref() {
            Some(points) if points.len() >= 2 => Some(points),
            _ => None,
        }
    }
}
