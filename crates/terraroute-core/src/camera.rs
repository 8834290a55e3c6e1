// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use crate::models::GeoPoint;
use crate::transform::Primitives;
use serde::{Deserialize, Serialize};

/// Where the globe rests when no route is shown.
pub const DEFAULT_VIEW: GeoPoint = GeoPoint { lat: 40.0, lng: 0.0 };

/// Viewports wider than this get the tighter framing.
pub const WIDE_VIEWPORT_PX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTarget {
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthTier {
    Wide,
    Narrow,
}

impl WidthTier {
    pub fn for_width(width: u32) -> Self {
        if width > WIDE_VIEWPORT_PX {
            WidthTier::Wide
        } else {
            WidthTier::Narrow
        }
    }

    fn row(self) -> usize {
        match self {
            WidthTier::Wide => 0,
            WidthTier::Narrow => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    NoRoute,
    /// Up to 1024 km.
    Short,
    /// Up to 3000 km.
    Medium,
    Long,
}

impl DistanceTier {
    pub fn for_km(km: f64) -> Self {
        if km > 3000.0 {
            DistanceTier::Long
        } else if km > 1024.0 {
            DistanceTier::Medium
        } else {
            DistanceTier::Short
        }
    }

    fn column(self) -> usize {
        match self {
            DistanceTier::NoRoute => 0,
            DistanceTier::Short => 1,
            DistanceTier::Medium => 2,
            DistanceTier::Long => 3,
        }
    }
}

/// Camera altitude, rows by width tier, columns by distance tier.
const ALTITUDE_TABLE: [[f64; 4]; 2] = [
    // NoRoute, Short, Medium, Long
    [2.0, 1.0, 1.7, 2.0], // wide
    [3.0, 1.0, 1.5, 3.0], // narrow
];

pub fn altitude(width: WidthTier, distance: DistanceTier) -> f64 {
    ALTITUDE_TABLE[width.row()][distance.column()]
}

/// Camera target for the current primitives and viewport width.
pub fn plan(primitives: &Primitives, viewport_width: u32) -> CameraTarget {
    let width = WidthTier::for_width(viewport_width);
    match primitives.focus {
        Some(focus) if !primitives.is_empty() => CameraTarget {
            lat: focus.midpoint.lat,
            lng: focus.midpoint.lng,
            altitude: altitude(width, DistanceTier::for_km(focus.km)),
        },
        _ => CameraTarget {
            lat: DEFAULT_VIEW.lat,
            lng: DEFAULT_VIEW.lng,
            altitude: altitude(width, DistanceTier::NoRoute),
        },
    }
}
