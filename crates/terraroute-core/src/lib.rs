// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

pub mod camera;
pub mod client;
pub mod config;
pub mod models;
pub mod palette;
pub mod selection;
pub mod session;
pub mod transform;
pub mod viewport;

use std::path::PathBuf;

pub use camera::CameraTarget;
pub use client::{HttpRouteService, RouteService, ServiceError};
pub use config::{Config, ConfigManager};
pub use models::{Airport, Country, Distances, GeoPoint, RouteRequest, RouteResult};
pub use session::{Event, GlobeSession, GlobeView, Update};
pub use transform::Primitives;

/// Per-user config directory, e.g. `~/.config/terraroute` on Linux.
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("org", "terraroute", "Terraroute")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".terraroute"))
}
