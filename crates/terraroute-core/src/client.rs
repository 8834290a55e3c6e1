// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use crate::config::Config;
use crate::models::{Airport, Country, RouteRequest, RouteResult};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const API_PREFIX: &str = "/api/v1";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

/// The backend the globe pulls its reference data and routes from.
pub trait RouteService {
    fn airports(&self) -> Result<Vec<Airport>, ServiceError>;
    fn countries(&self) -> Result<Vec<Country>, ServiceError>;
    fn route(&self, request: &RouteRequest) -> Result<RouteResult, ServiceError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pulls the message out of a `{"error": "..."}` body, or returns the body as is.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

pub struct HttpRouteService {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRouteService {
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, resource)
    }

    fn read<T: DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Backend {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(response.json::<T>()?)
    }

    fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ServiceError> {
        let url = self.endpoint(resource);
        debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        self.read(response)
    }
}

impl RouteService for HttpRouteService {
    fn airports(&self) -> Result<Vec<Airport>, ServiceError> {
        let airports: Vec<Airport> = self.get("airports")?;
        info!("Loaded {} airports", airports.len());
        Ok(airports)
    }

    fn countries(&self) -> Result<Vec<Country>, ServiceError> {
        let countries: Vec<Country> = self.get("countries")?;
        info!("Loaded {} countries", countries.len());
        Ok(countries)
    }

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, ServiceError> {
        let url = self.endpoint("routes");
        info!(
            "Requesting route {} -> {} (excluding {} countries)",
            request.departure,
            request.destination,
            request.borders.len()
        );
        let response = self.client.post(&url).json(request).send()?;
        self.read(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"error":"departure airport not found: XXX"}"#),
            "departure airport not found: XXX"
        );
    }

    #[test]
    fn test_error_message_plain_body() {
        assert_eq!(error_message("  bad gateway\n"), "bad gateway");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = Config {
            api_base_url: "http://192.168.0.178:8080/".to_string(),
            ..Config::default()
        };
        let service = HttpRouteService::new(&config).unwrap();
        assert_eq!(
            service.endpoint("routes"),
            "http://192.168.0.178:8080/api/v1/routes"
        );
    }
}
