// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use crate::models::{Airport, Country, RouteRequest};
use serde::Serialize;

/// An entry in one of the airport pickers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportOption {
    pub label: String,
    #[serde(flatten)]
    pub airport: Airport,
}

impl AirportOption {
    pub fn new(airport: &Airport) -> Self {
        Self {
            label: airport_label(airport),
            airport: airport.clone(),
        }
    }
}

/// `"<IATA> | <name>"`, followed by the city unless the name already mentions it.
pub fn airport_label(airport: &Airport) -> String {
    let name_lower = airport.name.to_lowercase();
    if name_lower.contains(&airport.city.to_lowercase()) {
        format!("{} | {}", airport.iata, airport.name)
    } else {
        format!("{} | {} {}", airport.iata, airport.name, airport.city)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryOption {
    pub label: String,
    #[serde(flatten)]
    pub country: Country,
}

pub fn country_options(countries: &[Country]) -> Vec<CountryOption> {
    countries
        .iter()
        .map(|c| CountryOption {
            label: c.name.clone(),
            country: c.clone(),
        })
        .collect()
}

/// Candidates for one picker: every airport except the one chosen in the
/// other picker, ordered by IATA code.
pub fn candidates(airports: &[Airport], other: Option<&Airport>) -> Vec<AirportOption> {
    let mut options: Vec<AirportOption> = airports
        .iter()
        .filter(|a| other.map_or(true, |o| o.iata != a.iata))
        .map(AirportOption::new)
        .collect();
    options.sort_by(|a, b| a.airport.iata.cmp(&b.airport.iata));
    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Departure,
    Destination,
}

/// Picker state for one globe view.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    departure: Option<Airport>,
    destination: Option<Airport>,
    excluded: Vec<Country>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departure(&self) -> Option<&Airport> {
        self.departure.as_ref()
    }

    pub fn destination(&self) -> Option<&Airport> {
        self.destination.as_ref()
    }

    pub fn excluded_countries(&self) -> &[Country] {
        &self.excluded
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<&Airport> {
        match endpoint {
            Endpoint::Departure => self.departure.as_ref(),
            Endpoint::Destination => self.destination.as_ref(),
        }
    }

    fn other(&self, endpoint: Endpoint) -> Option<&Airport> {
        match endpoint {
            Endpoint::Departure => self.destination.as_ref(),
            Endpoint::Destination => self.departure.as_ref(),
        }
    }

    /// Options the picker for `endpoint` should offer.
    pub fn options(&self, endpoint: Endpoint, airports: &[Airport]) -> Vec<AirportOption> {
        candidates(airports, self.other(endpoint))
    }

    /// Sets or clears an endpoint. Returns false and leaves the selection
    /// untouched when the airport is already chosen for the other endpoint.
    pub fn set(&mut self, endpoint: Endpoint, airport: Option<Airport>) -> bool {
        if let (Some(new), Some(other)) = (airport.as_ref(), self.other(endpoint)) {
            if new.iata == other.iata {
                log::warn!(
                    "Rejected {:?} selection {}: already chosen for the other endpoint",
                    endpoint,
                    new.iata
                );
                return false;
            }
        }
        match endpoint {
            Endpoint::Departure => self.departure = airport,
            Endpoint::Destination => self.destination = airport,
        }
        true
    }

    pub fn set_excluded_countries(&mut self, countries: Vec<Country>) {
        let mut seen = std::collections::HashSet::new();
        self.excluded = countries
            .into_iter()
            .filter(|c| seen.insert(c.code.clone()))
            .collect();
    }

    pub fn is_complete(&self) -> bool {
        self.departure.is_some() && self.destination.is_some()
    }

    /// True when both endpoints are set and are the ones `request` asked for.
    pub fn matches(&self, request: &RouteRequest) -> bool {
        match (&self.departure, &self.destination) {
            (Some(dep), Some(dst)) => {
                dep.iata == request.departure && dst.iata == request.destination
            }
            _ => false,
        }
    }

    /// Builds the request for the routing service. Excluded countries are
    /// only sent when `forward_exclusions` is set.
    pub fn request(&self, forward_exclusions: bool) -> Option<RouteRequest> {
        let departure = self.departure.as_ref()?;
        let destination = self.destination.as_ref()?;
        let borders = if forward_exclusions {
            self.excluded.iter().map(|c| c.code.clone()).collect()
        } else {
            Vec::new()
        };
        Some(RouteRequest {
            departure: departure.iata.clone(),
            destination: destination.iata.clone(),
            borders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(iata: &str, name: &str, city: &str) -> Airport {
        Airport {
            iata: iata.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: "Nowhere".to_string(),
            continent: "NA".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn country(code: &str) -> Country {
        Country {
            code: code.to_string(),
            name: format!("Country {}", code),
            continent: "EU".to_string(),
            borders: None,
        }
    }

    #[test]
    fn test_label_omits_city_already_in_name() {
        let a = airport("LHR", "London Heathrow", "London");
        assert_eq!(airport_label(&a), "LHR | London Heathrow");

        let b = airport("JFK", "John F Kennedy Intl", "New York");
        assert_eq!(airport_label(&b), "JFK | John F Kennedy Intl New York");
    }

    #[test]
    fn test_candidates_sorted_without_other() {
        let airports = vec![
            airport("LHR", "Heathrow", "London"),
            airport("AMS", "Schiphol", "Amsterdam"),
            airport("JFK", "Kennedy", "New York"),
        ];

        let codes: Vec<_> = candidates(&airports, None)
            .into_iter()
            .map(|o| o.airport.iata)
            .collect();
        assert_eq!(codes, vec!["AMS", "JFK", "LHR"]);
    }

    #[test]
    fn test_set_rejects_same_airport_for_both_endpoints() {
        let lhr = airport("LHR", "Heathrow", "London");
        let mut selection = Selection::new();

        assert!(selection.set(Endpoint::Destination, Some(lhr.clone())));
        assert!(!selection.set(Endpoint::Departure, Some(lhr)));
        assert!(selection.departure().is_none());
        assert_eq!(selection.destination().map(|a| a.iata.as_str()), Some("LHR"));
    }

    #[test]
    fn test_request_requires_both_endpoints() {
        let mut selection = Selection::new();
        selection.set(Endpoint::Departure, Some(airport("JFK", "Kennedy", "New York")));
        assert!(selection.request(false).is_none());

        selection.set(Endpoint::Destination, Some(airport("LHR", "Heathrow", "London")));
        let req = selection.request(false).unwrap();
        assert_eq!(req.departure, "JFK");
        assert_eq!(req.destination, "LHR");
        assert!(req.borders.is_empty());
    }

    #[test]
    fn test_matches_compares_both_codes() {
        let mut selection = Selection::new();
        selection.set(Endpoint::Departure, Some(airport("JFK", "Kennedy", "New York")));
        let request = RouteRequest {
            departure: "JFK".to_string(),
            destination: "LHR".to_string(),
            borders: Vec::new(),
        };
        assert!(!selection.matches(&request));

        selection.set(Endpoint::Destination, Some(airport("CDG", "Charles de Gaulle", "Paris")));
        assert!(!selection.matches(&request));

        selection.set(Endpoint::Destination, Some(airport("LHR", "Heathrow", "London")));
        assert!(selection.matches(&request));
    }

    #[test]
    fn test_exclusions_forwarded_only_when_enabled() {
        let mut selection = Selection::new();
        selection.set(Endpoint::Departure, Some(airport("JFK", "Kennedy", "New York")));
        selection.set(Endpoint::Destination, Some(airport("LHR", "Heathrow", "London")));
        selection.set_excluded_countries(vec![country("IS"), country("IE"), country("IS")]);

        assert_eq!(selection.excluded_countries().len(), 2);
        assert!(selection.request(false).unwrap().borders.is_empty());
        assert_eq!(selection.request(true).unwrap().borders, vec!["IS", "IE"]);
    }

    #[test]
    fn test_country_options_use_name_as_label() {
        let opts = country_options(&[country("DE")]);
        assert_eq!(opts[0].label, "Country DE");
        assert_eq!(opts[0].country.code, "DE");
    }
}
