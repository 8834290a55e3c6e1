// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use terraroute_core::models::Airport;
use terraroute_core::selection::{candidates, Endpoint, Selection};

fn airport(iata: &str) -> Airport {
    Airport {
        iata: iata.to_string(),
        name: format!("{} Airport", iata),
        city: format!("{} City", iata),
        country: "Testland".to_string(),
        continent: "EU".to_string(),
        latitude: 0.0,
        longitude: 0.0,
    }
}

fn world() -> Vec<Airport> {
    ["LHR", "JFK", "CDG", "AMS", "SYD", "HND", "DXB", "FRA"]
        .iter()
        .map(|c| airport(c))
        .collect()
}

fn codes(airports: &[Airport], other: Option<&Airport>) -> Vec<String> {
    candidates(airports, other)
        .into_iter()
        .map(|o| o.airport.iata)
        .collect()
}

#[test]
fn test_candidates_exclude_other_and_sort() {
    let airports = world();
    for chosen in &airports {
        let got = codes(&airports, Some(chosen));

        let mut expected: Vec<String> = airports
            .iter()
            .filter(|a| a.iata != chosen.iata)
            .map(|a| a.iata.clone())
            .collect();
        expected.sort();

        assert_eq!(got, expected, "other endpoint {}", chosen.iata);
    }
}

#[test]
fn test_candidates_full_list_when_other_unset() {
    let airports = world();
    let got = codes(&airports, None);
    assert_eq!(got.len(), airports.len());
    assert!(got.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_destination_lhr_hidden_from_departure_picker() {
    let airports = world();
    let mut selection = Selection::new();
    selection.set(Endpoint::Destination, Some(airport("LHR")));

    let departure = selection.options(Endpoint::Departure, &airports);
    assert!(departure.iter().all(|o| o.airport.iata != "LHR"));
    assert_eq!(departure.len(), airports.len() - 1);

    // The destination picker itself still lists everything.
    let destination = selection.options(Endpoint::Destination, &airports);
    assert_eq!(destination.len(), airports.len());
}

#[test]
fn test_constraint_is_symmetric() {
    let airports = world();
    let mut selection = Selection::new();
    selection.set(Endpoint::Departure, Some(airport("SYD")));

    let destination = selection.options(Endpoint::Destination, &airports);
    assert!(destination.iter().all(|o| o.airport.iata != "SYD"));

    selection.set(Endpoint::Departure, None);
    let destination = selection.options(Endpoint::Destination, &airports);
    assert!(destination.iter().any(|o| o.airport.iata == "SYD"));
}

#[test]
fn test_empty_airport_list() {
    assert!(candidates(&[], Some(&airport("LHR"))).is_empty());
    assert!(candidates(&[], None).is_empty());
}
