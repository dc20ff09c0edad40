//! Match a user-typed token to a station.
//!
//! The match is a single greedy pass: a station is a candidate when its id,
//! or its display name ignoring case, contains the lowercased token. Among
//! candidates the one with the smallest `len(id) - len(token)` wins, and on
//! equal scores the first one in catalog order is kept. This is not an edit
//! distance; `"sa"` against `santa_cruz` and `saracuruna` picks whichever the
//! catalog lists first.

use crate::domain::{Station, StationCatalog};

/// Score of a candidate: how many characters its id has beyond the token.
///
/// Name matches are scored by id length too, so this can be negative when a
/// long token matched a display name but the id is short.
fn closeness(station: &Station, token: &str) -> i64 {
    let id_len = i64::try_from(station.id.len()).unwrap_or(i64::MAX);
    let token_len = i64::try_from(token.len()).unwrap_or(i64::MAX);
    id_len - token_len
}

fn is_candidate(station: &Station, token: &str) -> bool {
    station.id.contains(token) || station.name.to_lowercase().contains(token)
}

/// Find the station that best matches `token`.
///
/// Returns `None` when no id or name contains the token.
///
/// # Examples
///
/// ```
/// use via_planner::domain::{Station, StationCatalog};
/// use via_planner::stations::best_match;
///
/// let catalog = StationCatalog::new(vec![
///     Station::new("santa_cruz", "Santa Cruz"),
///     Station::new("central", "Central do Brasil"),
/// ]);
///
/// assert_eq!(best_match("Cruz", &catalog).unwrap().id, "santa_cruz");
/// assert_eq!(best_match("central", &catalog).unwrap().id, "central");
/// assert!(best_match("niteroi", &catalog).is_none());
/// ```
pub fn best_match<'a>(token: &str, catalog: &'a StationCatalog) -> Option<&'a Station> {
    let token = token.to_lowercase();
    let mut best: Option<(&Station, i64)> = None;

    for station in catalog {
        if !is_candidate(station, &token) {
            continue;
        }
        let score = closeness(station, &token);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((station, score)),
        }
    }

    best.map(|(station, _)| station)
}
