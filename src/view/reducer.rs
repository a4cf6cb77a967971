//! Update Reducer
//!
//! The sync controller: a pure function from (current selection, trigger,
//! relayout payload, prior viewport) to the next shared viewport. Exactly one
//! trigger is authoritative per update; both map panes render at the
//! resulting viewport, which keeps them in lockstep.

use serde::{Deserialize, Serialize};

use super::viewport::{Relayout, Viewport};
use crate::data::state_fips_for_name;

/// Which map pane produced an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPane {
    Map1,
    Map2,
}

/// The input that fired this update cycle. Absent on the initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateTrigger {
    StateChanged,
    IndexChanged,
    OutcomeChanged,
    Map1Interacted,
    Map2Interacted,
}

impl UpdateTrigger {
    /// The pane whose pan/zoom wins this cycle, if the trigger is a map
    /// interaction.
    pub fn interacted_pane(&self) -> Option<MapPane> {
        match self {
            UpdateTrigger::Map1Interacted => Some(MapPane::Map1),
            UpdateTrigger::Map2Interacted => Some(MapPane::Map2),
            _ => None,
        }
    }
}

/// Which counties are shown: the whole country or one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateFilter {
    AllUsa,
    State(String),
}

impl StateFilter {
    /// Resolve a dropdown value ("All USA" or a state name) to a filter.
    /// `None` for a name that is not a known state.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == crate::data::ALL_USA {
            return Some(StateFilter::AllUsa);
        }
        state_fips_for_name(name).map(|fips| StateFilter::State(fips.to_string()))
    }

    /// The 2-digit state FIPS this filter restricts to, if any.
    pub fn fips(&self) -> Option<&str> {
        match self {
            StateFilter::AllUsa => None,
            StateFilter::State(fips) => Some(fips),
        }
    }

    /// The viewport this filter resets to on a state change.
    pub fn default_viewport(&self) -> Viewport {
        match self {
            StateFilter::AllUsa => Viewport::national(),
            StateFilter::State(fips) => Viewport::for_state(fips),
        }
    }
}

/// Derive the next shared viewport for one update cycle.
///
/// - a state change resets to the filter's default viewport
/// - a metric change keeps the prior viewport untouched
/// - a map interaction overlays its relayout fields onto the prior viewport
///   (last writer wins; missing fields stay as they were)
/// - with no trigger (initial load) the filter's default viewport is used
///
/// A missing prior viewport falls back to the filter's default.
pub fn reduce(
    filter: &StateFilter,
    trigger: Option<UpdateTrigger>,
    relayout: Option<&Relayout>,
    prior: Option<Viewport>,
) -> Viewport {
    let base = filter.default_viewport();

    match trigger {
        None | Some(UpdateTrigger::StateChanged) => base,
        Some(UpdateTrigger::IndexChanged) | Some(UpdateTrigger::OutcomeChanged) => {
            prior.unwrap_or(base)
        }
        Some(UpdateTrigger::Map1Interacted) | Some(UpdateTrigger::Map2Interacted) => {
            let prior = prior.unwrap_or(base);
            match relayout {
                Some(relayout) => prior.apply(relayout),
                None => prior,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GeoPoint;
    use crate::view::viewport::{NATIONAL_ZOOM, STATE_ZOOM};

    fn panned() -> Viewport {
        Viewport {
            center: GeoPoint { lat: 41.5, lon: -81.7 },
            zoom: 6.2,
        }
    }

    #[test]
    fn test_all_usa_resets_to_national_default() {
        let next = reduce(
            &StateFilter::AllUsa,
            Some(UpdateTrigger::StateChanged),
            None,
            Some(panned()),
        );
        assert_eq!(next, Viewport::national());
        assert_eq!(next.zoom, NATIONAL_ZOOM);
    }

    #[test]
    fn test_state_selection_resets_to_state_center() {
        let filter = StateFilter::from_name("Ohio").unwrap();
        assert_eq!(filter.fips(), Some("39"));

        let next = reduce(&filter, Some(UpdateTrigger::StateChanged), None, Some(panned()));
        assert_eq!(next.center, GeoPoint { lat: 40.2521, lon: -83.6197 });
        assert_eq!(next.zoom, STATE_ZOOM);
    }

    #[test]
    fn test_metric_change_keeps_prior_viewport() {
        let filter = StateFilter::from_name("Ohio").unwrap();
        let prior = panned();

        for trigger in [UpdateTrigger::IndexChanged, UpdateTrigger::OutcomeChanged] {
            let next = reduce(&filter, Some(trigger), None, Some(prior));
            assert_eq!(next, prior);
        }
    }

    #[test]
    fn test_map_interaction_wins_over_filter_default() {
        let filter = StateFilter::from_name("Ohio").unwrap();
        let relayout = Relayout {
            center: Some(GeoPoint { lat: 39.1, lon: -84.5 }),
            zoom: Some(7.0),
        };

        // Both panes produce the same shared viewport
        for trigger in [UpdateTrigger::Map1Interacted, UpdateTrigger::Map2Interacted] {
            let next = reduce(&filter, Some(trigger), Some(&relayout), Some(panned()));
            assert_eq!(next.center, GeoPoint { lat: 39.1, lon: -84.5 });
            assert_eq!(next.zoom, 7.0);
        }
    }

    #[test]
    fn test_map_interaction_partial_fields() {
        let prior = panned();
        let relayout = Relayout {
            center: None,
            zoom: Some(8.0),
        };

        let next = reduce(
            &StateFilter::AllUsa,
            Some(UpdateTrigger::Map1Interacted),
            Some(&relayout),
            Some(prior),
        );
        assert_eq!(next.center, prior.center);
        assert_eq!(next.zoom, 8.0);
    }

    #[test]
    fn test_map_interaction_without_payload_keeps_prior() {
        let prior = panned();
        let next = reduce(
            &StateFilter::AllUsa,
            Some(UpdateTrigger::Map2Interacted),
            None,
            Some(prior),
        );
        assert_eq!(next, prior);
    }

    #[test]
    fn test_initial_load_uses_default_viewport() {
        let next = reduce(&StateFilter::AllUsa, None, None, None);
        assert_eq!(next, Viewport::national());

        let filter = StateFilter::from_name("Alaska").unwrap();
        let next = reduce(&filter, None, None, None);
        assert_eq!(next, Viewport::for_state("02"));
    }

    #[test]
    fn test_unknown_state_name() {
        assert_eq!(StateFilter::from_name("Atlantis"), None);
        assert_eq!(
            StateFilter::from_name("All USA"),
            Some(StateFilter::AllUsa)
        );
    }

    #[test]
    fn test_trigger_wire_format() {
        let json = serde_json::to_string(&UpdateTrigger::Map1Interacted).unwrap();
        assert_eq!(json, "\"map1_interacted\"");

        let trigger: UpdateTrigger = serde_json::from_str("\"state_changed\"").unwrap();
        assert_eq!(trigger, UpdateTrigger::StateChanged);
    }
}
