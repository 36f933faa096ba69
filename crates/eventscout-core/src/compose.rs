//! Query composition
//!
//! Pure mapping from the current filter state and optional coordinates to
//! the canonical `/events` parameter set. Nothing here touches the network
//! or the session; the composer can be exercised in isolation.

use crate::models::{Coordinates, FilterState};

/// Ordered request parameters for the event-search service
///
/// Omitted dimensions are entirely absent from the set — no empty strings,
/// no default markers. The service's own defaults govern absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(&'static str, String)>,
}

impl ParameterSet {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Parameters in composition order, ready for URL encoding
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Look up a parameter by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Compose the canonical parameter set from filter state and coordinates
///
/// Inclusion rules, in precedence order:
/// 1. `lat`/`lon` when coordinates are resolved (full precision)
/// 2. `city` when the trimmed query is non-empty
/// 3. `time` when the slot is not `All`; `date` only ever alongside such a
///    `time` — a date with the default slot is dropped, not sent bare
/// 4. `proximity_zone` when a zone is set
/// 5. `preferred_category` when not `All`
/// 6. `simulated_role` when not `standard`
///
/// Coordinates and city are independent: either, both, or neither may be
/// present.
pub fn compose(filters: &FilterState, coords: Option<&Coordinates>) -> ParameterSet {
    let mut params = ParameterSet::default();

    if let Some(coords) = coords {
        params.push("lat", coords.lat.to_string());
        params.push("lon", coords.lon.to_string());
    }

    let city = filters.city_trimmed();
    if !city.is_empty() {
        params.push("city", city);
    }

    if let Some(time) = filters.time_slot.param_value() {
        params.push("time", time);
        if let Some(date) = filters.date {
            params.push("date", date.format("%Y-%m-%d").to_string());
        }
    }

    if let Some(zone) = filters.zone {
        params.push("proximity_zone", zone.param_value());
    }

    if let Some(category) = filters.category.param_value() {
        params.push("preferred_category", category);
    }

    if let Some(role) = filters.role.param_value() {
        params.push("simulated_role", role);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessTier, Category, ProximityZone, TimeSlot};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_defaults_compose_to_empty_set() {
        let params = compose(&FilterState::default(), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_coordinates_and_city_are_not_exclusive() {
        let filters = FilterState { city: "Munich".to_string(), ..Default::default() };
        let coords = Coordinates::new(48.137, 11.576);

        let params = compose(&filters, Some(&coords));

        assert_eq!(params.get("lat"), Some("48.137"));
        assert_eq!(params.get("lon"), Some("11.576"));
        assert_eq!(params.get("city"), Some("Munich"));
    }

    #[test]
    fn test_coordinates_keep_full_precision() {
        let coords = Coordinates::new(48.137154, 11.576124);
        let params = compose(&FilterState::default(), Some(&coords));

        assert_eq!(params.get("lat"), Some("48.137154"));
        assert_eq!(params.get("lon"), Some("11.576124"));
    }

    #[test]
    fn test_city_is_trimmed() {
        let filters = FilterState { city: "  Munich  ".to_string(), ..Default::default() };
        let params = compose(&filters, None);
        assert_eq!(params.get("city"), Some("Munich"));
    }

    #[test]
    fn test_whitespace_city_is_omitted() {
        let filters = FilterState { city: "   ".to_string(), ..Default::default() };
        assert!(compose(&filters, None).is_empty());
    }

    #[test]
    fn test_date_is_dropped_when_time_slot_is_all() {
        let filters = FilterState {
            time_slot: TimeSlot::All,
            date: Some(date(2024, 5, 1)),
            ..Default::default()
        };

        let params = compose(&filters, None);

        assert!(!params.contains("time"));
        assert!(!params.contains("date"));
    }

    #[test]
    fn test_date_rides_on_explicit_time_slot() {
        let filters = FilterState {
            time_slot: TimeSlot::Evening,
            date: Some(date(2024, 5, 1)),
            ..Default::default()
        };

        let params = compose(&filters, None);

        assert_eq!(params.get("time"), Some("evening"));
        assert_eq!(params.get("date"), Some("2024-05-01"));
    }

    #[test]
    fn test_time_without_date_is_sent_alone() {
        let filters = FilterState { time_slot: TimeSlot::Morning, ..Default::default() };
        let params = compose(&filters, None);

        assert_eq!(params.get("time"), Some("morning"));
        assert!(!params.contains("date"));
    }

    #[test]
    fn test_non_default_dimensions_all_present() {
        let filters = FilterState {
            city: "Munich".to_string(),
            time_slot: TimeSlot::Afternoon,
            date: Some(date(2024, 5, 1)),
            zone: Some(ProximityZone::ZoneB),
            category: Category::FoodAndDrink,
            role: AccessTier::Premium,
        };

        let params = compose(&filters, Some(&Coordinates::new(48.137, 11.576)));

        assert_eq!(params.get("city"), Some("Munich"));
        assert_eq!(params.get("time"), Some("afternoon"));
        assert_eq!(params.get("date"), Some("2024-05-01"));
        assert_eq!(params.get("proximity_zone"), Some("Zone B"));
        assert_eq!(params.get("preferred_category"), Some("Food & Drink"));
        assert_eq!(params.get("simulated_role"), Some("premium"));
        assert_eq!(params.len(), 8);
    }

    #[test]
    fn test_default_dimensions_are_absent_not_empty() {
        let filters = FilterState { city: "Munich".to_string(), ..Default::default() };
        let params = compose(&filters, None);

        assert_eq!(params.len(), 1);
        for key in ["time", "date", "proximity_zone", "preferred_category", "simulated_role"] {
            assert!(!params.contains(key), "{key} should be absent");
        }
    }

    fn arb_time_slot() -> impl Strategy<Value = TimeSlot> {
        prop_oneof![
            Just(TimeSlot::All),
            Just(TimeSlot::Morning),
            Just(TimeSlot::Afternoon),
            Just(TimeSlot::Evening),
        ]
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        (
            "[ a-zA-Z]{0,12}",
            arb_time_slot(),
            proptest::option::of(0u32..365),
            proptest::option::of(prop_oneof![Just(ProximityZone::ZoneA), Just(ProximityZone::ZoneB)]),
            prop_oneof![
                Just(Category::All),
                Just(Category::Music),
                Just(Category::Sports),
                Just(Category::FoodAndDrink),
            ],
            prop_oneof![Just(AccessTier::Standard), Just(AccessTier::Premium)],
        )
            .prop_map(|(city, time_slot, day, zone, category, role)| FilterState {
                city,
                time_slot,
                date: day.map(|d| date(2024, 1, 1) + chrono::Days::new(u64::from(d))),
                zone,
                category,
                role,
            })
    }

    proptest! {
        #[test]
        fn prop_date_never_sent_without_time(filters in arb_filters()) {
            let params = compose(&filters, None);
            if params.contains("date") {
                prop_assert!(params.contains("time"));
                prop_assert_ne!(filters.time_slot, TimeSlot::All);
            }
        }

        #[test]
        fn prop_no_empty_values_ever(filters in arb_filters()) {
            let params = compose(&filters, None);
            for (key, value) in params.pairs() {
                prop_assert!(!value.is_empty(), "{} composed empty", key);
            }
        }

        #[test]
        fn prop_defaults_never_on_the_wire(filters in arb_filters()) {
            let params = compose(&filters, None);
            prop_assert_ne!(params.get("time"), Some("all"));
            prop_assert_ne!(params.get("preferred_category"), Some("All"));
            prop_assert_ne!(params.get("simulated_role"), Some("standard"));
        }
    }
}
