use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EventscoutError;

/// Coarse day partition used to filter events by time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// No time filtering; never sent on the wire
    #[default]
    All,
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Wire value for the `time` parameter, `None` for [`TimeSlot::All`]
    pub fn param_value(&self) -> Option<&'static str> {
        match self {
            TimeSlot::All => None,
            TimeSlot::Morning => Some("morning"),
            TimeSlot::Afternoon => Some("afternoon"),
            TimeSlot::Evening => Some("evening"),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = EventscoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TimeSlot::All),
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            _ => Err(EventscoutError::ConfigInvalid {
                key: "time".to_string(),
                reason: format!("Invalid time slot: {}. Use all, morning, afternoon, or evening", s),
            }),
        }
    }
}

/// Coarse, simulated indoor-location hint sent as a search filter
///
/// Distinct from GPS coordinates. "No zone" is modelled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityZone {
    ZoneA,
    ZoneB,
}

impl ProximityZone {
    /// Wire value for the `proximity_zone` parameter
    pub fn param_value(&self) -> &'static str {
        match self {
            ProximityZone::ZoneA => "Zone A",
            ProximityZone::ZoneB => "Zone B",
        }
    }
}

impl FromStr for ProximityZone {
    type Err = EventscoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "zone-a" | "zone a" => Ok(ProximityZone::ZoneA),
            "b" | "zone-b" | "zone b" => Ok(ProximityZone::ZoneB),
            _ => Err(EventscoutError::ConfigInvalid {
                key: "proximity_zone".to_string(),
                reason: format!("Invalid proximity zone: {}. Use zone-a or zone-b", s),
            }),
        }
    }
}

/// Fixed event category set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// No category filtering; never sent on the wire
    #[default]
    All,
    Music,
    Arts,
    Sports,
    Business,
    FoodAndDrink,
    Tech,
    Other,
}

impl Category {
    /// Wire value for the `preferred_category` parameter, `None` for
    /// [`Category::All`]
    pub fn param_value(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Music => Some("Music"),
            Category::Arts => Some("Arts"),
            Category::Sports => Some("Sports"),
            Category::Business => Some("Business"),
            Category::FoodAndDrink => Some("Food & Drink"),
            Category::Tech => Some("Tech"),
            Category::Other => Some("Other"),
        }
    }
}

impl FromStr for Category {
    type Err = EventscoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "music" => Ok(Category::Music),
            "arts" => Ok(Category::Arts),
            "sports" => Ok(Category::Sports),
            "business" => Ok(Category::Business),
            "food-and-drink" | "food & drink" | "food" => Ok(Category::FoodAndDrink),
            "tech" => Ok(Category::Tech),
            "other" => Ok(Category::Other),
            _ => Err(EventscoutError::ConfigInvalid {
                key: "preferred_category".to_string(),
                reason: format!(
                    "Invalid category: {}. Use all, music, arts, sports, business, food-and-drink, tech, or other",
                    s
                ),
            }),
        }
    }
}

/// Client-chosen access tier label used to exercise server-side gating
///
/// A request hint, not an authentication mechanism. The server decides what
/// to withhold; the client renders whatever comes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// Service default; never sent on the wire
    #[default]
    Standard,
    Premium,
}

impl AccessTier {
    /// Wire value for the `simulated_role` parameter, `None` for
    /// [`AccessTier::Standard`]
    pub fn param_value(&self) -> Option<&'static str> {
        match self {
            AccessTier::Standard => None,
            AccessTier::Premium => Some("premium"),
        }
    }
}

impl FromStr for AccessTier {
    type Err = EventscoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(AccessTier::Standard),
            "premium" => Ok(AccessTier::Premium),
            _ => Err(EventscoutError::ConfigInvalid {
                key: "simulated_role".to_string(),
                reason: format!("Invalid role: {}. Use standard or premium", s),
            }),
        }
    }
}

/// Current values of every independent search dimension
///
/// Fields never interact with each other; only the composer reads them
/// together. Editing the city is the one change with a side effect (it
/// retriggers the suggestion lookup), and the session layer owns that
/// trigger — everything else is a plain assignment.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-text city query, mutated on every edit; trimmed before use
    pub city: String,

    /// Time-of-day filter
    pub time_slot: TimeSlot,

    /// Calendar date filter. Only ever sent alongside an explicit,
    /// non-default time slot.
    pub date: Option<NaiveDate>,

    /// Simulated indoor-location hint
    pub zone: Option<ProximityZone>,

    /// Preferred event category
    pub category: Category,

    /// Simulated access tier
    pub role: AccessTier,
}

impl FilterState {
    /// The city query with surrounding whitespace removed
    pub fn city_trimmed(&self) -> &str {
        self.city.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_all_defaults() {
        let filters = FilterState::default();
        assert!(filters.city.is_empty());
        assert_eq!(filters.time_slot, TimeSlot::All);
        assert!(filters.date.is_none());
        assert!(filters.zone.is_none());
        assert_eq!(filters.category, Category::All);
        assert_eq!(filters.role, AccessTier::Standard);
    }

    #[test]
    fn test_defaults_have_no_wire_value() {
        assert_eq!(TimeSlot::All.param_value(), None);
        assert_eq!(Category::All.param_value(), None);
        assert_eq!(AccessTier::Standard.param_value(), None);
    }

    #[test]
    fn test_zone_wire_values() {
        assert_eq!(ProximityZone::ZoneA.param_value(), "Zone A");
        assert_eq!(ProximityZone::ZoneB.param_value(), "Zone B");
    }

    #[test]
    fn test_category_wire_value_keeps_ampersand() {
        assert_eq!(Category::FoodAndDrink.param_value(), Some("Food & Drink"));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("evening".parse::<TimeSlot>().unwrap(), TimeSlot::Evening);
        assert_eq!("zone-b".parse::<ProximityZone>().unwrap(), ProximityZone::ZoneB);
        assert_eq!("food-and-drink".parse::<Category>().unwrap(), Category::FoodAndDrink);
        assert_eq!("premium".parse::<AccessTier>().unwrap(), AccessTier::Premium);
        assert!("midnight".parse::<TimeSlot>().is_err());
    }
}
