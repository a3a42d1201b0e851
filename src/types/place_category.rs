use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    #[default]
    Restaurant,
    Fuel,
    Entertainment,
    Accommodation,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 4] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Fuel,
        PlaceCategory::Entertainment,
        PlaceCategory::Accommodation,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Fuel => "fuel",
            PlaceCategory::Entertainment => "entertainment",
            PlaceCategory::Accommodation => "accommodation",
        }
    }

    /// Category code understood by the places provider.
    pub fn provider_code(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "catering.restaurant",
            PlaceCategory::Fuel => "commercial.fuel",
            PlaceCategory::Entertainment => "entertainment",
            PlaceCategory::Accommodation => "accommodation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "Restaurant 🍴",
            PlaceCategory::Fuel => "Gas Station ⛽",
            PlaceCategory::Entertainment => "Entertainment 🎭",
            PlaceCategory::Accommodation => "Hotel 🏨",
        }
    }

    /// Last segment of the provider code, e.g. `restaurant` for `catering.restaurant`.
    pub fn noun(&self) -> &'static str {
        let code = self.provider_code();
        code.rsplit('.').next().unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes() {
        assert_eq!(PlaceCategory::Restaurant.provider_code(), "catering.restaurant");
        assert_eq!(PlaceCategory::Fuel.provider_code(), "commercial.fuel");
        assert_eq!(PlaceCategory::Entertainment.provider_code(), "entertainment");
        assert_eq!(PlaceCategory::Accommodation.provider_code(), "accommodation");
    }

    #[test]
    fn noun_is_last_code_segment() {
        assert_eq!(PlaceCategory::Restaurant.noun(), "restaurant");
        assert_eq!(PlaceCategory::Fuel.noun(), "fuel");
        assert_eq!(PlaceCategory::Accommodation.noun(), "accommodation");
    }

    #[test]
    fn deserializes_from_lowercase_id() {
        let category: PlaceCategory = serde_json::from_str("\"fuel\"").unwrap();
        assert_eq!(category, PlaceCategory::Fuel);
        assert_eq!(PlaceCategory::default(), PlaceCategory::Restaurant);
    }
}
