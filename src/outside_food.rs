use serde::Serialize;

use crate::error::PresetError;
use crate::plan::OutsideFoodEntry;

/// A common restaurant or street food offered for one-tap logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutsideFoodPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl OutsideFoodPreset {
    pub fn to_entry(&self) -> OutsideFoodEntry {
        OutsideFoodEntry {
            name: self.name.to_string(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

const fn preset(
    id: &'static str,
    name: &'static str,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> OutsideFoodPreset {
    OutsideFoodPreset {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
    }
}

pub const OUTSIDE_FOOD_PRESETS: &[OutsideFoodPreset] = &[
    preset("of-1", "Samosa (2 pcs)", 300, 6.0, 35.0, 16.0),
    preset("of-2", "Vada Pav", 350, 8.0, 45.0, 16.0),
    preset("of-3", "Pizza Slice", 280, 12.0, 35.0, 12.0),
    preset("of-4", "Burger", 450, 18.0, 40.0, 24.0),
    preset("of-5", "Pav Bhaji", 400, 10.0, 55.0, 16.0),
    preset("of-6", "Dosa (Restaurant)", 380, 9.0, 60.0, 12.0),
    preset("of-7", "Thali (Full)", 800, 22.0, 120.0, 28.0),
    preset("of-8", "Biryani (Restaurant)", 650, 20.0, 85.0, 25.0),
    preset("of-9", "Momos (6 pcs)", 350, 12.0, 45.0, 14.0),
    preset("of-10", "Frankie Roll", 320, 10.0, 40.0, 14.0),
    preset("of-11", "Cold Coffee", 200, 4.0, 32.0, 6.0),
    preset("of-12", "Chai + Biscuits", 150, 3.0, 25.0, 5.0),
];

/// Case-insensitive substring search over the presets. An empty query matches all.
pub fn search_presets(query: &str) -> Vec<&'static OutsideFoodPreset> {
    let needle = query.trim().to_lowercase();
    OUTSIDE_FOOD_PRESETS
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Resolves a quick-log query to exactly one preset.
///
/// An exact id or name (ignoring case) wins outright; otherwise the query must be
/// a substring of a single preset name.
pub fn find_preset(query: &str) -> Result<&'static OutsideFoodPreset, PresetError> {
    let needle = query.trim().to_lowercase();
    if let Some(exact) = OUTSIDE_FOOD_PRESETS
        .iter()
        .find(|p| p.id == needle || p.name.to_lowercase() == needle)
    {
        return Ok(exact);
    }

    match search_presets(query).as_slice() {
        [] => Err(PresetError::NoMatch(query.to_string())),
        [only] => Ok(*only),
        several => Err(PresetError::Ambiguous {
            query: query.to_string(),
            candidates: several.iter().map(|p| p.name.to_string()).collect(),
        }),
    }
}

/// Builds an entry for a food only known by its calories.
///
/// Macros are a rough 10/50/40 protein/carb/fat energy split, rounded to whole grams.
pub fn estimate_custom_entry(name: &str, calories: u32) -> OutsideFoodEntry {
    let kcal = f64::from(calories);
    OutsideFoodEntry {
        name: name.trim().to_string(),
        calories,
        protein: (kcal * 0.1 / 4.0).round(),
        carbs: (kcal * 0.5 / 4.0).round(),
        fat: (kcal * 0.4 / 9.0).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_presets("DOSA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "of-6");
    }

    #[test]
    fn test_empty_search_returns_everything() {
        assert_eq!(search_presets("").len(), OUTSIDE_FOOD_PRESETS.len());
    }

    #[test]
    fn test_preset_to_entry_copies_macros() {
        let thali = search_presets("thali")[0].to_entry();
        assert_eq!(thali.calories, 800);
        assert_eq!(thali.protein, 22.0);
        assert_eq!(thali.fat, 28.0);
    }

    #[test]
    fn test_find_preset_by_unique_fragment_id_or_name() {
        assert_eq!(find_preset("thali").map(|p| p.id), Ok("of-7"));
        assert_eq!(find_preset("OF-3").map(|p| p.id), Ok("of-3"));
        assert_eq!(find_preset(" cold coffee ").map(|p| p.id), Ok("of-11"));
    }

    #[test]
    fn test_find_preset_rejects_ambiguous_query() {
        match find_preset("a") {
            Err(PresetError::Ambiguous { candidates, .. }) => {
                assert!(candidates.len() > 1);
                assert!(candidates.contains(&"Samosa (2 pcs)".to_string()));
                assert!(candidates.contains(&"Pav Bhaji".to_string()));
            }
            other => panic!("expected an ambiguous match, got {:?}", other),
        }
    }

    #[test]
    fn test_find_preset_without_match() {
        assert_eq!(
            find_preset("kachori"),
            Err(PresetError::NoMatch("kachori".to_string()))
        );
    }

    #[test]
    fn test_custom_estimate() {
        let entry = estimate_custom_entry(" Kachori ", 500);
        assert_eq!(entry.name, "Kachori");
        assert_eq!(entry.protein, 13.0); // 12.5 rounds away from zero
        assert_eq!(entry.carbs, 63.0); // 62.5
        assert_eq!(entry.fat, 22.0); // 22.2
    }
}
