use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four meal occasions in a day, in planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Slots in the order the daily planner fills them.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary category. Used both to classify a meal and as a user's preference.
///
/// As a preference the variants form an acceptance order: `Veg` admits only veg
/// meals, `Egg` admits veg and egg meals, `NonVeg` admits everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Veg,
    #[serde(alias = "egg-ok")]
    #[value(alias = "egg-ok")]
    Egg,
    NonVeg,
}

impl Diet {
    /// Whether a user with this preference may be served a meal of class `meal_diet`.
    pub fn admits(self, meal_diet: Diet) -> bool {
        match self {
            Diet::NonVeg => true,
            Diet::Egg => meal_diet != Diet::NonVeg,
            Diet::Veg => meal_diet == Diet::Veg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    NoCook,
    Easy,
    Medium,
    Hard,
}

/// A catalog entry. Immutable once loaded; plans hold shared references to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    pub slot: MealSlot,
    pub diet: Diet,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// In INR
    pub cost_per_serving: f64,
    pub difficulty: Difficulty,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    #[serde(default)]
    pub portion: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veg_preference_admits_only_veg() {
        assert!(Diet::Veg.admits(Diet::Veg));
        assert!(!Diet::Veg.admits(Diet::Egg));
        assert!(!Diet::Veg.admits(Diet::NonVeg));
    }

    #[test]
    fn test_egg_preference_excludes_non_veg() {
        assert!(Diet::Egg.admits(Diet::Veg));
        assert!(Diet::Egg.admits(Diet::Egg));
        assert!(!Diet::Egg.admits(Diet::NonVeg));
    }

    #[test]
    fn test_non_veg_preference_admits_everything() {
        for diet in [Diet::Veg, Diet::Egg, Diet::NonVeg] {
            assert!(Diet::NonVeg.admits(diet));
        }
    }

    #[test]
    fn test_diet_accepts_egg_ok_spelling() {
        let diet: Diet = serde_json::from_str("\"egg-ok\"").unwrap();
        assert_eq!(diet, Diet::Egg);
        let diet: Diet = serde_json::from_str("\"non-veg\"").unwrap();
        assert_eq!(diet, Diet::NonVeg);
    }

    #[test]
    fn test_difficulty_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Difficulty::NoCook).unwrap(), "\"no-cook\"");
    }
}
