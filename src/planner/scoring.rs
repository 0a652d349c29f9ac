use serde::{Deserialize, Serialize};

use crate::catalog::{MealRecord, MealSlot};

/// Share of the remaining daily calories a main meal aims for.
pub const MAIN_MEAL_CALORIE_SHARE: f64 = 0.3;
/// Share of the remaining daily calories a snack aims for.
pub const SNACK_CALORIE_SHARE: f64 = 0.1;

/// Weights of the desirability score. Tunable, not derived from anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub protein: f64,
    pub budget_headroom: f64,
    pub calorie_mismatch: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            protein: 2.0,
            budget_headroom: 0.5,
            calorie_mismatch: 0.1,
        }
    }
}

/// Calorie target for one slot, taken from what is left of the day at selection time.
///
/// Each main meal takes 30% of the *remaining* allowance, so the targets compound
/// rather than summing to the daily figure.
pub fn slot_calorie_target(slot: MealSlot, remaining_calories: f64) -> f64 {
    match slot {
        MealSlot::Snack => remaining_calories * SNACK_CALORIE_SHARE,
        MealSlot::Breakfast | MealSlot::Lunch | MealSlot::Dinner => {
            remaining_calories * MAIN_MEAL_CALORIE_SHARE
        }
    }
}

/// Desirability of `candidate`: rewards protein and budget headroom, penalises
/// distance from the slot's calorie target.
pub fn score_meal(
    candidate: &MealRecord,
    remaining_budget: f64,
    target_calories_for_slot: f64,
    weights: &ScoringWeights,
) -> f64 {
    let calorie_diff = (f64::from(candidate.calories) - target_calories_for_slot).abs();
    weights.protein * candidate.protein
        + weights.budget_headroom * (remaining_budget - candidate.cost_per_serving)
        - weights.calorie_mismatch * calorie_diff
}
