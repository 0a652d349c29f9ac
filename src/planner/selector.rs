use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::scoring::{score_meal, slot_calorie_target, ScoringWeights};
use crate::catalog::{Catalog, MealRecord, MealSlot};
use crate::profile::UserProfile;

/// How many of the best-scoring candidates the final random pick chooses from.
pub const TOP_CANDIDATES: usize = 3;

/// Source of the bounded randomness used when choosing among close candidates.
pub trait IndexPicker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into an [`IndexPicker`].
#[derive(Debug, Clone)]
pub struct RngPicker<R>(pub R);

impl RngPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

#[derive(Debug, Clone)]
pub struct ScoredMeal {
    pub meal: Arc<MealRecord>,
    pub score: f64,
}

/// Scores `candidates` and sorts them best first. Ties keep catalog order.
pub fn rank_candidates(
    candidates: Vec<Arc<MealRecord>>,
    slot: MealSlot,
    remaining_budget: f64,
    remaining_calories: f64,
    weights: &ScoringWeights,
) -> Vec<ScoredMeal> {
    let target = slot_calorie_target(slot, remaining_calories);
    let mut scored: Vec<ScoredMeal> = candidates
        .into_iter()
        .map(|meal| {
            let score = score_meal(&meal, remaining_budget, target, weights);
            ScoredMeal { meal, score }
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Picks one meal for `slot`, or `None` when nothing fits the diet, skill and
/// already-used constraints.
///
/// Meals over `remaining_budget` are only considered when nothing within budget
/// exists; that fallback is a plain uniform pick. Recording the chosen id and
/// deducting its cost and calories is left to the caller.
#[allow(clippy::too_many_arguments)]
pub fn select_meal(
    catalog: &Catalog,
    slot: MealSlot,
    profile: &UserProfile,
    used_ids: &HashSet<String>,
    remaining_budget: f64,
    remaining_calories: f64,
    weights: &ScoringWeights,
    picker: &mut dyn IndexPicker,
) -> Option<Arc<MealRecord>> {
    // Overspending earlier in the day can leave a negative ceiling.
    let budget = remaining_budget.max(0.0);
    let allowed = profile.cooking_skill.allowed_difficulties();

    let eligible: Vec<Arc<MealRecord>> = catalog
        .filter_candidates(slot, profile.diet, allowed)
        .into_iter()
        .filter(|meal| !used_ids.contains(&meal.id))
        .collect();

    let (affordable, over_budget): (Vec<_>, Vec<_>) = eligible
        .into_iter()
        .partition(|meal| meal.cost_per_serving <= budget);

    if affordable.is_empty() {
        if over_budget.is_empty() {
            warn!(
                %slot,
                diet = ?profile.diet,
                skill = ?profile.cooking_skill,
                "no candidate meal for slot"
            );
            return None;
        }
        let idx = picker.pick_index(over_budget.len()).min(over_budget.len() - 1);
        let chosen = over_budget[idx].clone();
        warn!(
            %slot,
            budget,
            meal = %chosen.id,
            cost = chosen.cost_per_serving,
            "nothing within budget, ignoring budget"
        );
        return Some(chosen);
    }

    let ranked = rank_candidates(affordable, slot, budget, remaining_calories, weights);
    let top = &ranked[..ranked.len().min(TOP_CANDIDATES)];
    let idx = picker.pick_index(top.len()).min(top.len() - 1);
    let chosen = &top[idx];

    debug!(
        %slot,
        budget,
        remaining_calories,
        candidates = ranked.len(),
        meal = %chosen.meal.id,
        score = chosen.score,
        "meal selected"
    );
    Some(chosen.meal.clone())
}
