pub mod adjuster;
pub mod alternatives;
pub mod builder;
pub mod pantry;
pub mod scoring;
pub mod selector;

pub use adjuster::adjust_after_outside_food;
pub use alternatives::{alternatives_for, DEFAULT_ALTERNATIVE_COUNT};
pub use builder::{
    build_daily_plan, build_daily_plan_for, build_daily_plan_traced, build_weekly_plan,
    BudgetAllocation, SlotDecision,
};
pub use pantry::{find_matching_meals, MealMatch, DEFAULT_MIN_MATCH_SCORE};
pub use scoring::{score_meal, slot_calorie_target, ScoringWeights};
pub use selector::{select_meal, IndexPicker, RngPicker};

use std::collections::HashSet;
use std::sync::Arc;
use time::Date;

use crate::catalog::{Catalog, MealRecord, MealSlot};
use crate::plan::{DailyMealPlan, OutsideFoodEntry, WeeklyMealPlan};
use crate::profile::UserProfile;

/// Bundles a catalog, scoring weights and a randomness source behind one handle.
///
/// Holds no planning state of its own: every call takes the profile and plan it
/// works on from the caller.
pub struct MealPlanner<'a, P: IndexPicker> {
    catalog: &'a Catalog,
    weights: ScoringWeights,
    picker: P,
}

impl<'a, P: IndexPicker> MealPlanner<'a, P> {
    pub fn new(catalog: &'a Catalog, picker: P) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
            picker,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn select_meal(
        &mut self,
        slot: MealSlot,
        profile: &UserProfile,
        used_ids: &HashSet<String>,
        remaining_budget: f64,
        remaining_calories: f64,
    ) -> Option<Arc<MealRecord>> {
        select_meal(
            self.catalog,
            slot,
            profile,
            used_ids,
            remaining_budget,
            remaining_calories,
            &self.weights,
            &mut self.picker,
        )
    }

    pub fn daily_plan(&mut self, profile: &UserProfile) -> DailyMealPlan {
        build_daily_plan(self.catalog, profile, &self.weights, &mut self.picker)
    }

    pub fn daily_plan_traced(
        &mut self,
        profile: &UserProfile,
        date: Date,
    ) -> (DailyMealPlan, Vec<SlotDecision>) {
        build_daily_plan_traced(self.catalog, profile, date, &self.weights, &mut self.picker)
    }

    pub fn weekly_plan(&mut self, profile: &UserProfile, date: Date) -> WeeklyMealPlan {
        build_weekly_plan(self.catalog, profile, date, &self.weights, &mut self.picker)
    }

    pub fn adjust_after_outside_food(
        &self,
        plan: &DailyMealPlan,
        outside_calories: u32,
        profile: &UserProfile,
    ) -> DailyMealPlan {
        adjust_after_outside_food(plan, outside_calories, profile, self.catalog)
    }

    /// Adjusts `plan` against the day as it stood before `entry`, then records the entry.
    pub fn log_outside_food(
        &self,
        plan: &DailyMealPlan,
        entry: OutsideFoodEntry,
        profile: &UserProfile,
    ) -> DailyMealPlan {
        let mut adjusted = self.adjust_after_outside_food(plan, entry.calories, profile);
        adjusted.log_outside_food(entry);
        adjusted
    }

    pub fn alternatives(&self, meal: &MealRecord, profile: &UserProfile) -> Vec<Arc<MealRecord>> {
        alternatives_for(self.catalog, meal, profile.diet, DEFAULT_ALTERNATIVE_COUNT)
    }

    /// Pantry matches the profile's diet admits, best first.
    pub fn cookable_meals(
        &self,
        pantry: &[String],
        profile: &UserProfile,
        min_score: f64,
    ) -> Vec<MealMatch> {
        let mut matches = find_matching_meals(self.catalog, pantry, min_score);
        matches.retain(|m| profile.diet.admits(m.meal.diet));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::selector::test_support::FixedPicker;
    use super::*;
    use crate::catalog::test_support::meal;
    use crate::catalog::{Diet, Difficulty};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            meal("poha", MealSlot::Breakfast, Diet::Veg, Difficulty::Easy, 280, 6.0, 25.0),
            meal("sprouts", MealSlot::Breakfast, Diet::Veg, Difficulty::NoCook, 180, 12.0, 28.0),
            meal("dal-rice", MealSlot::Lunch, Diet::Veg, Difficulty::Easy, 450, 15.0, 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_weights_change_the_ranking() {
        let catalog = catalog();
        let profile = UserProfile::default();
        let used = HashSet::new();

        // Default weights favour sprouts for its protein
        let mut planner = MealPlanner::new(&catalog, FixedPicker::new(0));
        let chosen = planner.select_meal(MealSlot::Breakfast, &profile, &used, 30.0, 2000.0);
        assert_eq!(chosen.map(|m| m.id.clone()).as_deref(), Some("sprouts"));

        // With only the calorie fit counting, poha is closer to 600 kcal
        let calories_only = ScoringWeights {
            protein: 0.0,
            budget_headroom: 0.0,
            calorie_mismatch: 1.0,
        };
        let mut planner =
            MealPlanner::new(&catalog, FixedPicker::new(0)).with_weights(calories_only);
        let chosen = planner.select_meal(MealSlot::Breakfast, &profile, &used, 30.0, 2000.0);
        assert_eq!(chosen.map(|m| m.id.clone()).as_deref(), Some("poha"));
    }

    #[test]
    fn test_daily_plan_is_stamped_today() {
        let catalog = catalog();
        let mut planner = MealPlanner::new(&catalog, FixedPicker::new(0));
        let before = time::OffsetDateTime::now_utc().date();
        let plan = planner.daily_plan(&UserProfile::default());
        let after = time::OffsetDateTime::now_utc().date();

        assert!(plan.date == before || plan.date == after);
        assert!(plan.lunch.is_some());
        assert!(plan.dinner.is_none() && plan.snack.is_none());
        assert!(plan.outside_foods.is_empty());
    }

    #[test]
    fn test_cookable_meals_follow_diet() {
        let with = |record: MealRecord, ingredients: &[&str]| MealRecord {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..record
        };
        let catalog = Catalog::new(vec![
            with(
                meal("bhurji", MealSlot::Breakfast, Diet::Egg, Difficulty::Easy, 320, 18.0, 30.0),
                &["Eggs", "Onion"],
            ),
            with(
                meal("aloo-sabzi", MealSlot::Lunch, Diet::Veg, Difficulty::Easy, 350, 7.0, 25.0),
                &["Potato", "Onion"],
            ),
        ])
        .unwrap();
        let planner = MealPlanner::new(&catalog, FixedPicker::new(0));
        let pantry = vec!["eggs".to_string(), "aloo".to_string(), "kanda".to_string()];

        let veg = planner.cookable_meals(&pantry, &UserProfile::default(), DEFAULT_MIN_MATCH_SCORE);
        let ids: Vec<_> = veg.iter().map(|m| m.meal.id.as_str()).collect();
        assert_eq!(ids, vec!["aloo-sabzi"]);

        let mut eggetarian = UserProfile::default();
        eggetarian.diet = Diet::Egg;
        assert_eq!(planner.cookable_meals(&pantry, &eggetarian, DEFAULT_MIN_MATCH_SCORE).len(), 2);
    }
}
