use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use time::{Date, Duration, OffsetDateTime};
use tracing::info;

use super::scoring::ScoringWeights;
use super::selector::{select_meal, IndexPicker};
use crate::catalog::{Catalog, MealRecord, MealSlot};
use crate::plan::{week_start, DailyMealPlan, WeeklyMealPlan};
use crate::profile::UserProfile;

/// Fraction of the budget left after lunch that dinner may spend; the rest is kept for the snack.
pub const DINNER_BUDGET_SHARE: f64 = 0.8;

/// Up-front split of the daily budget across slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetAllocation {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl BudgetAllocation {
    pub fn for_budget(daily_budget: f64) -> Self {
        Self {
            breakfast: daily_budget * 0.20,
            lunch: daily_budget * 0.35,
            dinner: daily_budget * 0.35,
            snack: daily_budget * 0.10,
        }
    }
}

/// What the planner had to work with when it filled one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotDecision {
    pub slot: MealSlot,
    pub budget_ceiling: f64,
    pub remaining_calories: f64,
    pub meal_id: Option<String>,
}

/// Running state threaded from one slot to the next.
struct DayEnvelope<'a> {
    used_ids: HashSet<String>,
    remaining_budget: f64,
    remaining_calories: f64,
    trace: &'a mut Vec<SlotDecision>,
}

impl DayEnvelope<'_> {
    fn fill(
        &mut self,
        catalog: &Catalog,
        slot: MealSlot,
        profile: &UserProfile,
        budget_ceiling: f64,
        weights: &ScoringWeights,
        picker: &mut dyn IndexPicker,
    ) -> Option<Arc<MealRecord>> {
        let chosen = select_meal(
            catalog,
            slot,
            profile,
            &self.used_ids,
            budget_ceiling,
            self.remaining_calories,
            weights,
            picker,
        );

        self.trace.push(SlotDecision {
            slot,
            budget_ceiling,
            remaining_calories: self.remaining_calories,
            meal_id: chosen.as_ref().map(|m| m.id.clone()),
        });

        if let Some(meal) = &chosen {
            self.used_ids.insert(meal.id.clone());
            self.remaining_budget -= meal.cost_per_serving;
            self.remaining_calories -= f64::from(meal.calories);
        }
        chosen
    }
}

/// Builds one day, filling breakfast, lunch, dinner and snack in that order.
///
/// Budget threading:
/// - breakfast gets 20% of the daily budget
/// - lunch gets its 35% plus whatever breakfast left of its own 20%
/// - dinner gets 80% of what is left of the whole budget
/// - the snack gets everything that remains
///
/// A slot with no candidate stays empty; nothing is retried. Remainders are not
/// clamped here, [`select_meal`] treats a negative ceiling as zero.
pub fn build_daily_plan_traced(
    catalog: &Catalog,
    profile: &UserProfile,
    date: Date,
    weights: &ScoringWeights,
    picker: &mut dyn IndexPicker,
) -> (DailyMealPlan, Vec<SlotDecision>) {
    let allocation = BudgetAllocation::for_budget(profile.daily_budget);
    let mut trace = Vec::with_capacity(MealSlot::ALL.len());
    let mut day = DayEnvelope {
        used_ids: HashSet::new(),
        remaining_budget: profile.daily_budget,
        remaining_calories: f64::from(profile.target_calories),
        trace: &mut trace,
    };

    let breakfast = day.fill(
        catalog,
        MealSlot::Breakfast,
        profile,
        allocation.breakfast,
        weights,
        picker,
    );

    let breakfast_cost = breakfast.as_ref().map_or(0.0, |m| m.cost_per_serving);
    let lunch_ceiling = allocation.lunch + (allocation.breakfast - breakfast_cost);
    let lunch = day.fill(catalog, MealSlot::Lunch, profile, lunch_ceiling, weights, picker);

    let dinner_ceiling = day.remaining_budget * DINNER_BUDGET_SHARE;
    let dinner = day.fill(catalog, MealSlot::Dinner, profile, dinner_ceiling, weights, picker);

    let snack_ceiling = day.remaining_budget;
    let snack = day.fill(catalog, MealSlot::Snack, profile, snack_ceiling, weights, picker);

    let plan = DailyMealPlan {
        date,
        breakfast,
        lunch,
        dinner,
        snack,
        outside_foods: Vec::new(),
    };

    info!(
        %date,
        filled = plan.meals().count(),
        remaining_budget = day.remaining_budget,
        remaining_calories = day.remaining_calories,
        "daily plan built"
    );
    (plan, trace)
}

pub fn build_daily_plan_for(
    catalog: &Catalog,
    profile: &UserProfile,
    date: Date,
    weights: &ScoringWeights,
    picker: &mut dyn IndexPicker,
) -> DailyMealPlan {
    build_daily_plan_traced(catalog, profile, date, weights, picker).0
}

/// Builds a plan stamped with today's (UTC) date.
pub fn build_daily_plan(
    catalog: &Catalog,
    profile: &UserProfile,
    weights: &ScoringWeights,
    picker: &mut dyn IndexPicker,
) -> DailyMealPlan {
    let today = OffsetDateTime::now_utc().date();
    build_daily_plan_for(catalog, profile, today, weights, picker)
}

/// Seven independent days starting on the Sunday of the week containing `date`.
///
/// Meals may repeat across days; only within a day are they unique.
pub fn build_weekly_plan(
    catalog: &Catalog,
    profile: &UserProfile,
    date: Date,
    weights: &ScoringWeights,
    picker: &mut dyn IndexPicker,
) -> WeeklyMealPlan {
    let start_date = week_start(date);
    let days = (0..7)
        .map(|offset| {
            let day = start_date + Duration::days(offset);
            build_daily_plan_for(catalog, profile, day, weights, picker)
        })
        .collect();

    info!(%start_date, "weekly plan built");
    WeeklyMealPlan { start_date, days }
}
