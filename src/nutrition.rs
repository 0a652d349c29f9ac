use serde::{Deserialize, Serialize};

use crate::plan::{DailyMealPlan, WeeklyMealPlan};
use crate::profile::UserProfile;

/// Absolute totals for a day.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct PlanTotals {
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Planned meals only; outside food carries no cost.
    pub cost: f64,
}

/// Sums the planned meals and every logged outside-food entry.
pub fn calculate_totals(plan: &DailyMealPlan) -> PlanTotals {
    let mut totals = PlanTotals::default();

    for (_, meal) in plan.meals() {
        totals.calories += i64::from(meal.calories);
        totals.protein += meal.protein;
        totals.carbs += meal.carbs;
        totals.fat += meal.fat;
        totals.cost += meal.cost_per_serving;
    }

    for food in &plan.outside_foods {
        totals.calories += i64::from(food.calories);
        totals.protein += food.protein;
        totals.carbs += food.carbs;
        totals.fat += food.fat;
    }

    totals
}

/// How far a day's totals are toward the profile's targets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NutritionProgress {
    pub calorie_percent: f64,
    pub protein_percent: f64,
    pub budget_percent: f64,
    pub over_calories: bool,
    pub over_budget: bool,
}

pub fn progress_against(totals: &PlanTotals, profile: &UserProfile) -> NutritionProgress {
    NutritionProgress {
        calorie_percent: capped_percent(totals.calories as f64, f64::from(profile.target_calories)),
        protein_percent: capped_percent(totals.protein, profile.target_protein),
        budget_percent: capped_percent(totals.cost, profile.daily_budget),
        over_calories: totals.calories > i64::from(profile.target_calories),
        over_budget: totals.cost > profile.daily_budget,
    }
}

fn capped_percent(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).min(100.0)
}

/// Summary of a week: running totals and per-day averages.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct WeekTotals {
    pub calories: i64,
    pub protein: f64,
    pub cost: f64,
    pub average_daily_calories: f64,
    pub average_daily_protein: f64,
}

pub fn weekly_totals(week: &WeeklyMealPlan) -> WeekTotals {
    let mut totals = WeekTotals::default();
    for day in week.days.iter().map(calculate_totals) {
        totals.calories += day.calories;
        totals.protein += day.protein;
        totals.cost += day.cost;
    }

    if !week.days.is_empty() {
        let days = week.days.len() as f64;
        totals.average_daily_calories = totals.calories as f64 / days;
        totals.average_daily_protein = totals.protein / days;
    }
    totals
}
