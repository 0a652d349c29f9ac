use tracing::{debug, info};

use crate::catalog::{Catalog, MealSlot};
use crate::nutrition::calculate_totals;
use crate::plan::DailyMealPlan;
use crate::profile::UserProfile;

/// How far over the adjusted target a day must be before dinner is replaced.
pub const EXCESS_THRESHOLD_KCAL: i64 = 200;
/// A replacement dinner must be at least this much lighter than the current one.
pub const MIN_DINNER_REDUCTION_KCAL: u32 = 100;

/// Re-plans after the user ate `outside_calories` off-plan.
///
/// If the day now overshoots `target_calories - outside_calories` by more than
/// [`EXCESS_THRESHOLD_KCAL`] and a dinner is planned, dinner is swapped for the
/// lightest diet-compatible dinner at least [`MIN_DINNER_REDUCTION_KCAL`] lighter.
/// Only dinner is ever touched. In every other case the plan comes back as is.
pub fn adjust_after_outside_food(
    plan: &DailyMealPlan,
    outside_calories: u32,
    profile: &UserProfile,
    catalog: &Catalog,
) -> DailyMealPlan {
    let current = calculate_totals(plan);
    let target_after_outside = i64::from(profile.target_calories) - i64::from(outside_calories);
    let excess = current.calories - target_after_outside;

    if excess <= EXCESS_THRESHOLD_KCAL {
        debug!(excess, "plan within calorie tolerance, no adjustment");
        return plan.clone();
    }

    let Some(dinner) = plan.dinner.as_ref() else {
        debug!(excess, "over target but no dinner planned");
        return plan.clone();
    };

    let lighter = dinner
        .calories
        .checked_sub(MIN_DINNER_REDUCTION_KCAL)
        .and_then(|ceiling| {
            catalog
                .meals_for(MealSlot::Dinner, profile.diet)
                .filter(|m| m.calories <= ceiling)
                .min_by_key(|m| m.calories)
        });

    let mut adjusted = plan.clone();
    match lighter {
        Some(replacement) => {
            info!(
                excess,
                from = %dinner.id,
                to = %replacement.id,
                saved_kcal = dinner.calories - replacement.calories,
                "dinner replaced with lighter option"
            );
            adjusted.dinner = Some(replacement.clone());
        }
        None => {
            debug!(excess, dinner = %dinner.id, "no lighter dinner available");
        }
    }
    adjusted
}
