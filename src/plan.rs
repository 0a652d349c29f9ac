use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, Duration};

use crate::catalog::{MealRecord, MealSlot};

time::serde::format_description!(plan_date, Date, "[year]-[month]-[day]");

/// Food eaten outside the plan. A snapshot; never edited after it is logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutsideFoodEntry {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One day's plan: at most one meal per slot plus whatever was eaten outside it.
///
/// Slots hold shared references into the catalog. A slot is `None` when no
/// candidate fitted the constraints at planning time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    #[serde(with = "plan_date")]
    pub date: Date,
    pub breakfast: Option<Arc<MealRecord>>,
    pub lunch: Option<Arc<MealRecord>>,
    pub dinner: Option<Arc<MealRecord>>,
    pub snack: Option<Arc<MealRecord>>,
    #[serde(default)]
    pub outside_foods: Vec<OutsideFoodEntry>,
}

impl DailyMealPlan {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
            snack: None,
            outside_foods: Vec::new(),
        }
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Arc<MealRecord>> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Arc<MealRecord>> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    /// Populated slots in planning order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Arc<MealRecord>)> + '_ {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.meal(slot).map(|meal| (slot, meal)))
    }

    /// Replaces whatever is in `slot`, returning the previous meal.
    pub fn swap_meal(&mut self, slot: MealSlot, meal: Arc<MealRecord>) -> Option<Arc<MealRecord>> {
        self.slot_mut(slot).replace(meal)
    }

    pub fn log_outside_food(&mut self, entry: OutsideFoodEntry) {
        self.outside_foods.push(entry);
    }
}

/// Seven consecutive daily plans starting on a Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    #[serde(with = "plan_date")]
    pub start_date: Date,
    pub days: Vec<DailyMealPlan>,
}

impl WeeklyMealPlan {
    pub fn previous_week_start(&self) -> Date {
        self.start_date - Duration::days(7)
    }

    pub fn next_week_start(&self) -> Date {
        self.start_date + Duration::days(7)
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}
