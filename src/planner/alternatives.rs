use std::sync::Arc;

use crate::catalog::{Catalog, Diet, MealRecord};

pub const DEFAULT_ALTERNATIVE_COUNT: usize = 3;

/// Grams of protein difference weigh as much as this many kcal of difference.
const PROTEIN_DISTANCE_WEIGHT: f64 = 5.0;

fn distance(a: &MealRecord, b: &MealRecord) -> f64 {
    (f64::from(a.calories) - f64::from(b.calories)).abs()
        + (a.protein - b.protein).abs() * PROTEIN_DISTANCE_WEIGHT
}

/// Swap suggestions: other meals for the same slot that `diet` admits, closest first.
pub fn alternatives_for(
    catalog: &Catalog,
    meal: &MealRecord,
    diet: Diet,
    count: usize,
) -> Vec<Arc<MealRecord>> {
    let mut candidates: Vec<&Arc<MealRecord>> = catalog
        .meals_for(meal.slot, diet)
        .filter(|m| m.id != meal.id)
        .collect();
    candidates.sort_by(|a, b| distance(a, meal).total_cmp(&distance(b, meal)));
    candidates.into_iter().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::meal;
    use crate::catalog::{Difficulty, MealSlot};

    fn catalog() -> Catalog {
        // Distance from poha: upma 30 + 10, idli 30 + 5, paratha 120 + 15, omelette 0 + 40
        Catalog::new(vec![
            meal("poha", MealSlot::Breakfast, Diet::Veg, Difficulty::Easy, 280, 6.0, 25.0),
            meal("upma", MealSlot::Breakfast, Diet::Veg, Difficulty::Easy, 310, 8.0, 20.0),
            meal("idli", MealSlot::Breakfast, Diet::Veg, Difficulty::Medium, 250, 7.0, 30.0),
            meal("paratha", MealSlot::Breakfast, Diet::Veg, Difficulty::Medium, 400, 9.0, 30.0),
            meal("omelette", MealSlot::Breakfast, Diet::Egg, Difficulty::Easy, 280, 14.0, 30.0),
            meal("dal", MealSlot::Lunch, Diet::Veg, Difficulty::Easy, 280, 6.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_alternatives_sorted_by_closeness() {
        let catalog = catalog();
        let poha = catalog.get("poha").unwrap();
        let ids: Vec<_> = alternatives_for(&catalog, poha, Diet::Veg, DEFAULT_ALTERNATIVE_COUNT)
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(ids, vec!["idli", "upma", "paratha"]);
    }

    #[test]
    fn test_alternatives_respect_diet_and_exclude_self() {
        let catalog = catalog();
        let poha = catalog.get("poha").unwrap();
        let ids: Vec<_> = alternatives_for(&catalog, poha, Diet::Egg, 10)
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(ids, vec!["idli", "upma", "omelette", "paratha"]);
        assert!(!ids.contains(&"poha".to_string()));
        assert!(!ids.contains(&"dal".to_string()));
    }
}
