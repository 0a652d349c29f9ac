pub mod data_loader;
pub mod meal;

pub use data_loader::{load_catalog, load_catalog_csv, load_catalog_json};
pub use meal::{Diet, Difficulty, MealRecord, MealSlot};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CatalogError;

/// Read-only collection of candidate meals.
///
/// Built once and never mutated afterwards, so it can be shared between any
/// number of planning calls without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    meals: Vec<Arc<MealRecord>>,
    index_by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Validates the records and builds the id index.
    pub fn new(meals: Vec<MealRecord>) -> Result<Self, CatalogError> {
        if meals.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index_by_id = HashMap::with_capacity(meals.len());
        let mut stored = Vec::with_capacity(meals.len());
        for (idx, meal) in meals.into_iter().enumerate() {
            validate_meal(&meal)?;
            if index_by_id.insert(meal.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(meal.id));
            }
            stored.push(Arc::new(meal));
        }

        Ok(Self {
            meals: stored,
            index_by_id,
        })
    }

    pub fn meals(&self) -> &[Arc<MealRecord>] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<MealRecord>> {
        self.index_by_id.get(id).map(|&idx| &self.meals[idx])
    }

    /// All meals of `slot` that a user with preference `diet` may eat, in catalog order.
    pub fn meals_for(
        &self,
        slot: MealSlot,
        diet: Diet,
    ) -> impl Iterator<Item = &Arc<MealRecord>> + '_ {
        self.meals
            .iter()
            .filter(move |meal| meal.slot == slot && diet.admits(meal.diet))
    }

    /// Candidate Filter: slot and diet compatible meals whose difficulty is allowed.
    ///
    /// An empty result is valid; the caller decides what an empty slot means.
    pub fn filter_candidates(
        &self,
        slot: MealSlot,
        diet: Diet,
        allowed_difficulties: &[Difficulty],
    ) -> Vec<Arc<MealRecord>> {
        self.meals_for(slot, diet)
            .filter(|meal| allowed_difficulties.contains(&meal.difficulty))
            .cloned()
            .collect()
    }
}

fn validate_meal(meal: &MealRecord) -> Result<(), CatalogError> {
    if meal.id.trim().is_empty() {
        return Err(CatalogError::InvalidField {
            meal_id: meal.name.clone(),
            field: "id",
            reason: "must not be empty".to_string(),
        });
    }

    let amounts = [
        ("protein", meal.protein),
        ("carbs", meal.carbs),
        ("fat", meal.fat),
        ("cost", meal.cost_per_serving),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidField {
                meal_id: meal.id.clone(),
                field,
                reason: format!("expected a non-negative number, got {}", value),
            });
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::meal;
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            meal("poha", MealSlot::Breakfast, Diet::Veg, Difficulty::Easy, 280, 6.0, 25.0),
            meal("egg-bhurji", MealSlot::Breakfast, Diet::Egg, Difficulty::Easy, 320, 18.0, 30.0),
            meal(
                "keema-paratha",
                MealSlot::Breakfast,
                Diet::NonVeg,
                Difficulty::Medium,
                450,
                24.0,
                60.0,
            ),
            meal("sprouts", MealSlot::Breakfast, Diet::Veg, Difficulty::NoCook, 180, 12.0, 20.0),
            meal("dosa", MealSlot::Breakfast, Diet::Veg, Difficulty::Hard, 350, 8.0, 35.0),
            meal("dal-rice", MealSlot::Lunch, Diet::Veg, Difficulty::Easy, 450, 15.0, 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_respects_diet_preference() {
        let catalog = sample_catalog();
        let all = [Difficulty::NoCook, Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

        let egg = catalog.filter_candidates(MealSlot::Breakfast, Diet::Egg, &all);
        assert!(egg.iter().all(|m| m.diet != Diet::NonVeg));
        assert!(egg.iter().any(|m| m.id == "egg-bhurji"));
        assert!(egg.iter().any(|m| m.id == "poha"));

        let veg = catalog.filter_candidates(MealSlot::Breakfast, Diet::Veg, &all);
        assert!(veg.iter().all(|m| m.diet == Diet::Veg));

        let non_veg = catalog.filter_candidates(MealSlot::Breakfast, Diet::NonVeg, &all);
        assert_eq!(non_veg.len(), 5);
    }

    #[test]
    fn test_filter_respects_slot_and_difficulty() {
        let catalog = sample_catalog();
        let easy = [Difficulty::NoCook, Difficulty::Easy];
        let ids: Vec<_> = catalog
            .filter_candidates(MealSlot::Breakfast, Diet::NonVeg, &easy)
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(ids, vec!["poha", "egg-bhurji", "sprouts"]);
    }

    #[test]
    fn test_filter_can_be_empty() {
        let catalog = sample_catalog();
        assert!(catalog
            .filter_candidates(MealSlot::Snack, Diet::NonVeg, &[Difficulty::Easy])
            .is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("dal-rice").map(|m| m.calories), Some(450));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![
            meal("poha", MealSlot::Breakfast, Diet::Veg, Difficulty::Easy, 280, 6.0, 25.0),
            meal("poha", MealSlot::Lunch, Diet::Veg, Difficulty::Easy, 300, 6.0, 25.0),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "poha"));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let result = Catalog::new(vec![meal(
            "poha",
            MealSlot::Breakfast,
            Diet::Veg,
            Difficulty::Easy,
            280,
            6.0,
            -1.0,
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidField { field: "cost", .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }
}
