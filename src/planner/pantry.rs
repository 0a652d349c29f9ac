use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, MealRecord};

/// Meals scoring below this are not worth suggesting.
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 0.25;
/// Penalty per recipe ingredient the pantry lacks.
pub const MISSING_INGREDIENT_PENALTY: f64 = 0.08;
pub const MAX_MISSING_PENALTY: f64 = 0.3;

/// Canonical ingredient names and the spellings folded into them. Checked in order.
const INGREDIENT_SYNONYMS: &[(&str, &[&str])] = &[
    ("onion", &["pyaz", "pyaaz", "kanda"]),
    ("tomato", &["tamatar"]),
    ("potato", &["aloo", "aaloo"]),
    ("paneer", &["cottage cheese", "indian cheese"]),
    ("dal", &["lentils", "daal", "toor dal", "moong dal", "yellow dal", "urad dal"]),
    ("rice", &["chawal", "bhaat", "basmati rice"]),
    ("wheat", &["atta", "gehu", "wheat flour", "flour"]),
    ("ginger", &["adrak"]),
    ("garlic", &["lahsun", "lehsun", "ginger-garlic"]),
    ("turmeric", &["haldi"]),
    ("cumin", &["jeera", "zeera"]),
    ("coriander", &["dhania", "cilantro"]),
    ("chili", &["mirchi", "mirch", "green chili", "red chili"]),
    ("mustard", &["sarson", "rai", "mustard seeds"]),
    ("capsicum", &["shimla mirch", "bell pepper", "bell peppers"]),
    ("cauliflower", &["gobi", "phool gobi"]),
    ("spinach", &["palak"]),
    ("eggplant", &["baingan", "brinjal"]),
    ("okra", &["bhindi", "ladyfinger"]),
    ("peas", &["matar", "mutter"]),
    ("carrot", &["gajar"]),
    ("cabbage", &["patta gobi", "band gobi"]),
    ("cucumber", &["kheera", "kakdi"]),
    ("chickpeas", &["chana", "chole"]),
    ("kidney beans", &["rajma"]),
    ("black gram", &["urad dal", "urad"]),
    ("moong", &["mung", "green gram", "moong dal"]),
    ("egg", &["anda", "eggs"]),
    ("chicken", &["murgh", "murg"]),
    ("mutton", &["gosht"]),
    ("fish", &["machli", "macchi"]),
    ("curd", &["dahi", "yogurt", "yoghurt"]),
    ("milk", &["doodh"]),
    ("cream", &["malai"]),
    ("butter", &["makhan"]),
    ("ghee", &["clarified butter"]),
    ("oil", &["tel"]),
    ("semolina", &["rava", "sooji", "suji"]),
    ("poha", &["flattened rice", "beaten rice"]),
    ("vegetables", &["mixed vegetables", "mixed veggies", "sabzi"]),
];

/// Lower-cases `ingredient` and folds it onto its canonical name.
///
/// A synonym matches when either string contains the other, so "basmati" becomes
/// "rice". Unknown names come back lower-cased and trimmed.
pub fn normalize_ingredient(ingredient: &str) -> String {
    let lower = ingredient.trim().to_lowercase();
    if lower.is_empty() {
        return lower;
    }
    INGREDIENT_SYNONYMS
        .iter()
        .find(|(canonical, synonyms)| {
            lower == *canonical
                || synonyms
                    .iter()
                    .any(|s| lower.contains(s) || s.contains(lower.as_str()))
        })
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or(lower)
}

/// How much of one recipe a pantry covers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IngredientCoverage {
    /// Matched share minus the missing-ingredient penalty, in `0.0..=1.0`.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn ingredient_coverage(pantry: &[String], recipe: &[String]) -> IngredientCoverage {
    let pantry: Vec<String> = pantry
        .iter()
        .map(|p| normalize_ingredient(p))
        .filter(|p| !p.is_empty())
        .collect();

    let mut coverage = IngredientCoverage::default();
    for ingredient in recipe.iter().map(|i| normalize_ingredient(i)) {
        let have = pantry
            .iter()
            .any(|p| p.contains(ingredient.as_str()) || ingredient.contains(p.as_str()));
        if have {
            coverage.matched.push(ingredient);
        } else {
            coverage.missing.push(ingredient);
        }
    }

    let ratio = coverage.matched.len() as f64 / recipe.len().max(1) as f64;
    let penalty =
        (coverage.missing.len() as f64 * MISSING_INGREDIENT_PENALTY).min(MAX_MISSING_PENALTY);
    coverage.score = (ratio - penalty).max(0.0);
    coverage
}

/// A catalog meal the pantry can (mostly) cook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealMatch {
    pub meal: Arc<MealRecord>,
    /// Score as a whole percentage.
    pub match_percent: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Every catalog meal whose coverage reaches `min_score`, best first.
///
/// Meals with the same percentage keep catalog order.
pub fn find_matching_meals(
    catalog: &Catalog,
    pantry: &[String],
    min_score: f64,
) -> Vec<MealMatch> {
    let mut matches: Vec<MealMatch> = catalog
        .meals()
        .iter()
        .filter_map(|meal| {
            let coverage = ingredient_coverage(pantry, &meal.ingredients);
            (coverage.score >= min_score).then(|| MealMatch {
                meal: Arc::clone(meal),
                match_percent: (coverage.score * 100.0).round() as u32,
                matched: coverage.matched,
                missing: coverage.missing,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    debug!(
        pantry = pantry.len(),
        matches = matches.len(),
        min_score,
        "matched pantry against catalog"
    );
    matches
}
