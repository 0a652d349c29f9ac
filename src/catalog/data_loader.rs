use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use super::meal::{Diet, Difficulty, MealRecord, MealSlot};
use super::Catalog;
use crate::error::CatalogError;

const INGREDIENT_SEPARATOR: char = ';';

/// One line of the catalog CSV. Ingredients arrive as a single `;`-separated cell.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    slot: MealSlot,
    diet: Diet,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
    cost: f64,
    difficulty: Difficulty,
    prep_minutes: u32,
    cook_minutes: u32,
    #[serde(default)]
    portion: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    description: String,
}

impl From<CatalogRow> for MealRecord {
    fn from(row: CatalogRow) -> Self {
        let ingredients = row
            .ingredients
            .split(INGREDIENT_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        MealRecord {
            id: row.id.trim().to_string(),
            name: row.name.trim().to_string(),
            slot: row.slot,
            diet: row.diet,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
            cost_per_serving: row.cost,
            difficulty: row.difficulty,
            prep_minutes: row.prep_minutes,
            cook_minutes: row.cook_minutes,
            portion: row.portion.trim().to_string(),
            ingredients,
            description: row.description.trim().to_string(),
        }
    }
}

/// Loads a catalog, picking the decoder from the file extension.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_catalog_csv(path),
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_catalog_json(path),
        _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    }
}

pub fn load_catalog_csv(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let mut meals = Vec::new();
    for (row_index, result) in rdr.deserialize::<CatalogRow>().enumerate() {
        let row = result.map_err(|source| CatalogError::Csv {
            row: row_index + 1,
            source,
        })?;
        if row.id.trim().is_empty() {
            debug!(row = row_index + 1, "skipping catalog row without id");
            continue;
        }
        meals.push(MealRecord::from(row));
    }

    let catalog = Catalog::new(meals)?;
    info!(path = ?path, meals = catalog.len(), "catalog loaded from CSV");
    Ok(catalog)
}

pub fn load_catalog_json(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let meals: Vec<MealRecord> = serde_json::from_str(&content)?;

    let catalog = Catalog::new(meals)?;
    info!(path = ?path, meals = catalog.len(), "catalog loaded from JSON");
    Ok(catalog)
}
