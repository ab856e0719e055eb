pub mod data;

use std::collections::HashMap;

use crate::error::{PlanError, Result};
use crate::models::{FoodItem, FoodPortion};

pub use data::{
    CARB_ROTATION, CUT_PROTEIN_ROTATION, FAT_ROTATION, NUT_SOURCES, PURE_OIL_SOURCES,
    REFUEL_PROTEIN_ROTATION, VEG_ROTATION,
};

/// The immutable food reference table shared by all calculations.
///
/// Constructed once at startup. Construction verifies that every rotation
/// entry exists and that the macro each rotation divides by is positive, so
/// the portion-size divisions in the meal builder can never hit zero.
pub struct Catalog {
    foods: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the built-in food table.
    pub fn standard() -> Result<Self> {
        Self::new(data::standard_foods())
    }

    /// Build a catalog from an arbitrary food list, checking invariants.
    pub fn new(foods: Vec<FoodItem>) -> Result<Self> {
        let mut index = HashMap::new();
        for (i, item) in foods.iter().enumerate() {
            if index.insert(item.name.clone(), i).is_some() {
                return Err(PlanError::CatalogInvariant(format!(
                    "duplicate food name '{}'",
                    item.name
                )));
            }
        }

        let catalog = Self { foods, index };
        catalog.check_rotation(data::CUT_PROTEIN_ROTATION, |f| f.per_100g.protein, "protein")?;
        catalog.check_rotation(data::REFUEL_PROTEIN_ROTATION, |f| f.per_100g.protein, "protein")?;
        catalog.check_rotation(data::CARB_ROTATION, |f| f.per_100g.carbs, "carbs")?;
        catalog.check_rotation(data::FAT_ROTATION, |f| f.per_100g.fat, "fat")?;
        catalog.check_rotation(data::VEG_ROTATION, |f| f.per_100g.calories, "calories")?;
        Ok(catalog)
    }

    fn check_rotation(
        &self,
        names: &[&str],
        macro_value: impl Fn(&FoodItem) -> f64,
        macro_name: &str,
    ) -> Result<()> {
        for name in names {
            let item = self.get(name).ok_or_else(|| {
                PlanError::CatalogInvariant(format!("rotation references unknown food '{name}'"))
            })?;
            if macro_value(item) <= 0.0 {
                return Err(PlanError::CatalogInvariant(format!(
                    "rotation food '{name}' has no {macro_name} per 100g"
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index.get(name).map(|&i| &self.foods[i])
    }

    /// Look up a food, failing with [`PlanError::FoodNotFound`].
    pub fn require(&self, name: &str) -> Result<&FoodItem> {
        self.get(name)
            .ok_or_else(|| PlanError::FoodNotFound(name.to_string()))
    }

    /// Portion a rotation-selected food at `index mod len`.
    pub fn rotate(&self, rotation: &[&str], index: usize, grams: f64) -> Result<FoodPortion> {
        let name = rotation[index % rotation.len()];
        Ok(self.require(name)?.portion(grams))
    }

    /// All foods in catalog order.
    pub fn all_foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Portion cap in grams for a fat source.
///
/// Pure oils are capped hard, nuts and nut butters a little looser,
/// everything else (whole-food fats like avocado) looser still.
pub fn fat_portion_cap(name: &str) -> f64 {
    if data::PURE_OIL_SOURCES.contains(&name) {
        20.0
    } else if data::NUT_SOURCES.contains(&name) {
        40.0
    } else {
        60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, Per100g};

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = Catalog::standard().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("Chicken Breast (grilled)").is_some());
        assert!(catalog.get("Pizza").is_none());
    }

    #[test]
    fn test_rotation_wraps() {
        let catalog = Catalog::standard().unwrap();
        let a = catalog.rotate(CARB_ROTATION, 1, 100.0).unwrap();
        let b = catalog
            .rotate(CARB_ROTATION, 1 + CARB_ROTATION.len(), 100.0)
            .unwrap();
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut foods = data::standard_foods();
        foods.push(foods[0].clone());
        assert!(Catalog::new(foods).is_err());
    }

    #[test]
    fn test_missing_rotation_food_rejected() {
        let foods: Vec<FoodItem> = data::standard_foods()
            .into_iter()
            .filter(|f| f.name != "Banana")
            .collect();
        assert!(Catalog::new(foods).is_err());
    }

    #[test]
    fn test_zero_macro_rotation_food_rejected() {
        let mut foods = data::standard_foods();
        for f in &mut foods {
            if f.name == "White Rice (cooked)" {
                f.per_100g = Per100g {
                    carbs: 0.0,
                    ..f.per_100g
                };
            }
        }
        assert!(Catalog::new(foods).is_err());
    }

    #[test]
    fn test_fat_portion_caps() {
        assert_eq!(fat_portion_cap("Olive Oil (1 tbsp = 14g)"), 20.0);
        assert_eq!(fat_portion_cap("Almonds"), 40.0);
        assert_eq!(fat_portion_cap("Peanut Butter (natural)"), 40.0);
        assert_eq!(fat_portion_cap("Avocado"), 60.0);
    }

    #[test]
    fn test_fat_rotation_has_no_zero_fat_entry() {
        let catalog = Catalog::standard().unwrap();
        for name in FAT_ROTATION {
            assert!(catalog.get(name).unwrap().per_100g.fat > 0.0);
        }
    }

    #[test]
    fn test_custom_catalog_category_preserved() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(
            catalog.get("Avocado").unwrap().category,
            FoodCategory::Fat
        );
    }
}
