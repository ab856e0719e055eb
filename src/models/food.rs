use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carb,
    Fat,
    Vegetable,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodCategory::Protein => write!(f, "protein"),
            FoodCategory::Carb => write!(f, "carb"),
            FoodCategory::Fat => write!(f, "fat"),
            FoodCategory::Vegetable => write!(f, "vegetable"),
        }
    }
}

/// Macro profile per 100 g of a food.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Per100g {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// A catalog entry: a food with its per-100g macro profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub category: FoodCategory,
    pub per_100g: Per100g,
}

impl FoodItem {
    pub fn new(name: &str, category: FoodCategory, per_100g: Per100g) -> Self {
        Self {
            name: name.to_string(),
            category,
            per_100g,
        }
    }

    /// Scale this food to `grams`, producing an absolute-macro portion.
    ///
    /// The display amount rounds to the nearest gram; macros are computed
    /// from the unrounded gram value.
    pub fn portion(&self, grams: f64) -> FoodPortion {
        let multiplier = grams / 100.0;
        FoodPortion {
            name: self.name.clone(),
            category: self.category,
            amount_g: grams.round().max(0.0) as u32,
            calories: self.per_100g.calories * multiplier,
            protein: self.per_100g.protein * multiplier,
            carbs: self.per_100g.carbs * multiplier,
            fat: self.per_100g.fat * multiplier,
            fiber: self.per_100g.fiber * multiplier,
        }
    }
}

/// A concrete amount of one food within a meal.
#[derive(Debug, Clone, Serialize)]
pub struct FoodPortion {
    pub name: String,
    pub category: FoodCategory,
    pub amount_g: u32,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn chicken() -> FoodItem {
        FoodItem::new(
            "Chicken Breast (grilled)",
            FoodCategory::Protein,
            Per100g {
                calories: 165.0,
                protein: 31.0,
                carbs: 0.0,
                fat: 3.6,
                fiber: 0.0,
            },
        )
    }

    #[test]
    fn test_portion_scales_macros() {
        let p = chicken().portion(150.0);
        assert_eq!(p.amount_g, 150);
        assert_float_absolute_eq!(p.calories, 247.5, 1e-9);
        assert_float_absolute_eq!(p.protein, 46.5, 1e-9);
        assert_float_absolute_eq!(p.fat, 5.4, 1e-9);
    }

    #[test]
    fn test_portion_rounds_display_amount_only() {
        let p = chicken().portion(135.7);
        assert_eq!(p.amount_g, 136);
        // Macros come from the unrounded grams
        assert_float_absolute_eq!(p.protein, 31.0 * 1.357, 1e-9);
    }
}
