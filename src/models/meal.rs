use std::fmt;

use serde::Serialize;

use crate::models::food::FoodPortion;
use crate::models::time::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealType {
    Breakfast,
    PreTraining,
    PostTraining,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::PreTraining => write!(f, "Pre-Training"),
            MealType::PostTraining => write!(f, "Post-Training"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
            MealType::Snack => write!(f, "Snack"),
        }
    }
}

/// A scheduled meal occasion with its macro sub-targets.
#[derive(Debug, Clone)]
pub struct MealSlot {
    pub name: String,
    pub meal_type: MealType,
    pub time: ClockTime,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub is_pre_training: bool,
    pub is_post_training: bool,
}

/// A fully assembled meal: ordered food portions plus summed totals.
///
/// Constructed once per slot by the meal builder and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub name: String,
    pub meal_type: MealType,
    /// 12-hour display time, e.g. "6:30 AM".
    pub time: String,
    pub foods: Vec<FoodPortion>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub total_fiber: f64,
    pub is_pre_training: bool,
    pub is_post_training: bool,
}

impl Meal {
    /// Build a meal from a slot and its assembled portions, summing totals.
    pub fn from_portions(slot: &MealSlot, foods: Vec<FoodPortion>) -> Self {
        Self {
            name: slot.name.clone(),
            meal_type: slot.meal_type,
            time: slot.time.format_12h(),
            total_calories: foods.iter().map(|f| f.calories).sum(),
            total_protein: foods.iter().map(|f| f.protein).sum(),
            total_carbs: foods.iter().map(|f| f.carbs).sum(),
            total_fats: foods.iter().map(|f| f.fat).sum(),
            total_fiber: foods.iter().map(|f| f.fiber).sum(),
            foods,
            is_pre_training: slot.is_pre_training,
            is_post_training: slot.is_post_training,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food::{FoodCategory, FoodItem, Per100g};
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_meal_totals_sum_portions() {
        let rice = FoodItem::new(
            "White Rice (cooked)",
            FoodCategory::Carb,
            Per100g {
                calories: 130.0,
                protein: 2.7,
                carbs: 28.0,
                fat: 0.3,
                fiber: 0.4,
            },
        );
        let slot = MealSlot {
            name: "Lunch".to_string(),
            meal_type: MealType::Lunch,
            time: "12:30".parse().unwrap(),
            protein_g: 40.0,
            carbs_g: 60.0,
            fats_g: 10.0,
            is_pre_training: false,
            is_post_training: false,
        };

        let meal = Meal::from_portions(&slot, vec![rice.portion(100.0), rice.portion(50.0)]);
        assert_eq!(meal.time, "12:30 PM");
        assert_float_absolute_eq!(meal.total_calories, 195.0, 1e-9);
        assert_float_absolute_eq!(meal.total_carbs, 42.0, 1e-9);
        assert_float_absolute_eq!(meal.total_fiber, 0.6, 1e-9);
    }
}
