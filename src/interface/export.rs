use std::path::Path;

use crate::error::Result;
use crate::models::Meal;

/// Write meal plans to a CSV file, one row per food portion.
///
/// `sections` pairs a phase label (e.g. "Cutting", "Refuelling week 1")
/// with that phase's meals.
pub fn write_meal_plan_csv<P: AsRef<Path>>(path: P, sections: &[(&str, &[Meal])]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "phase", "meal", "time", "food", "category", "grams", "calories", "protein", "carbs",
        "fat", "fiber",
    ])?;

    for (phase, meals) in sections {
        for meal in *meals {
            for food in &meal.foods {
                writer.write_record([
                    phase.to_string(),
                    meal.name.clone(),
                    meal.time.clone(),
                    food.name.clone(),
                    food.category.to_string(),
                    food.amount_g.to_string(),
                    format!("{:.1}", food.calories),
                    format!("{:.1}", food.protein),
                    format!("{:.1}", food.carbs),
                    format!("{:.1}", food.fat),
                    format!("{:.1}", food.fiber),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{MealSlot, MealType};
    use crate::planner::{build_meal, Phase};
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_export_writes_rows() {
        let catalog = Catalog::standard().unwrap();
        let slot = MealSlot {
            name: "Lunch".to_string(),
            meal_type: MealType::Lunch,
            time: "12:00".parse().unwrap(),
            protein_g: 40.0,
            carbs_g: 50.0,
            fats_g: 8.0,
            is_pre_training: false,
            is_post_training: false,
        };
        let meals = vec![build_meal(&catalog, &slot, 0, Phase::Cutting).unwrap()];

        let file = NamedTempFile::new().unwrap();
        write_meal_plan_csv(file.path(), &[("Cutting", &meals)]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("phase,meal,time,food"));
        // Header plus one row per portion
        assert_eq!(content.lines().count(), 1 + meals[0].foods.len());
        assert!(content.contains("Cutting"));
        assert!(content.contains("Chicken Breast (grilled)"));
    }
}
