use crate::catalog::Catalog;
use crate::models::{FluidTargets, MacroTargets, Meal, RefuellingPlan};

/// Display the cutting-phase macro targets with the energy breakdown.
pub fn display_macro_targets(targets: &MacroTargets) {
    println!();
    println!("=== Cutting Phase Targets ===");
    println!();
    println!("Energy expenditure:");
    println!("  BMR:               {:>5} kcal", targets.bmr);
    println!("  Steps:             {:>5} kcal", targets.steps_calories);
    println!("  Training (daily):  {:>5} kcal", targets.training_calories_daily);
    println!("  Cardio (daily):    {:>5} kcal", targets.cardio_calories_daily);
    println!("  NEAT:              {:>5} kcal", targets.neat_calories);
    println!("  TDEE:              {:>5} kcal", targets.tdee);
    println!();
    println!(
        "Deficit: {}%  ->  {} kcal/day",
        targets.deficit_percent, targets.calorie_target
    );
    println!("Projected loss: {:.1} kg/week", targets.weekly_weight_loss_kg);
    println!();
    println!("Daily macros:");
    println!("  Protein: {:>4} g", targets.protein_g);
    println!("  Carbs:   {:>4} g", targets.carbs_g);
    println!("  Fat:     {:>4} g", targets.fats_g);
    println!();
}

/// Display the refuelling-phase week-by-week targets.
pub fn display_refuelling_plan(plan: &RefuellingPlan) {
    println!();
    println!(
        "=== Refuelling Phase (week {} onward, {} week{}) ===",
        plan.start_week,
        plan.duration_weeks(),
        if plan.duration_weeks() == 1 { "" } else { "s" }
    );
    println!();

    for (i, week) in plan.weeks.iter().enumerate() {
        println!(
            "Week {}: {} kcal | P {} g | C {} g | F {} g",
            plan.start_week + i as u32,
            week.calories,
            plan.protein_g,
            week.carbs_g,
            plan.fats_g
        );
    }
    println!();
}

/// Display the daily fluid band and hydration notes.
pub fn display_fluid_guidelines(fluids: &FluidTargets) {
    println!();
    println!("=== Fluid Guidelines (entire protocol) ===");
    println!();
    println!("Target: {} - {} mL/day (40-45 mL per kg)", fluids.low_ml, fluids.high_ml);
    println!();
    println!("  - Spread intake evenly through the day");
    println!("  - 500 mL on waking and with each main meal");
    println!("  - Sip water during training");
    println!("  - Aim for pale-yellow urine");
    println!("  - Add electrolytes when training hot or sweating heavily");
    println!();
}

/// Display one day's meals with their food lists and totals.
pub fn display_meal_plan(title: &str, meals: &[Meal]) {
    println!();
    println!("=== {} ===", title);

    let max_name_len = meals
        .iter()
        .flat_map(|m| m.foods.iter())
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10);

    for meal in meals {
        println!();
        println!("{} - {} ({})", meal.time, meal.name, meal.meal_type);

        for food in &meal.foods {
            println!(
                "  {:<width$} {:>4} g | {:>4.0} kcal | P {:>5.1} | C {:>5.1} | F {:>4.1}",
                food.name,
                food.amount_g,
                food.calories,
                food.protein,
                food.carbs,
                food.fat,
                width = max_name_len
            );
        }

        println!(
            "  Total: {:.0} kcal | P {:.1} g | C {:.1} g | F {:.1} g | fiber {:.1} g",
            meal.total_calories,
            meal.total_protein,
            meal.total_carbs,
            meal.total_fats,
            meal.total_fiber
        );
    }

    let day_calories: f64 = meals.iter().map(|m| m.total_calories).sum();
    println!();
    println!("Day total: {:.0} kcal across {} meals", day_calories, meals.len());
    println!();
}

/// Display the food catalog grouped as a flat table.
pub fn display_food_list(catalog: &Catalog) {
    println!();
    println!("=== Food Catalog ({} items, per 100 g) ===", catalog.len());
    println!();

    for food in catalog.all_foods() {
        println!(
            "  {:<28} {:<9} {:>4.0} kcal | P {:>4.1} | C {:>4.1} | F {:>5.1} | fiber {:>4.1}",
            food.name,
            food.category.to_string(),
            food.per_100g.calories,
            food.per_100g.protein,
            food.per_100g.carbs,
            food.per_100g.fat,
            food.per_100g.fiber
        );
    }

    println!();
}
