use crate::catalog::{
    fat_portion_cap, Catalog, CARB_ROTATION, CUT_PROTEIN_ROTATION, FAT_ROTATION,
    REFUEL_PROTEIN_ROTATION, VEG_ROTATION,
};
use crate::error::Result;
use crate::models::{ClockTime, MacroTargets, Meal, MealSlot, RefuellingPlan};
use crate::planner::constants::*;
use crate::planner::schedule::{distribute_meal_targets, Phase};

/// Assemble one meal for a slot with a fixed four-step greedy procedure.
///
/// A single rotation-selected protein source covers 90% of the slot's
/// protein; a carb source (with an optional second source when the first
/// caps out) fills the remaining carb need; refuelling meals top up fat
/// from a dedicated fat source; every meal closes with a fixed 100 g
/// vegetable. Residual error against the sub-targets is accepted as is.
pub fn build_meal(
    catalog: &Catalog,
    slot: &MealSlot,
    meal_index: usize,
    phase: Phase,
) -> Result<Meal> {
    let mut foods = Vec::new();
    let mut remaining_carbs = slot.carbs_g;
    let mut remaining_fats = slot.fats_g;

    // Protein step
    let protein_rotation = match phase {
        Phase::Cutting => CUT_PROTEIN_ROTATION,
        Phase::Refuelling => REFUEL_PROTEIN_ROTATION,
    };
    let protein_food =
        catalog.require(protein_rotation[meal_index % protein_rotation.len()])?;
    let protein_target = slot.protein_g * PROTEIN_TARGET_FRACTION;
    let protein_grams = (protein_target / protein_food.per_100g.protein * 100.0)
        .clamp(PROTEIN_MIN_G, PROTEIN_MAX_G);
    let portion = protein_food.portion(protein_grams);
    remaining_carbs -= portion.carbs;
    remaining_fats -= portion.fat;
    foods.push(portion);

    // Carb step
    if remaining_carbs > CARB_TRIGGER_G {
        let carb_food = catalog.require(CARB_ROTATION[meal_index % CARB_ROTATION.len()])?;
        let cap = if slot.carbs_g > CARB_HEAVY_SLOT_G {
            CARB_MAX_HEAVY_G
        } else {
            CARB_MAX_LIGHT_G
        };
        let ideal_grams = remaining_carbs / carb_food.per_100g.carbs * 100.0;
        let portion = carb_food.portion(ideal_grams.clamp(CARB_MIN_G, cap));
        remaining_carbs -= portion.carbs;
        remaining_fats -= portion.fat;
        foods.push(portion);

        // A capped-out first source can leave real carb need on the table;
        // fall back to a second source from an offset rotation slot.
        if ideal_grams > cap && remaining_carbs > SECOND_CARB_TRIGGER_G {
            let second_food = catalog.require(
                CARB_ROTATION[(meal_index + SECOND_CARB_OFFSET) % CARB_ROTATION.len()],
            )?;
            let second_grams = remaining_carbs / second_food.per_100g.carbs * 100.0;
            if second_grams >= CARB_MIN_G {
                let portion = second_food.portion(second_grams.min(SECOND_CARB_MAX_G));
                remaining_carbs -= portion.carbs;
                remaining_fats -= portion.fat;
                foods.push(portion);
            }
        }
    }

    // Fat step, refuelling meals only
    if phase == Phase::Refuelling && remaining_fats > FAT_TRIGGER_G {
        let fat_food = catalog.require(FAT_ROTATION[meal_index % FAT_ROTATION.len()])?;
        let fat_grams = remaining_fats / fat_food.per_100g.fat * 100.0;
        if fat_grams >= FAT_MIN_G {
            let cap = fat_portion_cap(&fat_food.name);
            foods.push(fat_food.portion(fat_grams.min(cap)));
        }
    }

    // Vegetable step: fixed amount, not macro-driven
    foods.push(catalog.rotate(VEG_ROTATION, meal_index, VEG_PORTION_G)?);

    Ok(Meal::from_portions(slot, foods))
}

/// Generate the four cutting-phase meals for a day.
pub fn generate_meal_plan(
    catalog: &Catalog,
    targets: &MacroTargets,
    wake_time: ClockTime,
    training_time: ClockTime,
) -> Result<Vec<Meal>> {
    let slots = distribute_meal_targets(
        targets.protein_g as f64,
        targets.carbs_g as f64,
        targets.fats_g as f64,
        wake_time,
        training_time,
        Phase::Cutting,
    );

    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| build_meal(catalog, slot, i, Phase::Cutting))
        .collect()
}

/// Generate the four meals for one refuelling week (1-based).
///
/// Rotation indices are offset by 4 from the cutting plan, plus one more
/// per extra week, so refuelling meals differ from cutting meals and from
/// each other across a 2-week ramp. A week beyond the plan's duration
/// reuses the final week's targets.
pub fn generate_refuelling_meal_plan(
    catalog: &Catalog,
    plan: &RefuellingPlan,
    week: usize,
    wake_time: ClockTime,
    training_time: ClockTime,
) -> Result<Vec<Meal>> {
    let week = week.max(1);
    let week_targets = plan.weeks[(week - 1).min(plan.weeks.len() - 1)];

    let slots = distribute_meal_targets(
        plan.protein_g as f64,
        week_targets.carbs_g as f64,
        plan.fats_g as f64,
        wake_time,
        training_time,
        Phase::Refuelling,
    );

    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            build_meal(
                catalog,
                slot,
                i + REFUEL_ROTATION_OFFSET + (week - 1),
                Phase::Refuelling,
            )
        })
        .collect()
}
