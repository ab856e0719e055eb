use crate::models::{
    AthleteProfile, FluidTargets, Gender, MacroTargets, RefuellingPlan, RefuellingStrategy,
    RefuellingWeek, RiskTolerance,
};
use crate::planner::constants::*;

/// Basal metabolic rate via the Mifflin-St Jeor equation, rounded.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> u32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let adjusted = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    adjusted.round() as u32
}

/// Daily calories burned walking.
pub fn steps_calories(steps: u32, weight_kg: f64) -> u32 {
    let calories_per_step = STEP_CAL_PER_KG * weight_kg + STEP_CAL_BASE;
    (steps as f64 * calories_per_step).round() as u32
}

/// Weekly training expenditure averaged per day.
pub fn training_calories_daily(sessions: u32, weight_kg: f64) -> u32 {
    let weekly =
        sessions as f64 * TRAINING_METS * weight_kg * (TRAINING_SESSION_MINUTES / 60.0);
    (weekly / 7.0).round() as u32
}

/// Weekly cardio expenditure averaged per day.
pub fn cardio_calories_daily(minutes_per_week: u32, weight_kg: f64) -> u32 {
    let weekly = CARDIO_METS * weight_kg * (minutes_per_week as f64 / 60.0);
    (weekly / 7.0).round() as u32
}

/// Non-exercise activity thermogenesis.
pub fn neat_calories(weight_kg: f64, steps: u32) -> u32 {
    let base = weight_kg * NEAT_PER_KG;
    let step_adjustment = (steps as f64 - NEAT_STEP_BASELINE) * NEAT_PER_EXTRA_STEP;
    (base + step_adjustment.max(0.0)).round() as u32
}

/// Deficit percent from three normalized risk/loss/refuelling scores.
///
/// Each score is in [0, 1]; the weighted combination maps onto 30-50%.
pub fn deficit_percent(
    risk: RiskTolerance,
    target_loss_percent: f64,
    refuelling: RefuellingStrategy,
) -> u32 {
    let risk_score = match risk {
        RiskTolerance::Low => 1.0,
        RiskTolerance::Medium => 0.5,
        RiskTolerance::High => 0.0,
    };
    let loss_score = 1.0 - (target_loss_percent - 4.0) / 4.0;
    let refuel_score = match refuelling {
        RefuellingStrategy::Steady => 1.0,
        RefuellingStrategy::Rapid => 0.0,
    };

    let combined = risk_score * RISK_SCORE_WEIGHT
        + loss_score * LOSS_SCORE_WEIGHT
        + refuel_score * REFUEL_SCORE_WEIGHT;

    (DEFICIT_BASE_PERCENT + combined * DEFICIT_RANGE_PERCENT).round() as u32
}

/// Compute the full cutting-phase macro targets for a profile.
pub fn calculate_macros(profile: &AthleteProfile) -> MacroTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let steps_cal = steps_calories(profile.daily_steps, profile.weight_kg);
    let training_cal = training_calories_daily(profile.training_sessions_per_week, profile.weight_kg);
    let cardio_cal = cardio_calories_daily(profile.cardio_minutes_per_week, profile.weight_kg);
    let neat_cal = neat_calories(profile.weight_kg, profile.daily_steps);

    let estimated_intake = bmr as f64 * TEF_INTAKE_FRACTION;
    let tef = (estimated_intake * TEF_RATE).round() as u32;

    let tdee = bmr + steps_cal + training_cal + cardio_cal + neat_cal + tef;

    let deficit = deficit_percent(
        profile.risk_tolerance,
        profile.target_weight_loss_percent,
        profile.refuelling_strategy,
    );
    let calorie_target = (tdee as f64 * (1.0 - deficit as f64 / 100.0)).round() as u32;

    let protein_g = (profile.weight_kg * PROTEIN_G_PER_KG).round() as u32;
    let fats_g = (profile.weight_kg * CUT_FAT_G_PER_KG).round() as u32;
    let carbs_g = remaining_carb_grams(calorie_target, protein_g, fats_g);

    let daily_deficit = (tdee - calorie_target) as f64;
    let weekly_weight_loss_kg = ((daily_deficit * 7.0 / KCAL_PER_KG_FAT) * 10.0).round() / 10.0;

    MacroTargets {
        bmr,
        tdee,
        calorie_target,
        protein_g,
        carbs_g,
        fats_g,
        deficit_percent: deficit,
        weekly_weight_loss_kg,
        steps_calories: steps_cal,
        training_calories_daily: training_cal,
        cardio_calories_daily: cardio_cal,
        neat_calories: neat_cal,
    }
}

/// Carb grams that fill the calories left after protein and fat, floored at 0.
fn remaining_carb_grams(calories: u32, protein_g: u32, fats_g: u32) -> u32 {
    let remaining = calories as f64
        - protein_g as f64 * CAL_PER_G_PROTEIN
        - fats_g as f64 * CAL_PER_G_FAT;
    (remaining / CAL_PER_G_CARB).round().max(0.0) as u32
}

/// Derive the refuelling-phase targets from the cutting-phase results.
///
/// Steady: 3 cutting weeks then a 2-week ramp (midpoint, then maintenance
/// minus 5%). Rapid: 4 cutting weeks then a single week at maintenance
/// minus 5%. Protein carries over; fat steps up to 0.6 g/kg.
pub fn calculate_refuelling_plan(
    targets: &MacroTargets,
    profile: &AthleteProfile,
) -> RefuellingPlan {
    let cutting_weeks = match profile.refuelling_strategy {
        RefuellingStrategy::Steady => 3,
        RefuellingStrategy::Rapid => 4,
    };
    let start_week = cutting_weeks + 1;

    let maintenance_calories = (targets.tdee as f64 * MAINTENANCE_TAPER).round() as u32;
    let protein_g = targets.protein_g;
    let fats_g = (profile.weight_kg * REFUEL_FAT_G_PER_KG).round() as u32;

    let week_at = |calories: u32| RefuellingWeek {
        calories,
        carbs_g: remaining_carb_grams(calories, protein_g, fats_g),
    };

    let weeks = match profile.refuelling_strategy {
        RefuellingStrategy::Steady => {
            let midpoint =
                ((targets.calorie_target + maintenance_calories) as f64 / 2.0).round() as u32;
            vec![week_at(midpoint), week_at(maintenance_calories)]
        }
        RefuellingStrategy::Rapid => vec![week_at(maintenance_calories)],
    };

    RefuellingPlan {
        start_week,
        protein_g,
        fats_g,
        weeks,
    }
}

/// Daily fluid band for the whole protocol: 40-45 mL per kg.
pub fn fluid_targets(weight_kg: f64) -> FluidTargets {
    FluidTargets {
        low_ml: (weight_kg * 40.0).round() as u32,
        high_ml: (weight_kg * 45.0).round() as u32,
    }
}
