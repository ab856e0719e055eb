use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{
    AthleteProfile, ClockTime, Gender, RefuellingStrategy, RiskTolerance,
};

fn prompt_number(prompt: &str, default: f64, min: f64, max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{prompt} ({min}-{max})"))
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !(min..=max).contains(&value) {
        return Err(PlanError::InvalidInput(format!(
            "{prompt} must be between {min} and {max}"
        )));
    }

    Ok(value)
}

fn prompt_time(prompt: &str, default: &str) -> Result<ClockTime> {
    let input: String = Input::new()
        .with_prompt(format!("{prompt} (HH:MM, 24h)"))
        .default(default.to_string())
        .interact_text()?;

    input.trim().parse()
}

fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&["male", "female"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Gender::Male,
        _ => Gender::Female,
    })
}

fn prompt_risk_tolerance() -> Result<RiskTolerance> {
    let selection = Select::new()
        .with_prompt("Risk tolerance (how aggressive can the deficit be?)")
        .items(&[
            "low    - prioritize performance, larger deficit is fine",
            "medium - balanced",
            "high   - already close to the limit, keep the deficit small",
        ])
        .default(1)
        .interact()?;

    Ok(match selection {
        0 => RiskTolerance::Low,
        1 => RiskTolerance::Medium,
        _ => RiskTolerance::High,
    })
}

fn prompt_refuelling_strategy() -> Result<RefuellingStrategy> {
    let selection = Select::new()
        .with_prompt("Refuelling strategy")
        .items(&[
            "steady - 3 cutting weeks, 2 refuelling weeks",
            "rapid  - 4 cutting weeks, 1 refuelling week",
        ])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => RefuellingStrategy::Steady,
        _ => RefuellingStrategy::Rapid,
    })
}

/// Collect a full athlete profile interactively.
///
/// Each numeric field is range-checked on entry, so the resulting profile
/// always satisfies [`AthleteProfile::validate`].
pub fn collect_athlete_profile() -> Result<AthleteProfile> {
    let age = prompt_number("Age in years", 25.0, 16.0, 65.0)? as u32;
    let weight_kg = prompt_number("Body weight in kg", 80.0, 40.0, 200.0)?;
    let height_cm = prompt_number("Height in cm", 175.0, 140.0, 220.0)?;
    let gender = prompt_gender()?;
    let daily_steps = prompt_number("Daily steps", 12000.0, 10000.0, 15000.0)? as u32;
    let training_sessions_per_week =
        prompt_number("Training sessions per week", 5.0, 2.0, 12.0)? as u32;
    let cardio_minutes_per_week =
        prompt_number("Cardio minutes per week", 60.0, 0.0, 300.0)? as u32;
    let target_weight_loss_percent =
        prompt_number("Target weight loss in percent of body weight", 6.0, 4.0, 8.0)?;
    let risk_tolerance = prompt_risk_tolerance()?;
    let refuelling_strategy = prompt_refuelling_strategy()?;
    let wake_time = prompt_time("Usual wake time", "06:00")?;
    let training_time = prompt_time("Usual training time", "17:00")?;

    Ok(AthleteProfile {
        age,
        weight_kg,
        height_cm,
        gender,
        daily_steps,
        training_sessions_per_week,
        cardio_minutes_per_week,
        target_weight_loss_percent,
        risk_tolerance,
        refuelling_strategy,
        wake_time,
        training_time,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
