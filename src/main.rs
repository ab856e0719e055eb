use clap::Parser;
use std::path::Path;

use weight_cut_planner_rs::catalog::Catalog;
use weight_cut_planner_rs::cli::{Cli, Command};
use weight_cut_planner_rs::error::Result;
use weight_cut_planner_rs::interface::{
    collect_athlete_profile, display_fluid_guidelines, display_food_list, display_macro_targets,
    display_meal_plan, display_refuelling_plan, prompt_yes_no, write_meal_plan_csv,
};
use weight_cut_planner_rs::models::{AthleteProfile, Meal};
use weight_cut_planner_rs::planner::{
    calculate_macros, calculate_refuelling_plan, fluid_targets, generate_meal_plan,
    generate_refuelling_meal_plan,
};
use weight_cut_planner_rs::state::{load_catalog_foods, load_profile, save_profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::new(load_catalog_foods(path)?)?,
        None => Catalog::standard()?,
    };

    match command {
        Command::Plan { export_csv } => cmd_plan(&catalog, cli.profile.as_deref(), export_csv),
        Command::Catalog => {
            display_food_list(&catalog);
            Ok(())
        }
    }
}

/// Obtain a profile from disk or from interactive prompts.
fn obtain_profile(profile_path: Option<&str>) -> Result<AthleteProfile> {
    if let Some(path) = profile_path {
        if !Path::new(path).exists() {
            eprintln!("Profile file not found: {}", path);
            std::process::exit(1);
        }
        let profile = load_profile(path)?;
        println!("Loaded profile from {}", path);
        return Ok(profile);
    }

    let profile = collect_athlete_profile()?;

    if prompt_yes_no("Save this profile for next time?", false)? {
        let path = "athlete_profile.json";
        save_profile(path, &profile)?;
        println!("Profile saved to {}", path);
    }

    Ok(profile)
}

/// Compute the full plan and render every phase.
fn cmd_plan(
    catalog: &Catalog,
    profile_path: Option<&str>,
    export_csv: Option<String>,
) -> Result<()> {
    let profile = obtain_profile(profile_path)?;

    let targets = calculate_macros(&profile);
    let refuelling = calculate_refuelling_plan(&targets, &profile);
    let fluids = fluid_targets(profile.weight_kg);

    display_macro_targets(&targets);

    let cutting_meals =
        generate_meal_plan(catalog, &targets, profile.wake_time, profile.training_time)?;
    display_meal_plan("Cutting Phase Meal Plan", &cutting_meals);

    display_refuelling_plan(&refuelling);

    let mut refuelling_weeks: Vec<(String, Vec<Meal>)> = Vec::new();
    for week in 1..=refuelling.duration_weeks() as usize {
        let meals = generate_refuelling_meal_plan(
            catalog,
            &refuelling,
            week,
            profile.wake_time,
            profile.training_time,
        )?;
        let label = format!("Refuelling Week {} Meal Plan", refuelling.start_week as usize + week - 1);
        display_meal_plan(&label, &meals);
        refuelling_weeks.push((label, meals));
    }

    display_fluid_guidelines(&fluids);

    if let Some(path) = export_csv {
        let mut sections: Vec<(&str, &[Meal])> = vec![("Cutting", &cutting_meals)];
        for (label, meals) in &refuelling_weeks {
            sections.push((label.as_str(), meals.as_slice()));
        }
        write_meal_plan_csv(&path, &sections)?;
        println!("Meal plan exported to {}", path);
    }

    Ok(())
}
