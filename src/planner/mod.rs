pub mod builder;
pub mod constants;
pub mod engine;
pub mod schedule;

pub use builder::{build_meal, generate_meal_plan, generate_refuelling_meal_plan};
pub use engine::{
    calculate_bmr, calculate_macros, calculate_refuelling_plan, deficit_percent, fluid_targets,
};
pub use schedule::{distribute_meal_targets, Phase};
