pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_meal_plan_csv;
pub use prompts::{collect_athlete_profile, prompt_yes_no};
pub use render::{
    display_fluid_guidelines, display_food_list, display_macro_targets, display_meal_plan,
    display_refuelling_plan,
};
