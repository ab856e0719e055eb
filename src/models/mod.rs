pub mod athlete;
pub mod food;
pub mod meal;
pub mod plan;
pub mod time;

pub use athlete::{AthleteProfile, Gender, RefuellingStrategy, RiskTolerance};
pub use food::{FoodCategory, FoodItem, FoodPortion, Per100g};
pub use meal::{Meal, MealSlot, MealType};
pub use plan::{FluidTargets, MacroTargets, RefuellingPlan, RefuellingWeek};
pub use time::ClockTime;
