use serde::Serialize;

/// Cutting-phase macro and energy targets produced by the macro engine.
#[derive(Debug, Clone, Serialize)]
pub struct MacroTargets {
    pub bmr: u32,
    pub tdee: u32,
    pub calorie_target: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
    pub deficit_percent: u32,
    /// Projected weekly loss in kg, one decimal place.
    pub weekly_weight_loss_kg: f64,

    // Additive energy components of the TDEE.
    pub steps_calories: u32,
    pub training_calories_daily: u32,
    pub cardio_calories_daily: u32,
    pub neat_calories: u32,
}

/// One week of the refuelling phase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RefuellingWeek {
    pub calories: u32,
    pub carbs_g: u32,
}

/// Post-cut refuelling targets derived from the cutting-phase results.
///
/// Protein carries over from the cut; fat steps up to 0.6 g/kg; calories
/// and carbs ramp toward maintenance minus 5% over one or two weeks.
#[derive(Debug, Clone, Serialize)]
pub struct RefuellingPlan {
    /// Calendar week of the overall protocol when refuelling starts.
    pub start_week: u32,
    pub protein_g: u32,
    pub fats_g: u32,
    /// One entry per refuelling week (steady: 2, rapid: 1).
    pub weeks: Vec<RefuellingWeek>,
}

impl RefuellingPlan {
    pub fn duration_weeks(&self) -> u32 {
        self.weeks.len() as u32
    }
}

/// Daily fluid intake band for the whole protocol.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FluidTargets {
    pub low_ml: u32,
    pub high_ml: u32,
}
