/// Calories per gram of protein and carbohydrate.
pub const CAL_PER_G_PROTEIN: f64 = 4.0;
pub const CAL_PER_G_CARB: f64 = 4.0;

/// Calories per gram of fat.
pub const CAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy expenditure model
// ─────────────────────────────────────────────────────────────────────────────

/// Calories per step: weight-dependent slope plus flat base.
pub const STEP_CAL_PER_KG: f64 = 0.00035;
pub const STEP_CAL_BASE: f64 = 0.02;

/// Resistance training: 4 METs over 90-minute sessions.
pub const TRAINING_METS: f64 = 4.0;
pub const TRAINING_SESSION_MINUTES: f64 = 90.0;

/// Steady-state cardio intensity.
pub const CARDIO_METS: f64 = 5.0;

/// NEAT: base per kg plus a step-count adjustment above a sedentary baseline.
pub const NEAT_PER_KG: f64 = 3.0;
pub const NEAT_STEP_BASELINE: f64 = 5000.0;
pub const NEAT_PER_EXTRA_STEP: f64 = 0.01;

/// TEF approximated as 10% of an assumed intake of 70% of BMR.
pub const TEF_INTAKE_FRACTION: f64 = 0.7;
pub const TEF_RATE: f64 = 0.1;

// ─────────────────────────────────────────────────────────────────────────────
// Deficit sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Deficit percent = base + combined score * range, giving 30-50%.
pub const DEFICIT_BASE_PERCENT: f64 = 30.0;
pub const DEFICIT_RANGE_PERCENT: f64 = 20.0;

/// Weights of the three normalized deficit scores.
pub const RISK_SCORE_WEIGHT: f64 = 0.35;
pub const LOSS_SCORE_WEIGHT: f64 = 0.35;
pub const REFUEL_SCORE_WEIGHT: f64 = 0.30;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Cutting protein: 1 g per lb of bodyweight.
pub const PROTEIN_G_PER_KG: f64 = 2.205;

/// Cutting fat floor in g per kg.
pub const CUT_FAT_G_PER_KG: f64 = 0.35;

/// Refuelling fat in g per kg.
pub const REFUEL_FAT_G_PER_KG: f64 = 0.6;

/// Refuelling calorie ceiling: maintenance minus 5%.
pub const MAINTENANCE_TAPER: f64 = 0.95;

/// Approximate kcal per kg of body fat.
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal schedule
// ─────────────────────────────────────────────────────────────────────────────

/// Meals per day; protein and fat base share = daily total / this.
pub const MEALS_PER_DAY: usize = 4;

/// Training counts as "early" when it starts within this many hours of waking.
pub const EARLY_TRAINING_MAX_HOURS: f64 = 4.0;

/// Fraction of daily carbs placed around training (rest spread elsewhere).
pub const CUT_TRAINING_CARB_SHARE: f64 = 0.60;
pub const REFUEL_TRAINING_CARB_SHARE: f64 = 0.55;

// ─────────────────────────────────────────────────────────────────────────────
// Meal builder portion bounds
// ─────────────────────────────────────────────────────────────────────────────

/// The single protein source covers this fraction of the slot target.
pub const PROTEIN_TARGET_FRACTION: f64 = 0.9;
pub const PROTEIN_MIN_G: f64 = 50.0;
pub const PROTEIN_MAX_G: f64 = 250.0;

/// Carb portion added only when this much carb need remains.
pub const CARB_TRIGGER_G: f64 = 10.0;
pub const CARB_MIN_G: f64 = 30.0;

/// Carb portion cap: larger for carb-heavy slots.
pub const CARB_HEAVY_SLOT_G: f64 = 100.0;
pub const CARB_MAX_HEAVY_G: f64 = 550.0;
pub const CARB_MAX_LIGHT_G: f64 = 400.0;

/// Second carb source: rotation offset and bounds.
pub const SECOND_CARB_TRIGGER_G: f64 = 15.0;
pub const SECOND_CARB_OFFSET: usize = 2;
pub const SECOND_CARB_MAX_G: f64 = 250.0;

/// Fat portion added only when this much fat need remains, and only when the
/// computed size reaches the minimum.
pub const FAT_TRIGGER_G: f64 = 3.0;
pub const FAT_MIN_G: f64 = 5.0;

/// Fixed vegetable portion per meal.
pub const VEG_PORTION_G: f64 = 100.0;

/// Base rotation index offset for refuelling meals; each extra refuelling
/// week advances the index by one more for cross-week variety.
pub const REFUEL_ROTATION_OFFSET: usize = 4;
