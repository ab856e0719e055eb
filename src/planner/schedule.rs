use crate::models::{ClockTime, MealSlot, MealType};
use crate::planner::constants::*;

/// Which phase of the protocol a day's plan belongs to.
///
/// Refuelling days bias slightly less of the carb pool around training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Cutting,
    Refuelling,
}

impl Phase {
    fn training_carb_share(self) -> f64 {
        match self {
            Phase::Cutting => CUT_TRAINING_CARB_SHARE,
            Phase::Refuelling => REFUEL_TRAINING_CARB_SHARE,
        }
    }

    /// Early-schedule carb split of the training pool across pre/post slots.
    fn early_pre_post_split(self) -> (f64, f64) {
        match self {
            Phase::Cutting => (0.25, 0.75),
            Phase::Refuelling => (0.30, 0.70),
        }
    }
}

/// Split a day's macro totals into four scheduled meal slots.
///
/// Training within 4 hours of waking selects the early-training schedule
/// (light pre-training meal, big post-training breakfast); otherwise meals
/// anchor around a later session. Carbs are pooled 60/40 (cutting) or 55/45
/// (refuelling) between training-adjacent and other meals.
pub fn distribute_meal_targets(
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
    wake_time: ClockTime,
    training_time: ClockTime,
    phase: Phase,
) -> Vec<MealSlot> {
    let hours_to_training = wake_time.hours_until(training_time);
    let early_training =
        (0.0..=EARLY_TRAINING_MAX_HOURS).contains(&hours_to_training);

    let protein_share = protein_g / MEALS_PER_DAY as f64;
    let fat_share = fats_g / MEALS_PER_DAY as f64;
    let training_carbs = carbs_g * phase.training_carb_share();
    let other_carbs = carbs_g * (1.0 - phase.training_carb_share());

    let slot = |name: &str,
                meal_type: MealType,
                time: ClockTime,
                protein: f64,
                carbs: f64,
                fats: f64| MealSlot {
        name: name.to_string(),
        meal_type,
        time,
        protein_g: protein,
        carbs_g: carbs,
        fats_g: fats,
        is_pre_training: meal_type == MealType::PreTraining,
        is_post_training: meal_type == MealType::PostTraining,
    };

    if early_training {
        let (pre_split, post_split) = phase.early_pre_post_split();
        let pre_time = training_time.add_hours(-1.0);
        let post_time = training_time.add_hours(2.0);
        let lunch_time = post_time.add_hours(3.0);
        let dinner_time = lunch_time.add_hours(4.0);

        vec![
            slot(
                "Light Pre-Training",
                MealType::PreTraining,
                pre_time,
                protein_share * 0.8,
                training_carbs * pre_split,
                fat_share * 0.5,
            ),
            slot(
                "Post-Training Breakfast",
                MealType::PostTraining,
                post_time,
                protein_share * 1.2,
                training_carbs * post_split,
                fat_share * 0.5,
            ),
            slot(
                "Lunch",
                MealType::Lunch,
                lunch_time,
                protein_share,
                other_carbs * 0.5,
                fat_share * 1.5,
            ),
            slot(
                "Dinner",
                MealType::Dinner,
                dinner_time,
                protein_share,
                other_carbs * 0.5,
                fat_share * 1.5,
            ),
        ]
    } else {
        let breakfast_time = wake_time.add_hours(0.5);
        let pre_time = training_time.add_hours(-2.0);
        let post_time = training_time.add_hours(2.0);
        let snack_time = post_time.add_hours(3.0);

        vec![
            slot(
                "Breakfast",
                MealType::Breakfast,
                breakfast_time,
                protein_share,
                other_carbs * 0.5,
                fat_share,
            ),
            slot(
                "Lunch / Pre-Training",
                MealType::PreTraining,
                pre_time,
                protein_share,
                training_carbs * 0.45,
                fat_share,
            ),
            slot(
                "Dinner / Post-Training",
                MealType::PostTraining,
                post_time,
                protein_share,
                training_carbs * 0.55,
                fat_share,
            ),
            slot(
                "Evening Snack",
                MealType::Snack,
                snack_time,
                protein_share,
                other_carbs * 0.5,
                fat_share,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_late_training_schedule() {
        let slots =
            distribute_meal_targets(187.0, 216.0, 30.0, t("06:00"), t("17:00"), Phase::Cutting);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].name, "Breakfast");
        assert_eq!(slots[1].name, "Lunch / Pre-Training");
        assert_eq!(slots[2].name, "Dinner / Post-Training");
        assert_eq!(slots[3].name, "Evening Snack");

        assert_eq!(slots[0].time, t("06:30"));
        assert_eq!(slots[1].time, t("15:00"));
        assert_eq!(slots[2].time, t("19:00"));
        assert_eq!(slots[3].time, t("22:00"));

        assert!(slots[1].is_pre_training);
        assert!(slots[2].is_post_training);
        assert!(!slots[0].is_pre_training && !slots[0].is_post_training);
    }

    #[test]
    fn test_early_training_schedule() {
        let slots =
            distribute_meal_targets(160.0, 200.0, 28.0, t("06:00"), t("07:00"), Phase::Cutting);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].name, "Light Pre-Training");
        assert_eq!(slots[1].name, "Post-Training Breakfast");
        assert_eq!(slots[2].name, "Lunch");
        assert_eq!(slots[3].name, "Dinner");

        assert_eq!(slots[0].time, t("06:00"));
        assert_eq!(slots[1].time, t("09:00"));
        assert_eq!(slots[2].time, t("12:00"));
        assert_eq!(slots[3].time, t("16:00"));

        // Light pre-training meal, larger post-training meal
        assert_float_absolute_eq!(slots[0].protein_g, 160.0 / 4.0 * 0.8, 1e-9);
        assert_float_absolute_eq!(slots[1].protein_g, 160.0 / 4.0 * 1.2, 1e-9);
    }

    #[test]
    fn test_boundary_is_early_training() {
        // Exactly 4 hours still counts as early
        let slots =
            distribute_meal_targets(160.0, 200.0, 28.0, t("06:00"), t("10:00"), Phase::Cutting);
        assert_eq!(slots[0].name, "Light Pre-Training");

        let slots =
            distribute_meal_targets(160.0, 200.0, 28.0, t("06:00"), t("10:01"), Phase::Cutting);
        assert_eq!(slots[0].name, "Breakfast");
    }

    #[test]
    fn test_negative_hours_to_training_not_early() {
        // Training clock-earlier than waking: negative difference, late branch
        let slots =
            distribute_meal_targets(160.0, 200.0, 28.0, t("08:00"), t("06:00"), Phase::Cutting);
        assert_eq!(slots[0].name, "Breakfast");
    }

    #[test]
    fn test_cutting_carb_pools() {
        let slots =
            distribute_meal_targets(180.0, 200.0, 32.0, t("06:00"), t("17:00"), Phase::Cutting);
        let training_pool = 200.0 * 0.6;
        let other_pool = 200.0 * 0.4;
        assert_float_absolute_eq!(slots[0].carbs_g, other_pool * 0.5, 1e-9);
        assert_float_absolute_eq!(slots[1].carbs_g, training_pool * 0.45, 1e-9);
        assert_float_absolute_eq!(slots[2].carbs_g, training_pool * 0.55, 1e-9);
        assert_float_absolute_eq!(slots[3].carbs_g, other_pool * 0.5, 1e-9);

        // Pools partition the daily total
        let total: f64 = slots.iter().map(|s| s.carbs_g).sum();
        assert_float_absolute_eq!(total, 200.0, 1e-9);
    }

    #[test]
    fn test_refuelling_carb_pools_and_early_split() {
        let slots = distribute_meal_targets(
            180.0,
            300.0,
            48.0,
            t("06:00"),
            t("08:00"),
            Phase::Refuelling,
        );
        let training_pool = 300.0 * 0.55;
        assert_float_absolute_eq!(slots[0].carbs_g, training_pool * 0.30, 1e-9);
        assert_float_absolute_eq!(slots[1].carbs_g, training_pool * 0.70, 1e-9);
    }

    #[test]
    fn test_fat_shares() {
        let slots =
            distribute_meal_targets(180.0, 200.0, 40.0, t("06:00"), t("07:00"), Phase::Cutting);
        assert_float_absolute_eq!(slots[0].fats_g, 5.0, 1e-9);
        assert_float_absolute_eq!(slots[1].fats_g, 5.0, 1e-9);
        assert_float_absolute_eq!(slots[2].fats_g, 15.0, 1e-9);
        assert_float_absolute_eq!(slots[3].fats_g, 15.0, 1e-9);
    }
}
