use weight_cut_planner_rs::models::{
    AthleteProfile, ClockTime, Gender, RefuellingStrategy, RiskTolerance,
};
use weight_cut_planner_rs::planner::{
    calculate_bmr, calculate_macros, calculate_refuelling_plan, deficit_percent,
};

fn profile(
    weight_kg: f64,
    loss_percent: f64,
    risk: RiskTolerance,
    refuelling: RefuellingStrategy,
) -> AthleteProfile {
    AthleteProfile {
        age: 25,
        weight_kg,
        height_cm: 175.0,
        gender: Gender::Male,
        daily_steps: 12000,
        training_sessions_per_week: 5,
        cardio_minutes_per_week: 60,
        target_weight_loss_percent: loss_percent,
        risk_tolerance: risk,
        refuelling_strategy: refuelling,
        wake_time: "06:00".parse::<ClockTime>().unwrap(),
        training_time: "17:00".parse::<ClockTime>().unwrap(),
    }
}

const RISKS: [RiskTolerance; 3] = [
    RiskTolerance::Low,
    RiskTolerance::Medium,
    RiskTolerance::High,
];

const STRATEGIES: [RefuellingStrategy; 2] =
    [RefuellingStrategy::Steady, RefuellingStrategy::Rapid];

#[test]
fn test_bmr_golden_fixture() {
    // 10*85 + 6.25*175 - 5*25 + 5 = 1823.75
    assert_eq!(calculate_bmr(85.0, 175.0, 25, Gender::Male), 1824);
}

#[test]
fn test_deficit_bounds_over_full_grid() {
    for risk in RISKS {
        for strategy in STRATEGIES {
            for loss_tenths in 40..=80 {
                let loss = loss_tenths as f64 / 10.0;
                let deficit = deficit_percent(risk, loss, strategy);
                assert!(
                    (30..=50).contains(&deficit),
                    "deficit {deficit} out of bounds for {risk:?}/{loss}/{strategy:?}"
                );
            }
        }
    }
}

#[test]
fn test_macro_calorie_reconciliation_over_grid() {
    for risk in RISKS {
        for strategy in STRATEGIES {
            for weight in [40.0, 62.5, 85.0, 120.0, 200.0] {
                for loss in [4.0, 6.0, 8.0] {
                    let targets = calculate_macros(&profile(weight, loss, risk, strategy));
                    let macro_calories = targets.protein_g as f64 * 4.0
                        + targets.fats_g as f64 * 9.0
                        + targets.carbs_g as f64 * 4.0;
                    let gap = (targets.calorie_target as f64 - macro_calories).abs();
                    // One flooring step of rounding slack
                    assert!(
                        gap <= 4.0,
                        "reconciliation gap {gap} for weight {weight}, loss {loss}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_refuelling_week1_between_cut_and_maintenance() {
    for risk in RISKS {
        for weight in [40.0, 85.0, 140.0, 200.0] {
            for loss in [4.0, 6.0, 8.0] {
                let p = profile(weight, loss, risk, RefuellingStrategy::Steady);
                let targets = calculate_macros(&p);
                let plan = calculate_refuelling_plan(&targets, &p);
                let maintenance = (targets.tdee as f64 * 0.95).round() as u32;

                assert_eq!(plan.duration_weeks(), 2);
                assert!(plan.weeks[0].calories >= targets.calorie_target);
                assert!(plan.weeks[0].calories <= maintenance);
                assert_eq!(plan.weeks[1].calories, maintenance);
                // Calories ramp upward week over week
                assert!(plan.weeks[0].calories <= plan.weeks[1].calories);
            }
        }
    }
}

#[test]
fn test_refuelling_protein_carries_over_and_fat_steps_up() {
    for strategy in STRATEGIES {
        let p = profile(85.0, 6.0, RiskTolerance::Medium, strategy);
        let targets = calculate_macros(&p);
        let plan = calculate_refuelling_plan(&targets, &p);

        assert_eq!(plan.protein_g, targets.protein_g);
        assert_eq!(plan.fats_g, (85.0_f64 * 0.6).round() as u32);
        assert!(plan.fats_g > targets.fats_g);
    }
}

#[test]
fn test_refuelling_start_week_by_strategy() {
    let steady = profile(85.0, 6.0, RiskTolerance::Medium, RefuellingStrategy::Steady);
    let targets = calculate_macros(&steady);
    assert_eq!(calculate_refuelling_plan(&targets, &steady).start_week, 4);

    let rapid = profile(85.0, 6.0, RiskTolerance::Medium, RefuellingStrategy::Rapid);
    let targets = calculate_macros(&rapid);
    let plan = calculate_refuelling_plan(&targets, &rapid);
    assert_eq!(plan.start_week, 5);
    assert_eq!(plan.duration_weeks(), 1);
}

#[test]
fn test_carb_non_negativity_at_boundaries() {
    // Lightest athlete with the most aggressive cut
    let mut p = profile(40.0, 8.0, RiskTolerance::High, RefuellingStrategy::Rapid);
    p.height_cm = 140.0;
    p.age = 65;
    p.daily_steps = 10000;
    p.training_sessions_per_week = 2;
    p.cardio_minutes_per_week = 0;

    let targets = calculate_macros(&p);
    let plan = calculate_refuelling_plan(&targets, &p);

    // carbs_g is unsigned; a flooring bug would show up as a huge wrapped
    // value rather than a negative one
    assert!(targets.carbs_g <= targets.calorie_target / 4 + 1);
    for week in &plan.weeks {
        assert!(week.carbs_g <= week.calories / 4 + 1);
    }
}

#[test]
fn test_deficit_monotonic_in_risk() {
    // Lower risk tolerance supports a larger deficit
    let low = deficit_percent(RiskTolerance::Low, 6.0, RefuellingStrategy::Steady);
    let medium = deficit_percent(RiskTolerance::Medium, 6.0, RefuellingStrategy::Steady);
    let high = deficit_percent(RiskTolerance::High, 6.0, RefuellingStrategy::Steady);
    assert!(low > medium && medium > high);
}
