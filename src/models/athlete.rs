use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::time::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefuellingStrategy {
    /// 3 cutting weeks followed by 2 refuelling weeks.
    Steady,
    /// 4 cutting weeks followed by 1 refuelling week.
    Rapid,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for RefuellingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefuellingStrategy::Steady => write!(f, "steady"),
            RefuellingStrategy::Rapid => write!(f, "rapid"),
        }
    }
}

/// Athlete parameters for one plan calculation.
///
/// The planner assumes values are within the documented ranges; profiles
/// loaded from disk must pass [`AthleteProfile::validate`] first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Age in years (16-65).
    pub age: u32,

    /// Body weight in kg (40-200).
    pub weight_kg: f64,

    /// Height in cm (140-220).
    pub height_cm: f64,

    pub gender: Gender,

    /// Daily step count (10000-15000).
    pub daily_steps: u32,

    /// Resistance training sessions per week (2-12).
    pub training_sessions_per_week: u32,

    /// Cardio minutes per week (0-300).
    pub cardio_minutes_per_week: u32,

    /// Target weight loss as percent of body weight (4-8).
    pub target_weight_loss_percent: f64,

    pub risk_tolerance: RiskTolerance,

    pub refuelling_strategy: RefuellingStrategy,

    pub wake_time: ClockTime,

    pub training_time: ClockTime,
}

impl AthleteProfile {
    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<()> {
        fn check(ok: bool, msg: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(PlanError::InvalidInput(msg.to_string()))
            }
        }

        check((16..=65).contains(&self.age), "age must be 16-65")?;
        check(
            (40.0..=200.0).contains(&self.weight_kg),
            "weight must be 40-200 kg",
        )?;
        check(
            (140.0..=220.0).contains(&self.height_cm),
            "height must be 140-220 cm",
        )?;
        check(
            (10000..=15000).contains(&self.daily_steps),
            "daily steps must be 10000-15000",
        )?;
        check(
            (2..=12).contains(&self.training_sessions_per_week),
            "training sessions must be 2-12 per week",
        )?;
        check(
            self.cardio_minutes_per_week <= 300,
            "cardio must be 0-300 minutes per week",
        )?;
        check(
            (4.0..=8.0).contains(&self.target_weight_loss_percent),
            "target weight loss must be 4-8 percent",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> AthleteProfile {
        AthleteProfile {
            age: 25,
            weight_kg: 85.0,
            height_cm: 175.0,
            gender: Gender::Male,
            daily_steps: 12000,
            training_sessions_per_week: 5,
            cardio_minutes_per_week: 60,
            target_weight_loss_percent: 6.0,
            risk_tolerance: RiskTolerance::Medium,
            refuelling_strategy: RefuellingStrategy::Steady,
            wake_time: "06:00".parse().unwrap(),
            training_time: "17:00".parse().unwrap(),
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut p = sample_profile();
        p.age = 15;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.weight_kg = 39.0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.daily_steps = 9000;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.target_weight_loss_percent = 8.5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: AthleteProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wake_time, profile.wake_time);
        assert_eq!(back.gender, Gender::Male);
        assert_eq!(back.refuelling_strategy, RefuellingStrategy::Steady);
    }
}
