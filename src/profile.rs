use serde::{Deserialize, Serialize};

use crate::catalog::{Diet, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn target_calories(self) -> u32 {
        match self {
            Goal::Lose => 1600,
            Goal::Maintain => 2000,
            Goal::Gain => 2400,
        }
    }

    /// Grams per day.
    pub fn target_protein(self) -> f64 {
        match self {
            Goal::Lose => 80.0,
            Goal::Maintain => 60.0,
            Goal::Gain => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CookingSkill {
    Beginner,
    Intermediate,
    Advanced,
}

impl CookingSkill {
    /// Difficulty levels a cook at this tier may be given. Each tier includes the one below.
    pub fn allowed_difficulties(self) -> &'static [Difficulty] {
        match self {
            CookingSkill::Beginner => &[Difficulty::NoCook, Difficulty::Easy],
            CookingSkill::Intermediate => {
                &[Difficulty::NoCook, Difficulty::Easy, Difficulty::Medium]
            }
            CookingSkill::Advanced => &[
                Difficulty::NoCook,
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Hard,
            ],
        }
    }
}

/// Planning inputs for one user. Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub goal: Goal,
    pub diet: Diet,
    /// Daily budget in INR
    pub daily_budget: f64,
    pub cooking_skill: CookingSkill,
    pub target_calories: u32,
    pub target_protein: f64,
}

impl UserProfile {
    /// Builds a profile whose targets come from the goal lookup.
    pub fn new(goal: Goal, diet: Diet, daily_budget: f64, cooking_skill: CookingSkill) -> Self {
        Self {
            goal,
            diet,
            daily_budget,
            cooking_skill,
            target_calories: goal.target_calories(),
            target_protein: goal.target_protein(),
        }
    }

    /// Changes the goal and re-derives both targets from it.
    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
        self.target_calories = goal.target_calories();
        self.target_protein = goal.target_protein();
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(Goal::Maintain, Diet::Veg, 150.0, CookingSkill::Beginner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_targets() {
        let profile = UserProfile::default();
        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.diet, Diet::Veg);
        assert_eq!(profile.daily_budget, 150.0);
        assert_eq!(profile.cooking_skill, CookingSkill::Beginner);
        assert_eq!(profile.target_calories, 2000);
        assert_eq!(profile.target_protein, 60.0);
    }

    #[test]
    fn test_set_goal_rederives_targets() {
        let mut profile = UserProfile::default();
        profile.set_goal(Goal::Lose);
        assert_eq!((profile.target_calories, profile.target_protein), (1600, 80.0));
        profile.set_goal(Goal::Gain);
        assert_eq!((profile.target_calories, profile.target_protein), (2400, 100.0));
    }

    #[test]
    fn test_skill_tiers_are_nested() {
        let beginner = CookingSkill::Beginner.allowed_difficulties();
        let intermediate = CookingSkill::Intermediate.allowed_difficulties();
        let advanced = CookingSkill::Advanced.allowed_difficulties();

        assert!(beginner.iter().all(|d| intermediate.contains(d)));
        assert!(intermediate.iter().all(|d| advanced.contains(d)));
        assert!(!beginner.contains(&Difficulty::Medium));
        assert!(!intermediate.contains(&Difficulty::Hard));
        assert_eq!(advanced.len(), 4);
    }
}
