use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::Diet;
use crate::planner::DEFAULT_MIN_MATCH_SCORE;
use crate::profile::{CookingSkill, Goal, UserProfile};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plan budget-aware Indian meals for a day or a week",
    long_about = None
)]
pub struct Cli {
    /// Path to the meal catalog (.csv or .json); overrides MEAL_PLANNER_CATALOG
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible meal selection; overrides MEAL_PLANNER_SEED
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build today's plan
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Also print the budget and calorie envelope each slot was chosen under
        #[arg(long)]
        explain: bool,
    },
    /// Build a Sunday-to-Saturday plan
    Week {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Any day of the wanted week (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Suggest swaps for a catalog meal
    Alternatives {
        #[arg(long)]
        meal: String,

        #[arg(long, value_enum, default_value_t = Diet::Veg)]
        diet: Diet,
    },
    /// Log outside food against a saved plan and re-plan dinner if needed
    LogOutside {
        /// JSON file holding a plan printed by `plan`
        #[arg(long)]
        plan: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Id, name, or an unambiguous part of a name, of a common outside food
        #[arg(long, conflicts_with_all = ["name", "calories"])]
        preset: Option<String>,

        /// Name of a custom food
        #[arg(long, requires = "calories")]
        name: Option<String>,

        /// Calories of the custom food
        #[arg(long, requires = "name")]
        calories: Option<u32>,
    },
    /// Find catalog meals you can cook from what is in the pantry
    Pantry {
        /// Ingredients on hand, comma separated; local names such as "aloo" are understood
        #[arg(long = "have", value_delimiter = ',', required = true)]
        ingredients: Vec<String>,

        /// Lowest match score (0 to 1) worth listing
        #[arg(long, default_value_t = DEFAULT_MIN_MATCH_SCORE)]
        min_score: f64,

        #[arg(long, value_enum, default_value_t = Diet::Veg)]
        diet: Diet,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long, value_enum, default_value_t = Goal::Maintain)]
    pub goal: Goal,

    #[arg(long, value_enum, default_value_t = Diet::Veg)]
    pub diet: Diet,

    /// Daily budget in INR
    #[arg(long, default_value_t = 150.0)]
    pub budget: f64,

    #[arg(long, value_enum, default_value_t = CookingSkill::Beginner)]
    pub skill: CookingSkill,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile::new(self.goal, self.diet, self.budget, self.skill)
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
