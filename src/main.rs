use anyhow::{anyhow, Context, Result};
use meal_planner::catalog::load_catalog;
use meal_planner::cli::{parse_args, Command};
use meal_planner::config::PlannerConfig;
use meal_planner::nutrition::{calculate_totals, progress_against, weekly_totals};
use meal_planner::outside_food::{estimate_custom_entry, find_preset};
use meal_planner::plan::DailyMealPlan;
use meal_planner::profile::UserProfile;
use meal_planner::planner::{IndexPicker, MealPlanner, RngPicker};
use serde_json::json;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::fs;

fn init_tracing(config: &PlannerConfig) {
    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log_filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn parse_date(raw: &str) -> Result<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("Failed to render output as JSON")?;
    println!("{}", rendered);
    Ok(())
}

async fn run<P: IndexPicker>(command: Command, planner: &mut MealPlanner<'_, P>) -> Result<()> {
    match command {
        Command::Plan { profile, explain } => {
            let profile = profile.to_profile();
            let today = OffsetDateTime::now_utc().date();
            let (plan, trace) = planner.daily_plan_traced(&profile, today);
            let totals = calculate_totals(&plan);
            let progress = progress_against(&totals, &profile);

            let mut output = json!({
                "plan": plan,
                "totals": totals,
                "progress": progress,
            });
            if explain {
                output["slots"] = serde_json::to_value(&trace)?;
            }
            print_json(&output)
        }
        Command::Week { profile, date } => {
            let profile = profile.to_profile();
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => OffsetDateTime::now_utc().date(),
            };
            let week = planner.weekly_plan(&profile, date);
            let daily: Vec<_> = week.days.iter().map(calculate_totals).collect();
            print_json(&json!({
                "week": week,
                "daily_totals": daily,
                "week_totals": weekly_totals(&week),
            }))
        }
        Command::Alternatives { meal, diet } => {
            let record = planner
                .catalog()
                .get(&meal)
                .ok_or_else(|| anyhow!("No meal with id '{}' in the catalog", meal))?;
            let profile = UserProfile {
                diet,
                ..UserProfile::default()
            };
            print_json(&planner.alternatives(record, &profile))
        }
        Command::Pantry {
            ingredients,
            min_score,
            diet,
        } => {
            let profile = UserProfile {
                diet,
                ..UserProfile::default()
            };
            print_json(&planner.cookable_meals(&ingredients, &profile, min_score))
        }
        Command::LogOutside {
            plan,
            profile,
            preset,
            name,
            calories,
        } => {
            let profile = profile.to_profile();
            let entry = match (preset, name, calories) {
                (Some(query), _, _) => find_preset(&query)?.to_entry(),
                (None, Some(name), Some(calories)) => estimate_custom_entry(&name, calories),
                _ => return Err(anyhow!("Pass either --preset or both --name and --calories")),
            };

            let content = fs::read_to_string(&plan)
                .await
                .with_context(|| format!("Failed to read plan file '{}'", plan.display()))?;
            let mut document: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse plan file '{}'", plan.display()))?;
            // Accept both a bare plan and the wrapped output of the `plan` command.
            if let Some(inner) = document.get_mut("plan") {
                document = inner.take();
            }
            let current: DailyMealPlan = serde_json::from_value(document)
                .with_context(|| format!("File '{}' does not hold a daily plan", plan.display()))?;

            let updated = planner.log_outside_food(&current, entry, &profile);
            let totals = calculate_totals(&updated);
            print_json(&json!({
                "plan": updated,
                "totals": totals,
                "progress": progress_against(&totals, &profile),
            }))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();
    let mut config = PlannerConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(&config);

    let catalog = load_catalog(&config.catalog_path).with_context(|| {
        format!("Failed to load meal catalog from '{}'", config.catalog_path.display())
    })?;

    let picker = match config.seed {
        Some(seed) => RngPicker::seeded(seed),
        None => RngPicker::from_entropy(),
    };
    let mut planner = MealPlanner::new(&catalog, picker);

    run(cli.command, &mut planner).await
}
