use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::interface::{parse_activity, parse_gender, parse_goal};
use crate::models::{ActivityLevel, Gender, Goal};

/// NutriPlan: diet and home-workout plans from a short health questionnaire.
#[derive(Parser, Debug)]
#[command(name = "nutriplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Engine configuration JSON (keyword table, substitution order, age limits).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a plan from a profile file, from flags, or interactively.
    Plan(PlanArgs),

    /// Show how to perform an exercise.
    Guide {
        /// Exercise name (partial or misspelled names are matched).
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Profile JSON file.
    #[arg(short, long, conflicts_with_all = ["age", "gender", "weight", "height"])]
    pub profile: Option<PathBuf>,

    /// Age in years.
    #[arg(long, requires_all = ["gender", "weight", "height"])]
    pub age: Option<u32>,

    /// Biological sex (male/female, masculino/feminino).
    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Activity level (sedentary, light, moderate, active, athlete).
    #[arg(long, value_parser = parse_activity)]
    pub activity: Option<ActivityLevel>,

    /// Goal (lose, maintain, gain).
    #[arg(long, value_parser = parse_goal)]
    pub goal: Option<Goal>,

    /// Allergies and dietary restrictions, free text.
    #[arg(long, default_value = "")]
    pub restrictions: String,

    /// Health conditions, free text.
    #[arg(long, default_value = "")]
    pub conditions: String,

    /// Print the plan as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also print the guide for every prescribed exercise.
    #[arg(long)]
    pub guides: bool,
}

impl PlanArgs {
    /// No profile file and no measurements: the questionnaire runs.
    pub fn is_interactive(&self) -> bool {
        self.profile.is_none() && self.age.is_none()
    }

    /// Ask whether to print exercise guides after an interactive text plan.
    pub fn offers_guides(&self) -> bool {
        self.is_interactive() && !self.json && !self.guides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::parse_from([
            "nutriplan", "plan", "--age", "30", "--gender", "feminino", "--weight", "70",
            "--height", "165", "--activity", "sedentario", "--goal", "lose", "--json",
        ]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.age, Some(30));
        assert_eq!(args.gender, Some(Gender::Female));
        assert_eq!(args.activity, Some(ActivityLevel::Sedentary));
        assert!(args.json);
    }

    #[test]
    fn test_guides_offered_only_in_questionnaire() {
        let cli = Cli::parse_from(["nutriplan"]);
        let args = match cli.command.unwrap_or_default() {
            Command::Plan(args) => args,
            Command::Guide { .. } => panic!("expected plan command"),
        };
        assert!(args.is_interactive());
        assert!(args.offers_guides());

        let cli = Cli::parse_from(["nutriplan", "plan", "--guides"]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert!(!args.offers_guides());

        let cli = Cli::parse_from(["nutriplan", "plan", "--profile", "p.json"]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert!(!args.is_interactive());
        assert!(!args.offers_guides());
    }

    #[test]
    fn test_age_requires_measurements() {
        let result = Cli::try_parse_from(["nutriplan", "plan", "--age", "30"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_guide_and_global_flags() {
        let cli = Cli::parse_from(["nutriplan", "guide", "prancha", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Guide { ref name }) if name == "prancha"));
    }
}
