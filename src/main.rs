use clap::Parser;
use tracing::{debug, info};

use nutriplan_rs::cli::{Cli, Command, PlanArgs};
use nutriplan_rs::config::{EngineConfig, load_engine_config, load_profile};
use nutriplan_rs::engine::{compute_plan_with, find_guide};
use nutriplan_rs::error::Result;
use nutriplan_rs::interface::{
    collect_profile, display_guide, display_plan, display_plan_guides, prompt_yes_no,
};
use nutriplan_rs::logging::init_logging;
use nutriplan_rs::models::Profile;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&args, &config),
        Command::Guide { name } => cmd_guide(&name),
    }
}

/// Compute and print a plan.
fn cmd_plan(args: &PlanArgs, config: &EngineConfig) -> Result<()> {
    let profile = resolve_profile(args)?;
    debug!(?profile, "profile resolved");

    let plan = compute_plan_with(&profile, config)?;
    info!(status = ?plan.status, "plan computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    display_plan(&plan);
    let show_guides = args.guides
        || (args.offers_guides()
            && !plan.exercises().is_empty()
            && prompt_yes_no("Mostrar o guia dos exercícios?", false)?);
    if show_guides {
        display_plan_guides(&plan);
    }
    Ok(())
}

/// Print the guide for one exercise.
fn cmd_guide(name: &str) -> Result<()> {
    let guide = find_guide(name)?;
    display_guide(guide);
    Ok(())
}

/// Profile from file, from flags, or from the questionnaire, in that order.
fn resolve_profile(args: &PlanArgs) -> Result<Profile> {
    if let Some(path) = &args.profile {
        return load_profile(path);
    }

    if let (Some(age), Some(gender), Some(weight), Some(height)) =
        (args.age, args.gender, args.weight, args.height)
    {
        let defaults = Profile::default();
        let profile = Profile {
            age,
            gender,
            weight,
            height,
            activity_level: args.activity.unwrap_or(defaults.activity_level),
            goal: args.goal.unwrap_or(defaults.goal),
            restrictions: args.restrictions.clone(),
            conditions: args.conditions.clone(),
        };
        profile.validate()?;
        return Ok(profile);
    }

    collect_profile()
}
