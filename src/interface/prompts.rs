use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Minimum similarity accepted when resolving a typed choice.
const CHOICE_MATCH_THRESHOLD: f64 = 0.85;

/// Resolve free text to one of `options`.
///
/// Exact alias matches win (case-insensitive); otherwise the alias with the
/// highest Jaro-Winkler similarity above the threshold is used.
pub fn resolve_choice<T: Copy>(
    input: &str,
    options: &[T],
    aliases: impl Fn(T) -> &'static [&'static str],
) -> Option<T> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(option) = options
        .iter()
        .find(|o| aliases(**o).iter().any(|a| *a == needle))
    {
        return Some(*option);
    }

    let needle = needle.as_str();
    options
        .iter()
        .flat_map(|o| {
            aliases(*o)
                .iter()
                .map(move |a| (*o, jaro_winkler(a, needle)))
        })
        .filter(|(_, score)| *score >= CHOICE_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| o)
}

/// clap value parser for `--gender`.
pub fn parse_gender(input: &str) -> std::result::Result<Gender, String> {
    resolve_choice(input, &Gender::ALL, Gender::aliases)
        .ok_or_else(|| format!("unknown gender '{}'", input))
}

/// clap value parser for `--activity`.
pub fn parse_activity(input: &str) -> std::result::Result<ActivityLevel, String> {
    resolve_choice(input, &ActivityLevel::ALL, ActivityLevel::aliases)
        .ok_or_else(|| format!("unknown activity level '{}'", input))
}

/// clap value parser for `--goal`.
pub fn parse_goal(input: &str) -> std::result::Result<Goal, String> {
    resolve_choice(input, &Goal::ALL, Goal::aliases)
        .ok_or_else(|| format!("unknown goal '{}'", input))
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for age in whole years.
pub fn prompt_age(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Idade (anos)")
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a valid age", input)))
}

fn prompt_select<T: Copy>(
    prompt: &str,
    options: &[T],
    label: impl Fn(T) -> &'static str,
    default: usize,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[selection])
}

fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through the questionnaire, starting from the usual defaults.
pub fn collect_profile() -> Result<Profile> {
    let defaults = Profile::default();

    let age = prompt_age(defaults.age)?;
    let gender = prompt_select("Sexo biológico", &Gender::ALL, Gender::label, 1)?;
    let weight = prompt_number("Peso (kg)", "70")?;
    let height = prompt_number("Altura (cm)", "165")?;
    let activity_level = prompt_select(
        "Nível de atividade física",
        &ActivityLevel::ALL,
        ActivityLevel::label,
        0,
    )?;
    let goal = prompt_select("Objetivo", &Goal::ALL, Goal::label, 0)?;
    let restrictions = prompt_text("Alergias ou restrições alimentares (opcional)")?;
    let conditions = prompt_text("Condições de saúde (opcional)")?;

    let profile = Profile {
        age,
        gender,
        weight,
        height,
        activity_level,
        goal,
        restrictions,
        conditions,
    };
    profile.validate()?;
    Ok(profile)
}
