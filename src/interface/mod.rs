pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, parse_activity, parse_gender, parse_goal, prompt_yes_no, resolve_choice,
};
pub use render::{display_diet, display_guide, display_plan, display_plan_guides, display_workout};
