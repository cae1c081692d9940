//! CLI handlers for `dietmate profile` subcommands.
//!
//! Implements:
//! - `dietmate profile set --name <NAME> ...` -- save the whole profile
//! - `dietmate profile show`                 -- print the saved profile

use anyhow::{Result, bail};

use dietmate_core::Session;
use dietmate_store::JsonStore;
use dietmate_store::models::Profile;

use crate::ProfileCommands;

/// Dispatch a `ProfileCommands` variant to the appropriate handler.
pub fn run_profile_command(
    command: ProfileCommands,
    session: &mut Session,
    store: &JsonStore,
) -> Result<()> {
    match command {
        ProfileCommands::Set {
            name,
            age,
            sex,
            weight,
            height,
            activity,
            goal,
            diet,
            allergies,
        } => {
            let profile = Profile {
                name,
                age: age.unwrap_or_default(),
                sex,
                weight: weight.unwrap_or_default(),
                height: height.unwrap_or_default(),
                activity,
                goal,
                diet_type: diet,
                allergies,
            };
            cmd_set(session, store, profile)
        }
        ProfileCommands::Show => cmd_show(session),
    }
}

// -----------------------------------------------------------------------
// dietmate profile set
// -----------------------------------------------------------------------

fn cmd_set(session: &mut Session, store: &JsonStore, profile: Profile) -> Result<()> {
    validate_profile(&profile)?;
    session.save_profile(store, profile)?;

    println!("Profile saved to {}", store.config().profile_path().display());
    if let Some(p) = &session.profile {
        print_profile(p);
    }
    Ok(())
}

/// Reject blank names and numeric fields that do not parse.
///
/// Numeric fields stay strings on disk; blank means "not given".
fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.name.trim().is_empty() {
        bail!("profile name must not be blank");
    }
    if !profile.age.trim().is_empty() && profile.age_years().is_none() {
        bail!("invalid age {:?}: expected whole years", profile.age);
    }
    if !profile.weight.trim().is_empty() && profile.weight_kg().is_none() {
        bail!("invalid weight {:?}: expected a positive number of kg", profile.weight);
    }
    if !profile.height.trim().is_empty() && profile.height_cm().is_none() {
        bail!("invalid height {:?}: expected a positive number of cm", profile.height);
    }
    Ok(())
}

// -----------------------------------------------------------------------
// dietmate profile show
// -----------------------------------------------------------------------

fn cmd_show(session: &Session) -> Result<()> {
    match &session.profile {
        Some(p) => print_profile(p),
        None => println!("No profile saved. Use `dietmate profile set --name <NAME>` to create one."),
    }
    Ok(())
}

fn print_profile(p: &Profile) {
    let or_dash = |s: &str| {
        if s.trim().is_empty() {
            "-".to_owned()
        } else {
            s.to_owned()
        }
    };
    let opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_owned());

    println!();
    println!("  Name:       {}", or_dash(&p.name));
    println!("  Age:        {}", or_dash(&p.age));
    println!("  Sex:        {}", opt(p.sex.map(|s| s.to_string())));
    println!("  Weight:     {}", or_dash(&p.weight));
    println!("  Height:     {}", or_dash(&p.height));
    println!("  Activity:   {}", opt(p.activity.map(|a| a.to_string())));
    println!("  Goal:       {}", opt(p.goal.map(|g| g.to_string())));
    println!("  Diet:       {}", p.diet_type);
    println!("  Allergies:  {}", or_dash(&p.allergies));
}
