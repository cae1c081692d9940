mod chart;
mod config;
mod plan_cmds;
mod profile_cmds;
mod recipe_cmds;
mod shopping_cmd;
#[cfg(test)]
mod test_util;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

use dietmate_core::Session;
use dietmate_store::models::{ActivityLevel, DietType, Goal, MealSlot, Sex};
use dietmate_store::{JsonStore, StoreConfig};

use config::DietmateConfig;

#[derive(Parser)]
#[command(name = "dietmate", version, about = "Weekly meal planner driven by a diet profile")]
struct Cli {
    /// Data directory (overrides DIETMATE_DATA_DIR env var and config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a dietmate config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Profile management
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Recipe catalog management
    Recipes {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Meal plan generation
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Export the shopping list for the current plan
    ShoppingList {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show daily calories of the current plan as a bar chart
    Chart {
        /// Print text bars instead of opening the interactive view
        #[arg(long)]
        plain: bool,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Commands that overwrite a data file without reading any saved data,
    /// so they still work when that file is unreadable.
    fn replaces_saved_data(&self) -> bool {
        matches!(
            self,
            Commands::Profile {
                command: ProfileCommands::Set { .. }
            } | Commands::Recipes {
                command: RecipeCommands::LoadSamples | RecipeCommands::Import { .. }
            }
        )
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Save the profile (replaces any saved profile)
    Set {
        /// Your name
        #[arg(long)]
        name: String,
        /// Age in years
        #[arg(long)]
        age: Option<String>,
        /// Male, Female or Other
        #[arg(long)]
        sex: Option<Sex>,
        /// Weight in kg
        #[arg(long)]
        weight: Option<String>,
        /// Height in cm
        #[arg(long)]
        height: Option<String>,
        /// Activity level: Low, Moderate, High
        #[arg(long)]
        activity: Option<ActivityLevel>,
        /// Goal: lose-weight, maintain, gain-weight
        #[arg(long)]
        goal: Option<Goal>,
        /// Diet preference: omnivore, vegetarian, vegan
        #[arg(long, default_value_t = DietType::Omnivore)]
        diet: DietType,
        /// Comma-separated allergies or dislikes (e.g. "peanut, shellfish")
        #[arg(long, default_value = "")]
        allergies: String,
    },
    /// Show the saved profile
    Show,
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Replace the catalog with the built-in sample recipes
    LoadSamples,
    /// Replace the catalog with recipes from a JSON file
    Import {
        /// Path to a JSON array of recipes
        file: PathBuf,
    },
    /// List recipes in the catalog
    List {
        /// Only recipes tagged with this meal
        #[arg(long)]
        meal: Option<MealSlot>,
        /// Only recipes tagged with this diet
        #[arg(long)]
        diet: Option<DietType>,
        /// Only recipes the saved profile may be served
        #[arg(long)]
        eligible: bool,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new 7-day plan and make it current
    Generate,
    /// Show the current plan
    Show,
}

/// Execute the `dietmate init` command: write config file.
fn cmd_init(data_dir: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let data_dir = data_dir.unwrap_or_else(StoreConfig::default_data_dir);
    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            data_dir: Some(data_dir.clone()),
        },
        export: config::ExportSection::default(),
    };

    let written = config::save_config(&cfg)?;

    println!("Config written to {}", written.display());
    println!("  storage.data_dir = {}", data_dir.display());
    println!();
    println!("Next: run `dietmate profile set --name <NAME>` and `dietmate recipes load-samples`.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cmd_init(cli.data_dir, force),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dietmate", &mut io::stdout());
            Ok(())
        }
        command => {
            let resolved = DietmateConfig::resolve(cli.data_dir.as_deref())?;
            let store = JsonStore::new(resolved.store_config);
            let mut session = if command.replaces_saved_data() {
                Session::default()
            } else {
                Session::load(&store).with_context(|| {
                    format!(
                        "failed to load data from {}",
                        store.config().data_dir().display()
                    )
                })?
            };

            match command {
                Commands::Profile { command } => {
                    profile_cmds::run_profile_command(command, &mut session, &store)
                }
                Commands::Recipes { command } => {
                    recipe_cmds::run_recipe_command(command, &mut session, &store)
                }
                Commands::Plan { command } => {
                    plan_cmds::run_plan_command(command, &mut session, &store)
                }
                Commands::ShoppingList { output } => shopping_cmd::run_shopping_list(
                    &session,
                    &resolved.shopping_list_header,
                    output.as_deref(),
                ),
                Commands::Chart { plain } => chart::run_chart(&session, plain),
                Commands::Init { .. } | Commands::Completions { .. } => Ok(()),
            }
        }
    }
}
