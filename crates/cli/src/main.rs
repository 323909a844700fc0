use anyhow::Result;
use clap::{Parser, Subcommand};
use meal_planner::commands::{
    cook_command, init_kitchen_command, kitchen_info_command, list_recipes_command,
    show_pantry_command, validate_recipes_command,
};
use tracing_subscriber::EnvFilter;

/// Pantry-backed recipe cooking CLI.
///
/// This CLI is a thin wrapper around `meal-core` (exposed in code as `meal_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "meal-planner",
    version,
    about = "Load recipes, check the pantry and cook",
    long_about = None
)]
struct Cli {
    /// Log debug details to stderr (RUST_LOG overrides this).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new kitchen at the given root.
    ///
    /// This will:
    /// - Create a `.kitchen` metadata directory and `recipes` directory.
    /// - Write a `.kitchen/kitchen.json` config file.
    /// - Write an empty `pantry.json` if none exists.
    InitKitchen {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional kitchen name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show configuration, paths and counts for an existing kitchen.
    KitchenInfo {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the recipe book.
    ListRecipes {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Order by recipe name instead of load order.
        #[arg(long, default_value_t = false)]
        sorted: bool,
    },

    /// Show pantry stock.
    ShowPantry {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Parse recipe files against the pantry and report problems.
    ValidateRecipes {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Recipe files to check (relative to the root). Defaults to the recipes dir.
        files: Vec<String>,
    },

    /// Cook one or more recipes in a single session.
    ///
    /// Outcomes are printed in order, followed by the remaining stock. The
    /// pantry file on disk is not modified.
    Cook {
        /// Kitchen root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Seed for the outcome draw (overrides the kitchen config).
        #[arg(long)]
        seed: Option<u64>,

        /// Debit ingredients one at a time, keeping partial debits on failure.
        #[arg(long, default_value_t = false)]
        sequential: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Recipe names, cooked in the given order.
        #[arg(required = true)]
        recipes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::InitKitchen { root, name } => init_kitchen_command(&root, name)?,
        Command::KitchenInfo { root, json } => kitchen_info_command(&root, json)?,
        Command::ListRecipes { root, json, sorted } => list_recipes_command(&root, json, sorted)?,
        Command::ShowPantry { root, json } => show_pantry_command(&root, json)?,
        Command::ValidateRecipes { root, files } => {
            validate_recipes_command(&root, &files)?;
        }
        Command::Cook { root, seed, sequential, json, recipes } => {
            cook_command(&root, &recipes, seed, sequential, json)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
