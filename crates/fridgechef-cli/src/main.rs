use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "fridgechef-cli", version, about = "Fridgechef CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered
    Recipes(commands::recipes::RecipesArgs),
    /// Show one recipe with its ingredients
    Recipe(commands::recipes::RecipeArgs),
    /// Items missing across all recipes
    Shopping(commands::shopping::ShoppingArgs),
    /// Run the ingredient detection simulator once
    Detect(commands::detect::DetectArgs),
    /// Interactive screen session
    Session(commands::session::SessionArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FRIDGECHEF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recipes(args) => commands::recipes::run_list(args),
        Commands::Recipe(args) => commands::recipes::run_show(args),
        Commands::Shopping(args) => commands::shopping::run(args),
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Session(args) => commands::session::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "fridgechef-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
