mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::ListFormat;

/// grocer - Shopping lists from meal plans
#[derive(Parser)]
#[command(name = "grocer")]
#[command(about = "Consolidated, aisle-grouped shopping lists from meal plans", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shopping list of a meal plan
    List {
        /// Meal plan file, or - for stdin
        #[arg(long)]
        plan: String,

        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Export the shopping list as CSV
    Export {
        /// Meal plan file, or - for stdin
        #[arg(long)]
        plan: String,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<String>,

        /// Keep embedded quotes unescaped (legacy format)
        #[arg(long)]
        no_escape: bool,
    },
    /// Show the grocery category of ingredient names
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = grocer::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    grocer::observability::init_observability("grocer", env!("CARGO_PKG_VERSION"), &config.log)?;

    match cli.command {
        Commands::List { plan, format } => cli::list(&plan, format),
        Commands::Export {
            plan,
            output,
            no_escape,
        } => cli::export(&config, &plan, output.as_deref(), no_escape),
        Commands::Categorize { names } => cli::categorize(&names),
    }
}
