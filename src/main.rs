use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_add, handle_currency_command, handle_delete, handle_list, handle_migrate,
    handle_stats, AddArgs, CurrencyCommands, DeleteArgs, ListArgs, MigrateArgs,
};
use pocket_ledger::config::LedgerPaths;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal income and expense tracker",
    long_about = "pocket-ledger records income and expense transactions, shows \
                  aggregated statistics, and browses a month-by-month history, \
                  with USD and PKR display support."
)]
struct Cli {
    /// Profile owning the data (each profile has its own ledger)
    #[arg(long, env = "POCKET_LEDGER_PROFILE", default_value = "default", global = true)]
    profile: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense or income transaction
    Add(AddArgs),

    /// Delete a transaction by its identifier
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Browse the transaction history one month at a time
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show aggregated statistics
    Stats,

    /// Show or switch the display currency
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Move data from an older local-only layout into this ledger
    Migrate(MigrateArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    paths.ensure_directories()?;

    match cli.command {
        Commands::Add(args) => handle_add(&paths, &cli.profile, args)?,
        Commands::Delete(args) => handle_delete(&paths, &cli.profile, args)?,
        Commands::List(args) => handle_list(&paths, &cli.profile, args)?,
        Commands::Stats => handle_stats(&paths, &cli.profile)?,
        Commands::Currency(cmd) => handle_currency_command(&paths, &cli.profile, cmd)?,
        Commands::Migrate(args) => handle_migrate(&paths, &cli.profile, args)?,
        Commands::Config => {
            println!("pocket-ledger configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Profile:        {}", cli.profile);
        }
    }

    Ok(())
}
