//! Currency preference commands

use std::sync::Arc;

use clap::Subcommand;

use crate::config::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::Currency;
use crate::services::PreferenceService;
use crate::storage::LocalStore;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the active currency and the supported codes
    Show,
    /// Switch the active currency (USD or PKR)
    Set {
        /// Currency code
        code: String,
    },
}

/// Handle `pocket currency ...`
pub fn handle_currency_command(
    paths: &LedgerPaths,
    profile: &str,
    cmd: CurrencyCommands,
) -> LedgerResult<()> {
    let store = Arc::new(LocalStore::new(paths.clone()));
    let mut preferences = PreferenceService::new(store, profile);
    preferences.load()?;

    match cmd {
        CurrencyCommands::Show => {
            let active = preferences.current();
            println!("Active currency: {} ({})", active.code, active.symbol.trim());
            println!();
            println!("Supported currencies:");
            for currency in Currency::ALL {
                let info = currency.info();
                let marker = if currency == active.code { "*" } else { " " };
                println!(
                    "{} {} ({}) - {}",
                    marker,
                    currency,
                    info.symbol.trim(),
                    currency.name()
                );
            }
        }
        CurrencyCommands::Set { code } => {
            let currency: Currency = code.parse()?;
            preferences.set_currency(currency);
            preferences.flush();

            let info = currency.info();
            println!("Currency set to {} ({})", currency, info.symbol.trim());
            if info.has_decimals {
                println!("{} amounts support decimal values", currency);
            } else {
                println!("{} amounts are rounded to whole numbers", currency);
            }
        }
    }

    Ok(())
}
