use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::application::{Ledger, LedgerConfig};
use crate::domain::CurrencyFormat;

mod menu;
mod session;

pub use menu::*;
pub use session::*;

/// Bankroll - Interactive Banking Ledger
#[derive(Parser, Debug)]
#[command(name = "bankroll")]
#[command(about = "An interactive, in-memory banking ledger for the terminal")]
#[command(version)]
pub struct Cli {
    /// Prefix of generated customer IDs
    #[arg(long, default_value = "A")]
    pub id_prefix: String,

    /// Number used for the first customer ID
    #[arg(long, default_value_t = 1000)]
    pub first_id: u64,

    /// Currency symbol printed in front of amounts
    #[arg(long, default_value = "$")]
    pub currency_symbol: String,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Ledger settings derived from the command line.
    pub fn config(&self) -> LedgerConfig {
        LedgerConfig::default()
            .with_id_prefix(self.id_prefix.clone())
            .with_first_id(self.first_id)
            .with_currency(CurrencyFormat::new(self.currency_symbol.clone()))
    }

    /// Run the interactive menu on stdin/stdout until the user exits.
    pub fn run(self) -> Result<()> {
        crate::observability::init(self.verbose);

        let config = self.config();
        info!(?config, "starting session");

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Session::new(Ledger::new(config), stdin, stdout).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_config() {
        let cli = Cli::try_parse_from(["bankroll"]).unwrap();
        assert_eq!(cli.config(), LedgerConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bankroll",
            "--id-prefix",
            "B",
            "--first-id",
            "1",
            "--currency-symbol",
            "€",
            "-v",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.id_prefix, "B");
        assert_eq!(config.first_id, 1);
        assert_eq!(config.currency.symbol, "€");
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_first_id() {
        assert!(Cli::try_parse_from(["bankroll", "--first-id", "abc"]).is_err());
    }
}
