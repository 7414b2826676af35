use crate::domain::CurrencyFormat;

/// Settings for a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Prefix of generated customer IDs
    pub id_prefix: String,
    /// Number used for the first customer ID
    pub first_id: u64,
    /// How amounts are rendered for the customer
    pub currency: CurrencyFormat,
}

impl LedgerConfig {
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_first_id(mut self, first_id: u64) -> Self {
        self.first_id = first_id;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            id_prefix: "A".to_string(),
            first_id: 1000,
            currency: CurrencyFormat::default(),
        }
    }
}
