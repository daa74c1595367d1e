use crate::error::ProviderError;
use crate::model::{Account, AccountSummary, DepositInstruction, FeedItem, Pot};

/// Operations consumed from the banking provider.
///
/// Calls are blocking; each adapter decides how to bridge that onto its
/// transport.
pub trait BankingProvider {
    fn balance(&self, account_id: &str) -> Result<Account, ProviderError>;

    /// Pots belonging to `account_id`, in the provider's listing order.
    fn pots(&self, account_id: &str) -> Result<Vec<Pot>, ProviderError>;

    fn accounts(&self) -> Result<Vec<AccountSummary>, ProviderError>;

    fn deposit(&self, instruction: &DepositInstruction) -> Result<(), ProviderError>;

    fn create_feed_item(&self, item: &FeedItem) -> Result<(), ProviderError>;
}

