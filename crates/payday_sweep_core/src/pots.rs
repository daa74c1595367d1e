use tracing::debug;

use crate::error::SweepError;
use crate::model::Pot;
use crate::provider::BankingProvider;

/// Pots of `account_id` that are still open, in provider order.
pub fn get_active_pots(
    provider: &impl BankingProvider,
    account_id: &str,
) -> Result<Vec<Pot>, SweepError> {
    let pots = provider
        .pots(account_id)
        .map_err(SweepError::upstream("pots"))?;
    let listed = pots.len();

    let active: Vec<Pot> = pots.into_iter().filter(|pot| pot.active).collect();
    debug!(account_id, listed, active = active.len(), "selected active pots");

    if active.is_empty() {
        return Err(SweepError::NoActivePots {
            account_id: account_id.to_string(),
        });
    }

    Ok(active)
}
