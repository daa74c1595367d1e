use tracing::{error, info};

use crate::error::SweepError;
use crate::model::DepositInstruction;
use crate::provider::BankingProvider;

/// Submits deposits one at a time in plan order.
///
/// Stops at the first failure. Deposits already submitted are left in place;
/// the returned error records how far the run got. On success returns the
/// number of submitted deposits.
pub fn process_deposits(
    provider: &impl BankingProvider,
    deposits: &[DepositInstruction],
) -> Result<usize, SweepError> {
    let planned = deposits.len();

    for (submitted, deposit) in deposits.iter().enumerate() {
        if let Err(source) = provider.deposit(deposit) {
            error!(
                pot_id = %deposit.pot_id,
                idempotency_key = %deposit.idempotency_key,
                submitted,
                planned,
                error = %source,
                "deposit failed; remaining deposits skipped"
            );
            return Err(SweepError::DepositSubmission {
                pot_id: deposit.pot_id.clone(),
                submitted,
                planned,
                source,
            });
        }
        info!(
            pot_id = %deposit.pot_id,
            amount = deposit.amount,
            idempotency_key = %deposit.idempotency_key,
            "deposit submitted"
        );
    }

    Ok(planned)
}
