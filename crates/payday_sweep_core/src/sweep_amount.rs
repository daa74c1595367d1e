use tracing::debug;

use crate::config::ForcedTrigger;
use crate::error::SweepError;
use crate::model::TriggerTransaction;
use crate::provider::BankingProvider;

/// What the sweep amount is derived from.
#[derive(Debug, Clone, Copy)]
pub enum SweepBasis<'a> {
    Forced(&'a ForcedTrigger),
    Triggered(&'a TriggerTransaction),
}

/// Amount to move out of the source account.
///
/// A forced run uses the configured amount without touching the provider.
/// A triggered run takes the current balance minus the triggering credit,
/// i.e. everything in the account once the salary has landed.
pub fn calc_sweep_amount(
    provider: &impl BankingProvider,
    basis: SweepBasis<'_>,
) -> Result<i64, SweepError> {
    let amount = match basis {
        SweepBasis::Forced(forced) => forced.amount,
        SweepBasis::Triggered(transaction) => {
            let account = provider
                .balance(&transaction.account_id)
                .map_err(SweepError::upstream("balance"))?;
            debug!(
                account_id = %account.id,
                balance = account.balance,
                transaction_amount = transaction.amount,
                "fetched source balance"
            );
            account.balance.saturating_sub(transaction.amount)
        }
    };

    if amount < 0 {
        return Err(SweepError::NegativeSweepAmount { amount });
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordingProvider;

    fn salary(amount: i64) -> TriggerTransaction {
        TriggerTransaction {
            account_id: "acc_main".to_string(),
            amount,
            description: "MONTHLY SALARY".to_string(),
        }
    }

    #[test]
    fn subtracts_transaction_from_balance() {
        let provider = RecordingProvider::new().with_balance("acc_main", 310_000);
        let transaction = salary(250_000);
        let amount = calc_sweep_amount(&provider, SweepBasis::Triggered(&transaction))
            .expect("amount should resolve");

        assert_eq!(amount, 60_000);
        assert_eq!(provider.balance_lookups(), vec!["acc_main".to_string()]);
    }

    #[test]
    fn forced_amount_skips_balance_lookup() {
        let provider = RecordingProvider::new();
        let forced = ForcedTrigger {
            amount: 600,
            account_id: "acc_forced".to_string(),
        };

        let amount = calc_sweep_amount(&provider, SweepBasis::Forced(&forced))
            .expect("amount should resolve");

        assert_eq!(amount, 600);
        assert!(provider.balance_lookups().is_empty());
    }

    #[test]
    fn balance_failure_is_upstream_error() {
        let provider = RecordingProvider::new().failing_balance("gateway timeout");
        let transaction = salary(100);
        let error = calc_sweep_amount(&provider, SweepBasis::Triggered(&transaction))
            .expect_err("lookup should fail");

        assert!(matches!(
            error,
            SweepError::UpstreamQuery {
                operation: "balance",
                ..
            }
        ));
    }

    #[test]
    fn negative_result_is_rejected() {
        let provider = RecordingProvider::new().with_balance("acc_main", 1_000);
        let transaction = salary(5_000);
        let error = calc_sweep_amount(&provider, SweepBasis::Triggered(&transaction))
            .expect_err("negative sweep should fail");

        assert!(matches!(
            error,
            SweepError::NegativeSweepAmount { amount: -4_000 }
        ));
    }
}
