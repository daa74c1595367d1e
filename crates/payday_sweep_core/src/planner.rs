use tracing::info;

use crate::idempotency::IdempotencyKey;
use crate::model::{DepositInstruction, Pot};
use crate::money::format_pence_to_gbp;

/// Splits `sweep_amount` equally across `pots`, one instruction per pot.
///
/// The per-pot amount truncates, so `sweep_amount % pots.len()` stays in the
/// source account. Every instruction gets a freshly generated key. Returns an
/// empty plan when `pots` is empty.
pub fn calc_deposits(
    sweep_amount: i64,
    source_account_id: &str,
    pots: &[Pot],
) -> Vec<DepositInstruction> {
    let Ok(pot_count) = i64::try_from(pots.len()) else {
        return Vec::new();
    };
    if pot_count == 0 {
        return Vec::new();
    }

    let per_pot_amount = sweep_amount / pot_count;

    pots.iter()
        .map(|pot| {
            info!(
                pot_id = %pot.id,
                pot_name = %pot.name,
                amount = per_pot_amount,
                formatted = %format_pence_to_gbp(per_pot_amount),
                "planned deposit"
            );
            DepositInstruction {
                pot_id: pot.id.clone(),
                source_account_id: source_account_id.to_string(),
                amount: per_pot_amount,
                idempotency_key: IdempotencyKey::generate(),
            }
        })
        .collect()
}

pub fn total_planned(deposits: &[DepositInstruction]) -> i64 {
    deposits.iter().map(|deposit| deposit.amount).sum()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn pots(count: usize) -> Vec<Pot> {
        (0..count)
            .map(|idx| Pot::new(format!("pot_{idx}"), format!("Pot {idx}"), true))
            .collect()
    }

    #[test]
    fn even_split_distributes_everything() {
        let deposits = calc_deposits(600, "acc_main", &pots(3));

        assert_eq!(deposits.len(), 3);
        assert!(deposits.iter().all(|deposit| deposit.amount == 200));
        assert_eq!(total_planned(&deposits), 600);
    }

    #[test]
    fn remainder_stays_in_source_account() {
        let deposits = calc_deposits(601, "acc_main", &pots(3));

        assert!(deposits.iter().all(|deposit| deposit.amount == 200));
        assert_eq!(total_planned(&deposits), 600);
    }

    #[test]
    fn instructions_follow_pot_order_and_source() {
        let deposits = calc_deposits(100, "acc_main", &pots(2));
        let pot_ids: Vec<&str> = deposits.iter().map(|d| d.pot_id.as_str()).collect();

        assert_eq!(pot_ids, vec!["pot_0", "pot_1"]);
        assert!(deposits.iter().all(|d| d.source_account_id == "acc_main"));
    }

    #[test]
    fn keys_differ_across_identical_plans() {
        let first = calc_deposits(900, "acc_main", &pots(3));
        let second = calc_deposits(900, "acc_main", &pots(3));

        let keys: HashSet<_> = first
            .iter()
            .chain(second.iter())
            .map(|deposit| deposit.idempotency_key.clone())
            .collect();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn no_pots_yields_empty_plan() {
        assert!(calc_deposits(600, "acc_main", &[]).is_empty());
    }

    proptest! {
        #[test]
        fn split_truncates_and_conserves(sweep in 0i64..10_000_000, pot_count in 1usize..24) {
            let deposits = calc_deposits(sweep, "acc_main", &pots(pot_count));
            let n = pot_count as i64;

            prop_assert_eq!(deposits.len(), pot_count);
            prop_assert!(deposits.iter().all(|deposit| deposit.amount == sweep / n));

            let total = total_planned(&deposits);
            prop_assert!(total <= sweep);
            prop_assert_eq!(sweep - total, sweep % n);

            let keys: HashSet<_> = deposits.iter().map(|d| d.idempotency_key.as_str()).collect();
            prop_assert_eq!(keys.len(), pot_count);
        }
    }
}
