use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DryRunOptions, ForcedTrigger, SweepConfig};
use crate::error::SweepError;
use crate::executor::process_deposits;
use crate::model::{DepositInstruction, TriggerTransaction};
use crate::money::format_pence_to_gbp;
use crate::notifier::notify_user;
use crate::planner::{calc_deposits, total_planned};
use crate::pots::get_active_pots;
use crate::provider::BankingProvider;
use crate::sweep_amount::{calc_sweep_amount, SweepBasis};
use crate::trigger::TriggerRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepOutcome {
    /// The trigger rule did not fire and no override was set.
    Skipped,
    Completed(SweepSummary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub account_id: String,
    pub sweep_amount: i64,
    pub deposits: Vec<DepositInstruction>,
    pub total_planned: i64,
    /// Left in the source account because the split does not divide evenly.
    pub undistributed: i64,
    /// Deposits actually sent to the provider; zero for a dry run.
    pub submitted: usize,
    pub dry_run: bool,
}

/// Runs one sweep for `transaction`.
///
/// Nothing is looked up unless `rule` fires or `config.force` is set. The
/// forced account and amount replace the transaction's values entirely. In a
/// dry run the deposits are planned and reported but never submitted.
pub fn process_transaction(
    provider: &impl BankingProvider,
    rule: &impl TriggerRule,
    config: &SweepConfig,
    transaction: Option<&TriggerTransaction>,
) -> Result<SweepOutcome, SweepError> {
    let (account_id, basis) = match (config.force.as_ref(), transaction) {
        (Some(forced), _) => (forced.account_id.as_str(), SweepBasis::Forced(forced)),
        (None, Some(transaction)) if rule.should_sweep(transaction) => (
            transaction.account_id.as_str(),
            SweepBasis::Triggered(transaction),
        ),
        (None, transaction) => {
            debug!(
                description = transaction.map(|tx| tx.description.as_str()),
                "transaction does not trigger a sweep"
            );
            return Ok(SweepOutcome::Skipped);
        }
    };

    let sweep_amount = calc_sweep_amount(provider, basis)?;
    info!(
        account_id,
        sweep_amount,
        formatted = %format_pence_to_gbp(sweep_amount),
        forced = config.force.is_some(),
        dry_run = config.dry_run,
        "sweep triggered"
    );

    let pots = get_active_pots(provider, account_id)?;
    let deposits = calc_deposits(sweep_amount, account_id, &pots);

    let submitted = if config.dry_run {
        info!(planned = deposits.len(), "dry run; deposits not submitted");
        0
    } else {
        process_deposits(provider, &deposits)?
    };

    let total = total_planned(&deposits);
    info!(
        total,
        formatted = %format_pence_to_gbp(total),
        "total deposits"
    );

    notify_user(provider, &deposits, config.dry_run, &config.notification)?;

    Ok(SweepOutcome::Completed(SweepSummary {
        account_id: account_id.to_string(),
        sweep_amount,
        total_planned: total,
        undistributed: sweep_amount - total,
        deposits,
        submitted,
        dry_run: config.dry_run,
    }))
}

/// Runs the whole workflow with a forced amount and without moving money.
pub fn dry_run(
    provider: &impl BankingProvider,
    options: &DryRunOptions,
) -> Result<SweepOutcome, SweepError> {
    let account_id = match &options.account_id {
        Some(account_id) => account_id.clone(),
        None => first_open_account_id(provider)?,
    };

    let config = SweepConfig {
        dry_run: true,
        force: Some(ForcedTrigger {
            amount: options.forced_amount,
            account_id,
        }),
        notification: options.notification.clone(),
    };

    process_transaction(provider, &|_: &TriggerTransaction| false, &config, None)
}

fn first_open_account_id(provider: &impl BankingProvider) -> Result<String, SweepError> {
    provider
        .accounts()
        .map_err(SweepError::upstream("accounts"))?
        .into_iter()
        .find(|account| !account.closed)
        .map(|account| account.id)
        .ok_or(SweepError::NoAccounts)
}
