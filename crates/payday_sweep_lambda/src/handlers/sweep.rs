use payday_sweep_core::{
    dry_run, process_transaction, BankingProvider, DescriptionMatch, SweepError, SweepOutcome,
    TriggerTransaction,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::settings::{LambdaSettings, SweepMode};

/// Invocation payload. An empty object or `null` runs the configured default
/// mode without a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SweepEvent {
    pub mode: Option<SweepMode>,
    pub transaction: Option<TriggerTransaction>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SweepResponse {
    pub mode: SweepMode,
    pub outcome: SweepOutcome,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid sweep event: {0}")]
    InvalidEvent(String),
    #[error(transparent)]
    Sweep(#[from] SweepError),
}

pub fn handle_sweep_event(
    event: Value,
    settings: &LambdaSettings,
    provider: &impl BankingProvider,
) -> Result<SweepResponse, HandlerError> {
    let event = decode_event(event)?;
    let mode = event.mode.unwrap_or(settings.default_mode);
    info!(
        ?mode,
        has_transaction = event.transaction.is_some(),
        "sweep invocation received"
    );

    let result = match mode {
        SweepMode::Process => {
            let rule = DescriptionMatch::new(settings.trigger_description.clone());
            process_transaction(provider, &rule, &settings.sweep, event.transaction.as_ref())
        }
        SweepMode::DryRun => dry_run(provider, &settings.dry_run),
    };

    match result {
        Ok(outcome) => {
            log_outcome(&outcome);
            Ok(SweepResponse { mode, outcome })
        }
        Err(sweep_error) => {
            error!(?mode, error = %sweep_error, "sweep failed");
            Err(sweep_error.into())
        }
    }
}

fn decode_event(event: Value) -> Result<SweepEvent, HandlerError> {
    match event {
        Value::Null => Ok(SweepEvent::default()),
        Value::Object(_) => serde_json::from_value(event)
            .map_err(|error| HandlerError::InvalidEvent(error.to_string())),
        _ => Err(HandlerError::InvalidEvent(
            "payload must be a JSON object".to_string(),
        )),
    }
}

fn log_outcome(outcome: &SweepOutcome) {
    match outcome {
        SweepOutcome::Skipped => info!("sweep skipped"),
        SweepOutcome::Completed(summary) => info!(
            account_id = %summary.account_id,
            sweep_amount = summary.sweep_amount,
            total_planned = summary.total_planned,
            undistributed = summary.undistributed,
            pots = summary.deposits.len(),
            submitted = summary.submitted,
            dry_run = summary.dry_run,
            "sweep completed"
        ),
    }
}
