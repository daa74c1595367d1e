use payday_sweep_core::config::{DEFAULT_DRY_RUN_AMOUNT, DEFAULT_FEED_IMAGE_URL, DEFAULT_FEED_URL};
use payday_sweep_core::monzo::DEFAULT_API_URL;
use payday_sweep_core::trigger::DEFAULT_TRIGGER_DESCRIPTION;
use payday_sweep_core::{DryRunOptions, ForcedTrigger, NotificationSettings, SweepConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCESS_TOKEN_CIPHERTEXT_VAR: &str = "SWEEP_ACCESS_TOKEN_CIPHERTEXT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepMode {
    /// Run the trigger rule against the event's transaction.
    Process,
    /// Forced amount, nothing submitted.
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{0} must be configured")]
    Missing(&'static str),
    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaSettings {
    pub access_token_ciphertext: String,
    pub api_url: String,
    pub default_mode: SweepMode,
    pub trigger_description: String,
    pub sweep: SweepConfig,
    pub dry_run: DryRunOptions,
}

impl LambdaSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let access_token_ciphertext = read(ACCESS_TOKEN_CIPHERTEXT_VAR)
            .ok_or(SettingsError::Missing(ACCESS_TOKEN_CIPHERTEXT_VAR))?;

        let default_mode = match read("SWEEP_MODE") {
            None => SweepMode::DryRun,
            Some(value) => parse_mode(&value)?,
        };

        let force = match (read("SWEEP_FORCE_AMOUNT"), read("SWEEP_FORCE_ACCOUNT_ID")) {
            (None, None) => None,
            (Some(amount), Some(account_id)) => Some(ForcedTrigger {
                amount: parse_amount("SWEEP_FORCE_AMOUNT", &amount)?,
                account_id,
            }),
            (Some(_), None) => return Err(SettingsError::Missing("SWEEP_FORCE_ACCOUNT_ID")),
            (None, Some(_)) => return Err(SettingsError::Missing("SWEEP_FORCE_AMOUNT")),
        };

        let notification = NotificationSettings {
            url: read("SWEEP_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            image_url: read("SWEEP_FEED_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_FEED_IMAGE_URL.to_string()),
        };

        let dry_run_amount = match read("SWEEP_DRY_RUN_AMOUNT") {
            None => DEFAULT_DRY_RUN_AMOUNT,
            Some(value) => parse_amount("SWEEP_DRY_RUN_AMOUNT", &value)?,
        };

        Ok(Self {
            access_token_ciphertext,
            api_url: read("MONZO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            default_mode,
            trigger_description: read("SWEEP_TRIGGER_DESCRIPTION")
                .unwrap_or_else(|| DEFAULT_TRIGGER_DESCRIPTION.to_string()),
            sweep: SweepConfig {
                dry_run: match read("SWEEP_DRY_RUN") {
                    None => false,
                    Some(value) => parse_flag("SWEEP_DRY_RUN", &value)?,
                },
                force,
                notification: notification.clone(),
            },
            dry_run: DryRunOptions {
                forced_amount: dry_run_amount,
                account_id: read("SWEEP_DRY_RUN_ACCOUNT_ID"),
                notification,
            },
        })
    }
}

fn parse_mode(value: &str) -> Result<SweepMode, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "process" => Ok(SweepMode::Process),
        "dry_run" | "dry-run" | "dryrun" => Ok(SweepMode::DryRun),
        _ => Err(SettingsError::Invalid {
            name: "SWEEP_MODE",
            value: value.to_string(),
            reason: "expected process or dry_run".to_string(),
        }),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(SettingsError::Invalid {
            name,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_amount(name: &'static str, value: &str) -> Result<i64, SettingsError> {
    let amount: i64 = value.trim().parse().map_err(|error| SettingsError::Invalid {
        name,
        value: value.to_string(),
        reason: format!("{error}"),
    })?;
    if amount < 0 {
        return Err(SettingsError::Invalid {
            name,
            value: value.to_string(),
            reason: "amount must not be negative".to_string(),
        });
    }
    Ok(amount)
}
