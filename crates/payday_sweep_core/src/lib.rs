//! Payday sweep domain logic.
//!
//! This crate owns the sweep decision and distribution workflow: trigger
//! detection, sweep amount calculation, pot selection, equal-split deposit
//! planning, sequential deposit execution and the summary notification.
//! Deployment concerns (Lambda runtime, KMS, CLI parsing) live in the
//! adapter crates. The Monzo HTTP client is available behind the `monzo`
//! feature.

pub mod config;
pub mod error;
pub mod executor;
pub mod idempotency;
pub mod model;
pub mod money;
#[cfg(feature = "monzo")]
pub mod monzo;
pub mod notifier;
pub mod planner;
pub mod pots;
pub mod processor;
pub mod provider;
pub mod sweep_amount;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod trigger;

pub use config::{DryRunOptions, ForcedTrigger, NotificationSettings, SweepConfig};
pub use error::{ProviderError, SweepError};
pub use model::{Account, AccountSummary, DepositInstruction, FeedItem, Pot, TriggerTransaction};
pub use processor::{dry_run, process_transaction, SweepOutcome, SweepSummary};
pub use provider::BankingProvider;
pub use trigger::{DescriptionMatch, TriggerRule};
