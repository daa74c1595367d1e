use crate::model::TriggerTransaction;

pub const DEFAULT_TRIGGER_DESCRIPTION: &str = "MONTHLY SALARY";

/// Decides whether a transaction should start a sweep.
pub trait TriggerRule {
    fn should_sweep(&self, transaction: &TriggerTransaction) -> bool;
}

impl<F> TriggerRule for F
where
    F: Fn(&TriggerTransaction) -> bool,
{
    fn should_sweep(&self, transaction: &TriggerTransaction) -> bool {
        self(transaction)
    }
}

/// Fires when the transaction description equals `marker` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMatch {
    pub marker: String,
}

impl DescriptionMatch {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Default for DescriptionMatch {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_DESCRIPTION)
    }
}

impl TriggerRule for DescriptionMatch {
    fn should_sweep(&self, transaction: &TriggerTransaction) -> bool {
        transaction.description == self.marker
    }
}
