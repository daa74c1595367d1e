use thiserror::Error;

/// Failure reported by a banking provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("failed to query {operation}: {source}")]
    UpstreamQuery {
        operation: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("no active pots found for account {account_id}")]
    NoActivePots { account_id: String },

    #[error("sweep amount {amount} is negative; refusing to move money")]
    NegativeSweepAmount { amount: i64 },

    #[error("no open accounts available for this credential")]
    NoAccounts,

    #[error(
        "deposit into pot {pot_id} failed after {submitted}/{planned} deposits were submitted: {source}"
    )]
    DepositSubmission {
        pot_id: String,
        submitted: usize,
        planned: usize,
        #[source]
        source: ProviderError,
    },

    #[error("failed to decrypt credential: {0}")]
    CredentialDecryption(String),

    #[error("failed to post sweep notification: {0}")]
    Notification(#[source] ProviderError),
}

impl SweepError {
    pub(crate) fn upstream(operation: &'static str) -> impl FnOnce(ProviderError) -> Self {
        move |source| Self::UpstreamQuery { operation, source }
    }
}
