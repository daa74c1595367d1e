use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::debug;

use super::response::{describe_error_body, AccountsResponse, BalanceResponse, PotsResponse};
use crate::error::ProviderError;
use crate::model::{Account, AccountSummary, DepositInstruction, FeedItem, Pot};
use crate::provider::BankingProvider;

pub const DEFAULT_API_URL: &str = "https://api.monzo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Monzo API client authenticated with a single access token.
#[derive(Clone)]
pub struct MonzoClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl fmt::Debug for MonzoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonzoClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl MonzoClient {
    /// Create a client against `endpoint` (e.g. `https://api.monzo.com`).
    pub fn new(access_token: impl Into<String>, endpoint: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| ProviderError::new(format!("failed to build http client: {error}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response, ProviderError> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|error| ProviderError::new(format!("{operation} request failed: {error}")))?;

        let status = response.status();
        debug!(operation, status = status.as_u16(), "monzo response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(ProviderError::new(format!(
            "{operation} returned {status}: {}",
            describe_error_body(&body)
        )))
    }
}

impl BankingProvider for MonzoClient {
    fn balance(&self, account_id: &str) -> Result<Account, ProviderError> {
        let request = self
            .client
            .get(self.url("balance"))
            .query(&[("account_id", account_id)]);
        let parsed: BalanceResponse = self
            .send(request, "balance")?
            .json()
            .map_err(|error| ProviderError::new(format!("invalid balance response: {error}")))?;

        Ok(Account {
            id: account_id.to_string(),
            balance: parsed.balance,
        })
    }

    fn pots(&self, account_id: &str) -> Result<Vec<Pot>, ProviderError> {
        let request = self
            .client
            .get(self.url("pots"))
            .query(&[("current_account_id", account_id)]);
        let parsed: PotsResponse = self
            .send(request, "pots")?
            .json()
            .map_err(|error| ProviderError::new(format!("invalid pots response: {error}")))?;

        Ok(parsed.pots.into_iter().map(Pot::from).collect())
    }

    fn accounts(&self) -> Result<Vec<AccountSummary>, ProviderError> {
        let request = self.client.get(self.url("accounts"));
        let parsed: AccountsResponse = self
            .send(request, "accounts")?
            .json()
            .map_err(|error| ProviderError::new(format!("invalid accounts response: {error}")))?;

        Ok(parsed
            .accounts
            .into_iter()
            .map(AccountSummary::from)
            .collect())
    }

    fn deposit(&self, instruction: &DepositInstruction) -> Result<(), ProviderError> {
        let path = format!("pots/{}/deposit", instruction.pot_id);
        let request = self
            .client
            .put(self.url(&path))
            .form(&deposit_form(instruction));
        self.send(request, "deposit").map(|_| ())
    }

    fn create_feed_item(&self, item: &FeedItem) -> Result<(), ProviderError> {
        let request = self.client.post(self.url("feed")).form(&feed_form(item));
        self.send(request, "feed").map(|_| ())
    }
}

pub(super) fn deposit_form(instruction: &DepositInstruction) -> Vec<(&'static str, String)> {
    vec![
        ("source_account_id", instruction.source_account_id.clone()),
        ("amount", instruction.amount.to_string()),
        ("dedupe_id", instruction.idempotency_key.to_string()),
    ]
}

pub(super) fn feed_form(item: &FeedItem) -> Vec<(&'static str, String)> {
    vec![
        ("account_id", item.account_id.clone()),
        ("type", "basic".to_string()),
        ("url", item.url.clone()),
        ("params[title]", item.title.clone()),
        ("params[body]", item.body.clone()),
        ("params[image_url]", item.image_url.clone()),
    ]
}
