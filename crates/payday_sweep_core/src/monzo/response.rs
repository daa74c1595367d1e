use crate::model::{AccountSummary, Pot};

#[derive(serde::Deserialize)]
pub(super) struct BalanceResponse {
    pub(super) balance: i64,
}

#[derive(serde::Deserialize)]
pub(super) struct PotsResponse {
    pub(super) pots: Vec<MonzoPot>,
}

#[derive(serde::Deserialize)]
pub(super) struct MonzoPot {
    pub(super) id: String,
    pub(super) name: String,
    #[serde(default)]
    pub(super) deleted: bool,
}

#[derive(serde::Deserialize)]
pub(super) struct AccountsResponse {
    pub(super) accounts: Vec<MonzoAccount>,
}

#[derive(serde::Deserialize)]
pub(super) struct MonzoAccount {
    pub(super) id: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) closed: bool,
}

#[derive(serde::Deserialize)]
pub(super) struct ErrorResponse {
    #[serde(default)]
    pub(super) code: Option<String>,
    #[serde(default)]
    pub(super) message: Option<String>,
}

impl From<MonzoPot> for Pot {
    fn from(pot: MonzoPot) -> Self {
        Pot {
            id: pot.id,
            name: pot.name,
            active: !pot.deleted,
        }
    }
}

impl From<MonzoAccount> for AccountSummary {
    fn from(account: MonzoAccount) -> Self {
        AccountSummary {
            id: account.id,
            description: account.description,
            closed: account.closed,
        }
    }
}

/// Human-readable detail for a non-success response body.
pub(super) fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            code: Some(code),
            message: Some(message),
        }) => format!("{code}: {message}"),
        Ok(ErrorResponse {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorResponse {
            code: Some(code), ..
        }) => code,
        _ => body.trim().to_string(),
    }
}
