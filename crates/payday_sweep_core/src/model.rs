use serde::{Deserialize, Serialize};

use crate::idempotency::IdempotencyKey;

/// Transaction that may trigger a sweep. Amounts are in minor units (pence).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerTransaction {
    pub account_id: String,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
}

/// Current balance of an account, in minor units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub id: String,
    pub name: String,
    pub active: bool,
}

impl Pot {
    pub fn new(id: impl Into<String>, name: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active,
        }
    }
}

/// A single planned transfer from the source account into one pot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositInstruction {
    pub pot_id: String,
    pub source_account_id: String,
    pub amount: i64,
    pub idempotency_key: IdempotencyKey,
}

/// A `basic` feed item posted to an account's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub account_id: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub image_url: String,
}
