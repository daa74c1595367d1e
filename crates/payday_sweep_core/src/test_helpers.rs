//! In-memory banking provider for tests.
//!
//! `RecordingProvider` serves canned balances, pots and accounts, records
//! every call, and can be told to fail specific operations.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::ProviderError;
use crate::model::{Account, AccountSummary, DepositInstruction, FeedItem, Pot};
use crate::provider::BankingProvider;

#[derive(Debug, Default)]
pub struct RecordingProvider {
    balances: HashMap<String, i64>,
    pots: Vec<Pot>,
    accounts: Vec<AccountSummary>,
    balance_failure: Option<String>,
    pots_failure: Option<String>,
    accounts_failure: Option<String>,
    feed_failure: Option<String>,
    failing_pot_id: Option<String>,
    calls: Mutex<Calls>,
}

#[derive(Debug, Default)]
struct Calls {
    balance_lookups: Vec<String>,
    pot_lookups: Vec<String>,
    deposit_attempts: Vec<String>,
    deposits: Vec<DepositInstruction>,
    feed_items: Vec<FeedItem>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, account_id: &str, balance: i64) -> Self {
        self.balances.insert(account_id.to_string(), balance);
        self
    }

    pub fn with_pots(mut self, pots: Vec<Pot>) -> Self {
        self.pots = pots;
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<AccountSummary>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn failing_balance(mut self, message: &str) -> Self {
        self.balance_failure = Some(message.to_string());
        self
    }

    pub fn failing_pots(mut self, message: &str) -> Self {
        self.pots_failure = Some(message.to_string());
        self
    }

    pub fn failing_accounts(mut self, message: &str) -> Self {
        self.accounts_failure = Some(message.to_string());
        self
    }

    pub fn failing_feed(mut self, message: &str) -> Self {
        self.feed_failure = Some(message.to_string());
        self
    }

    /// Deposits into `pot_id` fail; deposits into other pots succeed.
    pub fn failing_deposit_for(mut self, pot_id: &str) -> Self {
        self.failing_pot_id = Some(pot_id.to_string());
        self
    }

    pub fn balance_lookups(&self) -> Vec<String> {
        self.calls().balance_lookups.clone()
    }

    pub fn pot_lookups(&self) -> Vec<String> {
        self.calls().pot_lookups.clone()
    }

    /// Pot ids of every deposit attempted, successful or not.
    pub fn deposit_attempts(&self) -> Vec<String> {
        self.calls().deposit_attempts.clone()
    }

    /// Deposits the provider accepted.
    pub fn deposits(&self) -> Vec<DepositInstruction> {
        self.calls().deposits.clone()
    }

    pub fn feed_items(&self) -> Vec<FeedItem> {
        self.calls().feed_items.clone()
    }

    fn calls(&self) -> MutexGuard<'_, Calls> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BankingProvider for RecordingProvider {
    fn balance(&self, account_id: &str) -> Result<Account, ProviderError> {
        self.calls().balance_lookups.push(account_id.to_string());
        if let Some(message) = &self.balance_failure {
            return Err(ProviderError::new(message.clone()));
        }

        self.balances
            .get(account_id)
            .map(|balance| Account {
                id: account_id.to_string(),
                balance: *balance,
            })
            .ok_or_else(|| ProviderError::new(format!("unknown account {account_id}")))
    }

    fn pots(&self, account_id: &str) -> Result<Vec<Pot>, ProviderError> {
        self.calls().pot_lookups.push(account_id.to_string());
        if let Some(message) = &self.pots_failure {
            return Err(ProviderError::new(message.clone()));
        }
        Ok(self.pots.clone())
    }

    fn accounts(&self) -> Result<Vec<AccountSummary>, ProviderError> {
        if let Some(message) = &self.accounts_failure {
            return Err(ProviderError::new(message.clone()));
        }
        Ok(self.accounts.clone())
    }

    fn deposit(&self, instruction: &DepositInstruction) -> Result<(), ProviderError> {
        let mut calls = self.calls();
        calls.deposit_attempts.push(instruction.pot_id.clone());
        if self.failing_pot_id.as_deref() == Some(instruction.pot_id.as_str()) {
            return Err(ProviderError::new(format!(
                "deposit into {} rejected",
                instruction.pot_id
            )));
        }
        calls.deposits.push(instruction.clone());
        Ok(())
    }

    fn create_feed_item(&self, item: &FeedItem) -> Result<(), ProviderError> {
        if let Some(message) = &self.feed_failure {
            return Err(ProviderError::new(message.clone()));
        }
        self.calls().feed_items.push(item.clone());
        Ok(())
    }
}
