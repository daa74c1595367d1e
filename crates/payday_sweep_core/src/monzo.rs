//! Blocking HTTP client for the Monzo API.
//!
//! Implements [`BankingProvider`](crate::provider::BankingProvider) over the
//! balance, pots, accounts, pot deposit and feed endpoints. Wire types stay
//! private to this module.

mod client;
mod response;
#[cfg(test)]
mod tests;

pub use client::{MonzoClient, DEFAULT_API_URL};
