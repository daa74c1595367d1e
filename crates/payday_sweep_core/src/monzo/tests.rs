use super::client::{deposit_form, feed_form, MonzoClient};
use super::response::{describe_error_body, AccountsResponse, BalanceResponse, PotsResponse};
use crate::idempotency::IdempotencyKey;
use crate::model::{AccountSummary, DepositInstruction, FeedItem, Pot};

#[test]
fn pots_response_marks_deleted_pots_inactive() {
    let parsed: PotsResponse = serde_json::from_str(
        r#"{"pots": [
            {"id": "pot_1", "name": "Holiday", "balance": 1200, "currency": "GBP", "deleted": false},
            {"id": "pot_2", "name": "Old car", "balance": 0, "currency": "GBP", "deleted": true},
            {"id": "pot_3", "name": "Savings", "balance": 50}
        ]}"#,
    )
    .expect("pots should parse");

    let pots: Vec<Pot> = parsed.pots.into_iter().map(Pot::from).collect();
    assert_eq!(
        pots,
        vec![
            Pot::new("pot_1", "Holiday", true),
            Pot::new("pot_2", "Old car", false),
            Pot::new("pot_3", "Savings", true),
        ]
    );
}

#[test]
fn balance_response_reads_minor_units() {
    let parsed: BalanceResponse = serde_json::from_str(
        r#"{"balance": 5000, "total_balance": 6000, "currency": "GBP", "spend_today": -120}"#,
    )
    .expect("balance should parse");
    assert_eq!(parsed.balance, 5000);
}

#[test]
fn accounts_response_keeps_closed_flag() {
    let parsed: AccountsResponse = serde_json::from_str(
        r#"{"accounts": [
            {"id": "acc_1", "description": "user_1", "created": "2017-01-01T00:00:00Z", "closed": true},
            {"id": "acc_2", "description": "user_1"}
        ]}"#,
    )
    .expect("accounts should parse");

    let accounts: Vec<AccountSummary> = parsed
        .accounts
        .into_iter()
        .map(AccountSummary::from)
        .collect();
    assert!(accounts[0].closed);
    assert!(!accounts[1].closed);
    assert_eq!(accounts[1].id, "acc_2");
}

#[test]
fn deposit_form_carries_dedupe_id() {
    let key = IdempotencyKey::generate();
    let instruction = DepositInstruction {
        pot_id: "pot_1".to_string(),
        source_account_id: "acc_main".to_string(),
        amount: 200,
        idempotency_key: key.clone(),
    };

    let form = deposit_form(&instruction);
    assert_eq!(
        form,
        vec![
            ("source_account_id", "acc_main".to_string()),
            ("amount", "200".to_string()),
            ("dedupe_id", key.to_string()),
        ]
    );
}

#[test]
fn feed_form_uses_basic_type_and_params() {
    let item = FeedItem {
        account_id: "acc_main".to_string(),
        title: "🛒 Payday Sweep".to_string(),
        body: "Transferred £6.0 to 3 pots".to_string(),
        url: "http://example.com".to_string(),
        image_url: "http://example.com/icon.png".to_string(),
    };

    let form = feed_form(&item);
    assert!(form.contains(&("type", "basic".to_string())));
    assert!(form.contains(&("params[title]", "🛒 Payday Sweep".to_string())));
    assert!(form.contains(&("params[body]", "Transferred £6.0 to 3 pots".to_string())));
    assert!(form.contains(&("params[image_url]", "http://example.com/icon.png".to_string())));
}

#[test]
fn error_body_prefers_code_and_message() {
    assert_eq!(
        describe_error_body(r#"{"code": "unauthorized.bad_access_token", "message": "expired"}"#),
        "unauthorized.bad_access_token: expired"
    );
    assert_eq!(describe_error_body(r#"{"message": "nope"}"#), "nope");
    assert_eq!(describe_error_body("upstream exploded\n"), "upstream exploded");
}

#[test]
fn client_debug_trims_endpoint_and_hides_token() {
    let client =
        MonzoClient::new("secret-token", "https://api.monzo.com/").expect("client should build");
    let rendered = format!("{client:?}");
    assert!(rendered.contains("endpoint: \"https://api.monzo.com\""));
    assert!(!rendered.contains("secret-token"));
}
