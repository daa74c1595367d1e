use payday_sweep_core::test_helpers::RecordingProvider;
use payday_sweep_core::{Pot, SweepError, SweepOutcome};
use payday_sweep_lambda::handlers::sweep::{handle_sweep_event, HandlerError};
use payday_sweep_lambda::settings::{LambdaSettings, SweepMode, ACCESS_TOKEN_CIPHERTEXT_VAR};
use serde_json::json;

fn settings(pairs: &[(&str, &str)]) -> LambdaSettings {
    LambdaSettings::from_lookup(|name| {
        if name == ACCESS_TOKEN_CIPHERTEXT_VAR {
            return Some("Y2lwaGVy".to_string());
        }
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    })
    .expect("settings load")
}

fn three_pots() -> Vec<Pot> {
    vec![
        Pot::new("pot_1", "Bills", true),
        Pot::new("pot_2", "Holiday", true),
        Pot::new("pot_3", "Savings", true),
    ]
}

#[test]
fn forced_dry_run_from_environment_reports_without_moving_money() {
    let provider = RecordingProvider::new().with_pots(three_pots());
    let settings = settings(&[
        ("SWEEP_MODE", "dry_run"),
        ("SWEEP_DRY_RUN_ACCOUNT_ID", "acc_env"),
    ]);

    let response =
        handle_sweep_event(json!({}), &settings, &provider).expect("dry run should succeed");

    assert_eq!(response.mode, SweepMode::DryRun);
    assert!(provider.deposit_attempts().is_empty());
    let items = provider.feed_items();
    assert_eq!(items[0].account_id, "acc_env");
    assert_eq!(items[0].title, "🛒 Payday Sweep (DRY RUN)");
    assert_eq!(items[0].body, "Transferred £6.0 to 3 pots");
}

#[test]
fn forced_process_mode_fails_on_second_deposit() {
    let provider = RecordingProvider::new()
        .with_pots(three_pots())
        .failing_deposit_for("pot_2");
    let settings = settings(&[
        ("SWEEP_MODE", "process"),
        ("SWEEP_FORCE_AMOUNT", "601"),
        ("SWEEP_FORCE_ACCOUNT_ID", "acc_main"),
    ]);

    let error = handle_sweep_event(json!(null), &settings, &provider)
        .expect_err("second deposit should fail");

    assert!(matches!(
        error,
        HandlerError::Sweep(SweepError::DepositSubmission {
            submitted: 1,
            planned: 3,
            ..
        })
    ));
    assert_eq!(provider.deposits().len(), 1);
    assert!(provider.feed_items().is_empty());
}

#[test]
fn custom_trigger_description_from_environment() {
    let provider = RecordingProvider::new()
        .with_balance("acc_main", 1_300)
        .with_pots(three_pots());
    let settings = settings(&[
        ("SWEEP_MODE", "process"),
        ("SWEEP_TRIGGER_DESCRIPTION", "ACME PAYROLL"),
    ]);
    let event = json!({
        "transaction": {"account_id": "acc_main", "amount": 1_000, "description": "ACME PAYROLL"}
    });

    let response = handle_sweep_event(event, &settings, &provider).expect("sweep should succeed");

    let SweepOutcome::Completed(summary) = response.outcome else {
        panic!("sweep should complete");
    };
    assert_eq!(summary.sweep_amount, 300);
    assert_eq!(summary.total_planned, 300);
    assert_eq!(provider.deposits().len(), 3);
}
