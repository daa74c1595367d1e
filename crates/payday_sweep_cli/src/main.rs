use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use payday_sweep_core::config::{
    DEFAULT_DRY_RUN_AMOUNT, DEFAULT_FEED_IMAGE_URL, DEFAULT_FEED_URL,
};
use payday_sweep_core::monzo::{MonzoClient, DEFAULT_API_URL};
use payday_sweep_core::trigger::DEFAULT_TRIGGER_DESCRIPTION;
use payday_sweep_core::{
    dry_run, process_transaction, DescriptionMatch, DryRunOptions, ForcedTrigger,
    NotificationSettings, SweepConfig, SweepError, SweepOutcome, TriggerTransaction,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "payday-sweep",
    about = "Sweep a payday deposit from a Monzo current account into pots",
    long_about = "Runs the payday sweep locally against the Monzo API.\n\
                  Use `dry-run` to plan and notify without moving money."
)]
struct Cli {
    /// Monzo API access token (plaintext)
    #[arg(long, env = "MONZO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,
    /// Monzo API base URL
    #[arg(long, env = "MONZO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[command(flatten)]
    feed: FeedArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FeedArgs {
    /// Link attached to the summary feed item
    #[arg(long, env = "SWEEP_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,
    /// Image shown on the summary feed item
    #[arg(long, env = "SWEEP_FEED_IMAGE_URL", default_value = DEFAULT_FEED_IMAGE_URL)]
    feed_image_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a forced sweep and post the summary without submitting deposits
    DryRun {
        /// Amount to sweep, in pence
        #[arg(long, default_value_t = DEFAULT_DRY_RUN_AMOUNT)]
        amount: i64,
        /// Source account; defaults to the first open account
        #[arg(long)]
        account_id: Option<String>,
    },
    /// Evaluate a transaction and sweep if it is a payday credit
    Process {
        /// Account the transaction landed on
        #[arg(long)]
        account_id: String,
        /// Transaction amount, in pence
        #[arg(long, allow_negative_numbers = true)]
        amount: i64,
        /// Transaction description as shown on the statement
        #[arg(long)]
        description: String,
        /// Description that marks a payday credit
        #[arg(long, env = "SWEEP_TRIGGER_DESCRIPTION", default_value = DEFAULT_TRIGGER_DESCRIPTION)]
        trigger_description: String,
        /// Plan and notify only
        #[arg(long)]
        dry_run: bool,
        /// Sweep this amount (pence) from --account-id regardless of the trigger rule
        #[arg(long)]
        force_amount: Option<i64>,
    },
}

impl FeedArgs {
    fn notification(&self) -> NotificationSettings {
        NotificationSettings {
            url: self.feed_url.clone(),
            image_url: self.feed_image_url.clone(),
        }
    }
}

// ── commands ───────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<SweepOutcome, SweepError> {
    let client = MonzoClient::new(cli.access_token, &cli.api_url)
        .map_err(|source| SweepError::UpstreamQuery {
            operation: "client setup",
            source,
        })?;
    let notification = cli.feed.notification();

    match cli.command {
        Commands::DryRun { amount, account_id } => dry_run(
            &client,
            &DryRunOptions {
                forced_amount: amount,
                account_id,
                notification,
            },
        ),
        Commands::Process {
            account_id,
            amount,
            description,
            trigger_description,
            dry_run,
            force_amount,
        } => {
            let config = SweepConfig {
                dry_run,
                force: force_amount.map(|forced| ForcedTrigger {
                    amount: forced,
                    account_id: account_id.clone(),
                }),
                notification,
            };
            let transaction = TriggerTransaction {
                account_id,
                amount,
                description,
            };
            process_transaction(
                &client,
                &DescriptionMatch::new(trigger_description),
                &config,
                Some(&transaction),
            )
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ── main ───────────────────────────────────────────────────────────

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => match serde_json::to_string_pretty(&outcome) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(serialize_error) => {
                error!(error = %serialize_error, "failed to render sweep outcome");
                ExitCode::FAILURE
            }
        },
        Err(sweep_error) => {
            error!(error = %sweep_error, "sweep failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dry_run_defaults_to_original_amount() {
        let cli = Cli::try_parse_from(["payday-sweep", "--access-token", "t", "dry-run"])
            .expect("args should parse");

        match cli.command {
            Commands::DryRun { amount, account_id } => {
                assert_eq!(amount, 600);
                assert_eq!(account_id, None);
            }
            Commands::Process { .. } => panic!("expected dry-run"),
        }
        assert_eq!(cli.api_url, "https://api.monzo.com");
    }

    #[test]
    fn process_accepts_negative_amounts_and_force() {
        let cli = Cli::try_parse_from([
            "payday-sweep",
            "--access-token",
            "t",
            "process",
            "--account-id",
            "acc_main",
            "--amount",
            "-450",
            "--description",
            "CAFE",
            "--force-amount",
            "1200",
        ])
        .expect("args should parse");

        match cli.command {
            Commands::Process {
                amount,
                force_amount,
                dry_run,
                trigger_description,
                ..
            } => {
                assert_eq!(amount, -450);
                assert_eq!(force_amount, Some(1200));
                assert!(!dry_run);
                assert_eq!(trigger_description, "MONTHLY SALARY");
            }
            Commands::DryRun { .. } => panic!("expected process"),
        }
    }
}
