use tracing::info;

use crate::config::NotificationSettings;
use crate::error::SweepError;
use crate::model::{DepositInstruction, FeedItem};
use crate::money::format_pence_to_gbp;
use crate::planner::total_planned;
use crate::provider::BankingProvider;

pub const SWEEP_TITLE: &str = "🛒 Payday Sweep";
pub const DRY_RUN_SUFFIX: &str = " (DRY RUN)";

/// Builds the summary feed item for a planned sweep.
///
/// The total counts every planned deposit whether or not it was submitted.
/// Returns `None` for an empty plan since there is no account to post to.
pub fn build_feed_item(
    deposits: &[DepositInstruction],
    dry_run: bool,
    settings: &NotificationSettings,
) -> Option<FeedItem> {
    let first = deposits.first()?;
    let total = total_planned(deposits);

    let mut title = SWEEP_TITLE.to_string();
    if dry_run {
        title.push_str(DRY_RUN_SUFFIX);
    }

    Some(FeedItem {
        account_id: first.source_account_id.clone(),
        title,
        body: format!(
            "Transferred {} to {} pots",
            format_pence_to_gbp(total),
            deposits.len()
        ),
        url: settings.url.clone(),
        image_url: settings.image_url.clone(),
    })
}

pub fn notify_user(
    provider: &impl BankingProvider,
    deposits: &[DepositInstruction],
    dry_run: bool,
    settings: &NotificationSettings,
) -> Result<(), SweepError> {
    let Some(item) = build_feed_item(deposits, dry_run, settings) else {
        return Ok(());
    };

    info!(
        account_id = %item.account_id,
        total = total_planned(deposits),
        body = %item.body,
        dry_run,
        "posting sweep summary"
    );

    provider
        .create_feed_item(&item)
        .map_err(SweepError::Notification)
}
