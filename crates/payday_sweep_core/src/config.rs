pub const DEFAULT_FEED_URL: &str = "http://www.github.com/ojcm";
pub const DEFAULT_FEED_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/golang-samples/gopher-vector/master/gopher.png";
pub const DEFAULT_DRY_RUN_AMOUNT: i64 = 600;

/// Manual override that bypasses the trigger rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedTrigger {
    pub amount: i64,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub url: String,
    pub image_url: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            image_url: DEFAULT_FEED_IMAGE_URL.to_string(),
        }
    }
}

/// Per-invocation settings for a sweep run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepConfig {
    pub dry_run: bool,
    pub force: Option<ForcedTrigger>,
    pub notification: NotificationSettings,
}

/// Settings for the manual dry-run entry point.
///
/// When `account_id` is `None` the first open account visible to the
/// credential is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunOptions {
    pub forced_amount: i64,
    pub account_id: Option<String>,
    pub notification: NotificationSettings,
}

impl Default for DryRunOptions {
    fn default() -> Self {
        Self {
            forced_amount: DEFAULT_DRY_RUN_AMOUNT,
            account_id: None,
            notification: NotificationSettings::default(),
        }
    }
}
