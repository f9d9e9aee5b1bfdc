//! Run configuration and the fixed distribution constants of the design.
//!
//! Only the seed, the horizon, and the account count are tunable. Every
//! distribution weight below is a fixed constant of the dataset's
//! statistical contract — the tables here are the single source of truth,
//! and the integration tests assert against them directly.

use crate::{
    calendar::Horizon,
    error::{GenError, GenResult},
};
use chrono::NaiveDate;

pub const DEFAULT_ACCOUNT_COUNT: usize = 500;

// ── Accounts ─────────────────────────────────────────────────────────────────

pub const SEGMENTS: [&str; 3] = ["Enterprise", "Mid-Market", "SMB"];
pub const SEGMENT_WEIGHTS: [f64; 3] = [0.15, 0.35, 0.50];

pub const REGIONS: [&str; 4] = ["North America", "EMEA", "APAC", "LATAM"];

pub const COMPANY_SIZES: [&str; 4] = ["1-50", "51-200", "201-1000", "1000+"];
pub const COMPANY_SIZE_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

/// Days a Q4 signup date may be pulled earlier (fiscal-rush seasonality).
pub const Q4_SIGNUP_PULL_DAYS: i64 = 60;

// ── Users ────────────────────────────────────────────────────────────────────

pub const USERS_PER_ACCOUNT_MEAN: f64 = 8.0;
pub const USER_SIGNUP_WINDOW_DAYS: i64 = 30;

pub const USER_ROLES: [&str; 3] = ["Admin", "User", "Viewer"];
pub const USER_ROLE_WEIGHTS: [f64; 3] = [0.2, 0.6, 0.2];

// ── Subscriptions ────────────────────────────────────────────────────────────

pub const PLAN_TIERS: [&str; 4] = ["Starter", "Professional", "Business", "Enterprise"];
pub const PLAN_TIER_WEIGHTS: [f64; 4] = [0.3, 0.4, 0.2, 0.1];

pub const CHURN_RATE: f64 = 0.15;
pub const CHURN_MIN_DAYS: i64 = 90;
pub const CHURN_MAX_DAYS: i64 = 400;

/// Monthly base rate per plan tier, in whole dollars.
pub fn plan_base_rate(tier: &str) -> f64 {
    match tier {
        "Starter" => 99.0,
        "Professional" => 299.0,
        "Business" => 799.0,
        "Enterprise" => 2499.0,
        other => panic!("unknown plan tier: {other}"),
    }
}

// ── Billing ──────────────────────────────────────────────────────────────────

pub const EXPANSION_PROBABILITY: f64 = 0.05;
pub const EXPANSION_MULTIPLIER: f64 = 1.2;
pub const PAYMENT_LAG_MIN_DAYS: i64 = 1;
pub const PAYMENT_LAG_MAX_DAYS: i64 = 10;

pub const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "ACH", "Wire Transfer"];

// ── Deals ────────────────────────────────────────────────────────────────────

pub const LOST_DEAL_RATIO: f64 = 0.3;
pub const WON_CYCLE_MIN_DAYS: i64 = 30;
pub const WON_CYCLE_MAX_DAYS: i64 = 120;
pub const LOST_CYCLE_MIN_DAYS: i64 = 20;
pub const LOST_CYCLE_MAX_DAYS: i64 = 90;
pub const LOST_DEAL_VALUE_MIN: i64 = 5_000;
pub const LOST_DEAL_VALUE_MAX: i64 = 100_000;

/// Closed-won deal value range per segment, in whole dollars.
pub fn won_deal_value_range(segment: &str) -> (i64, i64) {
    match segment {
        "Enterprise" => (50_000, 150_000),
        "Mid-Market" => (15_000, 50_000),
        "SMB" => (3_000, 15_000),
        other => panic!("unknown segment: {other}"),
    }
}

// ── Product events ───────────────────────────────────────────────────────────

pub const ACTIVATION_RATE: f64 = 0.85;
pub const ACTIVATION_LAG_MIN_DAYS: i64 = 1;
pub const ACTIVATION_LAG_MAX_DAYS: i64 = 14;
pub const WEEKLY_ACTIVE_RATE: f64 = 0.7;

// ── Support tickets ──────────────────────────────────────────────────────────

pub const TICKETS_PER_ACCOUNT_MIN: i64 = 1;
pub const TICKETS_PER_ACCOUNT_MAX: i64 = 20;

pub const SUPPORT_CATEGORIES: [&str; 4] = ["Technical", "Billing", "Feature Request", "Bug Report"];

pub const SEVERITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];
pub const SEVERITY_WEIGHTS: [f64; 4] = [0.5, 0.3, 0.15, 0.05];
pub const SEVERITY_SLA_HOURS: [u32; 4] = [48, 24, 8, 2];

// ── Marketing spend ──────────────────────────────────────────────────────────

/// Marketing channels double as account acquisition channels so spend can
/// be attributed per channel downstream. The two sets must stay identical.
pub const MARKETING_CHANNELS: [&str; 5] = [
    "Google Ads",
    "LinkedIn",
    "Content Marketing",
    "Events",
    "Referral",
];

pub const Q4_SPEND_MULTIPLIER: f64 = 1.3;
pub const COST_PER_LEAD_MIN: i64 = 80;
pub const COST_PER_LEAD_MAX: i64 = 150;

/// Monthly base spend per channel, in whole dollars.
pub fn channel_base_spend(channel: &str) -> f64 {
    match channel {
        "Google Ads" => 25_000.0,
        "LinkedIn" => 18_000.0,
        "Content Marketing" => 12_000.0,
        "Events" => 30_000.0,
        "Referral" => 5_000.0,
        other => panic!("unknown marketing channel: {other}"),
    }
}

/// Round a dollar amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ── Run configuration ────────────────────────────────────────────────────────

/// The full externally tunable surface of a run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub seed: u64,
    pub horizon: Horizon,
    pub account_count: usize,
}

impl GenConfig {
    pub fn new(seed: u64, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            seed,
            horizon: Horizon::new(start, end),
            account_count: DEFAULT_ACCOUNT_COUNT,
        }
    }

    pub fn with_account_count(mut self, account_count: usize) -> Self {
        self.account_count = account_count;
        self
    }

    /// Validate before any generator runs. A bad configuration must not
    /// produce a partial dataset.
    pub fn validate(&self) -> GenResult<()> {
        if self.horizon.end <= self.horizon.start {
            return Err(GenError::InvalidHorizon {
                start: self.horizon.start,
                end: self.horizon.end,
            });
        }
        if self.account_count == 0 {
            return Err(GenError::InvalidAccountCount {
                count: self.account_count,
            });
        }
        Ok(())
    }
}
