//! Subscription generation: cardinality, churn behavior, and the
//! horizon-overflow boundary policy.

use chrono::NaiveDate;
use gtmgen_core::{
    config::{self, GenConfig},
    engine::{Dataset, GenEngine},
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_dataset(seed: u64, start: NaiveDate, end: NaiveDate, accounts: usize) -> Dataset {
    let config = GenConfig::new(seed, start, end).with_account_count(accounts);
    GenEngine::new(config).build().expect("dataset build")
}

#[test]
fn exactly_one_subscription_per_account() {
    let dataset = build_dataset(42, ymd(2024, 7, 1), ymd(2025, 12, 31), 500);

    assert_eq!(dataset.subscriptions.len(), dataset.accounts.len());
    for (account, subscription) in dataset.accounts.iter().zip(&dataset.subscriptions) {
        assert_eq!(subscription.account_id, account.account_id);
        assert_eq!(
            subscription.start_date, account.created_at,
            "subscription starts when the account signs up"
        );
    }
}

#[test]
fn status_and_end_date_always_agree() {
    let dataset = build_dataset(17, ymd(2024, 7, 1), ymd(2025, 12, 31), 300);

    for subscription in &dataset.subscriptions {
        match subscription.end_date {
            Some(_) => assert_eq!(subscription.status, "Cancelled"),
            None => assert_eq!(subscription.status, "Active"),
        }
    }
}

#[test]
fn cancelled_subscriptions_live_between_90_and_400_days() {
    let dataset = build_dataset(42, ymd(2024, 7, 1), ymd(2025, 12, 31), 500);

    for subscription in &dataset.subscriptions {
        if let Some(end_date) = subscription.end_date {
            let lifetime = (end_date - subscription.start_date).num_days();
            assert!(
                (config::CHURN_MIN_DAYS..=config::CHURN_MAX_DAYS).contains(&lifetime),
                "{} lived {lifetime} days",
                subscription.subscription_id
            );
        }
    }
}

#[test]
fn churn_rate_approximates_fifteen_percent_on_a_long_horizon() {
    // A decade-long horizon makes end-date overflow rare, so the observed
    // cancellation rate converges on the raw churn coin.
    let dataset = build_dataset(42, ymd(2020, 1, 1), ymd(2029, 12, 31), 500);

    let cancelled = dataset
        .subscriptions
        .iter()
        .filter(|s| s.end_date.is_some())
        .count() as f64
        / dataset.subscriptions.len() as f64;

    assert!(
        (cancelled - config::CHURN_RATE).abs() < 0.05,
        "expected ~{}, observed {cancelled:.3}",
        config::CHURN_RATE
    );
}

#[test]
fn churn_past_the_horizon_is_reported_active() {
    // With a 62-day horizon every churn date (>= 90 days out) overflows,
    // so the boundary policy must null every end date. This behavior is
    // deliberate — changing it shifts downstream retention metrics.
    let dataset = build_dataset(5, ymd(2024, 7, 1), ymd(2024, 9, 1), 200);

    for subscription in &dataset.subscriptions {
        assert_eq!(
            subscription.end_date, None,
            "{} should have overflowed the horizon",
            subscription.subscription_id
        );
        assert_eq!(subscription.status, "Active");
    }
}

#[test]
fn no_end_date_escapes_the_horizon() {
    let end = ymd(2025, 12, 31);
    let dataset = build_dataset(42, ymd(2024, 7, 1), end, 500);

    for subscription in &dataset.subscriptions {
        if let Some(end_date) = subscription.end_date {
            assert!(end_date <= end, "end date {end_date} escapes the horizon");
        }
    }
}

#[test]
fn enterprise_accounts_land_on_the_enterprise_tier() {
    let dataset = build_dataset(42, ymd(2024, 7, 1), ymd(2025, 12, 31), 500);

    for (account, subscription) in dataset.accounts.iter().zip(&dataset.subscriptions) {
        assert!(config::PLAN_TIERS.contains(&subscription.plan_tier.as_str()));
        if account.segment == "Enterprise" {
            assert_eq!(
                subscription.plan_tier, "Enterprise",
                "{} is an Enterprise-segment account",
                account.account_id
            );
        }
    }
}
