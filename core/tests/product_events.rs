//! Product event generation: the activation funnel and weekly activity.

use chrono::NaiveDate;
use gtmgen_core::{
    config::{self, GenConfig},
    engine::{Dataset, GenEngine},
};
use std::collections::HashMap;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_dataset(seed: u64, accounts: usize) -> Dataset {
    let config = GenConfig::new(seed, ymd(2024, 7, 1), ymd(2025, 12, 31))
        .with_account_count(accounts);
    GenEngine::new(config).build().expect("dataset build")
}

fn activations(dataset: &Dataset) -> HashMap<&str, NaiveDate> {
    let mut map = HashMap::new();
    for event in &dataset.product_events {
        if event.event_type == "activation" {
            let previous = map.insert(event.user_id.as_str(), event.event_timestamp);
            assert!(
                previous.is_none(),
                "user {} activated more than once",
                event.user_id
            );
        }
    }
    map
}

#[test]
fn activation_rate_approximates_eighty_five_percent() {
    let dataset = build_dataset(42, 500);
    let activated = activations(&dataset);

    let rate = activated.len() as f64 / dataset.users.len() as f64;
    assert!(
        (rate - config::ACTIVATION_RATE).abs() < 0.03,
        "expected ~{}, observed {rate:.3}",
        config::ACTIVATION_RATE
    );
}

#[test]
fn activation_follows_user_creation_by_one_to_fourteen_days() {
    let dataset = build_dataset(11, 200);
    let activated = activations(&dataset);

    for user in &dataset.users {
        let Some(activation) = activated.get(user.user_id.as_str()) else {
            continue;
        };
        let lag = (*activation - user.created_at).num_days();
        assert!(
            (config::ACTIVATION_LAG_MIN_DAYS..=config::ACTIVATION_LAG_MAX_DAYS).contains(&lag),
            "user {} activated {lag} days after creation",
            user.user_id
        );
    }
}

#[test]
fn weekly_activity_only_follows_activation() {
    let dataset = build_dataset(42, 300);
    let activated = activations(&dataset);
    let horizon_end = ymd(2025, 12, 31);

    for event in &dataset.product_events {
        if event.event_type != "weekly_active" {
            continue;
        }
        let activation = activated
            .get(event.user_id.as_str())
            .unwrap_or_else(|| panic!("user {} is weekly-active but never activated", event.user_id));

        let offset = (event.event_timestamp - *activation).num_days();
        assert!(offset >= 0, "weekly event predates activation");
        assert_eq!(offset % 7, 0, "weekly events land on week boundaries");
        assert!(
            event.event_timestamp <= horizon_end,
            "weekly event {} escapes the horizon",
            event.event_id
        );
    }
}

#[test]
fn event_types_are_limited_to_the_contract() {
    let dataset = build_dataset(3, 100);

    for event in &dataset.product_events {
        assert!(
            event.event_type == "activation" || event.event_type == "weekly_active",
            "unexpected event type {}",
            event.event_type
        );
    }
}

#[test]
fn weekly_participation_approximates_seventy_percent() {
    let dataset = build_dataset(42, 500);
    let activated = activations(&dataset);
    let horizon_end = ymd(2025, 12, 31);

    let mut possible = 0i64;
    for activation in activated.values() {
        possible += ((horizon_end - *activation).num_days() / 7).max(0);
    }
    let actual = dataset
        .product_events
        .iter()
        .filter(|e| e.event_type == "weekly_active")
        .count() as f64;

    let rate = actual / possible as f64;
    assert!(
        (rate - config::WEEKLY_ACTIVE_RATE).abs() < 0.02,
        "expected ~{}, observed {rate:.3}",
        config::WEEKLY_ACTIVE_RATE
    );
}
