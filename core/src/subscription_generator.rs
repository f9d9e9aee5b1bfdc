//! Subscription generation — one subscription per account, with a
//! probabilistic churn decision.
//!
//! Boundary policy: a churn end date that falls beyond the horizon is
//! dropped and the subscription reported Active. Downstream retention
//! metrics depend on this exact behavior; see the horizon-overflow test
//! before "fixing" it.

use crate::{
    account_generator::AccountRecord,
    calendar::Horizon,
    config,
    error::GenResult,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub subscription_id: String,
    pub account_id: String,
    pub plan_tier: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String, // Active | Cancelled
}

pub fn generate(
    accounts: &[AccountRecord],
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> GenResult<Vec<SubscriptionRecord>> {
    let mut subscriptions = Vec::with_capacity(accounts.len());

    for (i, account) in accounts.iter().enumerate() {
        let start_date = account.created_at;
        let end_date = churn_end_date(start_date, horizon, rng);

        subscriptions.push(SubscriptionRecord {
            subscription_id: format!("SUB{:05}", i + 1),
            account_id: account.account_id.clone(),
            plan_tier: pick_plan_tier(&account.segment, rng),
            start_date,
            end_date,
            status: if end_date.is_some() { "Cancelled" } else { "Active" }.to_string(),
        });
    }

    let cancelled = subscriptions.iter().filter(|s| s.end_date.is_some()).count();
    log::info!(
        "subscription: generated {} records ({cancelled} cancelled)",
        subscriptions.len()
    );
    Ok(subscriptions)
}

/// Enterprise-segment accounts land on the Enterprise tier; everyone else
/// draws from the fixed tier distribution.
fn pick_plan_tier(segment: &str, rng: &mut GeneratorRng) -> String {
    if segment == "Enterprise" {
        return "Enterprise".to_string();
    }
    config::PLAN_TIERS[rng.weighted_index(&config::PLAN_TIER_WEIGHTS)].to_string()
}

/// 15% churn coin. A churned subscription fails Uniform(90, 400) days in;
/// when that date lands beyond the horizon the subscription is treated as
/// still active for reporting purposes (end_date = None).
fn churn_end_date(
    start_date: NaiveDate,
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> Option<NaiveDate> {
    if !rng.chance(config::CHURN_RATE) {
        return None;
    }
    let lifetime = rng.int_between(config::CHURN_MIN_DAYS, config::CHURN_MAX_DAYS);
    let end_date = start_date + Duration::days(lifetime);
    if end_date > horizon.end {
        None
    } else {
        Some(end_date)
    }
}
