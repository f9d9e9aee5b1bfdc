//! Sales pipeline generation — two independent deal streams.
//!
//! Stream (a): every account carries exactly one Closed Won deal, created
//! 30–120 days before the account signup and closed on it.
//! Stream (b): a pool of Closed Lost deals sized at 30% of the account
//! count, with no account reference. The two streams intentionally carry
//! different sales-cycle distributions.

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
pub struct DealRecord {
    pub deal_id: String,
    pub account_id: Option<String>, // None for synthetic lost deals
    pub deal_value: i64,
    pub stage: String, // Closed Won | Closed Lost
    pub created_date: NaiveDate,
    pub closed_date: NaiveDate,
    pub sales_cycle_days: i64,
    pub segment: String,
}

pub fn generate(
    accounts: &[AccountRecord],
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> GenResult<Vec<DealRecord>> {
    let lost_count = (accounts.len() as f64 * config::LOST_DEAL_RATIO) as usize;
    let mut deals = Vec::with_capacity(accounts.len() + lost_count);
    let mut sequence: u64 = 1;

    for account in accounts {
        let (value_min, value_max) = config::won_deal_value_range(&account.segment);
        let cycle = rng.int_between(config::WON_CYCLE_MIN_DAYS, config::WON_CYCLE_MAX_DAYS);

        deals.push(DealRecord {
            deal_id: format!("DEAL{sequence:05}"),
            account_id: Some(account.account_id.clone()),
            deal_value: rng.int_between(value_min, value_max),
            stage: "Closed Won".to_string(),
            created_date: account.created_at - Duration::days(cycle),
            closed_date: account.created_at,
            sales_cycle_days: cycle,
            segment: account.segment.clone(),
        });
        sequence += 1;
    }

    // Lost deals are pipeline noise: independent segment draw, no account
    // reference, and a single cycle draw that fixes both the close date
    // and the reported cycle length.
    for _ in 0..lost_count {
        let segment = config::SEGMENTS[rng.weighted_index(&config::SEGMENT_WEIGHTS)];
        let created_date = horizon.start + Duration::days(rng.int_between(0, horizon.day_span()));
        let cycle = rng.int_between(config::LOST_CYCLE_MIN_DAYS, config::LOST_CYCLE_MAX_DAYS);

        deals.push(DealRecord {
            deal_id: format!("DEAL{sequence:05}"),
            account_id: None,
            deal_value: rng.int_between(config::LOST_DEAL_VALUE_MIN, config::LOST_DEAL_VALUE_MAX),
            stage: "Closed Lost".to_string(),
            created_date,
            closed_date: created_date + Duration::days(cycle),
            sales_cycle_days: cycle,
            segment: segment.to_string(),
        });
        sequence += 1;
    }

    log::info!(
        "deal: generated {} won and {lost_count} lost deals",
        accounts.len()
    );
    Ok(deals)
}
