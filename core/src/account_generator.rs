//! Account generation — the root of the entity graph.
//!
//! A single pass produces exactly `account_count` records with sequential
//! ids. Creation dates are uniform over the horizon with a Q4 pull-back
//! that concentrates signups before year-end.

use crate::{
    calendar::{is_q4, Horizon},
    config::{self, GenConfig},
    error::GenResult,
    name_generator::NameGenerator,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_id: String,
    pub account_name: String,
    pub segment: String,
    pub company_size: String,
    pub region: String,
    pub acquisition_channel: String,
    pub created_at: NaiveDate,
    pub status: String, // always "Active"; churn lives on the subscription
}

pub fn generate(config: &GenConfig, rng: &mut GeneratorRng) -> GenResult<Vec<AccountRecord>> {
    let mut accounts = Vec::with_capacity(config.account_count);

    for i in 0..config.account_count {
        let segment = config::SEGMENTS[rng.weighted_index(&config::SEGMENT_WEIGHTS)];
        let company_size =
            config::COMPANY_SIZES[rng.weighted_index(&config::COMPANY_SIZE_WEIGHTS)];

        accounts.push(AccountRecord {
            account_id: format!("ACC{:05}", i + 1),
            account_name: NameGenerator::company_name(rng),
            segment: segment.to_string(),
            company_size: company_size.to_string(),
            region: rng.pick(&config::REGIONS).to_string(),
            acquisition_channel: rng.pick(&config::MARKETING_CHANNELS).to_string(),
            created_at: signup_date(&config.horizon, rng),
            status: "Active".to_string(),
        });
    }

    log::info!("account: generated {} records", accounts.len());
    Ok(accounts)
}

/// Uniform draw over the horizon, pulled up to 60 days earlier when it
/// lands in Q4 (fiscal-rush seasonality). The pull-back never leaves the
/// horizon: dates are clamped at the start boundary.
fn signup_date(horizon: &Horizon, rng: &mut GeneratorRng) -> NaiveDate {
    let offset = rng.int_between(0, horizon.day_span());
    let mut date = horizon.start + Duration::days(offset);
    if is_q4(date) {
        date -= Duration::days(rng.int_between(0, config::Q4_SIGNUP_PULL_DAYS));
        if date < horizon.start {
            date = horizon.start;
        }
    }
    date
}
