//! Marketing spend generation — independent of the entity graph.
//!
//! One record per (month in horizon) × (channel in the fixed 5-channel
//! set). The channel set is the acquisition-channel set, so per-channel
//! acquisition cost is computable downstream.

use crate::{
    calendar::{is_q4, Horizon},
    config,
    error::GenResult,
    rng::GeneratorRng,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingSpendRecord {
    pub month: NaiveDate, // first of month
    pub channel: String,
    pub spend: f64,
    pub leads_generated: i64,
    pub campaign_name: String,
}

pub fn generate(horizon: &Horizon, rng: &mut GeneratorRng) -> GenResult<Vec<MarketingSpendRecord>> {
    let months = horizon.month_starts();
    let mut records = Vec::with_capacity(months.len() * config::MARKETING_CHANNELS.len());

    for month in months {
        for channel in config::MARKETING_CHANNELS {
            let mut base_spend = config::channel_base_spend(channel);
            if is_q4(month) {
                base_spend *= config::Q4_SPEND_MULTIPLIER;
            }
            let spend = config::round_cents(base_spend * rng.uniform(0.8, 1.2));
            let cost_per_lead =
                rng.int_between(config::COST_PER_LEAD_MIN, config::COST_PER_LEAD_MAX);

            records.push(MarketingSpendRecord {
                month,
                channel: channel.to_string(),
                spend,
                leads_generated: (spend / cost_per_lead as f64).floor() as i64,
                campaign_name: format!("{channel} {}", month.format("%b %Y")),
            });
        }
    }

    log::info!("marketing_spend: generated {} records", records.len());
    Ok(records)
}
