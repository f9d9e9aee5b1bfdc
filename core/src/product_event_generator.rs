//! Product usage events — the activation funnel plus weekly activity.
//!
//! Activation fires for ~85% of users, 1–14 days after user creation.
//! Activated users then get one weekly_active trial per elapsed week until
//! the horizon, each at a constant 70%. Retention decay is NOT simulated:
//! only the shrinking week range makes counts trail off near the horizon.

use crate::{
    calendar::Horizon,
    config,
    error::GenResult,
    rng::GeneratorRng,
    user_generator::UserRecord,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEventRecord {
    pub event_id: String,
    pub user_id: String,
    pub account_id: String,
    pub event_type: String, // activation | weekly_active
    pub event_timestamp: NaiveDate,
}

pub fn generate(
    users: &[UserRecord],
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> GenResult<Vec<ProductEventRecord>> {
    let mut events = Vec::new();
    let mut sequence: u64 = 1;

    for user in users {
        if !rng.chance(config::ACTIVATION_RATE) {
            continue;
        }

        let activation = user.created_at
            + Duration::days(rng.int_between(
                config::ACTIVATION_LAG_MIN_DAYS,
                config::ACTIVATION_LAG_MAX_DAYS,
            ));
        events.push(make_event(&mut sequence, user, "activation", activation));

        // One trial per elapsed week between activation and the horizon.
        // Users created close to the horizon simply get fewer trials.
        let weeks = (horizon.end - activation).num_days() / 7;
        for week in 0..weeks {
            if rng.chance(config::WEEKLY_ACTIVE_RATE) {
                events.push(make_event(
                    &mut sequence,
                    user,
                    "weekly_active",
                    activation + Duration::weeks(week),
                ));
            }
        }
    }

    log::info!(
        "product_event: generated {} events for {} users",
        events.len(),
        users.len()
    );
    Ok(events)
}

fn make_event(
    sequence: &mut u64,
    user: &UserRecord,
    event_type: &str,
    event_timestamp: NaiveDate,
) -> ProductEventRecord {
    let record = ProductEventRecord {
        event_id: format!("EVT{sequence:08}"),
        user_id: user.user_id.clone(),
        account_id: user.account_id.clone(),
        event_type: event_type.to_string(),
        event_timestamp,
    };
    *sequence += 1;
    record
}
