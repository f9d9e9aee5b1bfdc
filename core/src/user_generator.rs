//! User generation — the people attached to each account.
//!
//! Head count per account is Poisson(8) with a floor of one, so every
//! account has at least one user to hang product events off.

use crate::{
    account_generator::AccountRecord,
    config,
    error::GenResult,
    name_generator::NameGenerator,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub account_id: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDate, // always >= the account's created_at
}

pub fn generate(accounts: &[AccountRecord], rng: &mut GeneratorRng) -> GenResult<Vec<UserRecord>> {
    let mut users = Vec::new();
    let mut sequence: u64 = 1;

    for account in accounts {
        let head_count = rng.poisson(config::USERS_PER_ACCOUNT_MEAN).max(1);

        for _ in 0..head_count {
            let lag = rng.int_between(0, config::USER_SIGNUP_WINDOW_DAYS);
            users.push(UserRecord {
                user_id: format!("USR{sequence:06}"),
                account_id: account.account_id.clone(),
                email: NameGenerator::email(rng, sequence),
                role: config::USER_ROLES[rng.weighted_index(&config::USER_ROLE_WEIGHTS)]
                    .to_string(),
                created_at: account.created_at + Duration::days(lag),
            });
            sequence += 1;
        }
    }

    log::info!(
        "user: generated {} records across {} accounts",
        users.len(),
        accounts.len()
    );
    Ok(users)
}
