//! Support ticket generation — SLA-driven resolution times per account.
//!
//! Resolution sits anywhere from half to 1.5× the severity's SLA target,
//! so roughly half of all tickets breach by construction; tighter SLAs
//! (High/Critical) simply leave less absolute headroom.

use crate::{
    account_generator::AccountRecord,
    calendar::Horizon,
    config,
    error::GenResult,
    rng::GeneratorRng,
};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicketRecord {
    pub ticket_id: String,
    pub account_id: String,
    pub category: String,
    pub severity: String,
    pub created_at: NaiveDateTime,
    pub resolved_at: NaiveDateTime,
    pub sla_hours: u32,
    pub resolution_hours: f64,
    pub sla_breached: bool, // holds resolution_hours > sla_hours, always
}

pub fn generate(
    accounts: &[AccountRecord],
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> GenResult<Vec<SupportTicketRecord>> {
    let mut tickets = Vec::new();
    let mut sequence: u64 = 1;

    for account in accounts {
        let volume = rng.int_between(
            config::TICKETS_PER_ACCOUNT_MIN,
            config::TICKETS_PER_ACCOUNT_MAX,
        );
        let open_window = (horizon.end - account.created_at).num_days();

        for _ in 0..volume {
            let created = account.created_at + Duration::days(rng.int_between(0, open_window));
            let severity_index = rng.weighted_index(&config::SEVERITY_WEIGHTS);
            let sla_hours = config::SEVERITY_SLA_HOURS[severity_index];

            // The breach flag is derived from the stored (rounded) value so
            // the two columns can never disagree.
            let resolution_hours = round_tenth(sla_hours as f64 * rng.uniform(0.5, 1.5));
            let created_at = created.and_time(NaiveTime::MIN);

            tickets.push(SupportTicketRecord {
                ticket_id: format!("TKT{sequence:06}"),
                account_id: account.account_id.clone(),
                category: rng.pick(&config::SUPPORT_CATEGORIES).to_string(),
                severity: config::SEVERITIES[severity_index].to_string(),
                created_at,
                resolved_at: created_at + Duration::minutes((resolution_hours * 60.0).round() as i64),
                sla_hours,
                resolution_hours,
                sla_breached: resolution_hours > sla_hours as f64,
            });
            sequence += 1;
        }
    }

    log::info!(
        "support_ticket: generated {} tickets for {} accounts",
        tickets.len(),
        accounts.len()
    );
    Ok(tickets)
}

fn round_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
