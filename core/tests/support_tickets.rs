//! Support ticket generation: volumes, severity mapping, and the SLA
//! breach flag consistency guarantee.

use chrono::{NaiveDate, NaiveTime};
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

#[test]
fn every_account_files_one_to_twenty_tickets() {
    let dataset = build_dataset(42, 300);

    let mut per_account: HashMap<&str, i64> = HashMap::new();
    for ticket in &dataset.support_tickets {
        *per_account.entry(ticket.account_id.as_str()).or_default() += 1;
    }

    assert_eq!(per_account.len(), dataset.accounts.len());
    for (account_id, count) in per_account {
        assert!(
            (config::TICKETS_PER_ACCOUNT_MIN..=config::TICKETS_PER_ACCOUNT_MAX).contains(&count),
            "account {account_id} filed {count} tickets"
        );
    }
}

#[test]
fn sla_breached_always_equals_the_hours_comparison() {
    let dataset = build_dataset(42, 500);

    for ticket in &dataset.support_tickets {
        assert_eq!(
            ticket.sla_breached,
            ticket.resolution_hours > ticket.sla_hours as f64,
            "{}: breach flag disagrees with resolution {} vs SLA {}",
            ticket.ticket_id,
            ticket.resolution_hours,
            ticket.sla_hours
        );
    }
}

#[test]
fn severity_maps_to_the_fixed_sla_table() {
    let dataset = build_dataset(7, 200);

    for ticket in &dataset.support_tickets {
        let index = config::SEVERITIES
            .iter()
            .position(|s| *s == ticket.severity)
            .unwrap_or_else(|| panic!("unknown severity {}", ticket.severity));
        assert_eq!(ticket.sla_hours, config::SEVERITY_SLA_HOURS[index]);
        assert!(config::SUPPORT_CATEGORIES.contains(&ticket.category.as_str()));
    }
}

#[test]
fn resolution_stays_within_half_to_one_and_a_half_sla() {
    let dataset = build_dataset(42, 300);

    for ticket in &dataset.support_tickets {
        let sla = ticket.sla_hours as f64;
        // resolution_hours is rounded to a tenth, so allow that slack.
        assert!(
            ticket.resolution_hours >= 0.5 * sla - 0.05
                && ticket.resolution_hours <= 1.5 * sla + 0.05,
            "{}: resolution {} outside [{}, {}]",
            ticket.ticket_id,
            ticket.resolution_hours,
            0.5 * sla,
            1.5 * sla
        );
    }
}

#[test]
fn resolved_at_is_created_at_plus_resolution_hours() {
    let dataset = build_dataset(13, 150);

    for ticket in &dataset.support_tickets {
        let expected =
            ticket.created_at + chrono::Duration::minutes((ticket.resolution_hours * 60.0).round() as i64);
        assert_eq!(
            ticket.resolved_at, expected,
            "{}: resolved_at disagrees with resolution_hours",
            ticket.ticket_id
        );
    }
}

#[test]
fn tickets_open_inside_the_account_lifetime() {
    let dataset = build_dataset(42, 300);
    let horizon_end = ymd(2025, 12, 31).and_time(NaiveTime::MIN);

    let created_by_account: HashMap<&str, NaiveDate> = dataset
        .accounts
        .iter()
        .map(|a| (a.account_id.as_str(), a.created_at))
        .collect();

    for ticket in &dataset.support_tickets {
        let account_created = created_by_account[ticket.account_id.as_str()];
        assert!(
            ticket.created_at >= account_created.and_time(NaiveTime::MIN),
            "{}: ticket predates the account",
            ticket.ticket_id
        );
        assert!(
            ticket.created_at <= horizon_end,
            "{}: ticket opens after the horizon",
            ticket.ticket_id
        );
    }
}

#[test]
fn breach_rate_is_structurally_near_half() {
    let dataset = build_dataset(42, 500);

    let breached = dataset
        .support_tickets
        .iter()
        .filter(|t| t.sla_breached)
        .count() as f64
        / dataset.support_tickets.len() as f64;

    assert!(
        (breached - 0.5).abs() < 0.05,
        "expected ~0.5 by construction, observed {breached:.3}"
    );
}
