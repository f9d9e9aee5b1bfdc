//! CSV emission — the generator's only external boundary.
//!
//! One header-bearing CSV per table, written in generation order with
//! overwrite semantics. Column names and their order are a stable
//! contract with the loader; renaming, reordering, or dropping a column
//! is a breaking change. The header rows are written from the constants
//! below even for an empty table.

use crate::{engine::Dataset, error::GenResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const ACCOUNT_COLUMNS: [&str; 8] = [
    "account_id",
    "account_name",
    "segment",
    "company_size",
    "region",
    "acquisition_channel",
    "created_at",
    "status",
];

pub const USER_COLUMNS: [&str; 5] = ["user_id", "account_id", "email", "role", "created_at"];

pub const SUBSCRIPTION_COLUMNS: [&str; 6] = [
    "subscription_id",
    "account_id",
    "plan_tier",
    "start_date",
    "end_date",
    "status",
];

pub const INVOICE_COLUMNS: [&str; 6] = [
    "invoice_id",
    "subscription_id",
    "account_id",
    "invoice_date",
    "amount",
    "status",
];

pub const PAYMENT_COLUMNS: [&str; 5] = [
    "payment_id",
    "invoice_id",
    "payment_date",
    "amount",
    "payment_method",
];

pub const DEAL_COLUMNS: [&str; 8] = [
    "deal_id",
    "account_id",
    "deal_value",
    "stage",
    "created_date",
    "closed_date",
    "sales_cycle_days",
    "segment",
];

pub const PRODUCT_EVENT_COLUMNS: [&str; 5] = [
    "event_id",
    "user_id",
    "account_id",
    "event_type",
    "event_timestamp",
];

pub const SUPPORT_TICKET_COLUMNS: [&str; 9] = [
    "ticket_id",
    "account_id",
    "category",
    "severity",
    "created_at",
    "resolved_at",
    "sla_hours",
    "resolution_hours",
    "sla_breached",
];

pub const MARKETING_SPEND_COLUMNS: [&str; 5] = [
    "month",
    "channel",
    "spend",
    "leads_generated",
    "campaign_name",
];

/// Write all nine tables under `dir`, replacing any previous run's files.
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> GenResult<()> {
    fs::create_dir_all(dir)?;

    write_table(dir, "accounts.csv", &ACCOUNT_COLUMNS, &dataset.accounts)?;
    write_table(dir, "users.csv", &USER_COLUMNS, &dataset.users)?;
    write_table(
        dir,
        "subscriptions.csv",
        &SUBSCRIPTION_COLUMNS,
        &dataset.subscriptions,
    )?;
    write_table(dir, "invoices.csv", &INVOICE_COLUMNS, &dataset.invoices)?;
    write_table(dir, "payments.csv", &PAYMENT_COLUMNS, &dataset.payments)?;
    write_table(dir, "crm_deals.csv", &DEAL_COLUMNS, &dataset.deals)?;
    write_table(
        dir,
        "product_events.csv",
        &PRODUCT_EVENT_COLUMNS,
        &dataset.product_events,
    )?;
    write_table(
        dir,
        "support_tickets.csv",
        &SUPPORT_TICKET_COLUMNS,
        &dataset.support_tickets,
    )?;
    write_table(
        dir,
        "marketing_spend.csv",
        &MARKETING_SPEND_COLUMNS,
        &dataset.marketing_spend,
    )?;

    log::info!("emit: wrote 9 tables to {}", dir.display());
    Ok(())
}

fn write_table<T: Serialize>(
    dir: &Path,
    file_name: &str,
    columns: &[&str],
    rows: &[T],
) -> GenResult<()> {
    let path = dir.join(file_name);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::debug!("emit: {} rows -> {}", rows.len(), path.display());
    Ok(())
}
