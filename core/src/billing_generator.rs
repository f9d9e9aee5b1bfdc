//! Invoice and payment generation.
//!
//! Walks month boundaries across each subscription's active window and
//! emits one invoice per month at the plan's base rate, each paired 1:1
//! with a payment 1–10 days later. Invoice and payment counts are always
//! equal and id pairs are never reused.

use crate::{
    calendar::{month_starts, Horizon},
    config,
    error::GenResult,
    rng::GeneratorRng,
    subscription_generator::SubscriptionRecord,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: String,
    pub subscription_id: String,
    pub account_id: String,
    pub invoice_date: NaiveDate,
    pub amount: f64,
    pub status: String, // always "Paid"; collections are not modeled
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_id: String,
    pub invoice_id: String,
    pub payment_date: NaiveDate,
    pub amount: f64,
    pub payment_method: String,
}

pub fn generate(
    subscriptions: &[SubscriptionRecord],
    horizon: &Horizon,
    rng: &mut GeneratorRng,
) -> GenResult<(Vec<InvoiceRecord>, Vec<PaymentRecord>)> {
    let mut invoices = Vec::new();
    let mut payments = Vec::new();
    let mut sequence: u64 = 1;

    for subscription in subscriptions {
        let window_end = subscription.end_date.unwrap_or(horizon.end);

        for invoice_date in month_starts(subscription.start_date, window_end) {
            let amount = invoice_amount(&subscription.plan_tier, rng);
            let invoice_id = format!("INV{sequence:06}");

            invoices.push(InvoiceRecord {
                invoice_id: invoice_id.clone(),
                subscription_id: subscription.subscription_id.clone(),
                account_id: subscription.account_id.clone(),
                invoice_date,
                amount,
                status: "Paid".to_string(),
            });
            payments.push(PaymentRecord {
                payment_id: format!("PAY{sequence:06}"),
                invoice_id,
                payment_date: invoice_date
                    + Duration::days(rng.int_between(
                        config::PAYMENT_LAG_MIN_DAYS,
                        config::PAYMENT_LAG_MAX_DAYS,
                    )),
                amount,
                payment_method: rng.pick(&config::PAYMENT_METHODS).to_string(),
            });
            sequence += 1;
        }
    }

    log::info!(
        "billing: generated {} invoice/payment pairs",
        invoices.len()
    );
    Ok((invoices, payments))
}

/// Plan base rate, with a 5% chance of a 20% uplift (expansion revenue).
fn invoice_amount(plan_tier: &str, rng: &mut GeneratorRng) -> f64 {
    let mut amount = config::plan_base_rate(plan_tier);
    if rng.chance(config::EXPANSION_PROBABILITY) {
        amount *= config::EXPANSION_MULTIPLIER;
    }
    config::round_cents(amount)
}
