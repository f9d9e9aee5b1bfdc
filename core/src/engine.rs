//! The dataset build engine.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Accounts          (root of the entity graph)
//!   2. Users             (per account)
//!   3. Subscriptions     (per account)
//!   4. Billing           (per subscription: invoices + payments)
//!   5. Deals             (won per account; lost independent)
//!   6. Product events    (per user)
//!   7. Support tickets   (per account)
//!   8. Marketing spend   (independent; month × channel)
//!
//! RULES:
//!   - One strict topological pass. No generator revisits or mutates
//!     another generator's output; entities are append-only and churned
//!     or lost states are attribute values, never removals.
//!   - All randomness flows through the RngBank; each generator owns an
//!     independently-seeded stream.
//!   - Configuration is validated before any generator runs — an invalid
//!     run produces no partial dataset.

use crate::{
    account_generator::{self, AccountRecord},
    billing_generator::{self, InvoiceRecord, PaymentRecord},
    config::GenConfig,
    deal_generator::{self, DealRecord},
    error::GenResult,
    marketing_generator::{self, MarketingSpendRecord},
    product_event_generator::{self, ProductEventRecord},
    rng::{GeneratorSlot, RngBank},
    subscription_generator::{self, SubscriptionRecord},
    support_ticket_generator::{self, SupportTicketRecord},
    user_generator::{self, UserRecord},
};

/// One complete generated batch — the nine output tables, each owned by
/// the generator that produced it until handed, read-only, to emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub accounts: Vec<AccountRecord>,
    pub users: Vec<UserRecord>,
    pub subscriptions: Vec<SubscriptionRecord>,
    pub invoices: Vec<InvoiceRecord>,
    pub payments: Vec<PaymentRecord>,
    pub deals: Vec<DealRecord>,
    pub product_events: Vec<ProductEventRecord>,
    pub support_tickets: Vec<SupportTicketRecord>,
    pub marketing_spend: Vec<MarketingSpendRecord>,
}

impl Dataset {
    /// Row counts per table, in emission order.
    pub fn row_counts(&self) -> [(&'static str, usize); 9] {
        [
            ("accounts", self.accounts.len()),
            ("users", self.users.len()),
            ("subscriptions", self.subscriptions.len()),
            ("invoices", self.invoices.len()),
            ("payments", self.payments.len()),
            ("crm_deals", self.deals.len()),
            ("product_events", self.product_events.len()),
            ("support_tickets", self.support_tickets.len()),
            ("marketing_spend", self.marketing_spend.len()),
        ]
    }
}

pub struct GenEngine {
    config: GenConfig,
    rng_bank: RngBank,
}

impl GenEngine {
    pub fn new(config: GenConfig) -> Self {
        let rng_bank = RngBank::new(config.seed);
        Self { config, rng_bank }
    }

    /// Build one complete batch. Deterministic for a fixed configuration:
    /// two calls produce identical datasets.
    pub fn build(&self) -> GenResult<Dataset> {
        self.config.validate()?;
        let horizon = &self.config.horizon;
        log::info!(
            "engine: building dataset (seed={}, horizon={}..{}, accounts={})",
            self.config.seed,
            horizon.start,
            horizon.end,
            self.config.account_count
        );

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::Account);
        let accounts = account_generator::generate(&self.config, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::User);
        let users = user_generator::generate(&accounts, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::Subscription);
        let subscriptions = subscription_generator::generate(&accounts, horizon, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::Billing);
        let (invoices, payments) = billing_generator::generate(&subscriptions, horizon, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::Deal);
        let deals = deal_generator::generate(&accounts, horizon, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::ProductEvent);
        let product_events = product_event_generator::generate(&users, horizon, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::SupportTicket);
        let support_tickets = support_ticket_generator::generate(&accounts, horizon, &mut rng)?;

        let mut rng = self.rng_bank.for_generator(GeneratorSlot::MarketingSpend);
        let marketing_spend = marketing_generator::generate(horizon, &mut rng)?;

        Ok(Dataset {
            accounts,
            users,
            subscriptions,
            invoices,
            payments,
            deals,
            product_events,
            support_tickets,
            marketing_spend,
        })
    }
}
