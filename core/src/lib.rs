//! gtmgen-core — deterministic synthetic SaaS go-to-market dataset
//! generator.
//!
//! Fabricates a self-consistent business universe — accounts, users,
//! subscriptions, billing, pipeline deals, product usage, support
//! tickets, and marketing spend — reproducible bit-for-bit from a single
//! seed.
//!
//! RULES:
//!   - All randomness flows through `rng::RngBank` streams.
//!   - Generators run in one fixed topological pass (see `engine`).
//!   - Records are append-only; churn and loss are attribute values.

pub mod account_generator;
pub mod billing_generator;
pub mod calendar;
pub mod config;
pub mod deal_generator;
pub mod emit;
pub mod engine;
pub mod error;
pub mod marketing_generator;
pub mod name_generator;
pub mod product_event_generator;
pub mod rng;
pub mod subscription_generator;
pub mod support_ticket_generator;
pub mod user_generator;
