//! Unified YES-denominated orderbooks for binary prediction markets, served
//! to agents through a small tool surface.
//!
//! The core is [`engine::unify`]: a pure transform from the four raw sides
//! (YES bids/asks, NO bids/asks) to a two-sided book in YES terms.

pub mod config;
pub mod engine;
pub mod market_data;
pub mod telemetry;
pub mod tools;
