//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the engine meets the outside world:
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   CLI / UI ───▶ │  inbound::PricingService │
//!                 └────────────┬─────────────┘
//!                              │
//!                 ┌────────────▼─────────────┐
//!                 │  Application + Domain    │
//!                 └──┬─────────┬──────────┬──┘
//!                    ▼         ▼          ▼
//!              Marketplace  Catalog   Score cache
//!                adapter    (config)   + clock
//! ```
//!
//! - [`inbound`] - Operations exposed to callers
//! - [`outbound`] - Data sources, directory, cache, clock and heuristic scorers

pub mod inbound;
pub mod outbound;
