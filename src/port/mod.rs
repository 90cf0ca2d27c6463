//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where adapters plug in: upstream data providers,
//! the clock, and the notification channel.
//!
//! ```text
//!                  ┌──────────────────────────┐
//!                  │       Application        │
//!     ┌────────────┤  scheduler · composer    ├────────────┐
//!     │            └──────────────────────────┘            │
//!     ▼                         ▼                          ▼
//! ┌──────────┐           ┌─────────────┐            ┌────────────┐
//! │ Provider │           │    Clock    │            │  Notifier  │
//! │ Adapters │           │             │            │  Adapter   │
//! └──────────┘           └─────────────┘            └────────────┘
//! ```

pub mod outbound;
